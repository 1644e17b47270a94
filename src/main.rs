// src/main.rs
//
// Calculatrice postfixe — point d’entrée (stdin)
// ----------------------------------------------
// Une ligne = une saisie suivie de "=".
// Lignes spéciales : "C" (tout effacer), "CE" (effacer la dernière touche).
// L’écran est réimprimé après chaque ligne ; le résultat reste l’entrée courante.
//
// Logs : RUST_LOG=calculatrice_postfixe=debug

use std::io::{self, BufRead, Write};

use calculatrice_postfixe::app::Calculatrice;

/// Logs seulement si RUST_LOG est défini.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> io::Result<()> {
    init_tracing();

    let mut calc = Calculatrice::default();
    let mut out = io::stdout().lock();

    for ligne in io::stdin().lock().lines() {
        let ligne = ligne?;
        match ligne.trim() {
            "" => continue,
            touche @ ("C" | "CE") => calc.touche(touche),
            saisie => {
                calc.saisir(saisie);
                calc.touche("=");
            }
        }
        writeln!(out, "{}", calc.affichage)?;
    }

    Ok(())
}
