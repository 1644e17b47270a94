// src/noyau/format.rs

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::reglages::DECIMALES_MAX;

/* ------------------------ Valeurs spéciales IEEE ------------------------ */

pub const TEXTE_INFINI: &str = "Infinity";
pub const TEXTE_NAN: &str = "NaN";

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal,
/// sans zéros finaux ni point final.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    // -0 n’existe pas à l’affichage
    if scaled.is_zero() {
        return "0".to_string();
    }

    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;
    let signe = if neg { "-" } else { "" };

    if frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}

/// x -> entier “scalé” = round(x * 10^digits), moitié au pair.
/// Calcul exact sur la valeur binaire du double (pas d’erreur d’arrondi en f64).
fn rational_scaled(x: &BigRational, digits: usize) -> BigInt {
    let scaled = x * BigRational::from_integer(pow10(digits));
    let plancher = scaled.floor();
    let reste = &scaled - &plancher;
    let demi = BigRational::new(BigInt::one(), BigInt::from(2));

    let bas = plancher.to_integer();
    let bas_pair = (&bas % BigInt::from(2)).is_zero();
    match reste.cmp(&demi) {
        Ordering::Less => bas,
        Ordering::Greater => bas + BigInt::one(),
        // égalité exacte : voisin pair
        Ordering::Equal if bas_pair => bas,
        Ordering::Equal => bas + BigInt::one(),
    }
}

/// Formate le résultat final :
/// - arrondi à `decimales` chiffres après le point (borné à `DECIMALES_MAX`),
///   égalités vers le chiffre pair
/// - zéros finaux et point final retirés (`5`, pas `5.0000`)
/// - `Infinity` / `-Infinity` / `NaN` pour les valeurs spéciales
pub fn format_result(valeur: f64, decimales: usize) -> String {
    let decimales = decimales.min(DECIMALES_MAX);

    if valeur.is_nan() {
        return TEXTE_NAN.to_string();
    }
    if valeur.is_infinite() {
        return if valeur > 0.0 {
            TEXTE_INFINI.to_string()
        } else {
            format!("-{TEXTE_INFINI}")
        };
    }

    match BigRational::from_float(valeur) {
        Some(exact) => scaled_to_decimal(rational_scaled(&exact, decimales), decimales),
        // inatteignable pour un f64 fini
        None => TEXTE_NAN.to_string(),
    }
}
