// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer le sous-module etat.rs
// - Ré-exporter Calculatrice
// - Brancher les touches du pavé sur le noyau (seul endroit qui évalue)

pub mod etat;

pub use etat::Calculatrice;

use crate::noyau::evaluate_with;

impl Calculatrice {
    /// Une touche du pavé : "C", "CE", "=" ou n’importe quel texte à insérer
    /// (chiffres, opérateurs, parenthèses, "pi", "e", "sin"...).
    pub fn touche(&mut self, label: &str) {
        match label {
            "C" => self.clear_entree(),
            "CE" => self.backspace_entree(),
            "=" => self.evaluer(),
            autre => self.saisir(autre),
        }
    }

    /// "=" : évalue l’entrée courante.
    pub fn evaluer(&mut self) {
        match evaluate_with(&self.entree, &self.reglages) {
            Ok(resultat) => self.set_resultat(resultat),
            Err(e) => {
                tracing::debug!(entree = %self.entree, erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
    }
}
