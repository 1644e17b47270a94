//! src/app/etat.rs
//!
//! État de la saisie (sans évaluation).
//!
//! Rôle : contenir l’entrée retenue par l’appelant et ce qui est affiché,
//! avec les opérations simples du pavé (C / CE / saisie).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing, pas de noyau).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{Reglages, AFFICHAGE_ERREUR};

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub affichage: String,      // ce que l’écran montre (entrée, résultat ou "Error")
    pub erreur: Option<String>, // message détaillé du dernier échec

    // --- paramètres ---
    pub reglages: Reglages,
}

impl Calculatrice {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /* ------------------------ Actions “touches” (état seulement) ------------------------ */

    /// C : tout effacer.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.erreur = None;
        self.affichage.clear();
    }

    /// CE : retire le dernier caractère (même au milieu d’un mot comme "pi").
    pub fn backspace_entree(&mut self) {
        self.entree.pop();
        self.erreur = None;
        self.affichage = self.entree.clone();
    }

    /// Ajoute du texte à la fin de l’entrée (chiffre, opérateur, mot).
    pub fn saisir(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.erreur = None;
        self.affichage = self.entree.clone();
    }

    /// Dépose un résultat : il devient la nouvelle entrée (on enchaîne dessus).
    pub fn set_resultat(&mut self, resultat: impl Into<String>) {
        self.entree = resultat.into();
        self.erreur = None;
        self.affichage = self.entree.clone();
    }

    /// Échec : l’écran montre "Error", l’entrée repart de zéro.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = Some(msg.into());
        self.entree.clear();
        self.affichage = AFFICHAGE_ERREUR.to_string();
    }
}
