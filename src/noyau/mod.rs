//! Noyau d’évaluation (f64, postfixe)
//!
//! Organisation interne :
//! - jetons.rs   : lexeur paresseux + opérateurs
//! - rpn.rs      : shunting-yard + réduction postfixe
//! - format.rs   : affichage arrondi (exact via rationnels)
//! - reglages.rs : comportement historique / corrections opt-in
//! - erreur.rs   : EvaluationError
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod reglages;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;



// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{evaluate, evaluate_detaille, evaluate_with, Demarche, AFFICHAGE_ERREUR};
pub use reglages::Reglages;
