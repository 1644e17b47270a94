// src/noyau/erreur.rs
//
// Erreurs du noyau : une par étape du pipeline.
// Aucune n’est fatale : le noyau reste utilisable à l’appel suivant.

use super::jetons::Operateur;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    /// Une suite de chiffres/points ne se lit pas comme un f64 (ex: "1.2.3").
    #[error("nombre mal formé: {0:?}")]
    MalformedNumber(String),

    /// Ni nombre, ni opérateur à la réduction (parenthèse transparente, "sin", "%"...).
    #[error("jeton inconnu: {0:?}")]
    UnknownToken(String),

    /// Opérateur rencontré avec moins de deux opérandes sur la pile.
    #[error("opérandes manquantes pour '{}'", .0.symbole())]
    StackUnderflow(Operateur),

    /// Fin de réduction avec 0 ou plusieurs valeurs sur la pile.
    #[error("expression mal formée ({0} valeur(s) restante(s))")]
    MalformedExpression(usize),
}
