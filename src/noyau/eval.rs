//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> postfixe -> réduction f64 -> affichage arrondi
//!
//! Le noyau est une fonction pure de sa chaîne d’entrée : aucune pile ne
//! survit à l’appel, aucun état partagé entre deux évaluations.

use super::erreur::EvaluationError;
use super::format::format_result;
use super::jetons::{format_tokens, tokenize};
use super::reglages::Reglages;
use super::rpn::{reduce, to_postfix};

/// Ce que le collaborateur affiche à la place d’un résultat en cas d’échec.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Démarche d’une évaluation réussie (jetons, postfixe, valeur brute, affichage).
#[derive(Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub postfixe: String,
    pub valeur: f64,
    pub resultat: String,
}

/// API publique : évalue avec les réglages par défaut.
pub fn evaluate(expression: &str) -> Result<String, EvaluationError> {
    evaluate_with(expression, &Reglages::default())
}

pub fn evaluate_with(expression: &str, reglages: &Reglages) -> Result<String, EvaluationError> {
    evaluate_detaille(expression, reglages).map(|d| d.resultat)
}

/// Évalue et retourne toute la démarche.
///
/// Entrée vide (ou seulement des espaces) => `MalformedExpression(0)` :
/// la réduction se termine sans aucune valeur.
#[tracing::instrument(level = "debug", skip(reglages))]
pub fn evaluate_detaille(
    expression: &str,
    reglages: &Reglages,
) -> Result<Demarche, EvaluationError> {
    // 1) Jetons
    let jetons = tokenize(expression)?;
    let jetons_txt = format_tokens(&jetons);
    tracing::debug!(jetons = %jetons_txt, "tokenisation");

    // 2) Postfixe
    let postfixe = to_postfix(&jetons, reglages);
    let postfixe_txt = format_tokens(&postfixe);
    tracing::debug!(postfixe = %postfixe_txt, "conversion");

    // 3) Réduction
    let valeur = reduce(&postfixe)?;

    // 4) Affichage
    let resultat = format_result(valeur, reglages.decimales());
    tracing::debug!(valeur, resultat = %resultat, "réduction");

    Ok(Demarche {
        jetons: jetons_txt,
        postfixe: postfixe_txt,
        valeur,
        resultat,
    })
}
