//! Tests scientifiques : comportement observable du noyau de bout en bout.
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - `^` est dépilé par `>=` comme les autres : 2^3^2 vaut 64, pas 512.
//!   C’est le comportement historique ; la convention mathématique est opt-in.
//! - Les parenthèses ne sont PAS structurées par défaut : elles traversent la
//!   conversion et la réduction les refuse (`UnknownToken`).
//! - Les fonctions (sin, cos, tan, log, exp, sqrt) ne sont pas évaluées.

use pretty_assertions::assert_eq;

use super::eval::{evaluate, evaluate_with};
use super::erreur::EvaluationError;
use super::jetons::Operateur;
use super::reglages::Reglages;

fn eval_ok(expr: &str) -> String {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_resultat(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence() {
    assert_resultat("2+3*4", "14");
    assert_resultat("2*3+4", "10");
    assert_resultat("2+3^2", "11");
    assert_resultat("2*3^2", "18");
    assert_resultat("10-2*3", "4");
}

/* ------------------------ Chaînes d’égale précédence ------------------------ */

#[test]
fn sci_gauche_a_droite() {
    assert_resultat("8/4/2", "1");
    assert_resultat("10-4-3", "3");
    assert_resultat("1-2+3", "2");
}

#[test]
fn sci_puissance_groupee_a_gauche() {
    // régression : comportement historique, (2^3)^2
    assert_resultat("2^3^2", "64");
}

#[test]
fn sci_puissance_a_droite_sur_demande() {
    let r = Reglages::mathematiques();
    assert_eq!(evaluate_with("2^3^2", &r).unwrap(), "512");
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes() {
    assert_resultat("pi*2", "6.2832");
    assert_resultat("e", "2.7183");
    assert_resultat("pi", "3.1416");
    assert_resultat("e^2", "7.3891");
    assert_resultat("2*pi*e", "17.0795");
}

/* ------------------------ Décimaux ------------------------ */

#[test]
fn sci_decimaux() {
    assert_resultat("1.5+2.25", "3.75");
    assert_resultat("0.1+0.2", "0.3");
    assert_resultat("1/3", "0.3333");
    assert_resultat("2^0.5", "1.4142");
}

#[test]
fn sci_arrondi_au_pair() {
    // égalités exactes au 5e chiffre : vers le chiffre pair
    assert_resultat("1/32", "0.0312");
    assert_resultat("3/32", "0.0938");
    assert_resultat("5/32", "0.1562");
}

/* ------------------------ Pile insuffisante / résidus ------------------------ */

#[test]
fn sci_operateur_en_tete_ou_en_fin() {
    assert_eq!(
        evaluate("+5"),
        Err(EvaluationError::StackUnderflow(Operateur::Plus))
    );
    assert_eq!(
        evaluate("5+"),
        Err(EvaluationError::StackUnderflow(Operateur::Plus))
    );
    // pas de moins unaire
    assert_eq!(
        evaluate("-3"),
        Err(EvaluationError::StackUnderflow(Operateur::Moins))
    );
}

#[test]
fn sci_operateurs_consecutifs() {
    assert!(matches!(
        evaluate("2**3"),
        Err(EvaluationError::StackUnderflow(_))
    ));
}

#[test]
fn sci_valeurs_en_trop() {
    assert_eq!(
        evaluate("2 3"),
        Err(EvaluationError::MalformedExpression(2))
    );
}

/* ------------------------ Anomalies IEEE : pas des erreurs ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_resultat("5/0", "Infinity");
    assert_resultat("0-5/0", "-Infinity");
    assert_resultat("0/0", "NaN");
}

#[test]
fn sci_puissance_invalide() {
    // base négative, exposant fractionnaire (parenthèses => réglages mathématiques)
    let r = Reglages::mathematiques();
    assert_eq!(evaluate_with("(0-8)^0.5", &r).unwrap(), "NaN");
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn sci_parentheses_transparentes_par_defaut() {
    // limitation historique conservée
    assert_eq!(
        evaluate("(2+3)*4"),
        Err(EvaluationError::UnknownToken("(".into()))
    );
}

#[test]
fn sci_parentheses_structurees_sur_demande() {
    let r = Reglages::mathematiques();
    assert_eq!(evaluate_with("(2+3)*4", &r).unwrap(), "20");
    assert_eq!(evaluate_with("2*(3+4)", &r).unwrap(), "14");
    assert_eq!(evaluate_with("((1+1)^(1+2))", &r).unwrap(), "8");
    assert_eq!(
        evaluate_with("(2+3", &r),
        Err(EvaluationError::UnknownToken("(".into()))
    );
}

/* ------------------------ Fonctions non évaluées ------------------------ */

#[test]
fn sci_fonctions_non_supportees() {
    for f in ["sin", "cos", "tan", "log", "exp", "sqrt"] {
        let expr = format!("{f}2");
        assert_eq!(
            evaluate(&expr),
            Err(EvaluationError::UnknownToken(f.to_string())),
            "expr={expr:?}"
        );
    }
}

/* ------------------------ Idempotence de l’affichage ------------------------ */

#[test]
fn sci_affichage_stable() {
    for expr in ["pi*2", "1/3", "2^10", "0.1+0.2", "e", "5"] {
        let une_fois = eval_ok(expr);
        let deux_fois = eval_ok(&une_fois);
        assert_eq!(une_fois, deux_fois, "expr={expr:?}");
    }
}
