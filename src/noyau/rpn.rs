// src/noyau/rpn.rs
//
// Shunting-yard -> postfixe -> valeur f64
//
// Règles (réglages par défaut) :
// - Number  : sortie directe
// - Operator: dépile tant que précédence(sommet) >= précédence(courant), puis empile
// - tout le reste ((, ), symboles) : sortie directe, la réduction le refusera
//
// NOTE:
// - Le `>=` s’applique aussi à `^` : 2^3^2 = (2^3)^2 = 64.
//   `Associativite::Droite` passe à `>` strict pour `^` (512).
// - `Parentheses::Structurees` active la gestion classique de ( et ).
//   Une parenthèse orpheline est alors sortie telle quelle : la conversion
//   ne fail jamais, l’erreur arrive à la réduction.

use super::erreur::EvaluationError;
use super::jetons::{Operateur, Token};
use super::reglages::{Associativite, Parentheses, Reglages};

/// Contenu de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Empile {
    Op(Operateur),
    Ouvrante,
}

fn doit_depiler(sommet: Operateur, courant: Operateur, reglages: &Reglages) -> bool {
    let droite = reglages.puissance() == Associativite::Droite
        && courant.associativite() == Associativite::Droite;
    if droite {
        sommet.precedence() > courant.precedence()
    } else {
        sommet.precedence() >= courant.precedence()
    }
}

/// Convertit une suite de jetons infixe en postfixe (notation polonaise inversée).
///
/// Exemple (réglages par défaut):
///   jetons:   [2, +, 3, *, 4]
///   postfixe: [2, 3, 4, *, +]
pub fn to_postfix(tokens: &[Token], reglages: &Reglages) -> Vec<Token> {
    let structurees = reglages.parentheses() == Parentheses::Structurees;

    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Empile> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Token::Operator(courant) => {
                // dépile tant que le sommet lie plus fort (et qu’on ne traverse pas '(')
                while let Some(&Empile::Op(sommet)) = ops.last() {
                    if !doit_depiler(sommet, courant, reglages) {
                        break;
                    }
                    ops.pop();
                    out.push(Token::Operator(sommet));
                }
                ops.push(Empile::Op(courant));
            }

            Token::LeftParen if structurees => ops.push(Empile::Ouvrante),

            Token::RightParen if structurees => {
                let mut fermee = false;
                while let Some(sommet) = ops.pop() {
                    match sommet {
                        Empile::Ouvrante => {
                            fermee = true;
                            break;
                        }
                        Empile::Op(op) => out.push(Token::Operator(op)),
                    }
                }
                if !fermee {
                    // ')' orpheline : signalée à la réduction
                    out.push(Token::RightParen);
                }
            }

            // Nombres, symboles, parenthèses transparentes
            autre => out.push(autre),
        }
    }

    // vide la pile ops
    while let Some(sommet) = ops.pop() {
        out.push(match sommet {
            Empile::Op(op) => Token::Operator(op),
            // '(' jamais fermée : signalée à la réduction
            Empile::Ouvrante => Token::LeftParen,
        });
    }

    out
}

/// Réduit une suite postfixe à une seule valeur.
///
/// - Number: empilé
/// - Operator: dépile b puis a, empile a op b
/// - autre: `UnknownToken`
pub fn reduce(postfix: &[Token]) -> Result<f64, EvaluationError> {
    let mut st: Vec<f64> = Vec::with_capacity(postfix.len());

    for tok in postfix {
        match tok {
            Token::Number(v) => st.push(*v),

            Token::Operator(op) => {
                let b = st.pop().ok_or(EvaluationError::StackUnderflow(*op))?;
                let a = st.pop().ok_or(EvaluationError::StackUnderflow(*op))?;
                st.push(op.appliquer(a, b));
            }

            Token::LeftParen | Token::RightParen | Token::Symbol(_) => {
                return Err(EvaluationError::UnknownToken(tok.to_string()));
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        reste => Err(EvaluationError::MalformedExpression(reste.len())),
    }
}
