//! Calculatrice postfixe : évalue une expression plate (`2+3*4`, `pi*2`, `5/0`)
//! et rend un résultat arrondi à 4 décimales.
//!
//! - `noyau` : le moteur, fonction pure de sa chaîne d’entrée
//! - `app`   : l’entrée retenue par l’appelant (C / CE / =)

pub mod app;
pub mod noyau;

pub use noyau::{evaluate, evaluate_with, EvaluationError, Reglages};
