// src/noyau/jetons.rs

use std::collections::VecDeque;
use std::f64::consts::{E, PI};
use std::fmt;

use super::erreur::EvaluationError;
use super::reglages::Associativite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
            Self::Puissance => 3,
        }
    }

    /// Associativité déclarée. Le convertisseur n’en tient compte
    /// que si les réglages le demandent.
    pub fn associativite(self) -> Associativite {
        match self {
            Self::Puissance => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }

    /// Arithmétique IEEE-754 brute : /0 donne ±inf ou NaN, jamais une erreur.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Plus => a + b,
            Self::Moins => a - b,
            Self::Fois => a * b,
            Self::Divise => a / b,
            Self::Puissance => a.powf(b),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operateur),
    LeftParen,
    RightParen,

    // Tout ce que le lexeur ne reconnaît pas (sin, exp, x, %, ...).
    // NOTE: ne fait jamais échouer la tokenisation ; la réduction le refuse.
    Symbol(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(v) => write!(f, "{v}"),
            Token::Operator(op) => write!(f, "{}", op.symbole()),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::Symbol(s) => f.write_str(s),
        }
    }
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Longueur (en octets) du plus long préfixe dont tous les caractères vérifient `pred`.
fn longueur_tant_que(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Découpe un mot en constantes par préfixe : "pi", "e", "pie", "epi"...
/// None si le mot contient autre chose (ex: "exp" reste un symbole entier).
fn decomposer_constantes(mut mot: &str) -> Option<Vec<f64>> {
    let mut valeurs = Vec::new();
    while !mot.is_empty() {
        if let Some(reste) = mot.strip_prefix("pi") {
            valeurs.push(PI);
            mot = reste;
        } else if let Some(reste) = mot.strip_prefix('e') {
            valeurs.push(E);
            mot = reste;
        } else {
            return None;
        }
    }
    Some(valeurs)
}

/// Lexeur paresseux : produit les jetons un par un.
///
/// Règles :
/// - espaces ignorés
/// - suite maximale de [0-9.] => un nombre (sinon `MalformedNumber`)
/// - `+ - * / ^ ( )` => un jeton chacun
/// - suite maximale de lettres ASCII => constantes `pi`/`e` si le mot
///   n’est fait que d’elles, sinon un `Symbol` entier
/// - tout autre caractère => `Symbol` d’un caractère
pub struct Lexeur<'a> {
    source: &'a str,
    pos: usize,
    en_attente: VecDeque<Token>,
}

impl<'a> Lexeur<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            en_attente: VecDeque::new(),
        }
    }
}

impl Iterator for Lexeur<'_> {
    type Item = Result<Token, EvaluationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(t) = self.en_attente.pop_front() {
            return Some(Ok(t));
        }

        let reste = &self.source[self.pos..];
        let debut = reste.trim_start();
        self.pos += reste.len() - debut.len();

        let c = debut.chars().next()?;

        // Nombre
        if est_chiffre(c) {
            let fin = longueur_tant_que(debut, est_chiffre);
            let texte = &debut[..fin];
            self.pos += fin;
            return Some(
                texte
                    .parse::<f64>()
                    .map(Token::Number)
                    .map_err(|_| EvaluationError::MalformedNumber(texte.to_string())),
            );
        }

        // Opérateurs + parenthèses
        let simple = match c {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => Operateur::depuis_symbole(c).map(Token::Operator),
        };
        if let Some(t) = simple {
            self.pos += c.len_utf8();
            return Some(Ok(t));
        }

        // Mots : constantes ou symbole
        if c.is_ascii_alphabetic() {
            let fin = longueur_tant_que(debut, |c| c.is_ascii_alphabetic());
            let mot = &debut[..fin];
            self.pos += fin;
            return match decomposer_constantes(mot) {
                Some(valeurs) => {
                    self.en_attente
                        .extend(valeurs.into_iter().map(Token::Number));
                    self.en_attente.pop_front().map(Ok)
                }
                None => Some(Ok(Token::Symbol(mot.to_string()))),
            };
        }

        self.pos += c.len_utf8();
        Some(Ok(Token::Symbol(c.to_string())))
    }
}

/// Tokenize une chaîne entière ; s’arrête au premier nombre mal formé.
pub fn tokenize(s: &str) -> Result<Vec<Token>, EvaluationError> {
    Lexeur::new(s).collect()
}

/// Format utilitaire (démarche / logs) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
