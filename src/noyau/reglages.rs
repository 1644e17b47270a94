//! Réglages du noyau.
//!
//! Par défaut, le noyau reproduit le comportement historique :
//! - `^` dépilé par la règle `>=` (donc groupé à gauche : 2^3^2 = 64)
//! - parenthèses transparentes (elles échouent à la réduction)
//! - 4 décimales
//!
//! Les corrections mathématiques sont opt-in (`Reglages::mathematiques`).

/// Décimales par défaut du résultat affiché.
pub const DECIMALES_DEFAUT: usize = 4;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DECIMALES_MAX: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parentheses {
    /// Sorties telles quelles en postfixe : `UnknownToken` à la réduction.
    Transparentes,
    /// Shunting-yard complet : `(` empile, `)` dépile jusqu’à `(`.
    Structurees,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    // privés : seul `avec_decimales` les écrit, donc toujours <= DECIMALES_MAX
    decimales: usize,
    /// Associativité appliquée aux opérateurs déclarés associatifs à droite (`^`).
    puissance: Associativite,
    parentheses: Parentheses,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            puissance: Associativite::Gauche,
            parentheses: Parentheses::Transparentes,
        }
    }
}

impl Reglages {
    /// Convention mathématique : `^` à droite + parenthèses structurées.
    pub fn mathematiques() -> Self {
        Self {
            puissance: Associativite::Droite,
            parentheses: Parentheses::Structurees,
            ..Self::default()
        }
    }

    pub fn avec_decimales(mut self, decimales: usize) -> Self {
        self.decimales = decimales.min(DECIMALES_MAX);
        self
    }

    pub fn avec_puissance(mut self, puissance: Associativite) -> Self {
        self.puissance = puissance;
        self
    }

    pub fn avec_parentheses(mut self, parentheses: Parentheses) -> Self {
        self.parentheses = parentheses;
        self
    }

    pub fn decimales(&self) -> usize {
        self.decimales
    }

    pub fn puissance(&self) -> Associativite {
        self.puissance
    }

    pub fn parentheses(&self) -> Parentheses {
        self.parentheses
    }
}
