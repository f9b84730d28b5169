// src/noyau/jetons.rs
//
// Jeton = unité atomique de saisie (touche) :
// - chiffre / point décimal / nombre complet (résultat ré-semé, rappel mémoire)
// - opérateur binaire + - * /
// - préfixe de fonction ("sin(", "log(", ...)
// - constante (PI, e)
// - parenthèse
//
// Chaque jeton porte DEUX formes :
// - affichage : ce que l’écran montre (forme courte, "log(")
// - canonique : ce que l’évaluateur lit (forme réelle, "log10(")
// La correspondance est la table de substitution, appliquée jeton par jeton
// (jamais de remplacement de sous-chaîne dans le texte affiché).

/// Table de substitution : forme affichée -> forme canonique.
/// Les clés sont exactes ; `log(` devient le log décimal, `ln(` le log népérien.
pub const TABLE_SUBSTITUTION: &[(&str, &str)] = &[
    ("sin(", "sin("),
    ("cos(", "cos("),
    ("tan(", "tan("),
    ("log(", "log10("),
    ("ln(", "ln("),
    ("sqrt(", "sqrt("),
    ("PI", "π"),
    ("e", "e"),
];

/// Forme canonique d’une clé de la table, si elle existe.
pub fn forme_canonique(affichee: &str) -> Option<&'static str> {
    TABLE_SUBSTITUTION
        .iter()
        .find(|(cle, _)| *cle == affichee)
        .map(|(_, canon)| *canon)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Division),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Division => "/",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    Euler,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Chiffre isolé, point décimal, ou nombre complet.
    Nombre(String),
    Operateur(Operateur),
    /// Préfixe de fonction, identifié par sa forme affichée ("sin(", ...).
    Fonction(&'static str),
    Constante(Constante),
    /// '(' ou ')'.
    Parenthese(char),
}

impl Jeton {
    pub fn nombre(texte: impl Into<String>) -> Jeton {
        Jeton::Nombre(texte.into())
    }

    pub fn operateur(c: char) -> Option<Jeton> {
        Operateur::depuis_char(c).map(Jeton::Operateur)
    }

    pub fn parenthese(c: char) -> Option<Jeton> {
        matches!(c, '(' | ')').then(|| Jeton::Parenthese(c))
    }

    /// Jeton pour une clé de la table de substitution
    /// (fonctions ET constantes : PI et e passent par la même table).
    pub fn depuis_table(nom: &str) -> Option<Jeton> {
        match nom {
            "PI" => Some(Jeton::Constante(Constante::Pi)),
            "e" => Some(Jeton::Constante(Constante::Euler)),
            _ => TABLE_SUBSTITUTION
                .iter()
                .find(|(cle, _)| *cle == nom)
                .map(|(cle, _)| Jeton::Fonction(cle)),
        }
    }

    /// Forme courte, celle que l’écran montre.
    pub fn affichage(&self) -> &str {
        match self {
            Jeton::Nombre(s) => s,
            Jeton::Operateur(op) => op.symbole(),
            Jeton::Fonction(aff) => aff,
            Jeton::Constante(Constante::Pi) => "PI",
            Jeton::Constante(Constante::Euler) => "e",
            Jeton::Parenthese('(') => "(",
            Jeton::Parenthese(_) => ")",
        }
    }

    /// Forme réelle, celle que l’évaluateur lit.
    pub fn canonique(&self) -> &str {
        match self {
            Jeton::Fonction(aff) => {
                // la table est la seule source des formes canoniques
                forme_canonique(aff).unwrap_or(aff)
            }
            Jeton::Constante(Constante::Pi) => "π",
            Jeton::Constante(Constante::Euler) => "e",
            autre => autre.affichage(),
        }
    }
}
