// src/noyau/lexeur.rs
//
// Lexeur de l’expression CANONIQUE (la forme que le moteur évalue).
// Supporte:
// - nombres décimaux (12, 2.5, .5 — le point seul en tête de saisie
//   produit une canonique qui commence par ".")
// - opérateurs + - * /
// - parenthèses ( )
// - π (ou "pi", insensible à la casse)
// - identifiants [a-zA-Z_][a-zA-Z0-9_]* normalisés en minuscules :
//   fonctions (sin, cos, tan, log10, ln, sqrt), "e" (nombre d’Euler),
//   "inf" / "nan" (résultats ré-semés après une division par zéro)
//
// Fournit aussi `dernier_entier` : extraction de l’opérande terminal pour
// les transformations unaires (x², x³, 10^x, 1/x, n!).

use super::erreur::ErreurEval;

/// Fonctions unaires reconnues dans la forme canonique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionMath {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
}

impl FonctionMath {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(FonctionMath::Sin),
            "cos" => Some(FonctionMath::Cos),
            "tan" => Some(FonctionMath::Tan),
            "log10" => Some(FonctionMath::Log10),
            "ln" => Some(FonctionMath::Ln),
            "sqrt" => Some(FonctionMath::Sqrt),
            _ => None,
        }
    }

    /// Application numérique. Les domaines invalides suivent la sémantique
    /// flottante (sqrt(-1) = NaN, ln(0) = -inf) : valeur, pas erreur.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            FonctionMath::Sin => x.sin(),
            FonctionMath::Cos => x.cos(),
            FonctionMath::Tan => x.tan(),
            FonctionMath::Log10 => x.log10(),
            FonctionMath::Ln => x.ln(),
            FonctionMath::Sqrt => x.sqrt(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Lexeme {
    Nombre(f64),

    Plus,
    Moins,
    Etoile,
    Barre,

    ParG,
    ParD,

    Fonction(FonctionMath),
    Pi,
    Euler,
}

/// Découpe une forme canonique en lexèmes.
pub fn decouper(s: &str) -> Result<Vec<Lexeme>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Lexeme::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Lexeme::ParD);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Lexeme::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Lexeme::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Lexeme::Etoile);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Lexeme::Barre);
                i += 1;
                continue;
            }
            _ => {}
        }

        // π : symbole direct (la forme canonique de la constante PI)
        if c == 'π' {
            out.push(Lexeme::Pi);
            i += 1;
            continue;
        }

        // Nombre décimal : chiffres et points contigus, parse f64 ensuite.
        // "1.2.3" est collecté d’un bloc et refusé au parse.
        if c.is_ascii_digit() || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit())
        {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let litteral: String = chars[start..i].iter().collect();
            let v: f64 = litteral
                .parse()
                .map_err(|_| ErreurEval::NombreInvalide(litteral.clone()))?;
            out.push(Lexeme::Nombre(v));
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*, minuscules
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            let m = mot.to_lowercase();

            match m.as_str() {
                "pi" => out.push(Lexeme::Pi),
                "e" => out.push(Lexeme::Euler),
                // formes ré-semées après un résultat non fini
                "inf" => out.push(Lexeme::Nombre(f64::INFINITY)),
                "nan" => out.push(Lexeme::Nombre(f64::NAN)),
                _ => match FonctionMath::depuis_nom(&m) {
                    Some(f) => out.push(Lexeme::Fonction(f)),
                    None => return Err(ErreurEval::FonctionInconnue(m)),
                },
            }
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Opérande terminal pour les transformations unaires : le DERNIER lexème
/// numérique de la forme canonique, exigé entier et positif ou nul.
/// Le signe éventuel devant le nombre n’en fait pas partie.
/// None si la forme ne se découpe pas ou ne finit par aucun nombre.
pub fn dernier_entier(s: &str) -> Option<u64> {
    let lexemes = decouper(s).ok()?;
    let v = lexemes.iter().rev().find_map(|l| match l {
        Lexeme::Nombre(v) => Some(*v),
        _ => None,
    })?;

    if v.is_finite() && v.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&v) {
        Some(v as u64)
    } else {
        None
    }
}
