//! Noyau — évaluation (pipeline réel)
//!
//! decouper -> RPN -> valeur f64
//!
//! Seule autorité sur la validité d’une expression : l’heuristique
//! `est_forme_binaire` de l’accumulateur déclenche, elle ne valide jamais.

use super::erreur::ErreurEval;
use super::lexeur::decouper;
use super::rpn::{evaluer_rpn, vers_rpn};

/// Évalue une forme canonique et retourne sa valeur.
/// ±inf / NaN sont des valeurs (division par zéro, domaines flottants),
/// jamais des erreurs.
pub fn evaluer_expression(expr: &str) -> Result<f64, ErreurEval> {
    let s = expr.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    let lexemes = decouper(s)?;
    let rpn = vers_rpn(&lexemes)?;
    evaluer_rpn(&rpn)
}
