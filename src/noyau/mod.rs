//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs       : jetons de saisie + table de substitution
//! - accumulateur.rs : texte affiché / trace de saisie / forme canonique
//! - lexeur.rs       : découpage de la forme canonique + opérande terminal
//! - rpn.rs          : shunting-yard + évaluation RPN (f64)
//! - eval.rs         : pipeline complet
//! - format.rs       : valeur -> texte d’affichage (ré-semable)
//! - moteur.rs       : machine à états, mémoire, transformations unaires
//! - erreur.rs       : erreurs typées (analyse / moteur)

pub mod accumulateur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lexeur;
pub mod moteur;
pub mod rpn;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use erreur::ErreurCalc;
pub use moteur::{Capacites, Etat, MoteurCalc, SENTINELLE_ERREUR};
