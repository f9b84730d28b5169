//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur et les messages de la dernière opération
//! (résultat, erreur). Tout le texte d’écran vient du moteur ; la vue
//! ne fait que le lire.

use crate::noyau::{ErreurCalc, MoteurCalc};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: MoteurCalc,

    // --- messages de la dernière opération ---
    pub resultat: String, // "= 12" après une évaluation réussie, sinon vide
    pub erreur: String,   // message d’erreur (Depassement, Operande...), sinon vide
}

impl AppCalc {
    /// Oublie les messages de l’opération précédente.
    pub fn effacer_messages(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
    }

    /// Dépose le résultat d’une évaluation réussie.
    pub fn deposer_resultat(&mut self, valeur: f64) {
        self.erreur.clear();
        self.resultat = format!("= {}", crate::noyau::format::format_valeur(valeur));
    }

    /// Dépose une erreur d’opération. L’écran du moteur porte déjà sa
    /// propre sentinelle le cas échéant ; ici c’est le message lisible.
    pub fn deposer_erreur(&mut self, e: ErreurCalc) {
        self.resultat.clear();
        self.erreur = e.to_string();
    }
}
