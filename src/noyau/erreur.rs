// src/noyau/erreur.rs
//
// Deux niveaux d’erreurs :
// - ErreurEval : précise, produite par l’analyse (lexeur / RPN / évaluation).
// - ErreurCalc : ce que le moteur expose (et que la vue affiche).
//
// Toute ErreurEval se replie en ErreurCalc::Syntaxe à la frontière du moteur ;
// le détail reste disponible pour les tests du pipeline.

use thiserror::Error;

/// Erreurs de l’analyse arithmétique.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    #[error("fonction sans argument")]
    FonctionSansArgument,

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse inattendue")]
    ParentheseInattendue,

    #[error("expression invalide")]
    ExpressionInvalide,
}

/// Erreurs visibles du moteur.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    /// L’expression canonique ne s’évalue pas (quelle qu’en soit la cause).
    #[error("Erreur de syntaxe")]
    Syntaxe,

    /// Factorielle hors plage représentable.
    #[error("Valeur trop grande")]
    Depassement,

    /// Opérande absent ou non entier pour une transformation unaire.
    #[error("Opérande invalide")]
    Operande,

    /// Opération absente du profil de capacités du moteur.
    #[error("Opération indisponible")]
    Indisponible,
}

impl From<ErreurEval> for ErreurCalc {
    fn from(_: ErreurEval) -> Self {
        ErreurCalc::Syntaxe
    }
}
