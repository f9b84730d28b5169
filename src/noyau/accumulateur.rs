// src/noyau/accumulateur.rs
//
// Accumulateur d’expression : l’état textuel en cours de construction.
// - affichage : le texte tel que saisi (sentinelle "0" à vide)
// - jetons    : trace parallèle de la saisie, pour l’effacement exact
// - canonique : la forme évaluable, dérivée des jetons via la table de
//               substitution (jamais éditée à la main)
//
// Aucune validation à l’ajout : les états intermédiaires malformés
// (deux opérateurs de suite, parenthèse orpheline...) ne sont détectés
// qu’à l’évaluation.
//
// L’effacement reconstruit affichage + canonique en REJOUANT les jetons
// restants par le chemin d’ajout : la règle de la sentinelle est ainsi
// ré-appliquée à l’identique.

use lazy_static::lazy_static;
use regex::Regex;

use super::jetons::Jeton;

/// Sentinelle d’affichage à vide.
pub const SENTINELLE_ZERO: &str = "0";

lazy_static! {
    // nombre décimal, un des quatre opérateurs, nombre décimal
    // (recherche NON ancrée : un segment interne suffit à déclencher)
    static ref FORME_BINAIRE: Regex =
        Regex::new(r"([1-9][0-9]*|0)(\.[0-9]*[1-9])?[-+*/](([1-9][0-9]*|0)(\.[0-9]*[1-9])?)")
            .expect("regex forme binaire");
}

#[derive(Clone, Debug)]
pub struct Accumulateur {
    affichage: String,
    jetons: Vec<Jeton>,
    canonique: String,
}

impl Default for Accumulateur {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulateur {
    pub fn new() -> Self {
        Self {
            affichage: SENTINELLE_ZERO.to_string(),
            jetons: Vec::new(),
            canonique: String::new(),
        }
    }

    /* ------------------------ Lectures ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn canonique(&self) -> &str {
        &self.canonique
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    /// Heuristique "nombre opérateur nombre" sur le texte affiché.
    /// Déclenche l’auto-évaluation à la saisie d’un second opérateur ;
    /// ne valide JAMAIS (l’évaluation fait seule autorité).
    pub fn est_forme_binaire(&self) -> bool {
        FORME_BINAIRE.is_match(&self.affichage)
    }

    /* ------------------------ Mutations ------------------------ */

    /// Ajoute un jeton.
    /// Sentinelle : sur "0", tout sauf le point décimal REMPLACE
    /// (suppression du zéro de tête) ; le point est toujours concaténé.
    pub fn ajouter(&mut self, jeton: Jeton) {
        if self.affichage == SENTINELLE_ZERO && jeton.affichage() != "." {
            self.affichage.clear();
        }
        self.affichage.push_str(jeton.affichage());
        self.canonique.push_str(jeton.canonique());
        self.jetons.push(jeton);
    }

    /// Insère un jeton en TÊTE de saisie (bascule de signe : le moins
    /// préfixe l’expression entière). Reconstruction complète derrière.
    pub fn inserer_devant(&mut self, jeton: Jeton) {
        self.jetons.insert(0, jeton);
        self.reconstruire();
    }

    /// Retire le dernier jeton ; sur séquence vide, ne fait rien.
    pub fn effacer_dernier(&mut self) {
        if self.jetons.pop().is_some() {
            self.reconstruire();
        }
    }

    /// Remet tout à l’état initial (sentinelle "0", aucun jeton).
    /// Idempotent.
    pub fn vider(&mut self) {
        self.affichage.clear();
        self.affichage.push_str(SENTINELLE_ZERO);
        self.jetons.clear();
        self.canonique.clear();
    }

    /// Vide puis ré-ensemence avec un nombre complet (résultat
    /// d’évaluation, rappel mémoire) : la saisie continue dessus.
    pub fn semer(&mut self, texte: &str) {
        self.vider();
        self.ajouter(Jeton::nombre(texte));
    }

    /// Pose la sentinelle d’erreur sur les deux textes. Les jetons
    /// restent tels quels : visuellement présents, logiquement inertes
    /// (la prochaine saisie vide d’abord).
    pub fn marquer_erreur(&mut self, sentinelle: &str) {
        self.affichage.clear();
        self.affichage.push_str(sentinelle);
        self.canonique.clear();
        self.canonique.push_str(sentinelle);
    }

    /// Rejoue les jetons par le chemin d’ajout.
    fn reconstruire(&mut self) {
        let jetons = std::mem::take(&mut self.jetons);
        self.vider();
        for j in jetons {
            self.ajouter(j);
        }
    }
}
