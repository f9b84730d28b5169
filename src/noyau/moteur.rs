// src/noyau/moteur.rs
//
// MoteurCalc — la machine à états visible de la calculatrice.
// ----------------------------------------------------------
// Orchestration : accumulateur + registre mémoire + politique
// d’auto-évaluation (un opérateur saisi sur une expression binôme
// complète résout d’abord, puis s’ajoute — c’est l’enchaînement
// "3+4+5").
//
// États : Saisie -> Resolu (évaluation réussie) -> Saisie à la
// prochaine saisie, qui repart du résultat ré-semé ; Erreur à
// l’évaluation échouée, abandonnée (vidée) à la prochaine saisie.
//
// Un seul moteur, configuré par un profil de capacités ; pas de
// hiérarchie basique/scientifique. Les opérations hors profil
// répondent Indisponible et ne mutent rien.

use tracing::debug;

use super::accumulateur::Accumulateur;
use super::erreur::ErreurCalc;
use super::eval::evaluer_expression;
use super::format::format_valeur;
use super::jetons::{Jeton, Operateur};
use super::lexeur;

/// Sentinelle d’affichage après une évaluation échouée.
pub const SENTINELLE_ERREUR: &str = "Erreur de syntaxe";

/// Au-delà, n! n’est plus représentable en f64.
const FACTORIELLE_MAX: u64 = 170;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    Saisie,
    Resolu,
    Erreur,
}

/// Profil de capacités du moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacites {
    pub scientifique: bool,
    pub memoire: bool,
}

impl Capacites {
    /// Quatre opérations, rien d’autre.
    pub fn basiques() -> Self {
        Self {
            scientifique: false,
            memoire: false,
        }
    }

    /// Fonctions scientifiques + registre mémoire.
    pub fn completes() -> Self {
        Self {
            scientifique: true,
            memoire: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MoteurCalc {
    accumulateur: Accumulateur,
    memoire: f64,
    etat: Etat,
    capacites: Capacites,
}

impl Default for MoteurCalc {
    fn default() -> Self {
        Self::scientifique()
    }
}

impl MoteurCalc {
    pub fn new(capacites: Capacites) -> Self {
        Self {
            accumulateur: Accumulateur::new(),
            memoire: 0.0,
            etat: Etat::Saisie,
            capacites,
        }
    }

    pub fn basique() -> Self {
        Self::new(Capacites::basiques())
    }

    pub fn scientifique() -> Self {
        Self::new(Capacites::completes())
    }

    /* ------------------------ Lectures (frontière de présentation) ------------------------ */

    /// Texte que l’écran montre. Le moteur ne fait AUCUN affichage lui-même.
    pub fn affichage(&self) -> &str {
        self.accumulateur.affichage()
    }

    /// Forme canonique courante (évaluable).
    pub fn canonique(&self) -> &str {
        self.accumulateur.canonique()
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    pub fn vient_de_resoudre(&self) -> bool {
        self.etat == Etat::Resolu
    }

    pub fn capacites(&self) -> Capacites {
        self.capacites
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre ou point décimal. Ne change pas l’état Resolu : après "=",
    /// la saisie continue sur le résultat ré-semé.
    pub fn saisir_chiffre(&mut self, c: char) {
        if !c.is_ascii_digit() && c != '.' {
            return;
        }
        self.sortir_de_l_erreur();
        self.accumulateur.ajouter(Jeton::nombre(c.to_string()));
    }

    /// Opérateur binaire. Si l’écran porte déjà un binôme complet,
    /// résolution implicite d’abord (enchaînement "3+4+5") ; une
    /// résolution implicite échouée est abandonnée et l’opérateur
    /// repart sur un affichage vierge.
    pub fn saisir_operateur(&mut self, op: char) {
        let Some(jeton) = Jeton::operateur(op) else {
            return;
        };
        self.sortir_de_l_erreur();
        if self.accumulateur.est_forme_binaire() && self.evaluer().is_err() {
            self.sortir_de_l_erreur();
        }
        self.accumulateur.ajouter(jeton);
        self.etat = Etat::Saisie;
    }

    /// '(' ou ')'. Nécessaire pour refermer les appels de fonction.
    pub fn saisir_parenthese(&mut self, c: char) {
        let Some(jeton) = Jeton::parenthese(c) else {
            return;
        };
        self.sortir_de_l_erreur();
        self.accumulateur.ajouter(jeton);
        self.etat = Etat::Saisie;
    }

    /// Préfixe de fonction ou constante, par sa clé dans la table de
    /// substitution ("sin(", "log(", "PI", "e"...). L’écran montre la
    /// forme courte, la canonique reçoit la forme réelle.
    pub fn saisir_fonction(&mut self, nom: &str) -> Result<(), ErreurCalc> {
        if !self.capacites.scientifique {
            return Err(ErreurCalc::Indisponible);
        }
        let jeton = Jeton::depuis_table(nom).ok_or(ErreurCalc::Operande)?;
        self.sortir_de_l_erreur();
        self.accumulateur.ajouter(jeton);
        self.etat = Etat::Saisie;
        Ok(())
    }

    /// Bascule de signe : un moins inséré en TÊTE de saisie. C’est
    /// toute l’expression accumulée qui change de signe, pas le dernier
    /// opérande. Sur l’écran vide, donne le "-" nu en attente d’un
    /// nombre.
    pub fn basculer_signe(&mut self) {
        self.sortir_de_l_erreur();
        self.accumulateur
            .inserer_devant(Jeton::Operateur(Operateur::Moins));
        self.etat = Etat::Saisie;
    }

    /// Retire la dernière saisie. Sur l’état d’erreur, vaut une reprise
    /// (l’erreur périmée n’est pas éditable).
    pub fn effacer_dernier(&mut self) {
        if self.etat == Etat::Erreur {
            self.sortir_de_l_erreur();
            return;
        }
        self.accumulateur.effacer_dernier();
    }

    /// Touche C : tout effacer sauf le registre mémoire.
    pub fn effacer_tout(&mut self) {
        self.accumulateur.vider();
        self.etat = Etat::Saisie;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue la forme canonique courante.
    /// - vide ou sentinelle d’erreur périmée : vaut "0"
    /// - succès : le résultat ré-ensemence l’accumulateur (la saisie
    ///   enchaîne dessus), état Resolu
    /// - échec : sentinelle d’erreur à l’écran, état Erreur ; les jetons
    ///   restent en place, logiquement inertes
    /// La division par zéro est une VALEUR (±inf/NaN), pas un échec.
    pub fn evaluer(&mut self) -> Result<f64, ErreurCalc> {
        let source = if self.accumulateur.canonique().is_empty()
            || self.accumulateur.affichage() == SENTINELLE_ERREUR
        {
            "0".to_string()
        } else {
            self.accumulateur.canonique().to_string()
        };

        match evaluer_expression(&source) {
            Ok(valeur) => {
                debug!(expression = %source, valeur, "évaluation");
                self.accumulateur.semer(&format_valeur(valeur));
                self.etat = Etat::Resolu;
                Ok(valeur)
            }
            Err(e) => {
                debug!(expression = %source, erreur = %e, "évaluation échouée");
                self.accumulateur.marquer_erreur(SENTINELLE_ERREUR);
                self.etat = Etat::Erreur;
                Err(e.into())
            }
        }
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MS : mémorise le résultat de l’évaluation courante.
    pub fn memoriser(&mut self) -> Result<f64, ErreurCalc> {
        if !self.capacites.memoire {
            return Err(ErreurCalc::Indisponible);
        }
        let valeur = self.evaluer()?;
        self.memoire = valeur;
        Ok(valeur)
    }

    /// M+ : ajoute le résultat de l’évaluation courante au registre.
    /// L’évaluation de l’écran est un effet de bord assumé.
    pub fn memoire_plus(&mut self) -> Result<f64, ErreurCalc> {
        if !self.capacites.memoire {
            return Err(ErreurCalc::Indisponible);
        }
        let valeur = self.evaluer()?;
        self.memoire += valeur;
        Ok(valeur)
    }

    /// M- : retranche le résultat de l’évaluation courante du registre.
    pub fn memoire_moins(&mut self) -> Result<f64, ErreurCalc> {
        if !self.capacites.memoire {
            return Err(ErreurCalc::Indisponible);
        }
        let valeur = self.evaluer()?;
        self.memoire -= valeur;
        Ok(valeur)
    }

    /// MR : l’écran est vidé puis reçoit le registre comme saisie neuve.
    pub fn rappeler_memoire(&mut self) -> Result<f64, ErreurCalc> {
        if !self.capacites.memoire {
            return Err(ErreurCalc::Indisponible);
        }
        let texte = format_valeur(self.memoire);
        self.accumulateur.vider();
        self.accumulateur.ajouter(Jeton::nombre(texte));
        self.etat = Etat::Saisie;
        Ok(self.memoire)
    }

    /// MC : remise à zéro directe du registre.
    pub fn vider_memoire(&mut self) -> Result<(), ErreurCalc> {
        if !self.capacites.memoire {
            return Err(ErreurCalc::Indisponible);
        }
        self.memoire = 0.0;
        Ok(())
    }

    /* ------------------------ Transformations unaires ------------------------ */

    /// n! récursive sur l’opérande terminal. Hors plage représentable :
    /// Depassement, écran remis à la sentinelle zéro.
    pub fn factorielle(&mut self) -> Result<f64, ErreurCalc> {
        if !self.capacites.scientifique {
            return Err(ErreurCalc::Indisponible);
        }
        let n = self.operande_terminal()?;
        let valeur = factorielle_recursive(n);
        if !valeur.is_finite() {
            debug!(n, "factorielle hors plage");
            self.effacer_tout();
            return Err(ErreurCalc::Depassement);
        }
        self.remplacer_par(valeur);
        Ok(valeur)
    }

    /// x²
    pub fn carre(&mut self) -> Result<f64, ErreurCalc> {
        self.transformer(|x| x * x)
    }

    /// x³
    pub fn cube(&mut self) -> Result<f64, ErreurCalc> {
        self.transformer(|x| x * x * x)
    }

    /// 10^x
    pub fn puissance_dix(&mut self) -> Result<f64, ErreurCalc> {
        self.transformer(|x| 10f64.powf(x))
    }

    /// 1/x — 1/0 suit la sémantique flottante (inf), pas d’erreur.
    pub fn inverse(&mut self) -> Result<f64, ErreurCalc> {
        self.transformer(f64::recip)
    }

    fn transformer(&mut self, f: impl Fn(f64) -> f64) -> Result<f64, ErreurCalc> {
        if !self.capacites.scientifique {
            return Err(ErreurCalc::Indisponible);
        }
        let n = self.operande_terminal()?;
        let valeur = f(n as f64);
        debug!(n, valeur, "transformation unaire");
        self.remplacer_par(valeur);
        Ok(valeur)
    }

    /// Opérande des transformations : le dernier nombre de la forme
    /// canonique, exigé entier positif ou nul. Tout le reste est un
    /// refus explicite (Operande) qui ne touche pas l’écran.
    fn operande_terminal(&self) -> Result<u64, ErreurCalc> {
        lexeur::dernier_entier(self.accumulateur.canonique()).ok_or(ErreurCalc::Operande)
    }

    /// L’écran est vidé puis reçoit le résultat de la transformation.
    fn remplacer_par(&mut self, valeur: f64) {
        self.accumulateur.semer(&format_valeur(valeur));
        self.etat = Etat::Saisie;
    }

    /* ------------------------ Interne ------------------------ */

    /// L’état d’erreur est abandonné à la prochaine saisie : la
    /// sentinelle périmée n’est jamais concaténée.
    fn sortir_de_l_erreur(&mut self) {
        if self.etat == Etat::Erreur || self.accumulateur.affichage() == SENTINELLE_ERREUR {
            self.accumulateur.vider();
            self.etat = Etat::Saisie;
        }
    }
}

/// Factorielle récursive : 0! = 1! = 1, n! = n × (n-1)!.
/// Au-delà de la borne, inf directement — la récursion n’apprendrait
/// rien de plus et la pile n’a pas à en répondre.
pub fn factorielle_recursive(n: u64) -> f64 {
    if n > FACTORIELLE_MAX {
        return f64::INFINITY;
    }
    if n <= 1 {
        1.0
    } else {
        n as f64 * factorielle_recursive(n - 1)
    }
}
