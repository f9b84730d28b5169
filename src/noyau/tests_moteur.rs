//! Tests du moteur : scénarios de touches, bout en bout.
//!
//! Chaque scénario rejoue une suite de touches comme la vue le ferait,
//! puis vérifie l’écran, l’état et le registre mémoire.

use super::erreur::ErreurCalc;
use super::moteur::{Etat, MoteurCalc, SENTINELLE_ERREUR};

/// Rejoue une suite de touches "texte" : chiffres/point, opérateurs,
/// parenthèses. (Les fonctions et la mémoire ont leurs méthodes.)
fn saisir(m: &mut MoteurCalc, touches: &str) {
    for c in touches.chars() {
        match c {
            '0'..='9' | '.' => m.saisir_chiffre(c),
            '+' | '-' | '*' | '/' => m.saisir_operateur(c),
            '(' | ')' => m.saisir_parenthese(c),
            _ => panic!("touche inconnue dans le scénario: {c}"),
        }
    }
}

fn ok_eval(m: &mut MoteurCalc) -> f64 {
    m.evaluer()
        .unwrap_or_else(|e| panic!("évaluation attendue réussie, reçu: {e}"))
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn concatenation_des_chiffres() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "123");
    assert_eq!(m.affichage(), "123");
}

#[test]
fn zero_de_tete_supprime() {
    let mut m = MoteurCalc::scientifique();
    m.saisir_chiffre('5');
    assert_eq!(m.affichage(), "5");
}

#[test]
fn point_sur_la_sentinelle() {
    let mut m = MoteurCalc::scientifique();
    m.saisir_chiffre('.');
    assert_eq!(m.affichage(), "0.");
    saisir(&mut m, "5");
    assert_eq!(m.affichage(), "0.5");
    assert_eq!(ok_eval(&mut m), 0.5);
}

#[test]
fn fonction_courte_a_l_ecran_reelle_en_canonique() {
    let mut m = MoteurCalc::scientifique();
    m.saisir_fonction("log(").unwrap();
    saisir(&mut m, "100)");
    assert_eq!(m.affichage(), "log(100)");
    assert_eq!(m.canonique(), "log10(100)");
    assert_eq!(ok_eval(&mut m), 2.0);
}

#[test]
fn constantes_par_la_table() {
    let mut m = MoteurCalc::scientifique();
    m.saisir_fonction("PI").unwrap();
    assert_eq!(m.affichage(), "PI");
    assert!((ok_eval(&mut m) - std::f64::consts::PI).abs() < 1e-12);

    let mut m2 = MoteurCalc::scientifique();
    m2.saisir_fonction("ln(").unwrap();
    m2.saisir_fonction("e").unwrap();
    m2.saisir_parenthese(')');
    assert_eq!(m2.affichage(), "ln(e)");
    assert!((ok_eval(&mut m2) - 1.0).abs() < 1e-12);
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn evaluation_de_base() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3+4");
    assert_eq!(ok_eval(&mut m), 7.0);
    assert_eq!(m.affichage(), "7");
    assert!(m.vient_de_resoudre());
}

#[test]
fn division_et_precedence() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "10/2");
    assert_eq!(ok_eval(&mut m), 5.0);

    let mut m2 = MoteurCalc::scientifique();
    saisir(&mut m2, "2*3+4");
    assert_eq!(ok_eval(&mut m2), 10.0);
}

#[test]
fn la_saisie_enchaine_sur_le_resultat() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3+4");
    ok_eval(&mut m);
    saisir(&mut m, "2");
    assert_eq!(m.affichage(), "72");
    assert_eq!(m.canonique(), "72");
}

#[test]
fn auto_evaluation_en_chaine() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3+4+5");
    // le second '+' a résolu "3+4" avant de s’ajouter
    assert_eq!(m.affichage(), "7+5");
    assert_eq!(ok_eval(&mut m), 12.0);
}

#[test]
fn evaluation_a_vide_vaut_zero() {
    let mut m = MoteurCalc::scientifique();
    assert_eq!(ok_eval(&mut m), 0.0);
    assert_eq!(m.affichage(), "0");
}

#[test]
fn division_par_zero_est_une_valeur() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "5/0");
    let v = ok_eval(&mut m);
    assert!(v.is_infinite());
    assert_eq!(m.affichage(), "inf");
    assert!(m.vient_de_resoudre());

    // et la valeur se propage dans l’enchaînement
    saisir(&mut m, "+1");
    assert!(ok_eval(&mut m).is_infinite());
}

/* ------------------------ Chemin d’erreur ------------------------ */

#[test]
fn operateur_pendant_echoue() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3+");
    assert_eq!(m.evaluer(), Err(ErreurCalc::Syntaxe));
    assert_eq!(m.affichage(), SENTINELLE_ERREUR);
    assert_eq!(m.etat(), Etat::Erreur);
}

#[test]
fn l_erreur_est_abandonnee_a_la_saisie() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3+");
    let _ = m.evaluer();

    m.saisir_chiffre('9');
    assert_eq!(m.affichage(), "9");
    assert_eq!(m.etat(), Etat::Saisie);
}

#[test]
fn evaluer_la_sentinelle_vaut_zero() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3+");
    let _ = m.evaluer();

    assert_eq!(ok_eval(&mut m), 0.0);
    assert_eq!(m.affichage(), "0");
}

#[test]
fn resolution_implicite_echouee_abandonnee() {
    let mut m = MoteurCalc::scientifique();
    m.saisir_fonction("sin(").unwrap();
    saisir(&mut m, "3+4");
    // "sin(3+4" contient un binôme : le '*' tente la résolution,
    // échoue, abandonne, et repart à neuf
    m.saisir_operateur('*');
    assert_eq!(m.affichage(), "*");
    assert_eq!(m.etat(), Etat::Saisie);
}

/* ------------------------ Bascule de signe ------------------------ */

#[test]
fn signe_sur_la_sentinelle() {
    let mut m = MoteurCalc::scientifique();
    m.basculer_signe();
    assert_eq!(m.affichage(), "-");
    assert_eq!(m.canonique(), "-");
}

#[test]
fn signe_prefixe_le_nombre() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "34");
    m.basculer_signe();
    assert_eq!(m.affichage(), "-34");
    assert_eq!(ok_eval(&mut m), -34.0);
}

#[test]
fn signe_negatif_puis_saisie() {
    let mut m = MoteurCalc::scientifique();
    m.basculer_signe();
    saisir(&mut m, "8+3");
    assert_eq!(m.affichage(), "-8+3");
    assert_eq!(ok_eval(&mut m), -5.0);
}

#[test]
fn signe_negue_l_expression_entiere() {
    // c’est TOUTE l’expression qui est préfixée, pas le dernier opérande
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3+4");
    m.basculer_signe();
    assert_eq!(m.affichage(), "-3+4");
    assert_eq!(ok_eval(&mut m), 1.0);
}

#[test]
fn double_bascule() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3");
    m.basculer_signe();
    m.basculer_signe();
    assert_eq!(m.affichage(), "--3");
    assert_eq!(ok_eval(&mut m), 3.0);
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn effacement_aller_retour() {
    let mut m = MoteurCalc::scientifique();
    m.saisir_fonction("sin(").unwrap();
    saisir(&mut m, "12");
    for _ in 0..3 {
        m.effacer_dernier();
    }
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.canonique(), "");
}

#[test]
fn effacement_sur_erreur_vaut_reprise() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3+");
    let _ = m.evaluer();
    m.effacer_dernier();
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.etat(), Etat::Saisie);
}

#[test]
fn effacer_tout_preserve_la_memoire() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "2+2");
    m.memoriser().unwrap();
    saisir(&mut m, "+1");
    m.effacer_tout();
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.memoire(), 4.0);
}

#[test]
fn effacer_tout_idempotent() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "42");
    m.effacer_tout();
    m.effacer_tout();
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.canonique(), "");
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn memoire_aller_retour() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "2+2");
    assert_eq!(m.memoriser().unwrap(), 4.0);
    assert_eq!(m.memoire(), 4.0);

    saisir(&mut m, "9");
    m.rappeler_memoire().unwrap();
    assert_eq!(m.affichage(), "4");
    assert_eq!(m.canonique(), "4");
}

#[test]
fn memoire_plus_et_moins() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "10");
    m.memoire_plus().unwrap();
    assert_eq!(m.memoire(), 10.0);

    m.effacer_tout();
    saisir(&mut m, "3");
    m.memoire_moins().unwrap();
    assert_eq!(m.memoire(), 7.0);
}

#[test]
fn memoire_evaluation_echouee_sans_effet() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "5");
    m.memoriser().unwrap();

    saisir(&mut m, "+");
    assert_eq!(m.memoire_plus(), Err(ErreurCalc::Syntaxe));
    assert_eq!(m.memoire(), 5.0);
}

#[test]
fn vider_memoire_remet_a_zero() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "8");
    m.memoriser().unwrap();
    m.vider_memoire().unwrap();
    assert_eq!(m.memoire(), 0.0);

    m.rappeler_memoire().unwrap();
    assert_eq!(m.affichage(), "0");
}

#[test]
fn la_memoire_survit_aux_evaluations_et_aux_erreurs() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "6");
    m.memoriser().unwrap();

    saisir(&mut m, "+");
    let _ = m.evaluer();
    assert_eq!(m.memoire(), 6.0);
}

/* ------------------------ Transformations unaires ------------------------ */

#[test]
fn factorielle_simple() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "5");
    assert_eq!(m.factorielle().unwrap(), 120.0);
    assert_eq!(m.affichage(), "120");
}

#[test]
fn factorielle_hors_plage() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "200");
    assert_eq!(m.factorielle(), Err(ErreurCalc::Depassement));
    assert_eq!(m.affichage(), "0");
}

#[test]
fn transformations_sur_l_operande_terminal() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "2+3");
    // seul le dernier nombre est transformé, le résultat remplace tout
    assert_eq!(m.carre().unwrap(), 9.0);
    assert_eq!(m.affichage(), "9");
}

#[test]
fn cube_puissance_inverse() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "3");
    assert_eq!(m.cube().unwrap(), 27.0);

    m.effacer_tout();
    saisir(&mut m, "2");
    assert_eq!(m.puissance_dix().unwrap(), 100.0);

    m.effacer_tout();
    saisir(&mut m, "4");
    assert_eq!(m.inverse().unwrap(), 0.25);
    assert_eq!(m.affichage(), "0.25");
}

#[test]
fn inverse_de_zero_suit_le_flottant() {
    let mut m = MoteurCalc::scientifique();
    saisir(&mut m, "0");
    assert!(m.inverse().unwrap().is_infinite());
    assert_eq!(m.affichage(), "inf");
}

#[test]
fn operande_absent_ou_non_entier_refuse() {
    let mut m = MoteurCalc::scientifique();
    assert_eq!(m.factorielle(), Err(ErreurCalc::Operande));

    saisir(&mut m, "3.5");
    assert_eq!(m.carre(), Err(ErreurCalc::Operande));
    // le refus ne touche pas l’écran
    assert_eq!(m.affichage(), "3.5");
}

/* ------------------------ Profils de capacités ------------------------ */

#[test]
fn profil_basique_calcule() {
    let mut m = MoteurCalc::basique();
    saisir(&mut m, "3+4+5");
    assert_eq!(ok_eval(&mut m), 12.0);
}

#[test]
fn profil_basique_refuse_le_reste() {
    let mut m = MoteurCalc::basique();
    saisir(&mut m, "5");

    assert_eq!(m.saisir_fonction("sin("), Err(ErreurCalc::Indisponible));
    assert_eq!(m.factorielle(), Err(ErreurCalc::Indisponible));
    assert_eq!(m.memoriser(), Err(ErreurCalc::Indisponible));
    assert_eq!(m.rappeler_memoire(), Err(ErreurCalc::Indisponible));
    assert_eq!(m.vider_memoire(), Err(ErreurCalc::Indisponible));

    // et rien n’a bougé
    assert_eq!(m.affichage(), "5");
    assert_eq!(m.memoire(), 0.0);
}
