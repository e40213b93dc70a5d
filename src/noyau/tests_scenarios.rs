//! Tests de scénarios : saisies complètes telles qu’un utilisateur les tape.
//!
//! On passe par `reduire` / `appliquer` (comme la vue) et on vérifie l’état brut,
//! puis le texte présenté quand c’est utile.

use super::action::{action_depuis_touche, Action};
use super::etat::{reduire, EtatCalc, Operateur};
use super::format::formater_affichage;
use super::locale::Locale;

fn taper(touches: &[&str]) -> EtatCalc {
    touches.iter().fold(EtatCalc::default(), |etat, t| {
        let action = action_depuis_touche(t).unwrap_or_else(|| panic!("touche inconnue {t:?}"));
        reduire(etat, action)
    })
}

fn affichage(touches: &[&str]) -> String {
    taper(touches).affichage
}

/* ------------------------ Saisie de chiffres ------------------------ */

#[test]
fn scen_zero_remplace_pas_prefixe() {
    assert_eq!(affichage(&["1", "2"]), "12");
    assert_eq!(affichage(&["0", "0", "7"]), "7");
    assert_eq!(affichage(&["9", "0", "0"]), "900");
}

#[test]
fn scen_point_unique() {
    let etat = taper(&["1", ".", "5"]);
    assert_eq!(etat.affichage, "1.5");

    let apres = reduire(etat.clone(), Action::Point);
    assert_eq!(apres, etat, "un second point ne change rien");
}

#[test]
fn scen_point_apres_operateur_continue_l_affichage() {
    // le point ne démarre pas un nouveau nombre : il s’ajoute au texte courant
    let etat = taper(&["5", "+", "."]);
    assert_eq!(etat.affichage, "5.");
    assert!(!etat.attente_operande);
}

/* ------------------------ Effacements ------------------------ */

#[test]
fn scen_retour_arriere_plancher() {
    let mut etat = EtatCalc::default();
    etat.clear_last_char();
    assert_eq!(etat.affichage, "0");

    assert_eq!(affichage(&["7", "Backspace"]), "0");
    assert_eq!(affichage(&["1", "2", "3", "Backspace"]), "12");
}

#[test]
fn scen_retour_arriere_peut_laisser_un_signe_seul() {
    let etat = taper(&["5", "+", "8", "=", "Enter"]);
    let mut etat = reduire(etat, Action::Signe);
    assert_eq!(etat.affichage, "-13");
    etat.clear_last_char();
    etat.clear_last_char();
    assert_eq!(etat.affichage, "-");
    assert_eq!(formater_affichage(&etat.affichage, &Locale::default()), "NaN");
}

#[test]
fn scen_clear_display_garde_la_chaine() {
    let mut etat = taper(&["5", "+", "3"]);
    etat.clear_display();
    assert_eq!(etat.affichage, "0");
    assert_eq!(etat.valeur, Some(5.0));
    assert_eq!(etat.operateur, Some(Operateur::Additionner));

    etat.clear_all();
    assert_eq!(etat, EtatCalc::default());
}

#[test]
fn scen_touche_effacer_c_puis_ac() {
    let etat = taper(&["5", "+", "3"]);
    assert!(etat.effacement_court());

    // 1er appui : C
    let etat = reduire(etat, Action::Effacer);
    assert_eq!(etat.affichage, "0");
    assert_eq!(etat.valeur, Some(5.0));
    assert!(!etat.effacement_court());

    // 2e appui : AC
    let etat = reduire(etat, Action::Effacer);
    assert_eq!(etat, EtatCalc::default());
}

/* ------------------------ Opérations ------------------------ */

#[test]
fn scen_addition_complete() {
    let mut etat = EtatCalc::default();

    etat.input_digit(5);
    assert_eq!(etat.affichage, "5");

    etat.perform_operation(Operateur::Additionner);
    assert_eq!(etat.valeur, Some(5.0));
    assert_eq!(etat.operateur, Some(Operateur::Additionner));
    assert!(etat.attente_operande);

    etat.input_digit(3);
    assert_eq!(etat.affichage, "3");

    etat.perform_operation(Operateur::Egal);
    assert_eq!(etat.affichage, "8");
    assert_eq!(etat.valeur, Some(8.0));
}

#[test]
fn scen_egal_deux_fois_inerte() {
    let etat = taper(&["7", "*", "6", "="]);
    assert_eq!(etat.affichage, "42");
    let encore = reduire(etat.clone(), Action::Operation(Operateur::Egal));
    assert_eq!(encore.affichage, etat.affichage);
    assert_eq!(encore.valeur, etat.valeur);
}

#[test]
fn scen_chainage_dernier_operateur_gagne() {
    // 2 + 3 * 4 = : calcul de gauche à droite, pas de priorité
    assert_eq!(affichage(&["2", "+", "3", "*", "4", "="]), "20");

    // opérateur remplacé sans nouvelle saisie : le résultat partiel est recalculé avec le même nombre
    assert_eq!(affichage(&["6", "+", "-", "2", "="]), "10");
}

#[test]
fn scen_chiffre_apres_egal_repart_de_zero() {
    let etat = taper(&["5", "+", "3", "=", "2"]);
    assert_eq!(etat.affichage, "2");
    assert_eq!(etat.operateur, Some(Operateur::Egal));

    // "=" en attente : le nouveau nombre remplace le résultat porté
    let etat = reduire(etat, Action::Operation(Operateur::Additionner));
    assert_eq!(etat.valeur, Some(2.0));
    assert_eq!(etat.affichage, "2");
}

#[test]
fn scen_resultat_flottant_brut() {
    assert_eq!(
        affichage(&["0", ".", "1", "+", "0", ".", "2", "="]),
        "0.30000000000000004"
    );
    assert_eq!(
        formater_affichage(&affichage(&["0", ".", "1", "+", "0", ".", "2", "="]), &Locale::default()),
        "0.3"
    );
}

#[test]
fn scen_division_par_zero() {
    let etat = taper(&["1", "/", "0", "="]);
    assert_eq!(etat.affichage, "Infinity");
    assert_eq!(formater_affichage(&etat.affichage, &Locale::default()), "\u{221E}");

    let etat = taper(&["0", "/", "0", "="]);
    assert_eq!(etat.affichage, "NaN");

    // NaN porté : repart de 0
    let etat = taper(&["0", "/", "0", "=", "+", "4", "="]);
    assert_eq!(etat.affichage, "4");
}

#[test]
fn scen_tres_grand_nombre_en_exposant() {
    let mut etat = EtatCalc::default();
    for _ in 0..11 {
        etat.input_digit(9);
    }
    etat.perform_operation(Operateur::Multiplier);
    for _ in 0..11 {
        etat.input_digit(9);
    }
    etat.perform_operation(Operateur::Egal);
    assert!(etat.affichage.contains("e+21"), "{}", etat.affichage);
    assert!(!etat.affichage.is_empty());
}

/* ------------------------ Signe + pourcent ------------------------ */

#[test]
fn scen_changement_de_signe() {
    assert_eq!(affichage(&["4", "2"]), "42");
    let etat = reduire(taper(&["4", "2"]), Action::Signe);
    assert_eq!(etat.affichage, "-42");
    let etat = reduire(etat, Action::Signe);
    assert_eq!(etat.affichage, "42");

    // -0 s’écrit "0"
    let etat = reduire(EtatCalc::default(), Action::Signe);
    assert_eq!(etat.affichage, "0");

    // "5." -> "-5" : le point tapé disparaît
    let etat = reduire(taper(&["5", "."]), Action::Signe);
    assert_eq!(etat.affichage, "-5");
}

#[test]
fn scen_pourcent() {
    // 0 : sans effet
    let etat = reduire(EtatCalc::default(), Action::Pourcent);
    assert_eq!(etat, EtatCalc::default());

    let etat = taper(&["0", ".", "0", "%"]);
    assert_eq!(etat.affichage, "0.0");

    assert_eq!(affichage(&["5", "0", "%"]), "0.50");
    assert_eq!(affichage(&["1", "2", ".", "5", "%"]), "0.125");
    assert_eq!(affichage(&["1", "%"]), "0.01");
    assert_eq!(affichage(&["1", "%", "%"]), "0.0001");
}

#[test]
fn scen_pourcent_negatif_et_formate() {
    let etat = reduire(taper(&["2", "5"]), Action::Signe);
    let etat = reduire(etat, Action::Pourcent);
    assert_eq!(etat.affichage, "-0.25");
    assert_eq!(formater_affichage("0.50", &Locale::default()), "0.50");
}

/* ------------------------ Présentation ------------------------ */

#[test]
fn scen_presentation_zeros_tapes() {
    let l = Locale::default();
    assert_eq!(formater_affichage(&affichage(&["1", "2", ".", "0"]), &l), "12.0");
    assert_eq!(formater_affichage(&affichage(&["1", "2", ".", "1", "0"]), &l), "12.10");
    assert_eq!(formater_affichage(&affichage(&["1", "2"]), &l), "12");
    assert_eq!(
        formater_affichage(&affichage(&["1", "2", "3", "4", "5", ".", "5", "0"]), &l),
        "12,345.50"
    );
}
