//! Tests fuzz safe : séquences d’actions aléatoires mais déterministes.
//!
//! But : marteler la machine d’état + l’affichage sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants : affichage jamais vide, au plus un point, présentation toujours calculable,
//!   "=" répété une fois la chaîne terminée ne change plus l’affichage

use std::time::{Duration, Instant};

use super::action::Action;
use super::etat::tests::OPERATEURS;
use super::etat::{reduire, EtatCalc, Operateur};
use super::format::formater_affichage;
use super::locale::Locale;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’actions ------------------------ */

fn gen_action(rng: &mut Rng) -> Action {
    // les chiffres dominent, comme une vraie saisie
    match rng.pick(20) {
        0..=9 => Action::Chiffre(rng.pick(10) as u8),
        10 | 11 => Action::Point,
        12 => Action::Pourcent,
        13 => Action::Signe,
        14 => Action::Retour,
        15 => Action::Effacer,
        _ => Action::Operation(OPERATEURS[rng.pick(5) as usize]),
    }
}

fn check_invariants(etat: &EtatCalc, locales: &[Locale], trace: &[Action]) {
    assert!(!etat.affichage.is_empty(), "affichage vide après {trace:?}");
    assert!(
        etat.affichage.matches('.').count() <= 1,
        "plus d’un point dans {:?} après {trace:?}",
        etat.affichage
    );
    for l in locales {
        let texte = formater_affichage(&etat.affichage, l);
        assert!(!texte.is_empty(), "présentation vide pour {:?}", etat.affichage);
    }
    if etat.valeur.is_none() {
        assert!(
            etat.operateur.is_none(),
            "opérateur sans valeur portée après {trace:?}"
        );
    }
}

#[test]
fn fuzz_sequences_invariants() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let locales = [
        Locale::depuis_tag("en-US"),
        Locale::depuis_tag("fr-FR"),
        Locale::depuis_tag("en-IN"),
    ];

    let mut rng = Rng::new(0xC0FFEE);
    for _ in 0..400 {
        budget(start, max);

        let longueur = 1 + rng.pick(40) as usize;
        let mut etat = EtatCalc::default();
        let mut trace = Vec::with_capacity(longueur);

        for _ in 0..longueur {
            let action = gen_action(&mut rng);
            trace.push(action);
            etat = reduire(etat, action);
            check_invariants(&etat, &locales, &trace);
        }
    }
}

#[test]
fn fuzz_egal_idempotent() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(42);
    for _ in 0..300 {
        budget(start, max);

        let mut etat = EtatCalc::default();
        for _ in 0..(1 + rng.pick(25)) {
            etat = reduire(etat, gen_action(&mut rng));
        }

        // sans chaîne en cours, le 1er "=" ne fait que la démarrer : "5." reste "5."
        let chaine_en_cours = etat.valeur.is_some();

        let egal = Action::Operation(Operateur::Egal);
        let une_fois = reduire(etat, egal);
        let deux_fois = reduire(une_fois.clone(), egal);
        let trois_fois = reduire(deux_fois.clone(), egal);

        if chaine_en_cours {
            assert_eq!(une_fois.affichage, deux_fois.affichage);
        }
        assert_eq!(deux_fois.affichage, trois_fois.affichage);
    }
}

#[test]
fn fuzz_clear_display_ne_touche_pas_la_chaine() {
    let mut rng = Rng::new(7);
    for _ in 0..300 {
        let mut etat = EtatCalc::default();
        for _ in 0..(1 + rng.pick(25)) {
            etat = reduire(etat, gen_action(&mut rng));
        }

        let mut efface = etat.clone();
        efface.clear_display();
        assert_eq!(efface.affichage, "0");
        assert_eq!(efface.operateur, etat.operateur);
        assert_eq!(efface.attente_operande, etat.attente_operande);
        assert_eq!(
            efface.valeur.map(f64::to_bits),
            etat.valeur.map(f64::to_bits)
        );
    }
}
