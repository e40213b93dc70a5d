//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la machine d’état du noyau, la locale d’affichage et le facteur d’échelle,
//! et offrir à la vue une projection prête à dessiner (texte formaté, libellé C/AC).
//!
//! Contrats :
//! - Toute mutation passe par `appliquer` (pavé comme clavier).
//! - La vue ne lit que des projections : pas de logique de calcul ici.

use crate::noyau::etat::reduire;
use crate::noyau::{formater_affichage, Action, EtatCalc, Locale};

use super::echelle::EchelleAuto;

/// Taille de police par défaut de l’affichage.
const TAILLE_POLICE_DEFAUT: f32 = 56.0;

/// Garde-fou : bornes de la taille de police (réglage utilisateur).
const TAILLE_POLICE_MIN: f32 = 12.0;
const TAILLE_POLICE_MAX: f32 = 160.0;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: EtatCalc,
    pub locale: Locale,

    // --- présentation ---
    pub echelle: EchelleAuto,
    pub taille_police: f32,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Locale::default(), TAILLE_POLICE_DEFAUT)
    }
}

impl AppCalc {
    pub fn new(locale: Locale, taille_police: f32) -> Self {
        let taille_police = if taille_police.is_finite() {
            taille_police.clamp(TAILLE_POLICE_MIN, TAILLE_POLICE_MAX)
        } else {
            TAILLE_POLICE_DEFAUT
        };

        Self {
            calc: EtatCalc::default(),
            locale,
            echelle: EchelleAuto::default(),
            taille_police,
        }
    }

    /// Applique une action (bouton ou touche) à la machine d’état.
    pub fn appliquer(&mut self, action: Action) {
        self.calc = reduire(std::mem::take(&mut self.calc), action);
        tracing::debug!(
            ?action,
            affichage = %self.calc.affichage,
            valeur = ?self.calc.valeur,
            operateur = ?self.calc.operateur,
            "action appliquée"
        );
    }

    /// Texte présenté (locale + zéros tapés).
    pub fn texte_affiche(&self) -> String {
        formater_affichage(&self.calc.affichage, &self.locale)
    }

    /// Libellé de la touche d’effacement : "C" si l’affichage n’est pas "0", sinon "AC".
    pub fn libelle_effacer(&self) -> &'static str {
        if self.calc.effacement_court() {
            "C"
        } else {
            "AC"
        }
    }
}
