//! src/noyau/etat.rs
//!
//! Machine d’état de la calculatrice (sans vue, sans locale).
//!
//! Rôle : porter `(valeur, affichage, operateur, attente_operande)` et offrir les transitions
//! de saisie (chiffre, point, signe, pourcent, effacements, opérations).
//!
//! Contrats :
//! - `affichage` n’est jamais vide ("0" par défaut) et contient au plus un point.
//! - `valeur` est None tant qu’aucun opérateur n’a été confirmé dans la chaîne en cours.
//! - Chaque transition est synchrone, déterministe, sans erreur : l’arithmétique mal définie
//!   (division par zéro, dépassement) produit ±∞ / NaN qui s’affichent tels quels.

use super::action::Action;
use super::nombre::{nombre_vers_texte, parse_float, to_fixed};

/// Affichage par défaut.
pub const AFFICHAGE_DEFAUT: &str = "0";

/// Opérateur binaire en attente de son second opérande.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Diviser,
    Multiplier,
    Additionner,
    Soustraire,
    /// "Renvoie le second opérande" : termine la chaîne en cours.
    Egal,
}

impl Operateur {
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Diviser => a / b,
            Operateur::Multiplier => a * b,
            Operateur::Additionner => a + b,
            Operateur::Soustraire => a - b,
            Operateur::Egal => b,
        }
    }

    /// Symbole clavier : / * + - =
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '/' => Some(Operateur::Diviser),
            '*' => Some(Operateur::Multiplier),
            '+' => Some(Operateur::Additionner),
            '-' => Some(Operateur::Soustraire),
            '=' => Some(Operateur::Egal),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Diviser => '/',
            Operateur::Multiplier => '*',
            Operateur::Additionner => '+',
            Operateur::Soustraire => '-',
            Operateur::Egal => '=',
        }
    }

    /// Libellé de touche (÷ × − + =).
    pub fn libelle(self) -> &'static str {
        match self {
            Operateur::Diviser => "\u{F7}",
            Operateur::Multiplier => "\u{D7}",
            Operateur::Additionner => "+",
            Operateur::Soustraire => "\u{2212}",
            Operateur::Egal => "=",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    /// Résultat porté d’une opération à l’autre.
    pub valeur: Option<f64>,
    /// Texte brut en cours d’édition / affiché.
    pub affichage: String,
    pub operateur: Option<Operateur>,
    /// Vrai juste après un opérateur : le prochain chiffre démarre un nouveau nombre.
    pub attente_operande: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            valeur: None,
            affichage: AFFICHAGE_DEFAUT.to_string(),
            operateur: None,
            attente_operande: false,
        }
    }
}

impl EtatCalc {
    /* ------------------------ Saisie ------------------------ */

    pub fn input_digit(&mut self, chiffre: u8) {
        let chiffre = chiffre.min(9);
        if self.attente_operande {
            self.affichage = chiffre.to_string();
            self.attente_operande = false;
        } else if self.affichage == AFFICHAGE_DEFAUT {
            // "0" est remplacé, pas préfixé
            self.affichage = chiffre.to_string();
        } else {
            self.affichage.push(char::from(b'0' + chiffre));
        }
    }

    /// Sans effet si l’affichage a déjà un point.
    pub fn input_dot(&mut self) {
        if self.affichage.contains('.') {
            return;
        }
        self.affichage.push('.');
        self.attente_operande = false;
    }

    pub fn toggle_sign(&mut self) {
        let v = parse_float(&self.affichage);
        self.affichage = nombre_vers_texte(-v);
    }

    /// Divise par 100, avec 2 décimales fixes de plus que le texte d’origine.
    ///
    /// Sans effet pour la valeur 0 exacte (y compris -0) ; NaN n’est pas 0 et passe.
    pub fn input_percent(&mut self) {
        let courant = parse_float(&self.affichage);
        if courant == 0.0 {
            return;
        }

        let decimales = decimales_apres_partie_entiere(&self.affichage);
        self.affichage = to_fixed(courant / 100.0, decimales + 2);
    }

    /* ------------------------ Effacements ------------------------ */

    /// Retire le dernier caractère ; vide => "0".
    pub fn clear_last_char(&mut self) {
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage = AFFICHAGE_DEFAUT.to_string();
        }
    }

    /// C : efface seulement l’entrée (garde valeur + opérateur).
    pub fn clear_display(&mut self) {
        self.affichage = AFFICHAGE_DEFAUT.to_string();
    }

    /// AC : remise à zéro totale.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Touche d’effacement unique : C tant que l’affichage n’est pas "0", sinon AC.
    ///
    /// La décision est prise au moment de l’appel.
    pub fn clear_toggle(&mut self) {
        if self.effacement_court() {
            self.clear_display();
        } else {
            self.clear_all();
        }
    }

    /// Vrai si la touche d’effacement doit proposer "C" plutôt que "AC".
    pub fn effacement_court(&self) -> bool {
        self.affichage != AFFICHAGE_DEFAUT
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn perform_operation(&mut self, suivant: Operateur) {
        let entree = parse_float(&self.affichage);

        match (self.valeur, self.operateur) {
            (None, _) => {
                self.valeur = Some(entree);
            }
            (Some(v), Some(op)) => {
                // 0, -0 et NaN repartent de 0
                let courant = if v == 0.0 || v.is_nan() { 0.0 } else { v };
                let resultat = op.appliquer(courant, entree);

                if !resultat.is_finite() {
                    tracing::debug!(
                        operateur = %op.symbole(),
                        gauche = courant,
                        droite = entree,
                        "résultat non fini"
                    );
                }

                self.valeur = Some(resultat);
                self.affichage = nombre_vers_texte(resultat);
            }
            (Some(_), None) => {}
        }

        self.operateur = Some(suivant);
        self.attente_operande = true;
    }

    /* ------------------------ Réducteur ------------------------ */

    /// Applique une action d’entrée (pavé ou clavier).
    pub fn appliquer(&mut self, action: Action) {
        match action {
            Action::Chiffre(d) => self.input_digit(d),
            Action::Point => self.input_dot(),
            Action::Operation(op) => self.perform_operation(op),
            Action::Pourcent => self.input_percent(),
            Action::Signe => self.toggle_sign(),
            Action::Retour => self.clear_last_char(),
            Action::Effacer => self.clear_toggle(),
        }
    }
}

/// Forme pure : état + action -> nouvel état.
#[must_use]
pub fn reduire(mut etat: EtatCalc, action: Action) -> EtatCalc {
    etat.appliquer(action);
    etat
}

/// Nombre de caractères après le préfixe `-?\d*\.?` ("12.50" -> 2, "1e+21" -> 4).
fn decimales_apres_partie_entiere(brut: &str) -> usize {
    let reste = brut.strip_prefix('-').unwrap_or(brut);
    let reste = reste.trim_start_matches(|c: char| c.is_ascii_digit());
    let reste = reste.strip_prefix('.').unwrap_or(reste);
    reste.chars().count()
}
