//! Noyau de la calculatrice (sans egui)
//!
//! Organisation interne :
//! - etat.rs    : machine d’état (valeur, affichage, opérateur, attente) + réducteur
//! - action.rs  : actions d’entrée + noms de touches
//! - nombre.rs  : lecture / écriture des f64 (préfixe décimal, forme la plus courte, virgule fixe)
//! - format.rs  : texte présenté (locale, groupement, 6 décimales, zéros tapés)
//! - locale.rs  : séparateurs et jetons par locale

pub mod action;
pub mod etat;
pub mod format;
pub mod locale;
pub mod nombre;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use action::{action_depuis_touche, Action};
pub use etat::{EtatCalc, Operateur};
pub use format::formater_affichage;
pub use locale::Locale;
