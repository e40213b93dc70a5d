// src/noyau/action.rs
//
// Actions d’entrée (pavé tactile ou clavier) + correspondance nom de touche -> action.
// Les noms de touches suivent les noms "DOM" ("Enter", "Backspace", "Clear", "7", "+"...).
// Toute touche non reconnue => None : l’état n’est pas touché.

use super::etat::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// 0..=9
    Chiffre(u8),
    Point,
    Operation(Operateur),
    Pourcent,
    Signe,
    /// Retour arrière : efface le dernier caractère.
    Retour,
    /// C / AC selon l’affichage courant.
    Effacer,
}

/// Traduit un nom de touche en action.
///
/// - "0".."9"              -> chiffre
/// - "/" "*" "+" "-" "="   -> opération ; "Enter" vaut "="
/// - "." "%"               -> point, pourcent
/// - "Backspace" "Delete"  -> retour arrière
/// - "Clear" "Escape"      -> effacement (C/AC)
pub fn action_depuis_touche(touche: &str) -> Option<Action> {
    match touche {
        "Enter" => return Some(Action::Operation(Operateur::Egal)),
        "Backspace" | "Delete" => return Some(Action::Retour),
        "Clear" | "Escape" => return Some(Action::Effacer),
        _ => {}
    }

    // sinon : un seul caractère
    let mut chars = touche.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if let Some(d) = c.to_digit(10) {
        return Some(Action::Chiffre(d as u8));
    }
    if let Some(op) = Operateur::depuis_symbole(c) {
        return Some(Action::Operation(op));
    }
    match c {
        '.' => Some(Action::Point),
        '%' => Some(Action::Pourcent),
        _ => None,
    }
}
