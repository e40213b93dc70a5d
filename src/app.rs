// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + echelle.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier :
// - Géré ici, globalement, AVANT le dessin (pas de champ texte à focaliser).
// - Les événements reconnus sont RETIRÉS de la file egui (équivalent de preventDefault) :
//   aucun autre widget ne les voit, la page ne défile pas.
// - Les autres événements restent intacts.

pub mod echelle;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{action_depuis_touche, Action};

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in actions_clavier(ctx) {
            self.appliquer(action);
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(egui::Color32::BLACK)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }
}

/// Nom de touche "DOM" d’un événement egui (None si rien à traduire).
///
/// - Text("7"), Text("+"), Text("%")... : le caractère tapé
/// - Enter / Backspace / Delete / Escape : touches nommées (appui seulement)
fn nom_touche(ev: &egui::Event) -> Option<&str> {
    match ev {
        egui::Event::Text(t) => Some(t.as_str()),
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => Some("Enter"),
            egui::Key::Backspace => Some("Backspace"),
            egui::Key::Delete => Some("Delete"),
            egui::Key::Escape => Some("Escape"),
            _ => None,
        },
        _ => None,
    }
}

/// Retire de la file les événements reconnus et renvoie leurs actions, dans l’ordre.
fn filtrer_evenements(events: &mut Vec<egui::Event>) -> Vec<Action> {
    let mut actions = Vec::new();
    events.retain(|ev| match nom_touche(ev).and_then(action_depuis_touche) {
        Some(action) => {
            actions.push(action);
            false
        }
        None => true,
    });
    actions
}

fn actions_clavier(ctx: &egui::Context) -> Vec<Action> {
    ctx.input_mut(|i| filtrer_evenements(&mut i.events))
}
