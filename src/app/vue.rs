// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Projection pure de AppCalc : affichage formaté + pavé
// - Tactile / souris : chaque touche produit une Action, appliquée après le dessin du pavé
// - Affichage auto-ajusté (echelle.rs) : le texte rétrécit au lieu de déborder
//
// Disposition :
//   [AC|C] [±] [%] [÷]
//   [7]    [8] [9] [×]
//   [4]    [5] [6] [−]
//   [1]    [2] [3] [+]
//   [0    ]    [.] [=]

use eframe::egui;
use egui::{Align, Color32, FontId, Layout, RichText};

use crate::noyau::{Action, Operateur};

use super::etat::AppCalc;

const GRIS_FONCTION: Color32 = Color32::from_rgb(0xaa, 0xaa, 0xaa);
const GRIS_CHIFFRE: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
const ORANGE_OPERATEUR: Color32 = Color32::from_rgb(0xff, 0xc1, 0x07);

const TOUCHE: egui::Vec2 = egui::vec2(64.0, 56.0);
const ESPACE: f32 = 6.0;
const TAILLE_LIBELLE: f32 = 24.0;

#[derive(Clone, Copy, Debug)]
enum Genre {
    Fonction,
    Chiffre,
    Operateur,
}

struct Touche {
    libelle: &'static str,
    action: Action,
    genre: Genre,
    /// En nombre de colonnes (le 0 en prend 2).
    colonnes: usize,
}

impl Touche {
    fn simple(libelle: &'static str, action: Action, genre: Genre) -> Self {
        Self {
            libelle,
            action,
            genre,
            colonnes: 1,
        }
    }

    fn chiffre(d: u8, libelle: &'static str) -> Self {
        Self::simple(libelle, Action::Chiffre(d), Genre::Chiffre)
    }

    fn operateur(op: Operateur) -> Self {
        Self::simple(op.libelle(), Action::Operation(op), Genre::Operateur)
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_affichage(ui);
        ui.add_space(8.0);

        if let Some(action) = self.ui_pave(ui) {
            self.appliquer(action);
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let texte = self.texte_affiche();
        let largeur = ui.available_width();

        // mesure du texte NON mis à l’échelle
        let naturelle = ui
            .painter()
            .layout_no_wrap(
                texte.clone(),
                FontId::proportional(self.taille_police),
                Color32::WHITE,
            )
            .size()
            .x;

        if self.echelle.ajuster(largeur, naturelle) {
            tracing::trace!(echelle = self.echelle.echelle(), "échelle d’affichage");
            ui.ctx().request_repaint();
        }

        let taille = self.taille_police * self.echelle.echelle();
        ui.allocate_ui_with_layout(
            egui::vec2(largeur, self.taille_police * 1.3),
            Layout::right_to_left(Align::Center),
            |ui| {
                ui.add(
                    egui::Label::new(RichText::new(texte).size(taille).color(Color32::WHITE))
                        .selectable(false),
                );
            },
        );
    }

    /// Dessine le pavé ; renvoie l’action de la touche cliquée (s’il y en a une).
    fn ui_pave(&self, ui: &mut egui::Ui) -> Option<Action> {
        let rangees = [
            vec![
                Touche::simple(self.libelle_effacer(), Action::Effacer, Genre::Fonction),
                Touche::simple("\u{B1}", Action::Signe, Genre::Fonction),
                Touche::simple("%", Action::Pourcent, Genre::Fonction),
                Touche::operateur(Operateur::Diviser),
            ],
            vec![
                Touche::chiffre(7, "7"),
                Touche::chiffre(8, "8"),
                Touche::chiffre(9, "9"),
                Touche::operateur(Operateur::Multiplier),
            ],
            vec![
                Touche::chiffre(4, "4"),
                Touche::chiffre(5, "5"),
                Touche::chiffre(6, "6"),
                Touche::operateur(Operateur::Soustraire),
            ],
            vec![
                Touche::chiffre(1, "1"),
                Touche::chiffre(2, "2"),
                Touche::chiffre(3, "3"),
                Touche::operateur(Operateur::Additionner),
            ],
            vec![
                Touche {
                    colonnes: 2,
                    ..Touche::chiffre(0, "0")
                },
                Touche::simple(".", Action::Point, Genre::Chiffre),
                Touche::operateur(Operateur::Egal),
            ],
        ];

        let mut clic = None;
        for rangee in &rangees {
            ui.horizontal(|ui| {
                for touche in rangee {
                    if Self::bouton(ui, touche) {
                        clic = Some(touche.action);
                    }
                }
            });
        }
        clic
    }

    fn bouton(ui: &mut egui::Ui, touche: &Touche) -> bool {
        let (fond, encre) = match touche.genre {
            Genre::Fonction => (GRIS_FONCTION, Color32::BLACK),
            Genre::Chiffre => (GRIS_CHIFFRE, Color32::WHITE),
            Genre::Operateur => (ORANGE_OPERATEUR, Color32::WHITE),
        };

        let n = touche.colonnes.max(1) as f32;
        let largeur = TOUCHE.x * n + ESPACE * (n - 1.0);

        let bouton = egui::Button::new(
            RichText::new(touche.libelle)
                .size(TAILLE_LIBELLE)
                .color(encre),
        )
        .fill(fond)
        .corner_radius(TOUCHE.y / 2.0);

        ui.add_sized([largeur, TOUCHE.y], bouton).clicked()
    }
}
