// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : réglages + journalisation + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - Locale d’affichage         : réglage, sinon système (LANG...) / navigateur, sinon en-US
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod config;
#[cfg(not(target_arch = "wasm32"))]
mod logging;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Style (natif + web) ------------------------ */

fn installer_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Réglages d’abord (ils portent le filtre de journalisation), erreurs journalisées ensuite.
    let chargement = config::charger();
    let cfg = chargement.as_ref().ok().cloned().unwrap_or_default();

    logging::init(&cfg.filtre_log);

    if let Err(e) = &chargement {
        tracing::warn!(erreur = %e, "réglages ignorés, valeurs par défaut");
    }

    let locale = cfg.locale_effective(config::locale_systeme().as_deref());
    tracing::info!(
        locale = %locale.tag,
        config = ?config::chemin_config(),
        "démarrage"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size(cfg.taille_fenetre)
            .with_min_inner_size(cfg.taille_min),
        ..Default::default()
    };

    let taille_police = cfg.taille_police;
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |cc| {
            // Contexte egui prêt => style avant la première frame.
            installer_style(&cc.egui_ctx);
            Ok(Box::new(AppCalc::new(locale, taille_police)))
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{installer_style, AppCalc, TITRE_APP};
    use crate::config::Config;

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Locale : navigator.language, sinon en-US
    /// - Démarre eframe WebRunner sur <canvas id="the_canvas_id">
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let cfg = Config::default();
        let langue = w.navigator().language();
        let locale = cfg.locale_effective(langue.as_deref());
        tracing::info!(locale = %locale.tag, "démarrage web");

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();
        let taille_police = cfg.taille_police;

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    installer_style(&cc.egui_ctx);
                    Ok(Box::new(AppCalc::new(locale, taille_police)))
                }),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
