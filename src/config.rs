//! src/config.rs
//!
//! Réglages de l’application (fichier JSON optionnel + variables d’environnement).
//!
//! Contrats :
//! - Fichier absent => réglages par défaut (pas une erreur).
//! - Fichier illisible / JSON invalide => `ConfigErreur` ; `main` journalise puis prend les défauts.
//! - Chaque champ a un défaut (`#[serde(default)]`) : un fichier partiel suffit.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noyau::locale::{normaliser_tag, Locale, TAG_DEFAUT};

/// Variable d’environnement : chemin explicite du fichier de réglages.
pub const VAR_CHEMIN: &str = "CALC_CLAVIER_CONFIG";

const DOSSIER: &str = "calculatrice-clavier";
const FICHIER: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigErreur {
    #[error("lecture impossible de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages invalides dans {chemin}: {source}")]
    Format {
        chemin: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tag de locale forcé ("fr-FR"). None => locale du système.
    pub locale: Option<String>,
    pub taille_fenetre: [f32; 2],
    pub taille_min: [f32; 2],
    /// Taille de police de l’affichage (avant mise à l’échelle).
    pub taille_police: f32,
    /// Filtre de journalisation si RUST_LOG est absent.
    pub filtre_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: None,
            taille_fenetre: [320.0, 480.0],
            taille_min: [260.0, 400.0],
            taille_police: 56.0,
            filtre_log: "calculatrice_clavier=info".to_string(),
        }
    }
}

impl Config {
    /// Locale effective : réglage explicite, sinon `systeme`, sinon en-US.
    pub fn locale_effective(&self, systeme: Option<&str>) -> Locale {
        let tag = self
            .locale
            .as_deref()
            .and_then(normaliser_tag)
            .or_else(|| systeme.and_then(normaliser_tag))
            .unwrap_or_else(|| TAG_DEFAUT.to_string());
        Locale::depuis_tag(&tag)
    }
}

/* ------------------------ Fichier ------------------------ */

/// Chemin du fichier de réglages :
/// `$CALC_CLAVIER_CONFIG`, sinon `$XDG_CONFIG_HOME/calculatrice-clavier/config.json`,
/// sinon `$HOME/.config/calculatrice-clavier/config.json`.
pub fn chemin_config() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(VAR_CHEMIN).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join(DOSSIER).join(FICHIER))
}

/// Charge les réglages depuis `chemin` ; fichier absent => défauts.
pub fn charger_depuis(chemin: &Path) -> Result<Config, ConfigErreur> {
    let texte = match std::fs::read_to_string(chemin) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigErreur::Lecture {
                chemin: chemin.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&texte).map_err(|source| ConfigErreur::Format {
        chemin: chemin.to_path_buf(),
        source,
    })
}

/// Charge les réglages depuis l’emplacement standard.
pub fn charger() -> Result<Config, ConfigErreur> {
    match chemin_config() {
        Some(chemin) => charger_depuis(&chemin),
        None => Ok(Config::default()),
    }
}

/// Locale du système : LC_ALL, LC_NUMERIC puis LANG (première valeur utilisable).
pub fn locale_systeme() -> Option<String> {
    ["LC_ALL", "LC_NUMERIC", "LANG"]
        .iter()
        .filter_map(|v| std::env::var(v).ok())
        .find_map(|brut| normaliser_tag(&brut))
}
