// src/noyau/locale.rs
//
// Données de locale pour l’affichage (séparateurs, groupement, signe moins, jetons ∞ / NaN).
// Table volontairement courte : les langues non listées retombent sur l’anglais (en-US).

/// Locale par défaut (navigateur sans langue, environnement "C").
pub const TAG_DEFAUT: &str = "en-US";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    /// Tag BCP 47 normalisé ("fr-FR").
    pub tag: String,
    pub separateur_decimal: &'static str,
    pub separateur_groupe: &'static str,
    /// Chiffres minimum avant le premier séparateur (2 : "1234" mais "12.345").
    pub groupement_min: usize,
    /// Taille des groupes après le premier groupe de 3 (2 en Inde : "12,34,567").
    pub groupement_secondaire: usize,
    pub signe_moins: &'static str,
    pub infini: &'static str,
    pub nan: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::depuis_tag(TAG_DEFAUT)
    }
}

/// Espace fine insécable (fr).
const ESPACE_FINE: &str = "\u{202F}";
/// Espace insécable (ru, pl, sv...).
const ESPACE_INSECABLE: &str = "\u{A0}";
/// Signe moins typographique (sv, fi, nb).
const MOINS_TYPO: &str = "\u{2212}";
const INFINI: &str = "\u{221E}";

impl Locale {
    /// Construit la locale à partir d’un tag ("fr-FR", "de_CH.UTF-8", "en").
    ///
    /// Tag vide / "C" / "POSIX" => en-US.
    pub fn depuis_tag(tag: &str) -> Self {
        let tag = normaliser_tag(tag).unwrap_or_else(|| TAG_DEFAUT.to_string());
        let (langue, region) = match tag.split_once('-') {
            Some((l, r)) => (l, r),
            None => (tag.as_str(), ""),
        };

        let mut l = Self {
            tag: tag.clone(),
            separateur_decimal: ".",
            separateur_groupe: ",",
            groupement_min: 1,
            groupement_secondaire: 3,
            signe_moins: "-",
            infini: INFINI,
            nan: "NaN",
        };

        match (langue, region) {
            ("fr", "CH") => {
                l.separateur_decimal = ",";
                l.separateur_groupe = ESPACE_FINE;
            }
            ("de", "CH") | ("it", "CH") => {
                l.separateur_groupe = "\u{2019}";
            }
            ("fr", _) => {
                l.separateur_decimal = ",";
                l.separateur_groupe = ESPACE_FINE;
            }
            ("de" | "it" | "nl" | "da" | "id" | "tr" | "el", _) => {
                l.separateur_decimal = ",";
                l.separateur_groupe = ".";
            }
            ("es", _) => {
                l.separateur_decimal = ",";
                l.separateur_groupe = ".";
                l.groupement_min = 2;
            }
            ("pt", "PT") => {
                l.separateur_decimal = ",";
                l.separateur_groupe = ESPACE_INSECABLE;
                l.groupement_min = 2;
            }
            ("pt", _) => {
                l.separateur_decimal = ",";
                l.separateur_groupe = ".";
            }
            ("pl", _) => {
                l.separateur_decimal = ",";
                l.separateur_groupe = ESPACE_INSECABLE;
                l.groupement_min = 2;
            }
            ("ru" | "uk" | "cs" | "sk" | "bg", _) => {
                l.separateur_decimal = ",";
                l.separateur_groupe = ESPACE_INSECABLE;
            }
            ("sv" | "fi" | "nb" | "no", _) => {
                l.separateur_decimal = ",";
                l.separateur_groupe = ESPACE_INSECABLE;
                l.signe_moins = MOINS_TYPO;
            }
            ("hi", _) | ("en", "IN") => {
                l.groupement_secondaire = 2;
            }
            _ => {}
        }

        l
    }
}

/// Normalise un tag de locale :
/// - "fr_FR.UTF-8" / "fr_FR@euro" -> "fr-FR"
/// - langue en minuscules, région en majuscules
/// - None si vide, "C" ou "POSIX"
pub fn normaliser_tag(brut: &str) -> Option<String> {
    let sans_codage = brut
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    if sans_codage.is_empty() || sans_codage == "C" || sans_codage == "POSIX" {
        return None;
    }

    let mut parties = sans_codage.split('-').filter(|p| !p.is_empty());
    let langue = parties.next()?.to_ascii_lowercase();
    if !langue.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    // région : 2 lettres ou 3 chiffres ; on saute les scripts ("zh-Hant-TW")
    let region = parties.find(|p| {
        (p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
            || (p.len() == 3 && p.chars().all(|c| c.is_ascii_digit()))
    });

    Some(match region {
        Some(r) => format!("{langue}-{}", r.to_ascii_uppercase()),
        None => langue,
    })
}
