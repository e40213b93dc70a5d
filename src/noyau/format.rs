// src/noyau/format.rs
//
// Affichage : texte brut de l’état -> texte présenté (locale, groupement, 6 décimales max).
// Le noyau continue de travailler sur le texte brut ; ceci n’est qu’une projection.

use super::locale::Locale;
use super::nombre::{chiffres_courts, parse_float};

/// Décimales maximum à l’écran (arrondi, pas troncature).
pub const DECIMALES_AFFICHEES: usize = 6;

/* ------------------------ Nombre -> texte localisé ------------------------ */

/// Ajoute 1 à une suite de chiffres décimaux. Renvoie true en cas de retenue sortante.
fn incrementer(chiffres: &mut [u8]) -> bool {
    for c in chiffres.iter_mut().rev() {
        if *c == b'9' {
            *c = b'0';
        } else {
            *c += 1;
            return false;
        }
    }
    true
}

/// Insère les séparateurs de groupe dans la partie entière.
fn grouper(entier: &str, locale: &Locale) -> String {
    let n = entier.len();
    if n < 3 + locale.groupement_min {
        return entier.to_string();
    }

    // tailles des groupes, de droite à gauche : 3 puis `groupement_secondaire`
    let mut coupes = Vec::new();
    let mut pos = n - 3;
    coupes.push(pos);
    let pas = locale.groupement_secondaire.max(1);
    while pos > pas {
        pos -= pas;
        coupes.push(pos);
    }
    coupes.reverse();

    let mut out = String::with_capacity(n + coupes.len() * 3);
    let mut debut = 0;
    for c in coupes {
        out.push_str(&entier[debut..c]);
        out.push_str(locale.separateur_groupe);
        debut = c;
    }
    out.push_str(&entier[debut..]);
    out
}

/// Formate un f64 selon la locale, avec au plus `decimales_max` décimales.
///
/// - chiffres de départ : écriture la plus courte du f64
/// - arrondi à `decimales_max` : moitié -> on s’éloigne de 0
/// - zéros finaux de la partie décimale supprimés
/// - -0 garde son signe ("-0")
pub fn formater_nombre(x: f64, locale: &Locale, decimales_max: usize) -> String {
    if x.is_nan() {
        return locale.nan.to_string();
    }

    let signe = if x.is_sign_negative() {
        locale.signe_moins
    } else {
        ""
    };

    if x.is_infinite() {
        return format!("{signe}{}", locale.infini);
    }
    if x == 0.0 {
        return format!("{signe}0");
    }

    let (chiffres, n) = chiffres_courts(x);
    let k = chiffres.len() as i32;

    let (mut entier, mut fraction) = if n <= 0 {
        ("0".to_string(), format!("{}{chiffres}", "0".repeat((-n) as usize)))
    } else if n >= k {
        (format!("{chiffres}{}", "0".repeat((n - k) as usize)), String::new())
    } else {
        let (e, f) = chiffres.split_at(n as usize);
        (e.to_string(), f.to_string())
    };

    if fraction.len() > decimales_max {
        let arrondir = fraction.as_bytes()[decimales_max] >= b'5';
        fraction.truncate(decimales_max);

        if arrondir {
            let mut tout = format!("{entier}{fraction}").into_bytes();
            let retenue = incrementer(&mut tout);
            let (e, f) = tout.split_at(entier.len());
            let mut nouvel_entier = String::from_utf8_lossy(e).into_owned();
            if retenue {
                nouvel_entier.insert(0, '1');
            }
            fraction = String::from_utf8_lossy(f).into_owned();
            entier = nouvel_entier;
        }
    }

    while fraction.ends_with('0') {
        fraction.pop();
    }

    let entier = grouper(&entier, locale);
    if fraction.is_empty() {
        format!("{signe}{entier}")
    } else {
        format!("{signe}{entier}{}{fraction}", locale.separateur_decimal)
    }
}

/* ------------------------ Zéros finaux tapés ------------------------ */

/// Suffixe décimal final du texte brut : ".<chiffres>" jusqu’à la fin.
///
/// Renvoie (suffixe complet, zéros finaux du suffixe), ou None si pas de suffixe.
fn suffixe_decimal(brut: &str) -> Option<(&str, &str)> {
    let point = brut.rfind('.')?;
    let suffixe = &brut[point..];
    if !suffixe[1..].bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let sans_zeros = suffixe.trim_end_matches('0');
    // le point lui-même n’est jamais compté comme zéro
    let debut_zeros = sans_zeros.len().max(1);
    Some((suffixe, &suffixe[debut_zeros..]))
}

/// Texte présenté pour le texte brut de l’affichage.
///
/// La mise en forme localisée perd les zéros tapés ("12.0" -> "12") : on les remet.
/// - suffixe avec un chiffre non nul ("12.50") : on rajoute seulement les zéros finaux
/// - sinon (".", ".0", ".00") : on rajoute tout le suffixe
///
/// Le point rajouté suit la locale (",0" en fr).
pub fn formater_affichage(brut: &str, locale: &Locale) -> String {
    let valeur = parse_float(brut);
    let mut sortie = formater_nombre(valeur, locale, DECIMALES_AFFICHEES);

    if let Some((suffixe, zeros)) = suffixe_decimal(brut) {
        if suffixe.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            sortie.push_str(zeros);
        } else {
            sortie.push_str(locale.separateur_decimal);
            sortie.push_str(&suffixe[1..]);
        }
    }

    sortie
}
