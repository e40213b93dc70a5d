// src/noyau/nombre.rs
//
// Nombres "hôte" : lecture et écriture des f64 comme le fait une calculatrice de navigateur.
// - parse_float      : lecture du plus long préfixe décimal valide ("5." -> 5, "-" -> NaN)
// - nombre_vers_texte : écriture la plus courte qui relit le même f64 (exposant hors [1e-6, 1e21))
// - to_fixed          : écriture à virgule fixe sur la valeur EXACTE du f64 (égalité -> on s’éloigne de 0)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Au-delà, l’écriture à virgule fixe bascule sur `nombre_vers_texte`.
const SEUIL_EXPOSANT_FIXE: f64 = 1e21;

/// Borne haute du nombre de décimales de `to_fixed`.
pub const DECIMALES_MAX: usize = 100;

/* ------------------------ Lecture ------------------------ */

/// Lit le plus long préfixe décimal valide de `s` (espaces initiaux ignorés).
///
/// Aucun préfixe valide => NaN. Jamais d’erreur.
pub fn parse_float(s: &str) -> f64 {
    let t = s.trim_start();
    let octets = t.as_bytes();
    let mut i = 0;

    if matches!(octets.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if t[i..].starts_with("Infinity") {
        return if octets.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let debut_chiffres = i;
    while i < octets.len() && octets[i].is_ascii_digit() {
        i += 1;
    }
    let mut nb_chiffres = i - debut_chiffres;

    if i < octets.len() && octets[i] == b'.' {
        let apres_point = i + 1;
        let mut j = apres_point;
        while j < octets.len() && octets[j].is_ascii_digit() {
            j += 1;
        }
        nb_chiffres += j - apres_point;
        i = j;
    }

    if nb_chiffres == 0 {
        return f64::NAN;
    }

    // exposant : seulement s’il est complet (au moins un chiffre)
    if i < octets.len() && matches!(octets[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < octets.len() && matches!(octets[j], b'+' | b'-') {
            j += 1;
        }
        let debut_exp = j;
        while j < octets.len() && octets[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exp {
            i = j;
        }
    }

    t[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/* ------------------------ Écriture la plus courte ------------------------ */

/// Chiffres significatifs les plus courts de |x| (x fini, non nul) et position de la virgule.
///
/// Renvoie (chiffres, n) tels que |x| = 0.chiffres × 10^n.
pub fn chiffres_courts(x: f64) -> (String, i32) {
    // `{:e}` donne déjà la forme la plus courte : "1.2345e3", "5e-7"
    let sci = format!("{:e}", x.abs());
    let (mantisse, exposant) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exposant: i32 = exposant.parse().unwrap_or(0);

    let mut chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    while chiffres.len() > 1 && chiffres.ends_with('0') {
        chiffres.pop();
    }

    (chiffres, exposant + 1)
}

/// Texte d’un f64 tel que l’afficherait `String(x)`.
pub fn nombre_vers_texte(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        // -0 s’écrit aussi "0"
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let signe = if x < 0.0 { "-" } else { "" };
    let (chiffres, n) = chiffres_courts(x);
    let k = chiffres.len() as i32;

    let corps = if k <= n && n <= 21 {
        format!("{chiffres}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (entier, fraction) = chiffres.split_at(n as usize);
        format!("{entier}.{fraction}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let signe_e = if e < 0 { '-' } else { '+' };
        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            format!("{tete}e{signe_e}{}", e.abs())
        } else {
            format!("{tete}.{reste}e{signe_e}{}", e.abs())
        }
    };

    format!("{signe}{corps}")
}

/* ------------------------ Virgule fixe ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Écriture à `decimales` chiffres après la virgule, comme `x.toFixed(decimales)`.
///
/// - valeur exacte du f64 (0.125 -> "0.13", 1.005 -> "1.00")
/// - égalité parfaite : on prend l’entier le plus grand (on s’éloigne de 0)
/// - non fini ou |x| >= 1e21 : `nombre_vers_texte`
/// - `decimales` borné à `DECIMALES_MAX`
pub fn to_fixed(x: f64, decimales: usize) -> String {
    if !x.is_finite() || x.abs() >= SEUIL_EXPOSANT_FIXE {
        return nombre_vers_texte(x);
    }

    let decimales = decimales.min(DECIMALES_MAX);
    let negatif = x < 0.0;

    let Some(exact) = BigRational::from_float(x.abs()) else {
        return nombre_vers_texte(x);
    };

    let scale = BigRational::from_integer(pow10(decimales));
    let scaled = exact * scale;
    let plancher = scaled.floor();
    let reste = &scaled - &plancher;

    let mut n = plancher.to_integer();
    let demi = BigRational::new(BigInt::one(), BigInt::from(2));
    if reste >= demi {
        n += BigInt::one();
    }
    debug_assert!(!n.is_negative());

    let mut texte = n.to_str_radix(10);
    if decimales > 0 {
        while texte.len() <= decimales {
            texte.insert(0, '0');
        }
        let coupe = texte.len() - decimales;
        texte.insert(coupe, '.');
    }

    if negatif {
        format!("-{texte}")
    } else {
        texte
    }
}
