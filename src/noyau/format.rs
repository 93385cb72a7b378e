// src/noyau/format.rs

/// Au-delà, un entier f64 n’est plus affiché chiffre à chiffre.
const ENTIER_MAX: f64 = 1e15;

/// En deçà, on passe en notation scientifique.
const PETIT_MIN: f64 = 1e-6;

/// Texte affiché pour un résultat.
///
/// - entier : "14" (pas de ".0"), "-0" devient "0"
/// - décimal : forme la plus courte qui relit la même valeur
/// - très grand / très petit : notation scientifique ("1e20")
/// - infini (débordement) : "∞" / "-∞"
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let a = v.abs();
    if v.fract() == 0.0 && a < ENTIER_MAX {
        return format!("{}", v as i64);
    }
    if (PETIT_MIN..ENTIER_MAX).contains(&a) {
        return format!("{v}");
    }
    format!("{v:e}")
}
