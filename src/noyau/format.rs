// src/noyau/format.rs

/// Affichage du résultat numérique.
///
/// - entier fini : tous ses chiffres + une décimale ("14.0", "1152921504606846976.0")
/// - autre fini  : forme la plus courte qui relit la même valeur ("0.1")
/// - NaN / ±Infinity
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v.is_infinite() {
        return if v > 0.0 {
            "Infinity".into()
        } else {
            "-Infinity".into()
        };
    }
    if v.fract() == 0.0 {
        // évite "-0.0" pour un zéro négatif
        let v = if v == 0.0 { 0.0 } else { v };
        return format!("{v:.1}");
    }
    format!("{v}")
}
