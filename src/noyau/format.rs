// src/noyau/format.rs
//
// Valeur f64 -> texte d’affichage, qui RE-SERT de saisie :
// le résultat ré-semé doit repasser tel quel dans le lexeur
// (enchaînement "3+4", "=", "+5").
//
// Règles:
// - entier exact (sous 1e15) : forme entière, "7" jamais "7.0"
// - sinon : 10 décimales, zéros terminaux retirés
// - non fini : "inf" / "-inf" / "NaN" (le lexeur les reconnaît)

/// Formate une valeur pour l’écran et pour le ré-ensemencement.
pub fn format_valeur(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }

    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }

    let texte = format!("{v:.10}");
    texte
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
