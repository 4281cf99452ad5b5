// src/noyau/format.rs

use super::erreur::ErreurCalc;

/* ------------------------ Valeur -> texte ------------------------ */

/// Rend une valeur pour l’affichage :
/// - valeur entière : sans partie fractionnaire (`4`, jamais `4.0`)
/// - sinon : conversion flottante par défaut (précision complète)
/// - jamais de « -0 » à l’écran
pub fn format_valeur(v: f64) -> String {
    if v == 0.0 {
        // couvre -0.0 (égal à 0.0 au sens flottant)
        return "0".to_string();
    }
    format!("{v}")
}

/* ------------------------ Texte -> valeur ------------------------ */

/// Lit la valeur affichée. Affichage vide => 0 (lecture transitoire).
/// Texte non numérique (ex. un point seul) => `EntreeInvalide`.
pub fn lire_affichage(texte: &str) -> Result<f64, ErreurCalc> {
    let t = texte.trim();
    if t.is_empty() {
        return Ok(0.0);
    }
    t.parse::<f64>()
        .map_err(|_| ErreurCalc::EntreeInvalide("entrez une valeur numérique".into()))
}
