//! Noyau arithmétique UNO
//!
//! Organisation interne :
//! - erreur.rs : taxonomie des erreurs (genres inspectables, jamais de String nue)
//! - arith.rs  : les onze opérations pures
//! - format.rs : valeur -> texte d’affichage (entier sans virgule) + lecture

pub mod arith;
pub mod erreur;
pub mod format;

#[cfg(test)]
mod tests_arith;

// API publique minimale
pub use arith::{
    addition, division, exponentielle, factorielle, log_naturel, multiplication, puissance,
    racine_carree, soustraction, valider_entrees, verifier_depassement,
};
pub use erreur::ErreurCalc;
