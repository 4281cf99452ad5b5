//! src/noyau/erreur.rs
//!
//! Taxonomie des erreurs du noyau.
//!
//! Contrats :
//! - Trois genres, et seulement trois : entrée invalide, division par zéro,
//!   dépassement de capacité.
//! - Le noyau LÈVE, il ne rattrape jamais. C’est l’appelant (la vue, via
//!   l’état) qui convertit en notification utilisateur.
//! - Jamais de String nue : on inspecte le genre, pas le texte.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurCalc {
    /// Argument non numérique, ou hors domaine (factorielle négative ou
    /// non entière, log d’un nombre ≤ 0, racine d’un négatif).
    #[error("Entrée invalide : {0}")]
    EntreeInvalide(String),

    /// Dénominateur nul dans une division.
    #[error("Division par zéro impossible. Entrez un dénominateur non nul.")]
    DivisionParZero,

    /// Résultat dont la grandeur dépasse la limite autorisée.
    #[error("Dépassement : {0}")]
    Depassement(String),
}
