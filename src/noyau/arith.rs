//! src/noyau/arith.rs
//!
//! Les onze opérations du noyau.
//!
//! Contrats :
//! - Fonctions pures, sans état, sans effet de bord : chacune est testable
//!   seule et appelable de n’importe où.
//! - Chaque opération valide d’abord ses arguments (`valider_entrees`), puis
//!   son domaine propre, puis calcule.
//! - Le noyau lève des `ErreurCalc` et ne rattrape jamais ; aucune sortie
//!   console, aucun panic.
//! - Le contrôle de dépassement (`verifier_depassement`) n’est PAS enchaîné
//!   automatiquement : l’appelant décide où il s’applique.

use num_bigint::BigUint;
use num_traits::One;

use super::erreur::ErreurCalc;

/// Grandeur maximale autorisée pour un résultat (au-delà : dépassement).
pub const SEUIL_DEPASSEMENT: f64 = 1e100;

/// Garde-fou : borne d’entrée de la factorielle exacte.
/// Le produit reste exact (entiers de taille arbitraire), mais au-delà de
/// cette borne le calcul gèlerait le fil d’interface.
pub const FACTORIELLE_MAX: u64 = 10_000;

/* ------------------------ Opérateurs binaires ------------------------ */

/// Somme de deux nombres.
pub fn addition(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    valider_entrees(&[a, b])?;
    Ok(a + b)
}

/// Différence de deux nombres.
pub fn soustraction(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    valider_entrees(&[a, b])?;
    Ok(a - b)
}

/// Produit de deux nombres.
pub fn multiplication(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    valider_entrees(&[a, b])?;
    Ok(a * b)
}

/// Quotient de deux nombres. Dénominateur nul => `DivisionParZero`.
pub fn division(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    valider_entrees(&[a, b])?;
    if b == 0.0 {
        return Err(ErreurCalc::DivisionParZero);
    }
    Ok(a / b)
}

/// `a` élevé à la puissance `b` (sémantique flottante de `f64::powf`,
/// exposants fractionnaires et négatifs compris).
pub fn puissance(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    valider_entrees(&[a, b])?;
    Ok(a.powf(b))
}

/* ------------------------ Fonctions unaires ------------------------ */

/// Factorielle EXACTE d’un entier non négatif (entier de taille arbitraire).
///
/// Domaine : n entier, 0 ≤ n ≤ `FACTORIELLE_MAX`.
pub fn factorielle(n: f64) -> Result<BigUint, ErreurCalc> {
    valider_entrees(&[n])?;
    if n < 0.0 {
        return Err(ErreurCalc::EntreeInvalide(
            "la factorielle d’un nombre négatif n’existe pas".into(),
        ));
    }
    if n.fract() != 0.0 {
        return Err(ErreurCalc::EntreeInvalide(
            "la factorielle exige un entier non négatif".into(),
        ));
    }
    if n > FACTORIELLE_MAX as f64 {
        return Err(ErreurCalc::Depassement(format!(
            "factorielle refusée au-delà de {FACTORIELLE_MAX}"
        )));
    }

    let n = n as u64;
    let mut produit = BigUint::one();
    for k in 2..=n {
        produit *= k;
    }
    Ok(produit)
}

/// Logarithme naturel. Domaine : a > 0.
pub fn log_naturel(a: f64) -> Result<f64, ErreurCalc> {
    valider_entrees(&[a])?;
    if a <= 0.0 {
        return Err(ErreurCalc::EntreeInvalide(
            "le logarithme naturel exige un nombre strictement positif".into(),
        ));
    }
    Ok(a.ln())
}

/// Racine carrée. Domaine : a ≥ 0.
pub fn racine_carree(a: f64) -> Result<f64, ErreurCalc> {
    valider_entrees(&[a])?;
    if a < 0.0 {
        return Err(ErreurCalc::EntreeInvalide(
            "la racine carrée exige un nombre positif ou nul".into(),
        ));
    }
    Ok(a.sqrt())
}

/// Exponentielle e^a, sans restriction de domaine.
pub fn exponentielle(a: f64) -> Result<f64, ErreurCalc> {
    valider_entrees(&[a])?;
    Ok(a.exp())
}

/* ------------------------ Primitives de garde ------------------------ */

/// Rejette toute valeur non numérique (NaN, la forme f64 du « pas un
/// nombre »). Les infinis passent : c’est `verifier_depassement` qui borne
/// la grandeur, là où l’appelant l’invoque.
pub fn valider_entrees(valeurs: &[f64]) -> Result<(), ErreurCalc> {
    for v in valeurs {
        if v.is_nan() {
            return Err(ErreurCalc::EntreeInvalide(
                "entrez une valeur numérique".into(),
            ));
        }
    }
    Ok(())
}

/// Signale un résultat dont la grandeur dépasse `SEUIL_DEPASSEMENT`.
pub fn verifier_depassement(valeur: f64) -> Result<(), ErreurCalc> {
    if valeur.abs() > SEUIL_DEPASSEMENT {
        return Err(ErreurCalc::Depassement(
            "le résultat dépasse la limite autorisée".into(),
        ));
    }
    Ok(())
}
