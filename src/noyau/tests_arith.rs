//! Campagne arithmétique : contrats des onze opérations + bornes.
//!
//! But : vérifier chaque contrat du noyau sans passer par la vue.
//! - propriétés algébriques (commutativité, antisymétrie)
//! - domaines (division par zéro, factorielle, log, racine)
//! - primitives de garde (validation, dépassement)

use num_bigint::BigUint;

use super::arith::{
    addition, division, exponentielle, factorielle, log_naturel, multiplication, puissance,
    racine_carree, soustraction, valider_entrees, verifier_depassement, FACTORIELLE_MAX,
};
use super::erreur::ErreurCalc;

fn ok(r: Result<f64, ErreurCalc>) -> f64 {
    r.unwrap_or_else(|e| panic!("résultat attendu, erreur: {e}"))
}

fn attend_invalide<T: std::fmt::Debug>(r: Result<T, ErreurCalc>) {
    match r {
        Err(ErreurCalc::EntreeInvalide(_)) => {}
        autre => panic!("EntreeInvalide attendue, reçu {autre:?}"),
    }
}

fn attend_depassement<T: std::fmt::Debug>(r: Result<T, ErreurCalc>) {
    match r {
        Err(ErreurCalc::Depassement(_)) => {}
        autre => panic!("Depassement attendu, reçu {autre:?}"),
    }
}

fn proche(a: f64, b: f64) {
    if (a - b).abs() > 1e-9 {
        panic!("attendu {b}, obtenu {a}");
    }
}

/* ------------------------ Propriétés algébriques ------------------------ */

#[test]
fn commutativite_addition() {
    for (a, b) in [(1.5, 2.75), (-3.0, 8.0), (0.0, 0.25), (-0.5, -0.5)] {
        assert_eq!(ok(addition(a, b)), ok(addition(b, a)), "a={a} b={b}");
    }
}

#[test]
fn antisymetrie_soustraction() {
    for (a, b) in [(1.5, 2.75), (-3.0, 8.0), (10.0, 4.0)] {
        assert_eq!(
            ok(soustraction(a, b)),
            -ok(soustraction(b, a)),
            "a={a} b={b}"
        );
    }
}

/* ------------------------ Opérateurs binaires ------------------------ */

#[test]
fn binaires_de_base() {
    assert_eq!(ok(addition(5.0, 3.0)), 8.0);
    assert_eq!(ok(soustraction(5.0, 3.0)), 2.0);
    assert_eq!(ok(multiplication(5.0, 3.0)), 15.0);
    assert_eq!(ok(division(1.0, 4.0)), 0.25);
}

#[test]
fn division_par_zero_pour_tout_numerateur() {
    for a in [0.0, 9.0, -3.5, 1e99] {
        match division(a, 0.0) {
            Err(ErreurCalc::DivisionParZero) => {}
            autre => panic!("DivisionParZero attendue pour a={a}, reçu {autre:?}"),
        }
    }

    // -0.0 est un zéro au sens flottant
    assert!(matches!(
        division(1.0, -0.0),
        Err(ErreurCalc::DivisionParZero)
    ));
}

#[test]
fn puissance_flottante() {
    proche(ok(puissance(2.0, 10.0)), 1024.0);
    proche(ok(puissance(9.0, 0.5)), 3.0); // exposant fractionnaire
    proche(ok(puissance(2.0, -1.0)), 0.5); // exposant négatif
    proche(ok(puissance(4.0, 1.5)), 8.0);
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn factorielle_cas_de_base() {
    assert_eq!(factorielle(0.0).unwrap(), BigUint::from(1u32));
    assert_eq!(factorielle(1.0).unwrap(), BigUint::from(1u32));
    assert_eq!(factorielle(5.0).unwrap(), BigUint::from(120u32));
    assert_eq!(factorielle(7.0).unwrap(), BigUint::from(5040u32));
}

#[test]
fn factorielle_domaines() {
    attend_invalide(factorielle(-1.0));
    attend_invalide(factorielle(-100.0));
    attend_invalide(factorielle(2.5));
    attend_invalide(factorielle(0.1));
}

#[test]
fn factorielle_exacte_au_dela_de_u64() {
    // 25! ne tient pas dans un u64 : le résultat doit rester exact.
    let attendu = BigUint::parse_bytes(b"15511210043330985984000000", 10).unwrap();
    assert_eq!(factorielle(25.0).unwrap(), attendu);
}

#[test]
fn factorielle_garde_fou() {
    attend_depassement(factorielle((FACTORIELLE_MAX + 1) as f64));
    // la borne elle-même reste admise
    assert!(factorielle(FACTORIELLE_MAX as f64).is_ok());
}

/* ------------------------ Log / racine / exponentielle ------------------------ */

#[test]
fn log_naturel_domaine() {
    assert_eq!(ok(log_naturel(1.0)), 0.0);
    proche(ok(log_naturel(std::f64::consts::E)), 1.0);
    attend_invalide(log_naturel(0.0));
    attend_invalide(log_naturel(-3.0));
}

#[test]
fn racine_carree_domaine() {
    assert_eq!(ok(racine_carree(4.0)), 2.0);
    assert_eq!(ok(racine_carree(0.0)), 0.0);
    proche(ok(racine_carree(2.0)), std::f64::consts::SQRT_2);
    attend_invalide(racine_carree(-1.0));
}

#[test]
fn exponentielle_sans_restriction() {
    assert_eq!(ok(exponentielle(0.0)), 1.0);
    proche(ok(exponentielle(1.0)), std::f64::consts::E);
    // très négatif : tend vers zéro, pas d’erreur
    assert!(ok(exponentielle(-1000.0)) >= 0.0);
}

/* ------------------------ Primitives de garde ------------------------ */

#[test]
fn validation_rejette_nan() {
    attend_invalide(valider_entrees(&[1.0, f64::NAN]));
    attend_invalide(addition(f64::NAN, 1.0));
    attend_invalide(racine_carree(f64::NAN));
}

#[test]
fn validation_accepte_fini_et_infini() {
    assert!(valider_entrees(&[]).is_ok());
    assert!(valider_entrees(&[0.0, -12.5, 1e99]).is_ok());
    // l’infini passe la validation : c’est le contrôle de dépassement qui
    // borne la grandeur
    assert!(valider_entrees(&[f64::INFINITY]).is_ok());
}

#[test]
fn depassement_au_seuil() {
    attend_depassement(verifier_depassement(1e101));
    attend_depassement(verifier_depassement(-1e101));
    attend_depassement(verifier_depassement(f64::INFINITY));

    assert!(verifier_depassement(1e50).is_ok());
    assert!(verifier_depassement(-1e50).is_ok());
    // le seuil est strict : 1e100 exactement passe encore
    assert!(verifier_depassement(1e100).is_ok());
}
