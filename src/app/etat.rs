//! src/app/etat.rs
//!
//! État de session + automate d’interaction (sans vue).
//!
//! Rôle : tenir le petit état d’une session de calcul (opérateur en attente,
//! premier opérande, dernier résultat, drapeaux de saisie) et traduire chaque
//! touche du pavé en appel au noyau + mise à jour de l’affichage.
//!
//! Contrats :
//! - Aucun egui ici : l’automate se pilote entièrement par `appliquer`,
//!   donc se teste entièrement sans fenêtre.
//! - Ensemble FERMÉ d’actions (`Touche`) : dispatch exhaustif, pas de
//!   libellés texte.
//! - Toute erreur du noyau devient une notification (`erreur`) ; jamais de
//!   panic, jamais d’arrêt du processus.
//! - Au plus un opérateur en attente ; `premier_operande` n’est posé que
//!   tant que cet opérateur n’est pas résolu.

use crate::noyau::format::{format_valeur, lire_affichage};
use crate::noyau::{
    addition, division, exponentielle, factorielle, log_naturel, multiplication, puissance,
    racine_carree, soustraction, verifier_depassement, ErreurCalc,
};

/// Opérateurs binaires : différés jusqu’au second opérande.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,
}

/// Fonctions unaires : appliquées immédiatement à la valeur affichée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FnUnaire {
    Factorielle,
    Carre,
    LogNaturel,
    RacineCarree,
    Exponentielle,
}

/// L’ensemble fermé des actions utilisateur (clic ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char), // '0'..='9'
    Point,
    Operateur(OpBinaire),
    Fonction(FnUnaire),
    Signe,
    Egal,
    Effacer,
    Supprimer,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- visible ---
    pub affichage: String,
    pub erreur: Option<String>, // notification en attente d’acquittement

    // --- état de session ---
    pub op_en_attente: Option<OpBinaire>,
    pub premier_operande: Option<f64>,
    pub dernier_resultat: Option<f64>,
    pub saisie_fraiche: bool, // la prochaine touche chiffre démarre un nombre
    pub resultat_fige: bool,  // l’affichage est un résultat terminé
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            erreur: None,
            op_en_attente: None,
            premier_operande: None,
            dernier_resultat: None,
            saisie_fraiche: true, // au lancement, la première touche démarre un nombre
            resultat_fige: false,
        }
    }
}

impl AppCalc {
    /// Point d’entrée unique de l’automate : une touche, une transition.
    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisir_symbole(c),
            Touche::Point => self.saisir_symbole('.'),
            Touche::Operateur(op) => self.choisir_operateur(op),
            Touche::Fonction(f) => self.appliquer_fonction(f),
            Touche::Signe => self.changer_signe(),
            Touche::Egal => {
                self.resoudre();
            }
            Touche::Effacer => self.effacer(),
            Touche::Supprimer => self.supprimer(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    fn saisir_symbole(&mut self, c: char) {
        // Un résultat terminé s’efface dès la première nouvelle saisie.
        if self.resultat_fige {
            self.affichage.clear();
            self.resultat_fige = false;
        }

        // Pas de double point décimal.
        if c == '.' && self.affichage.contains('.') {
            return;
        }

        if self.saisie_fraiche {
            self.affichage.clear();
            self.saisie_fraiche = false;
        }

        self.affichage.push(c);
    }

    /* ------------------------ Opérateurs ------------------------ */

    fn choisir_operateur(&mut self, op: OpBinaire) {
        if self.op_en_attente.is_some() {
            // Opérateurs enchaînés : on résout d’abord, le résultat devient
            // le premier opérande du suivant.
            if !self.resoudre() {
                // erreur déjà déposée : l’ancien opérateur reste armé,
                // le nouveau n’est pas pris.
                return;
            }
            self.premier_operande = self.dernier_resultat;
        } else {
            let v = match lire_affichage(&self.affichage) {
                Ok(v) => v,
                Err(e) => {
                    self.deposer_erreur(e);
                    return;
                }
            };
            self.premier_operande = Some(v);
            self.dernier_resultat = Some(v);
        }

        self.op_en_attente = Some(op);
        self.saisie_fraiche = true;
        self.resultat_fige = false;
    }

    /// Résout l’opérateur en attente contre la valeur affichée (second
    /// opérande). Sans opérateur, « = » est neutre : la valeur affichée si
    /// elle est non nulle, sinon le premier opérande.
    ///
    /// Retourne false si une erreur a été déposée.
    ///
    /// Politique d’échec (« nouvel essai ») : l’opérateur reste armé,
    /// l’affichage revient au premier opérande et le second se retape.
    fn resoudre(&mut self) -> bool {
        let premier = self.premier_operande.unwrap_or(0.0);
        let second = match lire_affichage(&self.affichage) {
            Ok(v) => v,
            Err(e) => {
                self.deposer_erreur(e);
                return false;
            }
        };

        let Some(op) = self.op_en_attente else {
            let resultat = if second != 0.0 { second } else { premier };
            self.dernier_resultat = Some(resultat);
            self.affichage = format_valeur(resultat);
            return true;
        };

        let calcule = match op {
            OpBinaire::Addition => addition(premier, second),
            OpBinaire::Soustraction => soustraction(premier, second),
            OpBinaire::Multiplication => multiplication(premier, second),
            OpBinaire::Division => division(premier, second),
            OpBinaire::Puissance => puissance(premier, second),
        };

        match calcule.and_then(|v| verifier_depassement(v).map(|()| v)) {
            Ok(v) => {
                self.dernier_resultat = Some(v);
                self.affichage = format_valeur(v);
                self.op_en_attente = None;
                self.premier_operande = None;
                self.saisie_fraiche = true;
                self.resultat_fige = true;
                true
            }
            Err(e) => {
                self.deposer_erreur(e);
                self.affichage = format_valeur(premier);
                self.saisie_fraiche = true;
                false
            }
        }
    }

    /* ------------------------ Fonctions unaires ------------------------ */

    fn appliquer_fonction(&mut self, fonction: FnUnaire) {
        // Rien à transformer sur un affichage vide.
        if self.affichage.is_empty() {
            return;
        }

        let v = match lire_affichage(&self.affichage) {
            Ok(v) => v,
            Err(e) => {
                self.deposer_erreur(e);
                return;
            }
        };

        match Self::calcul_unaire(fonction, v) {
            Ok(texte) => {
                self.affichage = texte;
                self.resultat_fige = true;
            }
            // échec : l’affichage reste tel quel
            Err(e) => self.deposer_erreur(e),
        }
    }

    /// Applique la fonction et rend le texte à afficher.
    ///
    /// La factorielle est exacte (entier de taille arbitraire) : pas de
    /// contrôle de dépassement sur elle, c’est sa raison d’être. Les
    /// fonctions flottantes, elles, passent par `verifier_depassement`
    /// (le carré et l’exponentielle grimpent vite).
    fn calcul_unaire(fonction: FnUnaire, v: f64) -> Result<String, ErreurCalc> {
        let r = match fonction {
            FnUnaire::Factorielle => return Ok(factorielle(v)?.to_string()),
            FnUnaire::Carre => puissance(v, 2.0)?,
            FnUnaire::LogNaturel => log_naturel(v)?,
            FnUnaire::RacineCarree => racine_carree(v)?,
            FnUnaire::Exponentielle => exponentielle(v)?,
        };
        verifier_depassement(r)?;
        Ok(format_valeur(r))
    }

    /* ------------------------ Signe / effacement ------------------------ */

    fn changer_signe(&mut self) {
        if self.affichage.is_empty() {
            return;
        }
        match lire_affichage(&self.affichage) {
            Ok(v) => self.affichage = format_valeur(-v),
            Err(e) => self.deposer_erreur(e),
        }
    }

    /// C : remise à zéro totale de la session.
    fn effacer(&mut self) {
        self.affichage.clear();
        self.op_en_attente = None;
        self.premier_operande = None;
        self.dernier_resultat = None;
        self.saisie_fraiche = true;
        self.resultat_fige = false;
    }

    /// Del : retire le dernier symbole (affichage vide : sans effet).
    fn supprimer(&mut self) {
        self.affichage.pop();
    }

    /* ------------------------ Notification ------------------------ */

    /// Dépose la notification ; la vue l’affiche en modale bloquante.
    fn deposer_erreur(&mut self, e: ErreurCalc) {
        self.erreur = Some(e.to_string());
    }
}
