// src/app.rs
//
// Calculatrice UNO — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App
//
// Important:
// - Tout le clavier passe par vue.rs::clavier (un seul endroit, pas de
//   double déclenchement) ; l’automate lui-même vit dans etat.rs.

pub mod etat;
pub mod vue;


// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier d’abord : la frame courante voit déjà la touche traitée.
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
