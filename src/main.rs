// src/main.rs
//
// Calculatrice UNO — point d’entrée natif
// ---------------------------------------
// But:
// - eframe::run_native + NativeOptions (fenêtre fixe façon calculatrice)
// - Point d’entrée seulement : l’app vit dans src/app.rs

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice UNO";

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([340.0, 420.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
