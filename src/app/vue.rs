// src/app/vue.rs
//
// Vue (UI egui) — pavé UNO
// ------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour la souris et le clavier
// - Pavé 5 colonnes repris du modèle UNO :
//     7 8 9 !  /
//     4 5 6 ^  *
//     1 2 3 x² -
//     ± 0 . ln +
//     C ⌫ √ eˣ =
// - Erreur : modale bloquante avec bouton OK (le pavé est gelé tant
//   qu’elle n’est pas acquittée)
//
// Note :
// - Aucune logique de calcul ici : chaque bouton ne fait qu’émettre une
//   Touche vers l’automate (etat.rs).

use eframe::egui;

use super::etat::{AppCalc, FnUnaire, OpBinaire, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice UNO");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        // Tant qu’une erreur attend son acquittement, le pavé est inerte.
        let pave_actif = self.erreur.is_none();
        ui.add_enabled_ui(pave_actif, |ui| {
            self.ui_pave(ui);
        });

        let ctx = ui.ctx().clone();
        self.ui_erreur(&ctx);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // Champ lecture seule : l’automate est le seul à écrire dedans.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(1.6 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(self.affichage.as_str());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use FnUnaire::*;
        use OpBinaire::*;

        egui::Grid::new("pave_uno")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton_tip(ui, "!", "Factorielle (exacte)", Touche::Fonction(Factorielle));
                self.bouton(ui, "/", Touche::Operateur(Division));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton_tip(ui, "xʸ", "Puissance", Touche::Operateur(Puissance));
                self.bouton(ui, "*", Touche::Operateur(Multiplication));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton_tip(ui, "x²", "Élève au carré", Touche::Fonction(Carre));
                self.bouton(ui, "-", Touche::Operateur(Soustraction));
                ui.end_row();

                self.bouton_tip(ui, "+/-", "Change le signe", Touche::Signe);
                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton_tip(ui, "ln", "Logarithme naturel", Touche::Fonction(LogNaturel));
                self.bouton(ui, "+", Touche::Operateur(Addition));
                ui.end_row();

                self.bouton_tip(ui, "C", "Remise à zéro totale", Touche::Effacer);
                self.bouton_tip(ui, "Del", "Efface le dernier symbole", Touche::Supprimer);
                self.bouton_tip(ui, "√", "Racine carrée", Touche::Fonction(RacineCarree));
                self.bouton_tip(ui, "eˣ", "Exponentielle", Touche::Fonction(Exponentielle));
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn ui_erreur(&mut self, ctx: &egui::Context) {
        let Some(message) = self.erreur.clone() else {
            return;
        };

        egui::Window::new("Erreur")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.erreur = None;
                    }
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([52.0, 36.0], egui::Button::new(label));
        if resp.clicked() {
            self.appliquer(touche);
        }
    }

    fn bouton_tip(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let resp = ui
            .add_sized([52.0, 36.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.appliquer(touche);
        }
    }

    /* ------------------------ Clavier ------------------------ */

    /// Raccourcis globaux (pas de champ éditable, donc pas de question de
    /// focus) : chiffres et symboles tapés, Enter = égal, Backspace = Del,
    /// Escape = C. La modale d’erreur bloque tout et s’acquitte par
    /// Enter ou Escape.
    pub fn clavier(&mut self, ctx: &egui::Context) {
        if self.erreur.is_some() {
            let acquitte = ctx.input(|i| {
                i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)
            });
            if acquitte {
                self.erreur = None;
            }
            return;
        }

        let (evenements, entree, retour, echap) = ctx.input(|i| {
            (
                i.events.clone(),
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if echap {
            self.appliquer(Touche::Effacer);
        }
        if retour {
            self.appliquer(Touche::Supprimer);
        }
        if entree {
            self.appliquer(Touche::Egal);
        }

        for ev in evenements {
            if let egui::Event::Text(texte) = ev {
                for c in texte.chars() {
                    if let Some(t) = touche_du_caractere(c) {
                        self.appliquer(t);
                    }
                }
            }
        }
    }
}

/// Correspondance caractère tapé -> touche du pavé.
/// La virgule est acceptée comme point décimal (clavier français).
fn touche_du_caractere(c: char) -> Option<Touche> {
    Some(match c {
        '0'..='9' => Touche::Chiffre(c),
        '.' | ',' => Touche::Point,
        '+' => Touche::Operateur(OpBinaire::Addition),
        '-' => Touche::Operateur(OpBinaire::Soustraction),
        '*' => Touche::Operateur(OpBinaire::Multiplication),
        '/' => Touche::Operateur(OpBinaire::Division),
        '^' => Touche::Operateur(OpBinaire::Puissance),
        '!' => Touche::Fonction(FnUnaire::Factorielle),
        '=' => Touche::Egal,
        _ => return None,
    })
}
