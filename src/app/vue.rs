// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran en haut (expression courante ou sentinelle d'erreur)
// - Pavé de boutons façon calculatrice : C () DEL / 7 8 9 * ...
// - Tactile : gros boutons
//
// Le clavier est géré dans app.rs (événements globaux), pas ici.

use eframe::egui;

use super::etat::AppCalc;

/// Ce qu'une pression de bouton déclenche sur l'état.
#[derive(Clone, Copy, Debug)]
enum Touche {
    Caractere(char),
    Parenthese,
    RetourArriere,
    Efface,
    Egal,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let texte = self.affichage().to_string();
        let en_erreur = self.erreur_visible();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if en_erreur {
                        ui.colored_label(
                            ui.visuals().error_fg_color,
                            egui::RichText::new(texte).monospace().size(22.0),
                        );
                    } else {
                        ui.label(egui::RichText::new(texte).monospace().size(22.0));
                    }
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Efface tout", Touche::Efface, maintenant);
                self.bouton(ui, "()", "Ouvre ou ferme une parenthèse", Touche::Parenthese, maintenant);
                self.bouton(ui, "DEL", "Efface le dernier caractère", Touche::RetourArriere, maintenant);
                self.bouton(ui, "/", "Division", Touche::Caractere('/'), maintenant);
                ui.end_row();

                self.bouton_chiffre(ui, '7', maintenant);
                self.bouton_chiffre(ui, '8', maintenant);
                self.bouton_chiffre(ui, '9', maintenant);
                self.bouton(ui, "*", "Multiplication", Touche::Caractere('*'), maintenant);
                ui.end_row();

                self.bouton_chiffre(ui, '4', maintenant);
                self.bouton_chiffre(ui, '5', maintenant);
                self.bouton_chiffre(ui, '6', maintenant);
                self.bouton(ui, "-", "Soustraction", Touche::Caractere('-'), maintenant);
                ui.end_row();

                self.bouton_chiffre(ui, '1', maintenant);
                self.bouton_chiffre(ui, '2', maintenant);
                self.bouton_chiffre(ui, '3', maintenant);
                self.bouton(ui, "+", "Addition", Touche::Caractere('+'), maintenant);
                ui.end_row();

                self.bouton_chiffre(ui, '0', maintenant);
                self.bouton(ui, ".", "Point décimal", Touche::Caractere('.'), maintenant);
                self.bouton(ui, "=", "Évalue l'expression", Touche::Egal, maintenant);
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char, maintenant: f64) {
        let label = c.to_string();
        self.bouton(ui, &label, "", Touche::Caractere(c), maintenant);
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche, maintenant: f64) {
        let mut resp = ui.add_sized([56.0, 40.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }

        if resp.clicked() {
            self.appliquer(touche, maintenant);
        }
    }

    /// Route une pression de bouton vers l'état.
    fn appliquer(&mut self, touche: Touche, maintenant: f64) {
        match touche {
            Touche::Caractere(c) => self.touche(c),
            Touche::Parenthese => self.bascule_parenthese(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::Efface => self.efface(),
            Touche::Egal => self.egal(maintenant),
        }
    }
}
