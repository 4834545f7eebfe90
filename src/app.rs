// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Gérer le clavier global (chiffres, opérateurs, Enter, Backspace, Échap)
//
// Important:
// - L'horloge vient d'egui (i.time, f64 secondes) : identique natif + wasm.
// - Tant qu'une sentinelle d'erreur est affichée, on programme un repaint
//   à son échéance pour que l'effacement parte sans frappe utilisateur.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // Fait expirer la sentinelle d'erreur le cas échéant.
        self.tic(maintenant);

        self.clavier(ctx, maintenant);

        // Repaint programmé à l'échéance de la sentinelle.
        if let Some(reste) = self.delai_restant(maintenant) {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(reste));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant); // méthode publique (dans vue.rs)
        });
    }
}

impl AppCalc {
    /// Clavier global :
    /// - chiffres, '.', + - * / ( ) : saisie directe
    /// - '=' (texte) ou Enter       : évalue
    /// - Backspace                  : efface le dernier caractère
    /// - Échap                      : efface tout
    fn clavier(&mut self, ctx: &egui::Context, maintenant: f64) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        match c {
                            '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')' => self.touche(c),
                            '=' => self.egal(maintenant),
                            // tout le reste est ignoré (liste blanche)
                            _ => {}
                        }
                    }
                }

                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.egal(maintenant),

                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.retour_arriere(),

                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => self.efface(),

                _ => {}
            }
        }
    }
}
