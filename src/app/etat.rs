//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la saisie (noyau) + l'état d'erreur affiché, et offrir les
//! opérations que la vue et le clavier appellent (touche, retour, bascule,
//! efface, égal).
//!
//! Contrats :
//! - Le temps vient de l'horloge egui (f64, secondes) : pas d'Instant,
//!   pour rester identique en natif et en wasm32.
//! - Après un échec d'évaluation, la sentinelle "Error" s'affiche pendant
//!   1.2 s puis l'écran revient à "0". Toute opération arrivée avant
//!   l'échéance ANNULE ce reset : une frappe pendant l'affichage d'erreur
//!   repart sur une saisie vide propre, jamais écrasée après coup.

use crate::noyau::{eval_expression, format_resultat, Saisie};

/// Durée d'affichage de la sentinelle d'erreur (secondes).
const DELAI_ERREUR: f64 = 1.2;

/// Texte affiché à la place de l'expression après un échec.
const SENTINELLE_ERREUR: &str = "Error";

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub saisie: Saisie,

    // --- état d'erreur ---
    erreur_visible: bool,
    // instant (horloge egui) où la sentinelle expire
    echeance_erreur: Option<f64>,
}

impl AppCalc {
    /* ------------------------ Opérations “boutons” ------------------------ */

    /// Un caractère autorisé (chiffre, opérateur, point, parenthèse).
    pub fn touche(&mut self, c: char) {
        self.annuler_erreur();
        self.saisie.ajouter(c);
    }

    /// C / Échap : tout effacer.
    pub fn efface(&mut self) {
        self.annuler_erreur();
        self.saisie.effacer();
    }

    /// DEL : retire le dernier caractère.
    pub fn retour_arriere(&mut self) {
        self.annuler_erreur();
        self.saisie.retour_arriere();
    }

    /// Bouton "()" : parenthèse contextuelle.
    pub fn bascule_parenthese(&mut self) {
        self.annuler_erreur();
        self.saisie.bascule_parenthese();
    }

    /// "=" : évalue la saisie.
    /// - succès : le résultat formaté remplace l'expression (enchaînable)
    /// - échec : saisie vidée, sentinelle affichée jusqu'à `maintenant + 1.2 s`
    pub fn egal(&mut self, maintenant: f64) {
        self.annuler_erreur();

        match eval_expression(self.saisie.expression()) {
            Ok(v) => {
                self.saisie.remplacer(format_resultat(v));
            }
            Err(e) => {
                log::debug!("évaluation refusée ({:?}): {e}", self.saisie.expression());
                self.saisie.effacer();
                self.erreur_visible = true;
                self.echeance_erreur = Some(maintenant + DELAI_ERREUR);
            }
        }
    }

    /* ------------------------ Horloge ------------------------ */

    /// À appeler chaque frame : fait expirer la sentinelle d'erreur.
    pub fn tic(&mut self, maintenant: f64) {
        if let Some(echeance) = self.echeance_erreur {
            if maintenant >= echeance {
                self.annuler_erreur();
            }
        }
    }

    /// Temps restant avant expiration de la sentinelle, s'il y en a une.
    /// (Sert à programmer le repaint : le reset doit partir sans frappe.)
    pub fn delai_restant(&self, maintenant: f64) -> Option<f64> {
        self.echeance_erreur.map(|e| (e - maintenant).max(0.0))
    }

    fn annuler_erreur(&mut self) {
        self.erreur_visible = false;
        self.echeance_erreur = None;
    }

    /* ------------------------ Affichage ------------------------ */

    pub fn erreur_visible(&self) -> bool {
        self.erreur_visible
    }

    /// Texte de l'écran : sentinelle, ou "0" sur saisie vide, ou l'expression.
    pub fn affichage(&self) -> &str {
        if self.erreur_visible {
            SENTINELLE_ERREUR
        } else if self.saisie.est_vide() {
            "0"
        } else {
            self.saisie.expression()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tape(app: &mut AppCalc, touches: &str) {
        for c in touches.chars() {
            app.touche(c);
        }
    }

    #[test]
    fn affichage_vide_vaut_zero() {
        let app = AppCalc::default();
        assert_eq!(app.affichage(), "0");
    }

    #[test]
    fn egal_depose_le_resultat() {
        let mut app = AppCalc::default();
        tape(&mut app, "2+2");
        app.egal(0.0);
        assert_eq!(app.affichage(), "4");

        // enchaînement sur le résultat
        tape(&mut app, "+2");
        app.egal(0.0);
        assert_eq!(app.affichage(), "6");
    }

    #[test]
    fn egal_sur_vide_affiche_zero() {
        let mut app = AppCalc::default();
        app.egal(0.0);
        assert_eq!(app.affichage(), "0");
        assert!(!app.erreur_visible());
    }

    #[test]
    fn echec_affiche_la_sentinelle_puis_expire() {
        let mut app = AppCalc::default();
        tape(&mut app, "1/0");
        app.egal(10.0);

        assert!(app.erreur_visible());
        assert_eq!(app.affichage(), "Error");

        // avant l'échéance : toujours visible
        app.tic(10.0 + 1.0);
        assert!(app.erreur_visible());

        // à l'échéance : on revient à "0"
        app.tic(10.0 + 1.2);
        assert!(!app.erreur_visible());
        assert_eq!(app.affichage(), "0");
    }

    #[test]
    fn une_frappe_annule_le_reset_en_attente() {
        let mut app = AppCalc::default();
        tape(&mut app, "2+");
        app.egal(5.0);
        assert!(app.erreur_visible());

        // frappe pendant l'affichage d'erreur : saisie propre, reset annulé
        app.touche('7');
        assert!(!app.erreur_visible());
        assert_eq!(app.affichage(), "7");

        // l'ancienne échéance ne doit PAS écraser la nouvelle saisie
        app.tic(5.0 + 2.0);
        assert_eq!(app.affichage(), "7");
    }

    #[test]
    fn syntaxe_invalide_echoue_proprement() {
        let mut app = AppCalc::default();
        tape(&mut app, "2");
        app.bascule_parenthese();
        app.bascule_parenthese(); // "2()"
        app.egal(0.0);
        assert_eq!(app.affichage(), "Error");
    }
}
