//! src/noyau/saisie.rs
//!
//! Saisie — machine à états de l'expression en cours.
//!
//! Rôle : tenir le texte de l'expression + le compteur de parenthèses
//! ouvertes, et appliquer les règles de validité caractère par caractère :
//! - remplacement d'opérateur (pas de "**", mais "5*-" passe par remplacement)
//! - un seul point décimal par nombre (le contrôle remonte jusqu'au dernier
//!   opérateur seulement : chaque terme a droit à son point)
//! - "." isolé devient "0."
//! - parenthèse contextuelle (ouvre ou ferme selon l'état)
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau eval, pas de parsing).
//! - L'expression ne contient que des caractères de la liste blanche
//!   (chiffres, + - * / ( ) ., blancs) — c'est l'appelant qui filtre le
//!   clavier, ici on applique les règles de forme.
//! - `parentheses_ouvertes` suit l'expression en continu : toute parenthèse
//!   ajoutée ou retirée, par n'importe quel chemin, met le compteur à jour.

/// État de saisie de la calculatrice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Saisie {
    expression: String,
    parentheses_ouvertes: u32,
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn parentheses_ouvertes(&self) -> u32 {
        self.parentheses_ouvertes
    }

    pub fn est_vide(&self) -> bool {
        self.expression.is_empty()
    }

    /* ------------------------ Ajout d'un caractère ------------------------ */

    /// Tente d'ajouter un caractère, en appliquant les règles de forme.
    /// Les refus sont silencieux (no-op), comme sur une calculatrice réelle.
    pub fn ajouter(&mut self, c: char) {
        if est_operateur(c) {
            self.ajouter_operateur(c);
            return;
        }

        if c == '.' {
            self.ajouter_point();
            return;
        }

        if c == '(' {
            self.expression.push('(');
            self.parentheses_ouvertes += 1;
            return;
        }
        if c == ')' {
            self.expression.push(')');
            self.parentheses_ouvertes = self.parentheses_ouvertes.saturating_sub(1);
            return;
        }

        // chiffre ou blanc : ajout direct
        self.expression.push(c);
    }

    fn ajouter_operateur(&mut self, c: char) {
        // on ne démarre pas sur +, *, / ; le - ouvre un nombre négatif
        if self.expression.is_empty() {
            if c == '-' {
                self.expression.push('-');
            }
            return;
        }

        // deux opérateurs de suite : le nouveau remplace l'ancien
        if self.expression.ends_with(est_operateur) {
            self.expression.pop();
        }
        self.expression.push(c);
    }

    fn ajouter_point(&mut self) {
        // le nombre en cours = tout ce qui suit le dernier opérateur
        let nombre_courant = match self.expression.rfind(est_operateur) {
            Some(i) => &self.expression[i + 1..],
            None => self.expression.as_str(),
        };

        // déjà un point dans ce nombre : refus
        if nombre_courant.contains('.') {
            return;
        }

        // "." seul devient "0." (après un opérateur ou en tout début)
        if nombre_courant.is_empty() {
            self.expression.push('0');
        }
        self.expression.push('.');
    }

    /* ------------------------ Autres opérations ------------------------ */

    /// C : tout effacer.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.parentheses_ouvertes = 0;
    }

    /// DEL : retire le dernier caractère (no-op sur vide).
    pub fn retour_arriere(&mut self) {
        let Some(dernier) = self.expression.pop() else {
            return;
        };
        if dernier == '(' {
            self.parentheses_ouvertes = self.parentheses_ouvertes.saturating_sub(1);
        }
        if dernier == ')' {
            self.parentheses_ouvertes += 1;
        }
    }

    /// Bouton "()" : insère '(' ou ')' selon le contexte.
    /// - début d'expression ou après un opérateur : on ouvre
    /// - sinon, s'il reste un groupe ouvert : on ferme
    /// - sinon : on ouvre un nouveau groupe
    pub fn bascule_parenthese(&mut self) {
        let dernier = self.expression.chars().last();
        let doit_ouvrir = match dernier {
            None => true,
            Some(c) => est_operateur(c),
        };

        if doit_ouvrir || self.parentheses_ouvertes == 0 {
            self.expression.push('(');
            self.parentheses_ouvertes += 1;
        } else {
            self.expression.push(')');
            self.parentheses_ouvertes -= 1;
        }
    }

    /// Remplace toute l'expression (dépôt du résultat après "=").
    /// Le compteur de parenthèses est recalculé depuis le texte.
    pub fn remplacer(&mut self, texte: impl Into<String>) {
        self.expression = texte.into();

        let mut ouvertes: u32 = 0;
        for c in self.expression.chars() {
            match c {
                '(' => ouvertes += 1,
                ')' => ouvertes = ouvertes.saturating_sub(1),
                _ => {}
            }
        }
        self.parentheses_ouvertes = ouvertes;
    }
}
