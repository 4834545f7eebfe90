//! Noyau calculatrice
//!
//! Organisation interne :
//! - saisie.rs  : machine à états de l'expression (ajout, retour, parenthèse)
//! - erreurs.rs : ErreurCalc (caractère interdit, syntaxe, /0, non fini)
//! - jetons.rs  : liste blanche + tokenisation
//! - rpn.rs     : shunting-yard + évaluation de la RPN
//! - format.rs  : arrondi 12 décimales + forme décimale canonique
//! - eval.rs    : pipeline complet

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::eval_expression;
pub use format::{arrondir_lecture, format_resultat};
pub use saisie::Saisie;
