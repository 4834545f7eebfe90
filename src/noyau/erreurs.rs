// src/noyau/erreurs.rs

use thiserror::Error;

/// Erreurs du noyau (validation + évaluation).
///
/// Quatre familles, pas plus :
/// - caractère hors liste blanche (avant même de tokeniser)
/// - expression mal formée (tokenisation ou structure)
/// - division par zéro (détectée à l'évaluation)
/// - résultat non fini (débordement, NaN)
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    #[error("caractère interdit: '{0}'")]
    CaractereInterdit(char),

    #[error("expression mal formée: {0}")]
    Syntaxe(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    ResultatNonFini,
}

impl ErreurCalc {
    /// Raccourci pour les erreurs de structure.
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }
}
