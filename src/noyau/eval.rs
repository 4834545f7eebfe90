//! Noyau — évaluation (pipeline réel)
//!
//! liste blanche -> tokenize -> RPN -> pile f64 -> contrôle fini -> arrondi
//!
//! Remarque : l'entrée vide vaut le littéral "0" (appuyer sur "=" sans rien
//! saisir affiche 0, comme une vraie calculatrice).

use super::erreurs::ErreurCalc;
use super::format::arrondir_lecture;
use super::jetons::{tokenize, verifier_caracteres};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression arithmétique et retourne un f64 fini,
/// arrondi à 12 décimales.
///
/// Échecs possibles (jamais de panique, jamais de résultat faux silencieux) :
/// - `CaractereInterdit` : caractère hors liste blanche
/// - `Syntaxe`           : expression mal formée ("2+", "()", "1.2.3", ...)
/// - `DivisionParZero`
/// - `ResultatNonFini`   : débordement / NaN
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurCalc> {
    let s = expr_str.trim();
    let s = if s.is_empty() { "0" } else { s };

    // 1) Liste blanche (avant tout le reste)
    verifier_caracteres(s)?;

    // 2) Jetons
    let jetons = tokenize(s)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    // 4) Évaluation (division par zéro détectée ici)
    let brut = eval_rpn(&rpn)?;

    // 5) Contrôle fini (débordement, NaN résiduel)
    if !brut.is_finite() {
        return Err(ErreurCalc::ResultatNonFini);
    }

    // 6) Arrondi de lecture
    Ok(arrondir_lecture(brut))
}
