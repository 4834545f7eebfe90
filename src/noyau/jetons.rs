// src/noyau/jetons.rs

use super::erreurs::ErreurCalc;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire. Jamais produit par tokenize : injecté par to_rpn
    // quand un '-' arrive sans valeur à sa gauche.
    Neg,

    LPar,
    RPar,
}

/// Vérifie la liste blanche de caractères AVANT toute tokenisation.
/// Autorisés : chiffres, + - * / ( ) . et blancs.
pub fn verifier_caracteres(s: &str) -> Result<(), ErreurCalc> {
    for c in s.chars() {
        let ok = c.is_ascii_digit()
            || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
            || c.is_whitespace();
        if !ok {
            return Err(ErreurCalc::CaractereInterdit(c));
        }
    }
    Ok(())
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Un nombre avec plusieurs points (ex: 1.2.3) est une erreur de syntaxe.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre décimal : suite de chiffres et de points, validée par parse()
        // (".5" passe, "1.2.3" et "." échouent).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            let v: f64 = lit
                .parse()
                .map_err(|_| ErreurCalc::syntaxe(format!("nombre invalide: {lit:?}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        // verifier_caracteres() est passé avant nous : ne devrait pas arriver.
        return Err(ErreurCalc::CaractereInterdit(c));
    }

    Ok(out)
}
