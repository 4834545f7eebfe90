// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> évaluation
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Précédence standard : * / au-dessus de + -, parenthèses par-dessus tout
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, on pousse Tok::Neg,
//      prioritaire sur * / : "5*-3" => 5 * (-3) = -15
// - Formes mal construites refusées AVANT évaluation (jamais de résultat
//   silencieusement faux) :
//    - groupe vide "()"
//    - multiplication implicite "2(3)"
//    - opérateur traînant "2+"
//    - parenthèses non appariées

use super::erreurs::ErreurCalc;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Dépile vers `out` tant que l'opérateur au sommet doit sortir
/// (associativité gauche : précédence du sommet >= précédence entrante).
fn depiler_prioritaires(out: &mut Vec<Tok>, ops: &mut Vec<Tok>, p_tok: i32) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }
        if precedence(top) >= p_tok {
            out.push(ops.pop().expect("sommet vérifié"));
        } else {
            break;
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire et les adjacences invalides.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurCalc::syntaxe("deux valeurs côte à côte"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalc::syntaxe(
                        "'(' juste après une valeur (multiplication implicite refusée)",
                    ));
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // groupe vide "()" ou fermeture après un opérateur "(2+)"
                if !prev_was_value {
                    return Err(ErreurCalc::syntaxe("')' sans valeur à fermer"));
                }

                // dépile jusqu’à '('
                let mut ouvrante_trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_trouvee {
                    return Err(ErreurCalc::syntaxe("')' sans '(' correspondante"));
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurCalc::syntaxe("opérateur sans opérande à gauche"));
                }
                depiler_prioritaires(&mut out, &mut ops, precedence(&tok));
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                if prev_was_value {
                    // moins binaire classique
                    depiler_prioritaires(&mut out, &mut ops, precedence(&Tok::Minus));
                    ops.push(Tok::Minus);
                } else {
                    // moins unaire : opérateur dédié, collé à sa valeur
                    // (pas de dépilage : rien n'est plus prioritaire que lui)
                    ops.push(Tok::Neg);
                }
                prev_was_value = false;
            }

            Tok::Neg => {
                // jamais produit par tokenize
                return Err(ErreurCalc::syntaxe("jeton interne inattendu"));
            }
        }
    }

    // opérateur traînant ("2+") ou entrée vide
    if !prev_was_value {
        return Err(ErreurCalc::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de f64.
///
/// La division par un opérande nul est détectée ici (pas d'Infinity qui
/// se promène dans le calcul).
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Neg => {
                let x = st.pop().ok_or_else(|| ErreurCalc::syntaxe("expression invalide"))?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| ErreurCalc::syntaxe("expression invalide"))?;
                let a = st.pop().ok_or_else(|| ErreurCalc::syntaxe("expression invalide"))?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return Err(ErreurCalc::DivisionParZero);
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                st.push(v);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::syntaxe("parenthèse inattendue en RPN"));
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurCalc::syntaxe("expression invalide"));
    }
    Ok(st.pop().expect("pile vérifiée"))
}
