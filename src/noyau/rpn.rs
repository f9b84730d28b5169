// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Règles:
// - Les fonctions sont des opérateurs “collés” à leur argument : elles
//   restent sur la pile et sortent après la parenthèse fermante.
// - Moins unaire : si '-' arrive quand on n’attend PAS une valeur, on
//   injecte 0 : "-x" => "0 x -". (Pas de plus unaire : "3++4" échoue.)
// - C’est l’évaluation RPN qui fait autorité sur la validité de
//   l’expression ; l’heuristique d’auto-évaluation n’en est jamais une.
//
// La division par zéro n’est PAS une erreur ici : elle produit ±inf/NaN
// et se propage comme une valeur (sémantique flottante standard).

use super::erreur::ErreurEval;
use super::lexeur::Lexeme;

fn precedence(l: &Lexeme) -> i32 {
    match l {
        Lexeme::Plus | Lexeme::Moins => 1,
        Lexeme::Etoile | Lexeme::Barre => 2,
        _ => 0,
    }
}

/// Convertit une suite de lexèmes en RPN (notation polonaise inversée).
///
/// Exemple:
///   lexèmes: [Fonction(Sin), ParG, Pi, Barre, Nombre(2), ParD]
///   rpn:     [Pi, Nombre(2), Barre, Fonction(Sin)]
pub fn vers_rpn(lexemes: &[Lexeme]) -> Result<Vec<Lexeme>, ErreurEval> {
    let mut out: Vec<Lexeme> = Vec::new();
    let mut ops: Vec<Lexeme> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_etait_valeur = false;

    for lex in lexemes.iter().cloned() {
        match lex {
            Lexeme::Nombre(_) | Lexeme::Pi | Lexeme::Euler => {
                out.push(lex);
                prev_etait_valeur = true;
            }

            Lexeme::Fonction(_) => {
                // fonction : sur la pile, elle sortira après son argument
                ops.push(lex);
                prev_etait_valeur = false;
            }

            Lexeme::ParG => {
                ops.push(lex);
                prev_etait_valeur = false;
            }

            Lexeme::ParD => {
                // dépile jusqu’à '(' ; sans '(', la parenthèse est orpheline
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Lexeme::ParG) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurEval::ParentheseInattendue);
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Lexeme::Fonction(_))) {
                    out.push(ops.pop().unwrap());
                }

                prev_etait_valeur = true;
            }

            Lexeme::Plus | Lexeme::Etoile | Lexeme::Barre => {
                depiler_selon_precedence(&lex, &mut ops, &mut out);
                ops.push(lex);
                prev_etait_valeur = false;
            }

            Lexeme::Moins => {
                // moins unaire : si pas de valeur avant, injecte 0.
                // Dans ce cas on NE dépile PAS : le zéro injecté reste collé
                // à son opérande ("2*-3" => 2*(0-3), pas (2*0)-3).
                if !prev_etait_valeur {
                    out.push(Lexeme::Nombre(0.0));
                } else {
                    depiler_selon_precedence(&Lexeme::Moins, &mut ops, &mut out);
                }
                ops.push(Lexeme::Moins);
                prev_etait_valeur = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Lexeme::ParG) {
            return Err(ErreurEval::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile tant que:
/// - on n’est pas bloqué par '('
/// - on ne traverse pas une fonction (elle reste collée à son argument)
/// - la précédence de l’opérateur du haut l’exige (tous associatifs à gauche)
fn depiler_selon_precedence(lex: &Lexeme, ops: &mut Vec<Lexeme>, out: &mut Vec<Lexeme>) {
    while let Some(top) = ops.last() {
        if matches!(top, Lexeme::ParG | Lexeme::Fonction(_)) {
            break;
        }
        if precedence(top) >= precedence(lex) {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}

/// Évalue une RPN sur une pile de f64.
/// Opérande manquant, reste de pile, parenthèse égarée => expression invalide.
pub fn evaluer_rpn(rpn: &[Lexeme]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for lex in rpn {
        match lex {
            Lexeme::Nombre(v) => pile.push(*v),
            Lexeme::Pi => pile.push(std::f64::consts::PI),
            Lexeme::Euler => pile.push(std::f64::consts::E),

            Lexeme::Plus | Lexeme::Moins | Lexeme::Etoile | Lexeme::Barre => {
                let b = pile.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = pile.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let v = match lex {
                    Lexeme::Plus => a + b,
                    Lexeme::Moins => a - b,
                    Lexeme::Etoile => a * b,
                    _ => a / b,
                };
                pile.push(v);
            }

            Lexeme::Fonction(f) => {
                let x = pile.pop().ok_or(ErreurEval::FonctionSansArgument)?;
                pile.push(f.appliquer(x));
            }

            Lexeme::ParG | Lexeme::ParD => return Err(ErreurEval::ParentheseInattendue),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::ExpressionInvalide);
    }
    Ok(pile.pop().unwrap())
}
