// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix)
//
// Règles:
// - Tout opérateur (sqrt compris): dépile tant que précédence(sommet) >= précédence(op)
//   (>= : tout est associatif à gauche, l’ordre gauche->droite est conservé)
// - '(' bloque toujours le dépilement, elle n’a pas de précédence
// - sqrt (rang 2) qui arrive après * ou / les fait sortir AVANT son argument:
//   "2 * sqrt 9" donne "2 * 9 sqrt", qui échoue ensuite en StackUnderflow
// - Parenthèses mal appariées => erreur explicite

use super::erreur::ErreurCalc;
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [3, +, 4, *, 2]
///   rpn:    [3, 4, 2, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num { .. } => out.push(tok),

            Tok::Op(op) => {
                while let Some(Tok::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalc::MismatchedParenthesis),
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(ErreurCalc::MismatchedParenthesis);
        }
        out.push(top);
    }

    Ok(out)
}
