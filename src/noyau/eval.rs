//! Noyau: évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs -> validation
//!
//! Chaque étape retourne `Result<_, ErreurCalc>` ; la première erreur arrête tout.

use log::debug;

use super::erreur::ErreurCalc;
use super::jetons::{format_tokens, tokenize, Operateur, Tok};
use super::rpn::to_rpn;
use super::valide::valider;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression infixe et retourne un flottant fini.
pub fn evaluate(expr_str: &str) -> Result<f64, ErreurCalc> {
    evaluate_detaille(expr_str).map(|(valeur, _d)| valeur)
}

/// Comme `evaluate`, avec la démarche (jetons + RPN) en plus.
pub fn evaluate_detaille(expr_str: &str) -> Result<(f64, Demarche), ErreurCalc> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    debug!("jetons: [{}] rpn: [{}]", d.jetons, d.rpn);

    // 3) Pile de valeurs
    let brut = eval_rpn(&rpn)?;

    // 4) Validation (inf / NaN)
    let valeur = valider(brut)?;
    debug!("résultat: {valeur}");

    Ok((valeur, d))
}

/// Évalue une suite RPN avec une pile de valeurs.
///
/// Binaire : on dépile `droite` puis `gauche` (la plus récente est à droite).
/// Arithmétique IEEE-754 brute : 5/0 donne inf ici, rejeté seulement par `valider`.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num { valeur, .. } => pile.push(*valeur),

            Tok::Op(op) if op.est_unaire() => {
                let x = pile.pop().ok_or(ErreurCalc::StackUnderflow)?;
                pile.push(x.sqrt());
            }

            Tok::Op(op) => {
                let droite = pile.pop().ok_or(ErreurCalc::StackUnderflow)?;
                let gauche = pile.pop().ok_or(ErreurCalc::StackUnderflow)?;
                pile.push(appliquer(*op, gauche, droite)?);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalc::MalformedExpression),
        }
    }

    match pile.len() {
        0 => Err(ErreurCalc::EmptyResult),
        1 => Ok(pile[0]),
        _ => Err(ErreurCalc::MalformedExpression),
    }
}

/// Opérateur binaire seulement ; un unaire ici est une RPN mal formée.
fn appliquer(op: Operateur, gauche: f64, droite: f64) -> Result<f64, ErreurCalc> {
    match op {
        Operateur::Plus => Ok(gauche + droite),
        Operateur::Minus => Ok(gauche - droite),
        Operateur::Star => Ok(gauche * droite),
        Operateur::Slash => Ok(gauche / droite),
        Operateur::Sqrt => Err(ErreurCalc::MalformedExpression),
    }
}
