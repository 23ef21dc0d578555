// src/noyau/erreur.rs
//
// Erreurs du noyau : ensemble fermé, une variante par étape qui peut échouer.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurCalc {
    /// Jeton ni nombre, ni opérateur, ni parenthèse (jetons.rs).
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// ')' sans '(' correspondante, ou '(' jamais fermée (rpn.rs).
    #[error("Mismatched parenthesis")]
    MismatchedParenthesis,

    /// Opérateur appliqué sans assez d'opérandes (eval.rs).
    #[error("Stack underflow: not enough operands")]
    StackUnderflow,

    /// Aucune valeur sur la pile à la fin (entrée vide, par exemple).
    #[error("Empty expression: no result")]
    EmptyResult,

    /// Valeurs en trop sur la pile, ou parenthèse en RPN.
    #[error("Malformed expression")]
    MalformedExpression,

    #[error("Result is infinity")]
    InfiniteResult,

    #[error("Result is not a number (NaN)")]
    NotANumber,
}
