//! Noyau de calcul (flottant, pur)
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées (ensemble fermé)
//! - jetons.rs   : tokenisation + modèle d’opérateurs
//! - rpn.rs      : shunting-yard (infixe -> postfix)
//! - eval.rs     : pile de valeurs + pipeline complet
//! - valide.rs   : rejet inf / NaN
//! - format.rs   : rendu du résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod valide;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::evaluate;
pub use format::format_resultat;
