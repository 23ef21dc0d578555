//! Calculatrice terminal
//!
//! - noyau      : tokenisation -> shunting-yard -> pile -> validation (pur)
//! - historique : paires expression/résultat (JSON sur disque ou mémoire)
//! - app        : configuration + boucle interactive

pub mod app;
pub mod historique;
pub mod noyau;
