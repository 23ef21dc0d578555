// src/app.rs
//
// Calculatrice terminal: module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + boucle.rs)
// - Ré-exporter Config et Session (pour main.rs)
// - Regrouper les erreurs vues par la boucle
//
// Important:
// - Calcul et historique : erreurs affichées ("Error: ..."), la boucle continue.
// - Terminal (stdin/stdout) : seule erreur qui arrête la session.

pub mod boucle;
pub mod etat;

pub use boucle::Session;
pub use etat::Config;

use thiserror::Error;

use crate::historique::HistoriqueErreur;
use crate::noyau::ErreurCalc;

#[derive(Debug, Error)]
pub enum ErreurSession {
    #[error(transparent)]
    Calcul(#[from] ErreurCalc),

    #[error(transparent)]
    Historique(#[from] HistoriqueErreur),

    #[error("terminal I/O failure: {0}")]
    Terminal(#[source] std::io::Error),
}

impl ErreurSession {
    /// Vrai si la boucle peut continuer après cette erreur.
    pub fn est_recuperable(&self) -> bool {
        !matches!(self, Self::Terminal(_))
    }
}
