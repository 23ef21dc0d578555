//! src/app/etat.rs
//!
//! Configuration d’exécution (sans vue, sans noyau).
//!
//! Pas de drapeaux en ligne de commande : tout vient de l’environnement,
//! lu une seule fois au démarrage.
//! - CALC_HISTORIQUE : chemin du fichier d’historique JSON
//! - RUST_LOG        : filtre du journal (env_logger, lu par main.rs)

use std::path::PathBuf;

/// Variable d’environnement du chemin d’historique.
pub const ENV_HISTORIQUE: &str = "CALC_HISTORIQUE";

/// Fichier d’historique par défaut (dossier courant).
const HISTORIQUE_DEFAUT: &str = "history.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub historique: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            historique: PathBuf::from(HISTORIQUE_DEFAUT),
        }
    }
}

impl Config {
    /// Lit l’environnement du processus.
    pub fn depuis_env() -> Self {
        Self::depuis_valeur(std::env::var_os(ENV_HISTORIQUE))
    }

    /// Valeur absente ou vide => défaut.
    fn depuis_valeur(valeur: Option<std::ffi::OsString>) -> Self {
        match valeur {
            Some(v) if !v.is_empty() => Self {
                historique: PathBuf::from(v),
            },
            _ => Self::default(),
        }
    }
}
