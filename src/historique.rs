//! src/historique.rs
//!
//! Historique des calculs (expression + résultat).
//!
//! Rôle : stocker les paires dans l’ordre d’ajout et les relire telles quelles.
//! Le noyau ne touche jamais l’historique ; c’est la boucle (app) qui décide
//! d’ajouter un résultat.
//!
//! Deux implémentations du même contrat :
//! - FichierHistorique : tableau JSON sur disque, réécrit en entier à chaque ajout
//! - MemoireHistorique : Vec en mémoire (tests, substitut)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Une ligne d’historique. Clés JSON : "Expression" / "Result".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entree {
    #[serde(rename = "Expression")]
    pub expression: String,
    #[serde(rename = "Result")]
    pub resultat: String,
}

impl Entree {
    pub fn new(expression: impl Into<String>, resultat: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            resultat: resultat.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum HistoriqueErreur {
    #[error("history I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("history file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Contrat minimal : ajouter, tout relire (ordre d’ajout).
pub trait HistoriqueStore {
    fn append(&mut self, entree: Entree) -> Result<(), HistoriqueErreur>;
    fn read_all(&self) -> Result<Vec<Entree>, HistoriqueErreur>;
}

/* ------------------------ Mémoire ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct MemoireHistorique {
    entrees: Vec<Entree>,
}

impl HistoriqueStore for MemoireHistorique {
    fn append(&mut self, entree: Entree) -> Result<(), HistoriqueErreur> {
        self.entrees.push(entree);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Entree>, HistoriqueErreur> {
        Ok(self.entrees.clone())
    }
}

/* ------------------------ Fichier JSON ------------------------ */

/// Tableau JSON indenté (4 espaces).
///
/// Pas atomique : un arrêt brutal pendant l’écriture peut corrompre le fichier.
/// Un fichier corrompu n’est jamais écrasé : l’ajout échoue avec `Json`.
#[derive(Clone, Debug)]
pub struct FichierHistorique {
    chemin: PathBuf,
}

impl FichierHistorique {
    pub fn new(chemin: impl Into<PathBuf>) -> Self {
        Self {
            chemin: chemin.into(),
        }
    }

    pub fn chemin(&self) -> &Path {
        &self.chemin
    }

    fn ecrire(&self, entrees: &[Entree]) -> Result<(), HistoriqueErreur> {
        let mut buf = Vec::new();
        let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
        entrees.serialize(&mut ser)?;
        fs::write(&self.chemin, buf)?;
        Ok(())
    }
}

impl HistoriqueStore for FichierHistorique {
    fn append(&mut self, entree: Entree) -> Result<(), HistoriqueErreur> {
        let mut entrees = self.read_all()?;
        entrees.push(entree);
        self.ecrire(&entrees)?;
        info!(
            "historique: {} entrée(s) dans {}",
            entrees.len(),
            self.chemin.display()
        );
        Ok(())
    }

    /// Fichier absent, vide ou `null` => historique vide.
    fn read_all(&self) -> Result<Vec<Entree>, HistoriqueErreur> {
        let contenu = match fs::read_to_string(&self.chemin) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("historique absent: {}", self.chemin.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if contenu.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entrees: Option<Vec<Entree>> = serde_json::from_str(&contenu)?;
        Ok(entrees.unwrap_or_default())
    }
}
