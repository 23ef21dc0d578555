// src/app/boucle.rs
//
// Boucle interactive (terminal)
// -----------------------------
// Objectifs :
// - Une ligne = une expression, évaluée par le noyau
// - Résultat affiché puis ajouté à l’historique
// - Toute erreur de calcul ou d’historique est affichée, la boucle continue
// - "yes" exact (insensible à la casse, blancs compris) pour continuer ; tout le reste arrête
// - Fin de l’entrée (EOF) : comme une réponse "no"
//
// Générique sur l’entrée, la sortie et l’historique : stdin/stdout/fichier en
// production, tampons mémoire dans les tests.

use std::io::{BufRead, Write};

use log::{info, warn};

use super::ErreurSession;
use crate::historique::{Entree, HistoriqueStore};
use crate::noyau::{evaluate, format_resultat};

const BIENVENUE: &str = "Welcome to Terminal Calculator with Parser!";
const INVITE_EXPRESSION: &str = "Enter an expression: ";
const QUESTION_CONTINUER: &str = "Would you like to perform another calculation? (yes/no): ";
const QUESTION_HISTORIQUE: &str = "Would you like to see the calculation history? (yes/no): ";
const AU_REVOIR: &str = "Thank you for using Terminal Calculator with Parser. Goodbye!";

pub struct Session<R, W, H> {
    entree: R,
    sortie: W,
    historique: H,
}

impl<R: BufRead, W: Write, H: HistoriqueStore> Session<R, W, H> {
    pub fn new(entree: R, sortie: W, historique: H) -> Self {
        Self {
            entree,
            sortie,
            historique,
        }
    }

    /// Rend l’entrée, la sortie et l’historique (inspection après une session).
    pub fn into_parts(self) -> (R, W, H) {
        (self.entree, self.sortie, self.historique)
    }

    /// Session complète : calculs en boucle, puis historique sur demande.
    pub fn run(&mut self) -> Result<(), ErreurSession> {
        self.ligne(BIENVENUE)?;

        loop {
            let Some(expression) = self.lire(INVITE_EXPRESSION)? else {
                break;
            };

            if let Err(e) = self.calculer(&expression) {
                self.signaler(e)?;
            }

            if !self.demander_oui(QUESTION_CONTINUER)? {
                break;
            }
        }

        if self.demander_oui(QUESTION_HISTORIQUE)? {
            if let Err(e) = self.afficher_historique() {
                self.signaler(e)?;
            }
        }

        self.ligne(AU_REVOIR)
    }

    /* ------------------------ Actions ------------------------ */

    fn calculer(&mut self, expression: &str) -> Result<(), ErreurSession> {
        let valeur = evaluate(expression)?;
        let rendu = format_resultat(valeur);
        self.ligne(&format!("Result: {rendu}"))?;

        self.historique.append(Entree::new(expression, rendu))?;
        self.ligne("Result saved to history.")?;
        info!("calcul enregistré: {expression:?}");
        Ok(())
    }

    fn afficher_historique(&mut self) -> Result<(), ErreurSession> {
        let entrees = self.historique.read_all()?;
        if entrees.is_empty() {
            return self.ligne("No history found.");
        }

        self.ligne("Calculation History:")?;
        for e in &entrees {
            self.ligne(&format!(
                "Expression: {}, Result: {}",
                e.expression, e.resultat
            ))?;
        }
        Ok(())
    }

    /// Affiche une erreur récupérable ; une erreur terminal remonte telle quelle.
    fn signaler(&mut self, e: ErreurSession) -> Result<(), ErreurSession> {
        if !e.est_recuperable() {
            return Err(e);
        }
        warn!("{e}");
        self.ligne(&format!("Error: {e}"))
    }

    /* ------------------------ Terminal ------------------------ */

    fn ligne(&mut self, texte: &str) -> Result<(), ErreurSession> {
        writeln!(self.sortie, "{texte}").map_err(ErreurSession::Terminal)
    }

    /// Affiche l’invite puis lit une ligne (sans fin de ligne). None si EOF.
    fn lire(&mut self, invite: &str) -> Result<Option<String>, ErreurSession> {
        write!(self.sortie, "{invite}").map_err(ErreurSession::Terminal)?;
        self.sortie.flush().map_err(ErreurSession::Terminal)?;

        let mut buf = String::new();
        let n = self
            .entree
            .read_line(&mut buf)
            .map_err(ErreurSession::Terminal)?;
        if n == 0 {
            // l’invite reste seule sur sa ligne sinon
            self.ligne("")?;
            return Ok(None);
        }

        let sans_fin = buf.trim_end_matches(['\n', '\r']);
        Ok(Some(sans_fin.to_string()))
    }

    fn demander_oui(&mut self, question: &str) -> Result<bool, ErreurSession> {
        Ok(self
            .lire(question)?
            .is_some_and(|r| r.eq_ignore_ascii_case("yes")))
    }
}
