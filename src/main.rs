// src/main.rs
//
// Calculatrice terminal: point d’entrée
// --------------------------------------
// But:
// - Journal (env_logger, filtré par RUST_LOG, sur stderr)
// - Config lue dans l’environnement (pas de drapeaux)
// - Session interactive sur stdin/stdout, historique JSON sur disque
//
// Ici: point d’entrée seulement. Le calcul vit dans noyau/, la boucle dans app/.

use std::io;
use std::process::ExitCode;

use log::info;

use calculatrice_terminal::app::{Config, Session};
use calculatrice_terminal::historique::FichierHistorique;

fn main() -> ExitCode {
    env_logger::init();

    let config = Config::depuis_env();
    let historique = FichierHistorique::new(config.historique);
    info!("historique: {}", historique.chemin().display());

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), historique);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
