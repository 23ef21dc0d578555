// src/noyau/valide.rs
//
// Dernière étape du pipeline : un résultat doit être fini.

use num_traits::Float;

use super::erreur::ErreurCalc;

/// ±inf => InfiniteResult ; NaN => NotANumber ; sinon la valeur inchangée.
pub fn valider<F: Float>(x: F) -> Result<F, ErreurCalc> {
    if x.is_infinite() {
        return Err(ErreurCalc::InfiniteResult);
    }
    if x.is_nan() {
        return Err(ErreurCalc::NotANumber);
    }
    Ok(x)
}
