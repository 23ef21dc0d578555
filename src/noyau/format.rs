// src/noyau/format.rs
//
// Affichage d’un résultat : rendu flottant “par défaut”, mais une valeur
// entière garde sa partie décimale (11.0, pas 11). C’est aussi le texte
// stocké dans l’historique.

/// 11.0 -> "11.0" ; 0.5 -> "0.5" ; 1e21 -> "1e21" ; -0.0 -> "-0.0".
pub fn format_resultat(x: f64) -> String {
    // Debug de f64 : plus court aller-retour exact, ".0" sur les entiers
    format!("{x:?}")
}
