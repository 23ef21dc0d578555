// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurCalc;

/// Opérateurs reconnus (ensemble fermé).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
    Sqrt,
}

impl Operateur {
    /// Symbole exact attendu dans l’entrée.
    pub fn from_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Star),
            "/" => Some(Self::Slash),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Sqrt => "sqrt",
        }
    }

    /// additif = 1, multiplicatif et sqrt = 2.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Star | Self::Slash | Self::Sqrt => 2,
        }
    }

    pub fn est_unaire(self) -> bool {
        matches!(self, Self::Sqrt)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // texte brut conservé pour la démarche
    Num { texte: String, valeur: f64 },
    Op(Operateur),
    LPar,
    RPar,
}

/// Classe un jeton brut (déjà découpé).
///
/// Ordre des tests : nombre d’abord, puis opérateur, puis parenthèses.
/// Un nombre doit être fini : "inf", "NaN" ou "1e400" ne passent pas.
fn classer(brut: &str) -> Result<Tok, ErreurCalc> {
    if let Ok(valeur) = brut.parse::<f64>() {
        if valeur.is_finite() {
            return Ok(Tok::Num {
                texte: brut.to_string(),
                valeur,
            });
        }
    }

    if let Some(op) = Operateur::from_symbole(brut) {
        return Ok(Tok::Op(op));
    }

    match brut {
        "(" => Ok(Tok::LPar),
        ")" => Ok(Tok::RPar),
        _ => Err(ErreurCalc::InvalidToken(brut.to_string())),
    }
}

/// Tokenize une chaîne en jetons.
/// - découpage sur les blancs uniquement ("3+4" est UN jeton, donc invalide)
/// - le premier jeton invalide arrête tout (pas de résultat partiel)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    s.split_whitespace().map(classer).collect()
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num { texte, .. } => texte.as_str(),
            Tok::Op(op) => op.symbole(),
            Tok::LPar => "(",
            Tok::RPar => ")",
        };
        out.push(s);
    }
    out.join(" ")
}
