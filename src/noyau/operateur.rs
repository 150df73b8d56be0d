// src/noyau/operateur.rs
//
// Les cinq opérateurs binaires et leur table de précédence (statique).

use super::erreur::{ErreurCalcul, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    /// Reconnaît un caractère opérateur (`+ - * / ^`).
    pub fn depuis_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    /// Reconnaît un symbole d’un seul caractère, sinon `OperateurInconnu`.
    pub fn depuis_symbole(s: &str) -> Resultat<Operateur> {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => {
                Operateur::depuis_char(c).ok_or_else(|| ErreurCalcul::OperateurInconnu(s.into()))
            }
            _ => Err(ErreurCalcul::OperateurInconnu(s.into())),
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    /// `+ -` → 1 ; `* /` → 2 ; `^` → 3
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }

    pub fn est_associatif_droite(self) -> bool {
        matches!(self, Operateur::Puissance)
    }
}
