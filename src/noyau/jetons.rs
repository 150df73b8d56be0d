// src/noyau/jetons.rs

use super::erreur::{ErreurCalcul, Resultat};
use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreJeton {
    Nombre,
    Operateur,
    ParG, // (
    ParD, // )
}

/// Unité lexicale : genre + texte source exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jeton {
    pub genre: GenreJeton,
    pub texte: String,
}

impl Jeton {
    pub fn nombre(texte: impl Into<String>) -> Self {
        Self {
            genre: GenreJeton::Nombre,
            texte: texte.into(),
        }
    }

    pub fn operateur(op: Operateur) -> Self {
        Self {
            genre: GenreJeton::Operateur,
            texte: op.symbole().to_string(),
        }
    }

    pub fn par_g() -> Self {
        Self {
            genre: GenreJeton::ParG,
            texte: "(".into(),
        }
    }

    pub fn par_d() -> Self {
        Self {
            genre: GenreJeton::ParD,
            texte: ")".into(),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux : chiffres avec au plus un '.' (ex: 12, 3.5, .5, 7.)
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Un second '.' dans un nombre termine le jeton courant et commence le suivant :
/// "1.2.3" => ["1.2", ".3"].
///
/// L’entrée vide n’est pas rejetée ici (c’est l’appelant qui le fait).
pub fn tokenize(s: &str) -> Resultat<Vec<Jeton>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : course maximale de chiffres, un seul '.'
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut a_point = c == '.';
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !a_point)) {
                if chars[i] == '.' {
                    a_point = true;
                }
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Jeton::nombre(texte));
            continue;
        }

        match c {
            '(' => out.push(Jeton::par_g()),
            ')' => out.push(Jeton::par_d()),
            _ => match Operateur::depuis_char(c) {
                Some(op) => out.push(Jeton::operateur(op)),
                None => return Err(ErreurCalcul::CaractereInvalide(c)),
            },
        }
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.texte.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
