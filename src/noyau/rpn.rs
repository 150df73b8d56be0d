// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfixe)
//
// Règles:
// - '(' est empilée sans condition
// - ')' dépile jusqu’à la '(' correspondante (qui est jetée)
// - un opérateur dépile tant que le sommet n’est pas '(' et que
//   la précédence/associativité l’exige ('^' est associatif à droite)
// - un nombre sort directement
//
// Pas de moins unaire : "-1" échouera plus tard (opérandes insuffisants).

use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::{GenreJeton, Jeton};
use super::operateur::Operateur;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [1, +, 2, *, 3]
///   rpn:    [1, 2, 3, *, +]
pub fn to_rpn(jetons: &[Jeton]) -> Resultat<Vec<Jeton>> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for tok in jetons.iter().cloned() {
        match tok.genre {
            GenreJeton::Nombre => out.push(tok),

            GenreJeton::ParG => ops.push(tok),

            GenreJeton::ParD => loop {
                match ops.pop() {
                    Some(top) if top.genre == GenreJeton::ParG => break,
                    Some(top) => out.push(top),
                    None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
                }
            },

            GenreJeton::Operateur => {
                let op = Operateur::depuis_symbole(&tok.texte)?;

                while let Some(top) = ops.last() {
                    if top.genre == GenreJeton::ParG {
                        break;
                    }

                    let p_top = Operateur::depuis_symbole(&top.texte)?.precedence();
                    let p_tok = op.precedence();

                    let doit_pop = if op.est_associatif_droite() {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(sorti) = ops.pop() {
                        out.push(sorti);
                    }
                }

                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op.genre == GenreJeton::ParG {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}
