// src/noyau/arbre.rs
//
// Arbre d’expression binaire.
// - Operande : feuille, texte littéral du nombre
// - Operation : symbole + exactement deux enfants (jamais d’unaire)
//
// Construit en une passe depuis la RPN, jamais muté ensuite.

use std::{fmt, mem};

use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::{GenreJeton, Jeton};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Noeud {
    Operande(String),
    Operation {
        symbole: String,
        gauche: Box<Noeud>,
        droite: Box<Noeud>,
    },
}

impl Noeud {
    pub fn operation(symbole: impl Into<String>, gauche: Noeud, droite: Noeud) -> Noeud {
        Noeud::Operation {
            symbole: symbole.into(),
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    /// Texte affiché dans le cercle du nœud.
    pub fn etiquette(&self) -> &str {
        match self {
            Noeud::Operande(t) => t,
            Noeud::Operation { symbole, .. } => symbole,
        }
    }

    pub fn est_operateur(&self) -> bool {
        matches!(self, Noeud::Operation { .. })
    }

    pub fn enfants(&self) -> Option<(&Noeud, &Noeud)> {
        match self {
            Noeud::Operande(_) => None,
            Noeud::Operation { gauche, droite, .. } => Some((gauche, droite)),
        }
    }

    /// Nombre de niveaux (feuille seule = 1). Sert à dimensionner le dessin.
    pub fn profondeur(&self) -> usize {
        let mut max = 0;
        let mut pile: Vec<(&Noeud, usize)> = vec![(self, 1)];
        while let Some((n, p)) = pile.pop() {
            max = max.max(p);
            if let Some((g, d)) = n.enfants() {
                pile.push((g, p + 1));
                pile.push((d, p + 1));
            }
        }
        max
    }
}

/// Forme infixe entièrement parenthésée : "(1 + (2 * 3))".
impl fmt::Display for Noeud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Morceau<'a> {
            Noeud(&'a Noeud),
            Texte(&'a str),
        }

        let mut pile = vec![Morceau::Noeud(self)];
        while let Some(m) = pile.pop() {
            match m {
                Morceau::Texte(t) => f.write_str(t)?,
                Morceau::Noeud(Noeud::Operande(t)) => f.write_str(t)?,
                Morceau::Noeud(Noeud::Operation {
                    symbole,
                    gauche,
                    droite,
                }) => {
                    pile.push(Morceau::Texte(")"));
                    pile.push(Morceau::Noeud(droite));
                    pile.push(Morceau::Texte(" "));
                    pile.push(Morceau::Texte(symbole));
                    pile.push(Morceau::Texte(" "));
                    pile.push(Morceau::Noeud(gauche));
                    pile.push(Morceau::Texte("("));
                }
            }
        }
        Ok(())
    }
}

/// Libération sans récursion : les enfants sont détachés sur une pile
/// (le drop dérivé de `Box` descendrait d’un cadre par niveau).
impl Drop for Noeud {
    fn drop(&mut self) {
        fn detacher(n: &mut Noeud, pile: &mut Vec<Noeud>) {
            if let Noeud::Operation { gauche, droite, .. } = n {
                pile.push(mem::replace(&mut **gauche, Noeud::Operande(String::new())));
                pile.push(mem::replace(&mut **droite, Noeud::Operande(String::new())));
            }
        }

        let mut pile = Vec::new();
        detacher(self, &mut pile);
        while let Some(mut n) = pile.pop() {
            detacher(&mut n, &mut pile);
        }
    }
}

/// Construit l’arbre à partir d’une RPN.
///
/// Un opérateur dépile d’abord l’opérande droit, puis le gauche.
pub fn from_rpn(rpn: &[Jeton]) -> Resultat<Noeud> {
    let mut st: Vec<Noeud> = Vec::new();

    for tok in rpn {
        match tok.genre {
            GenreJeton::Nombre => st.push(Noeud::Operande(tok.texte.clone())),

            GenreJeton::Operateur => {
                if st.len() < 2 {
                    return Err(ErreurCalcul::OperandesInsuffisants);
                }
                let b = st.pop().ok_or(ErreurCalcul::OperandesInsuffisants)?;
                let a = st.pop().ok_or(ErreurCalcul::OperandesInsuffisants)?;
                st.push(Noeud::operation(tok.texte.clone(), a, b));
            }

            // une RPN bien formée ne contient plus de parenthèses
            GenreJeton::ParG | GenreJeton::ParD => {
                return Err(ErreurCalcul::ParenthesesDesequilibrees)
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(racine), true) => Ok(racine),
        _ => Err(ErreurCalcul::ExpressionMalformee),
    }
}
