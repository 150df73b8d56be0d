//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> arbre -> évaluation (f64)
//!
//! Chaque étape échoue vite : la première erreur arrête tout,
//! aucun arbre ni résultat partiel n’est rendu.

use super::arbre::{from_rpn, Noeud};
use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::{format_jetons, tokenize};
use super::operateur::Operateur;
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Résultat complet d’un calcul réussi.
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub arbre: Noeud,
    pub valeur: f64,
    pub demarche: Demarche,
}

/// API publique : évalue une expression et retourne l’arbre, la valeur et la démarche.
///
/// Seule la chaîne de longueur nulle est "vide" ; une chaîne d’espaces
/// donne zéro jeton et échoue en `ExpressionMalformee`.
#[tracing::instrument(skip_all)]
pub fn eval_expression(expr_str: &str) -> Resultat<Calcul> {
    let res = pipeline(expr_str);
    if let Err(e) = &res {
        tracing::warn!(genre = e.genre(), "échec : {e}");
    }
    res
}

fn pipeline(expr_str: &str) -> Resultat<Calcul> {
    if expr_str.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    let jetons_txt = format_jetons(&jetons);
    tracing::debug!("jetons = {jetons_txt}");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);
    tracing::debug!("rpn = {rpn_txt}");

    // 3) Arbre
    let arbre = from_rpn(&rpn)?;

    // 4) Valeur
    let valeur = evaluer(&arbre)?;
    tracing::debug!("valeur = {valeur}");

    Ok(Calcul {
        arbre,
        valeur,
        demarche: Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    })
}

/// Évaluation post-ordre : enfants d’abord (gauche puis droite), puis l’opérateur.
///
/// Pile explicite : une longue chaîne "1+1+…+1" donne un arbre aussi profond
/// qu’elle est longue, sans parenthèses.
///
/// `^` suit `powf` : une base négative avec exposant fractionnaire donne NaN,
/// rendu comme une valeur normale.
pub fn evaluer(racine: &Noeud) -> Resultat<f64> {
    #[derive(Copy, Clone)]
    enum Marque<'a> {
        Entrer(&'a Noeud),
        Sortir(&'a str),
    }

    let mut pile: Vec<Marque<'_>> = Vec::with_capacity(64);
    let mut res: Vec<f64> = Vec::with_capacity(64);

    pile.push(Marque::Entrer(racine));

    while let Some(m) = pile.pop() {
        match m {
            Marque::Entrer(Noeud::Operande(texte)) => res.push(lire_nombre(texte)?),

            Marque::Entrer(Noeud::Operation {
                symbole,
                gauche,
                droite,
            }) => {
                pile.push(Marque::Sortir(symbole));
                pile.push(Marque::Entrer(droite));
                pile.push(Marque::Entrer(gauche));
            }

            Marque::Sortir(symbole) => {
                let b = res.pop().ok_or(ErreurCalcul::OperandesInsuffisants)?;
                let a = res.pop().ok_or(ErreurCalcul::OperandesInsuffisants)?;

                let v = match Operateur::depuis_symbole(symbole)? {
                    Operateur::Plus => a + b,
                    Operateur::Moins => a - b,
                    Operateur::Fois => a * b,
                    Operateur::Divise => {
                        if b == 0.0 {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        a / b
                    }
                    Operateur::Puissance => a.powf(b),
                };
                res.push(v);
            }
        }
    }

    res.pop().ok_or(ErreurCalcul::ExpressionMalformee)
}

/// Littéral décimal : chiffres avec au plus un '.', au moins un chiffre.
/// (`str::parse` seul accepterait aussi "inf", "1e3", "+1"...)
fn lire_nombre(texte: &str) -> Resultat<f64> {
    let invalide = || ErreurCalcul::LitteralNumeriqueInvalide(texte.to_string());

    let forme_ok = texte.chars().all(|c| c.is_ascii_digit() || c == '.')
        && texte.chars().filter(|&c| c == '.').count() <= 1
        && texte.chars().any(|c| c.is_ascii_digit());
    if !forme_ok {
        return Err(invalide());
    }

    texte.parse::<f64>().map_err(|_| invalide())
}
