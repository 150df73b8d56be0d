//! Noyau calculatrice à arbre
//!
//! Organisation interne :
//! - erreur.rs    : genres d’erreur (thiserror)
//! - operateur.rs : + - * / ^ et table de précédence
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard (infixe -> RPN)
//! - arbre.rs     : arbre binaire + construction depuis la RPN
//! - eval.rs      : évaluation (pile explicite) + pipeline complet
//! - format.rs    : affichage du résultat

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateur;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use arbre::Noeud;
pub use erreur::ErreurCalcul;
pub use eval::{eval_expression, Calcul, Demarche};
pub use format::format_resultat;
