//! src/app/etat.rs
//!
//! État UI (sans vue, sans parsing).
//!
//! Rôle : contenir l’état de la calculatrice (expression, résultat, erreur, arbre, zoom)
//! et offrir des opérations simples (DEL/C, afficher/masquer l’arbre).
//!
//! Contrats :
//! - Aucune évaluation ici : la vue appelle le noyau puis dépose le résultat.
//! - En cas d’erreur, aucun arbre ni résultat partiel n’est gardé.

use eframe::egui;

use crate::noyau::{format_resultat, Calcul, Demarche, ErreurCalcul, Noeud};

/// Bornes du zoom de l’arbre.
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;

/// Bornes du déplacement (px, par axe).
pub const DECALAGE_MAX: f32 = 500.0;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,
    pub arbre: Option<Noeud>,

    // --- démarche (jetons + RPN du dernier calcul réussi) ---
    pub demarche: Demarche,

    // --- arbre (vue) ---
    pub montrer_arbre: bool,
    pub zoom: f32,
    pub decalage: egui::Vec2,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            arbre: None,
            demarche: Demarche::default(),
            montrer_arbre: false,
            zoom: 1.0,
            decalage: egui::Vec2::ZERO,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Saisie clavier dans le champ : l’ancien résultat n’est plus valable.
    pub fn on_edition(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
    }

    /// Touche du pavé : ajoute le symbole tel quel.
    pub fn inserer(&mut self, symbole: &str) {
        self.expression.push_str(symbole);
    }

    /// DEL : retire le dernier caractère.
    pub fn effacer_dernier(&mut self) {
        self.expression.pop();
    }

    /// × du champ : vide seulement l’expression.
    pub fn vider_expression(&mut self) {
        self.expression.clear();
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// C : expression + résultat + erreur + démarche, arbre masqué.
    pub fn effacer_tout(&mut self) {
        self.expression.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.clear_demarche();
        self.montrer_arbre = false;
    }

    /// Afficher/masquer l’arbre (seulement s’il existe).
    pub fn basculer_arbre(&mut self) {
        if self.arbre.is_some() {
            self.montrer_arbre = !self.montrer_arbre;
        }
    }

    /// Dépose un calcul réussi : arbre + résultat formaté, arbre affiché.
    pub fn set_resultat(&mut self, calcul: Calcul) {
        self.resultat = format_resultat(calcul.valeur);
        self.arbre = Some(calcul.arbre);
        self.demarche = calcul.demarche;
        self.erreur.clear();
        self.montrer_arbre = true;
        self.zoom = 1.0;
        self.decalage = egui::Vec2::ZERO;
    }

    /// Dépose une erreur : rien de partiel ne reste affiché.
    pub fn set_erreur(&mut self, e: &ErreurCalcul) {
        self.erreur = format!("Erreur : {e}");
        self.resultat.clear();
        self.arbre = None;
        self.clear_demarche();
        self.montrer_arbre = false;
    }

    /// Pincement / molette : facteur multiplicatif, borné.
    pub fn zoomer(&mut self, facteur: f32) {
        self.zoom = (self.zoom * facteur).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Glisser : déplacement borné sur chaque axe.
    pub fn deplacer(&mut self, delta: egui::Vec2) {
        let d = self.decalage + delta;
        self.decalage = egui::vec2(
            d.x.clamp(-DECALAGE_MAX, DECALAGE_MAX),
            d.y.clamp(-DECALAGE_MAX, DECALAGE_MAX),
        );
    }
}
