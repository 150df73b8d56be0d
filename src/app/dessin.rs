// src/app/dessin.rs
//
// Arbre d’expression dessiné au pinceau egui.
// La disposition (positions) est une fonction pure, testée à part du rendu.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Stroke};

use crate::noyau::Noeud;

const RAYON: f32 = 30.0;
const ESPACEMENT_VERTICAL: f32 = 80.0;
const RETRAIT_ECART: f32 = 0.6;
const Y_RACINE: f32 = 60.0;
const HAUTEUR_MIN: f32 = 300.0;
const HAUTEUR_MAX: f32 = 600.0;

const BLEU: Color32 = Color32::from_rgb(0x21, 0x96, 0xF3);
const BLEU_CLAIR: Color32 = Color32::from_rgb(0xE3, 0xF2, 0xFD);
const BLEU_BORD: Color32 = Color32::from_rgb(0x19, 0x76, 0xD2);

/// Un nœud placé (coordonnées locales, avant zoom/décalage).
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub etiquette: String,
    pub est_operateur: bool,
    pub centre: Pos2,
    pub parent: Option<usize>,
}

/// Dispose l’arbre en pré-ordre : parent, puis gauche, puis droite.
///
/// Enfant : x ∓ ecart / (profondeur·0.5 + 1), y + 80 ; l’écart des enfants est ecart·0.6.
pub fn disposer(racine: &Noeud, origine: Pos2, ecart: f32) -> Vec<Place> {
    let mut out = Vec::new();
    // pile explicite : (nœud, position, écart, profondeur, parent)
    let mut pile: Vec<(&Noeud, Pos2, f32, usize, Option<usize>)> =
        vec![(racine, origine, ecart, 0, None)];

    while let Some((n, pos, ecart, prof, parent)) = pile.pop() {
        let idx = out.len();
        out.push(Place {
            etiquette: n.etiquette().to_string(),
            est_operateur: n.est_operateur(),
            centre: pos,
            parent,
        });

        if let Some((g, d)) = n.enfants() {
            let dx = ecart / (prof as f32 * 0.5 + 1.0);
            let y = pos.y + ESPACEMENT_VERTICAL;
            let suivant = ecart * RETRAIT_ECART;
            // droite d’abord : la gauche sort en premier
            pile.push((d, egui::pos2(pos.x + dx, y), suivant, prof + 1, Some(idx)));
            pile.push((g, egui::pos2(pos.x - dx, y), suivant, prof + 1, Some(idx)));
        }
    }

    out
}

/// Hauteur de la zone : assez pour tous les niveaux, bornée (le zoom fait le reste).
pub fn hauteur_zone(arbre: &Noeud) -> f32 {
    let niveaux = arbre.profondeur().saturating_sub(1) as f32;
    (Y_RACINE + niveaux * ESPACEMENT_VERTICAL + RAYON * 2.0).clamp(HAUTEUR_MIN, HAUTEUR_MAX)
}

/// Zone de dessin : glisser déplace, pincer / ctrl+molette zoome.
pub fn zone_arbre(ui: &mut egui::Ui, arbre: &Noeud, zoom: f32, decalage: egui::Vec2) -> egui::Response {
    let (resp, painter) = ui.allocate_painter(
        egui::vec2(ui.available_width(), hauteur_zone(arbre)),
        egui::Sense::drag(),
    );
    let rect = resp.rect;

    painter.rect_filled(rect, 0.0, ui.visuals().faint_bg_color);
    let painter = painter.with_clip_rect(rect);

    let places = disposer(arbre, egui::pos2(rect.width() / 2.0, Y_RACINE), rect.width() / 2.0);

    // local -> écran : zoom autour du centre de la zone, puis décalage
    let centre_local = egui::pos2(rect.width() / 2.0, rect.height() / 2.0);
    let ecran = |p: Pos2| rect.center() + (p - centre_local) * zoom + decalage;

    for p in &places {
        if let Some(i) = p.parent {
            painter.line_segment(
                [ecran(places[i].centre), ecran(p.centre)],
                Stroke::new(2.0 * zoom, BLEU_BORD),
            );
        }
    }

    for p in &places {
        let c = ecran(p.centre);
        let r = RAYON * zoom;
        let (fond, texte) = if p.est_operateur {
            (BLEU, Color32::WHITE)
        } else {
            (BLEU_CLAIR, Color32::BLACK)
        };
        painter.circle_filled(c, r, fond);
        painter.circle_stroke(c, r, Stroke::new(2.0 * zoom, BLEU_BORD));
        painter.text(
            c,
            Align2::CENTER_CENTER,
            &p.etiquette,
            FontId::proportional(18.0 * zoom),
            texte,
        );
    }

    resp
}
