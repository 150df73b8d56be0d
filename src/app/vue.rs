// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Champ d’expression + bouton ×
// - "Calculer" / "Afficher l’arbre"
// - Pavé : ( ) ^ DEL / 7 8 9 / / 4 5 6 * / 1 2 3 - / 0 . C +
// - Résultat, erreur, démarche (jetons + RPN), arbre zoomable
//
// Enter évalue (quand le champ a le focus).

use eframe::egui;

use super::dessin::zone_arbre;
use super::etat::AppCalc;

const PAVE: [[&str; 4]; 5] = [
    ["(", ")", "^", "DEL"],
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "C", "+"],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Calculatrice d’expressions");
                });
                ui.add_space(12.0);

                self.ui_entree(ui);
                ui.add_space(8.0);
                self.ui_pave(ui);
                ui.add_space(8.0);
                self.ui_resultat(ui);
                ui.add_space(8.0);
                self.ui_demarche(ui);
                ui.add_space(8.0);

                if self.montrer_arbre {
                    if let Some(arbre) = &self.arbre {
                        let resp = zone_arbre(ui, arbre, self.zoom, self.decalage);
                        if resp.dragged() {
                            self.deplacer(resp.drag_delta());
                        }
                        if resp.hovered() {
                            let z = ui.input(|i| i.zoom_delta());
                            if z != 1.0 {
                                self.zoomer(z);
                            }
                        }
                    }
                }
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        ui.horizontal(|ui| {
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.expression)
                    .desired_width(ui.available_width() - 40.0)
                    .hint_text("Ex: (2+3)*4, 2^3^2, 1.5/3")
                    .id_salt("expression_edit")
                    .code_editor(),
            );
            if resp.changed() {
                self.on_edition();
            }

            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if resp.lost_focus() && enter {
                self.calculer_via_noyau();
            }

            if ui.button("×").on_hover_text("Vider l’expression").clicked() {
                self.vider_expression();
            }
        });

        ui.add_space(6.0);

        ui.columns(2, |cols| {
            let w = cols[0].available_width();
            if cols[0]
                .add_sized([w, 36.0], egui::Button::new("Calculer"))
                .clicked()
            {
                self.calculer_via_noyau();
            }

            let libelle = if self.montrer_arbre {
                "Masquer l’arbre"
            } else {
                "Afficher l’arbre"
            };
            let w = cols[1].available_width();
            let bascule = cols[1].add_enabled(
                self.arbre.is_some(),
                egui::Button::new(libelle).min_size(egui::vec2(w, 36.0)),
            );
            if bascule.clicked() {
                self.basculer_arbre();
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(touche));
                        if resp.clicked() {
                            match touche {
                                "DEL" => self.effacer_dernier(),
                                "C" => self.effacer_tout(),
                                _ => self.inserer(touche),
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        if !self.resultat.is_empty() {
            egui::Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!("Résultat : {}", self.resultat))
                                .size(20.0)
                                .strong(),
                        );
                    });
                });
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/arbre ou erreur dans l’état UI.
    fn calculer_via_noyau(&mut self) {
        match crate::noyau::eval_expression(&self.expression) {
            Ok(calcul) => self.set_resultat(calcul),
            Err(e) => self.set_erreur(&e),
        }
    }
}
