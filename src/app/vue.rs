// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Affichage une ligne, lecture seule, aligné à droite
// - Pavé 4×4 : chiffres, opérateurs, C, =
// - Pas de clavier : seules les touches du pavé modifient l’affichage

use eframe::egui;

use super::etat::AppCalc;

/// Pavé, ligne par ligne (ordre d’affichage).
pub const PAVE: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", "C", "=", "+"],
];

const TAILLE_TOUCHE: [f32; 2] = [50.0, 50.0];
const ESPACEMENT: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre ou opérateur : le label est ajouté à l’affichage.
    Saisie(&'static str),
    Clear,
    Egal,
}

impl Touche {
    pub fn depuis_label(label: &'static str) -> Touche {
        match label {
            "C" => Touche::Clear,
            "=" => Touche::Egal,
            _ => Touche::Saisie(label),
        }
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        self.ui_affichage(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // &str => TextEdit non modifiable
        let mut texte = self.affichage.as_str();
        ui.add(
            egui::TextEdit::singleline(&mut texte)
                .desired_width(ui.available_width())
                .horizontal_align(egui::Align::RIGHT)
                .font(egui::TextStyle::Heading),
        );
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([ESPACEMENT, ESPACEMENT])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for label in ligne {
                        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
                        if resp.clicked() {
                            self.presser(Touche::depuis_label(label));
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /// Action d’une touche du pavé.
    pub fn presser(&mut self, touche: Touche) {
        match touche {
            Touche::Saisie(label) => self.ajouter(label),
            Touche::Clear => self.clear_affichage(),
            Touche::Egal => self.evaluer(),
        }
    }

    /// Évalue l’affichage via le noyau, puis y dépose le résultat ou le marqueur d’erreur.
    fn evaluer(&mut self) {
        match crate::noyau::evaluate(&self.affichage) {
            Ok(v) => self.set_resultat(v),
            Err(e) => self.set_erreur(&e),
        }
    }
}
