// src/app.rs
//
// Calculatrice Sci — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Raccourcis clavier globaux (pas de champ texte, donc pas de focus à
// arbitrer) :
// - Entrée     = évaluer (comme "=")
// - Backspace  = effacer la dernière saisie (comme DEL)
// - Échap      = tout effacer (comme "C")

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (entree, backspace, esc) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if entree {
            self.evaluer();
        }
        if backspace {
            self.effacer_derniere_saisie();
        }
        if esc {
            self.effacer_tout();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
