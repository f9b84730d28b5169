// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Pavé de touches + écran. La vue LIT l’écran du moteur et lui
// TRANSMET des touches ; aucune logique d’expression ici.
//
// Disposition :
// - écran (affichage du moteur) + ligne résultat/erreur + témoin mémoire
// - rangée mémoire : MC MR M- M+ MS
// - rangées scientifiques : fonctions, constantes, transformations
// - pavé numérique : 7 8 9 / | 4 5 6 * | 1 2 3 - | 0 . = +

use eframe::egui;

use super::etat::AppCalc;

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Operateur(char),
    Parenthese(char),
    Fonction(&'static str),
    Egal,
    Signe,
    Factorielle,
    Carre,
    Cube,
    PuissanceDix,
    Inverse,
    MemClear,
    MemRecall,
    MemMoins,
    MemPlus,
    MemSave,
    Effacer,
    EffacerDernier,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Sci");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                // les rangées suivent le profil de capacités du moteur
                let capacites = self.moteur.capacites();

                self.ui_actions(ui);
                if capacites.memoire {
                    ui.add_space(4.0);
                    self.ui_memoire(ui);
                }
                if capacites.scientifique {
                    ui.add_space(4.0);
                    self.ui_scientifique(ui);
                }
                ui.add_space(8.0);
                self.ui_pave_numerique(ui);
            });
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let affichage = self.moteur.affichage().to_string();
        Self::champ_monospace(ui, "ecran", &affichage, 2);

        ui.horizontal(|ui| {
            if !self.resultat.is_empty() {
                ui.monospace(&self.resultat);
            }
            if !self.erreur.is_empty() {
                ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
            }

            // témoin mémoire, discret
            if self.moteur.memoire() != 0.0 {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!(
                        "M = {}",
                        crate::noyau::format::format_valeur(self.moteur.memoire())
                    ));
                });
            }
        });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Rangées de touches ------------------------ */

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "C", "Tout effacer (garde la mémoire)", Touche::Effacer);
            self.bouton(ui, "DEL", "Efface la dernière saisie", Touche::EffacerDernier);
        });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "MC", "Vide le registre mémoire", Touche::MemClear);
            self.bouton(ui, "MR", "Rappelle la mémoire à l’écran", Touche::MemRecall);
            self.bouton(ui, "M-", "Retranche l’évaluation courante", Touche::MemMoins);
            self.bouton(ui, "M+", "Ajoute l’évaluation courante", Touche::MemPlus);
            self.bouton(ui, "MS", "Mémorise l’évaluation courante", Touche::MemSave);
        });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "sin", "sinus", Touche::Fonction("sin("));
            self.bouton(ui, "cos", "cosinus", Touche::Fonction("cos("));
            self.bouton(ui, "tan", "tangente", Touche::Fonction("tan("));
            self.bouton(ui, "log", "logarithme décimal", Touche::Fonction("log("));
            self.bouton(ui, "ln", "logarithme népérien", Touche::Fonction("ln("));
            self.bouton(ui, "sqrt", "racine carrée", Touche::Fonction("sqrt("));
        });
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "PI", "π", Touche::Fonction("PI"));
            self.bouton(ui, "e", "nombre d’Euler", Touche::Fonction("e"));
            self.bouton(ui, "(", "(", Touche::Parenthese('('));
            self.bouton(ui, ")", ")", Touche::Parenthese(')'));
            self.bouton(ui, "±", "Bascule le signe", Touche::Signe);
            self.bouton(ui, "n!", "Factorielle du dernier nombre", Touche::Factorielle);
        });
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "x²", "Carré du dernier nombre", Touche::Carre);
            self.bouton(ui, "x³", "Cube du dernier nombre", Touche::Cube);
            self.bouton(ui, "10^x", "Dix puissance le dernier nombre", Touche::PuissanceDix);
            self.bouton(ui, "1/x", "Inverse du dernier nombre", Touche::Inverse);
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_sci")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", "9", Touche::Chiffre('9'));
                self.bouton(ui, "/", "/", Touche::Operateur('/'));
                ui.end_row();

                self.bouton(ui, "4", "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", "6", Touche::Chiffre('6'));
                self.bouton(ui, "*", "*", Touche::Operateur('*'));
                ui.end_row();

                self.bouton(ui, "1", "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", "3", Touche::Chiffre('3'));
                self.bouton(ui, "-", "-", Touche::Operateur('-'));
                ui.end_row();

                self.bouton(ui, "0", "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", "point décimal", Touche::Chiffre('.'));
                self.bouton(ui, "=", "Évalue l’expression", Touche::Egal);
                self.bouton(ui, "+", "+", Touche::Operateur('+'));
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let resp = ui
            .add_sized([46.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    /* ------------------------ Dispatch vers le moteur ------------------------ */

    fn appuyer(&mut self, touche: Touche) {
        self.effacer_messages();
        match touche {
            Touche::Chiffre(c) => self.moteur.saisir_chiffre(c),
            Touche::Operateur(c) => self.moteur.saisir_operateur(c),
            Touche::Parenthese(c) => self.moteur.saisir_parenthese(c),
            Touche::Signe => self.moteur.basculer_signe(),
            Touche::Effacer => self.moteur.effacer_tout(),
            Touche::EffacerDernier => self.moteur.effacer_dernier(),

            Touche::Fonction(nom) => {
                if let Err(e) = self.moteur.saisir_fonction(nom) {
                    self.deposer_erreur(e);
                }
            }

            Touche::Egal => self.evaluer(),

            Touche::Factorielle => {
                let r = self.moteur.factorielle();
                self.rapporter(r);
            }
            Touche::Carre => {
                let r = self.moteur.carre();
                self.rapporter(r);
            }
            Touche::Cube => {
                let r = self.moteur.cube();
                self.rapporter(r);
            }
            Touche::PuissanceDix => {
                let r = self.moteur.puissance_dix();
                self.rapporter(r);
            }
            Touche::Inverse => {
                let r = self.moteur.inverse();
                self.rapporter(r);
            }

            Touche::MemClear => {
                if let Err(e) = self.moteur.vider_memoire() {
                    self.deposer_erreur(e);
                }
            }
            Touche::MemRecall => {
                let r = self.moteur.rappeler_memoire();
                self.rapporter(r);
            }
            Touche::MemMoins => {
                let r = self.moteur.memoire_moins();
                self.rapporter(r);
            }
            Touche::MemPlus => {
                let r = self.moteur.memoire_plus();
                self.rapporter(r);
            }
            Touche::MemSave => {
                let r = self.moteur.memoriser();
                self.rapporter(r);
            }
        }
    }

    /// Touche "=" : le moteur porte déjà sa sentinelle sur l’écran en
    /// cas d’échec ; la ligne d’erreur reprend le même texte.
    pub fn evaluer(&mut self) {
        self.effacer_messages();
        match self.moteur.evaluer() {
            Ok(v) => self.deposer_resultat(v),
            Err(e) => self.deposer_erreur(e),
        }
    }

    /// Efface la dernière saisie (appelée aussi par Backspace).
    pub fn effacer_derniere_saisie(&mut self) {
        self.effacer_messages();
        self.moteur.effacer_dernier();
    }

    /// Tout effacer (appelée aussi par Échap).
    pub fn effacer_tout(&mut self) {
        self.effacer_messages();
        self.moteur.effacer_tout();
    }

    fn rapporter(&mut self, r: Result<f64, crate::noyau::ErreurCalc>) {
        match r {
            Ok(v) => self.deposer_resultat(v),
            Err(e) => self.deposer_erreur(e),
        }
    }
}
