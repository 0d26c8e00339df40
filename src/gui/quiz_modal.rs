use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;
use crate::core::{
    quiz::{
        self,
        Session,
        Step,
        Verdict,
    },
    Record,
};

/// What the dialog is currently rendering. Options are computed once per
/// question, when it is first shown, so their order stays fixed while the
/// user picks an answer.
enum Display {
    Question { index: usize, prompt: String, options: Vec<String>, selection: Option<String> },
    Summary { score: u32, total: usize },
}

pub struct QuizModal {
    open: bool,
    session: Option<Session>,
    display: Option<Display>,
}

impl QuizModal {
    pub fn new() -> Self {
        Self { open: false, session: None, display: None }
    }

    /// Starts a fresh session: the pool is rebuilt and resampled, so
    /// repeated opens yield different question sets.
    pub fn open(&mut self, records: &[Record]) {
        let mut rng = rand::rng();
        self.session = Some(Session::new(records, &mut rng));
        self.open = true;
        self.advance();
    }

    fn close(&mut self) {
        self.open = false;
        self.session = None;
        self.display = None;
    }

    fn advance(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let mut rng = rand::rng();
        self.display = Some(match session.advance() {
            Step::Question { index, question } => Display::Question {
                index,
                prompt: question.prompt.clone(),
                options: quiz::displayed_options(question, &mut rng),
                selection: None,
            },
            Step::Summary { score, total } => Display::Summary { score, total },
        });
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let mut advance_clicked = false;
        let mut at_summary = false;

        egui::Modal::new(egui::Id::new("quiz_modal")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.label(theme.heading(ctx, "Dino Quiz").size(18.0));
            ui.add_space(10.0);

            match &mut self.display {
                Some(Display::Question { index, prompt, options, selection }) => {
                    ui.label(RichText::new(prompt.as_str()).size(14.0));
                    ui.add_space(8.0);

                    let question = *index;
                    let mut picked = None;
                    let verdict = self.session.as_ref().and_then(|s| s.verdict(question));

                    for option in options.iter() {
                        let is_selected = selection.as_deref() == Some(option.as_str());
                        let mut text = RichText::new(option.as_str());
                        if is_selected {
                            text = match verdict {
                                Some(Verdict::Correct) => text.color(theme.green(ctx)).strong(),
                                Some(Verdict::Wrong) => text.color(theme.red(ctx)).strong(),
                                None => text,
                            };
                        }

                        // First selection locks the question; later clicks
                        // are ignored.
                        if ui.radio(is_selected, text).clicked() && selection.is_none() {
                            picked = Some(option.clone());
                        }
                    }

                    if let Some(choice) = picked {
                        if let Some(session) = self.session.as_mut() {
                            session.answer(question, &choice);
                        }
                        *selection = Some(choice);
                    }
                }
                Some(Display::Summary { score, total }) => {
                    at_summary = true;
                    ui.label(RichText::new("Finished!").size(14.0));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Score: {}/{}", score, total))
                            .size(16.0)
                            .color(theme.accent(ctx))
                            .strong(),
                    );
                }
                None => {}
            }

            ui.add_space(14.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if at_summary { "Close" } else { "Next" };
                if ui.button(label).clicked() {
                    advance_clicked = true;
                }
            });
        });

        if advance_clicked {
            if at_summary {
                self.close();
            } else {
                self.advance();
            }
        }
    }
}

impl Default for QuizModal {
    fn default() -> Self {
        Self::new()
    }
}
