use eframe::egui;

use super::{
    card_list::{
        card_list,
        CatalogState,
    },
    quiz_modal::QuizModal,
    settings::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::Record,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct DinodexApp {
    /// The collection, loaded once at startup and read-only afterwards.
    pub records: Vec<Record>,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub catalog: CatalogState,
    pub theme: Theme,

    // Modals
    pub quiz: QuizModal,
}

impl DinodexApp {
    pub fn new(cc: &eframe::CreationContext<'_>, records: Vec<Record>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let theme = Theme::fossil();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        // Apply the persisted theme preference.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        Self {
            records,
            settings_data,
            catalog: CatalogState::default(),
            theme,
            quiz: QuizModal::new(),
        }
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            if let Err(e) = save_json(&self.settings_data, "settings.json") {
                eprintln!("Failed to save settings: {}", e);
            }
        }
    }
}

impl eframe::App for DinodexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_theme_preference(ctx);

        if let Some(action) = TopBar::show(ctx) {
            match action {
                TopBarAction::StartQuiz => self.quiz.open(&self.records),
            }
        }

        card_list(ctx, self);

        let theme = self.theme.clone();
        self.quiz.show(ctx, &theme);
    }
}
