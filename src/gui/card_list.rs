use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;
use crate::core::{
    filter::{
        filter_records,
        results_label,
        FilterState,
    },
    models::{
        DIETS,
        PERIODS,
    },
    Record,
};

/// Current values of the catalogue controls. The filter state is rebuilt
/// from these every frame; there is no retained filter history.
#[derive(Default)]
pub struct CatalogState {
    pub search: String,
    pub period: Option<String>,
    pub diet: Option<String>,
}

impl CatalogState {
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            term: self.search.clone(),
            period: self.period.clone(),
            diet: self.diet.clone(),
        }
    }
}

pub fn card_list(ctx: &egui::Context, app: &mut super::app::DinodexApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        controls_row(ui, &mut app.catalog);
        ui.add_space(6.0);

        let visible = filter_records(&app.records, &app.catalog.filter_state());

        ui.label(RichText::new(results_label(visible.len())).color(app.theme.comment(ctx)));
        ui.add_space(6.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for idx in visible {
                card(ui, &app.theme, &app.records[idx]);
                ui.add_space(6.0);
            }
        });
    });
}

fn controls_row(ui: &mut egui::Ui, catalog: &mut CatalogState) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut catalog.search)
                .hint_text("Search by name...")
                .desired_width(220.0),
        );

        category_combo(ui, "period_filter", &mut catalog.period, "All Periods", &PERIODS);
        category_combo(ui, "diet_filter", &mut catalog.diet, "All Diets", &DIETS);
    });
}

fn category_combo(
    ui: &mut egui::Ui,
    id: &str,
    selected: &mut Option<String>,
    any_label: &str,
    values: &[&str],
) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_deref().unwrap_or(any_label).to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, None, any_label);
            for value in values {
                ui.selectable_value(selected, Some(value.to_string()), *value);
            }
        });
}

fn card(ui: &mut egui::Ui, theme: &Theme, record: &Record) {
    egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("🦖").size(28.0));

            ui.vertical(|ui| {
                let title = if record.name_secondary.is_empty() {
                    record.name_primary.clone()
                } else {
                    format!("{} · {}", record.name_primary, record.name_secondary)
                };
                ui.label(theme.heading(ui.ctx(), &title).size(16.0));

                ui.horizontal(|ui| {
                    meta_entry(ui, theme, "Period", &record.period);
                    meta_entry(ui, theme, "Diet", &record.diet);
                });

                ui.horizontal_wrapped(|ui| {
                    if record.has_length() {
                        pill(ui, theme, &format!("{} m (est.)", record.length_m));
                    }
                    if record.has_mass() {
                        pill(ui, theme, &format!("{} t", record.mass_t));
                    }
                    for trait_text in record.display_traits() {
                        pill(ui, theme, trait_text);
                    }
                });
            });
        });
    });
}

fn meta_entry(ui: &mut egui::Ui, theme: &Theme, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    ui.label(RichText::new(format!("{}:", label)).color(theme.comment(ui.ctx())));
    ui.label(RichText::new(value).strong());
    ui.add_space(8.0);
}

fn pill(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    egui::Frame::new()
        .fill(theme.pill_fill(ui.ctx()))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0));
        });
}
