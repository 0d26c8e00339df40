use eframe::egui::{
    self,
    containers,
};

pub enum TopBarAction {
    StartQuiz,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                if ui.button("Start Quiz").clicked() {
                    action = Some(TopBarAction::StartQuiz);
                }
            });
        });

        action
    }
}
