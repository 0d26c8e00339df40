pub mod app;
pub mod card_list;
pub mod quiz_modal;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::DinodexApp;
