use serde::{
    Deserialize,
    Serialize,
};

/// The only persisted preference. Saved to `settings.json` in the app data
/// dir whenever the theme switch changes it.
#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}
