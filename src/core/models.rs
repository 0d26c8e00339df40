use serde::Deserialize;

/// Every period a record can carry. Also the reference set the quiz engine
/// draws wrong answers from.
pub const PERIODS: [&str; 3] = ["Triassic", "Jurassic", "Cretaceous"];

/// Every diet a record can carry, used the same way as [`PERIODS`].
pub const DIETS: [&str; 3] = ["Herbivore", "Carnivore", "Omnivore"];

/// One catalogue entry. Only `id` is required in the dataset file; every
/// other field defaults to empty/zero, which suppresses the matching UI
/// element rather than erroring.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub name_primary: String, // Localized display name
    #[serde(default)]
    pub name_secondary: String, // Scientific/secondary name
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub diet: String,
    #[serde(default, rename = "length")]
    pub length_m: f32,
    #[serde(default, rename = "mass")]
    pub mass_t: f32,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
}

impl Record {
    /// The first three traits, in dataset order. Cards never show more.
    pub fn display_traits(&self) -> &[String] {
        let count = self.traits.len().min(3);
        &self.traits[..count]
    }

    /// Zero means "not recorded" and hides the length pill.
    pub fn has_length(&self) -> bool {
        self.length_m > 0.0
    }

    pub fn has_mass(&self) -> bool {
        self.mass_t > 0.0
    }
}
