use std::{
    fs,
    path::Path,
};

use super::{
    models::Record,
    DinodexError,
};

/// Dataset file looked up relative to the working directory.
pub const DATASET_FILE: &str = "data/dinos.json";

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, DinodexError> {
    let json = fs::read_to_string(path.as_ref())?;
    let records: Vec<Record> = serde_json::from_str(&json)?;

    if records.is_empty() {
        return Err(DinodexError::FailedToLoadDataset("dataset file holds no records".to_string()));
    }

    Ok(records)
}

/// Loads the dataset, substituting the built-in sample on any failure so the
/// catalogue and quiz stay usable. Load errors are not surfaced to the user.
pub fn load_or_fallback(path: impl AsRef<Path>) -> Vec<Record> {
    match load_records(path) {
        Ok(records) => {
            println!("Loaded {} records from dataset", records.len());
            records
        }
        Err(e) => {
            eprintln!("Failed to load dataset: {}. Using built-in sample.", e);
            fallback_records()
        }
    }
}

/// Minimal sample spanning both diet categories so filter and quiz logic
/// remain exercisable without a dataset file.
pub fn fallback_records() -> Vec<Record> {
    vec![
        Record {
            id: "trex".to_string(),
            name_primary: "Tyrannosaurus".to_string(),
            name_secondary: "Tyrannosaurus rex".to_string(),
            period: "Cretaceous".to_string(),
            diet: "Carnivore".to_string(),
            length_m: 12.0,
            mass_t: 8.8,
            regions: vec!["North America".to_string()],
            traits: vec!["Massive teeth".to_string(), "Keen eyesight".to_string()],
        },
        Record {
            id: "trike".to_string(),
            name_primary: "Triceratops".to_string(),
            name_secondary: "Triceratops horridus".to_string(),
            period: "Cretaceous".to_string(),
            diet: "Herbivore".to_string(),
            length_m: 9.0,
            mass_t: 6.0,
            regions: vec!["North America".to_string()],
            traits: vec!["Three horns".to_string(), "Bony frill".to_string()],
        },
        Record {
            id: "velo".to_string(),
            name_primary: "Velociraptor".to_string(),
            name_secondary: "Velociraptor mongoliensis".to_string(),
            period: "Cretaceous".to_string(),
            diet: "Carnivore".to_string(),
            length_m: 2.0,
            mass_t: 0.015,
            regions: vec!["Asia".to_string()],
            traits: vec!["Agile".to_string(), "Possibly feathered".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_spans_both_diet_categories() {
        let records = fallback_records();
        assert!(records.len() >= 3);
        assert!(records.iter().any(|r| r.diet == "Carnivore"));
        assert!(records.iter().any(|r| r.diet == "Herbivore"));
        assert!(records.iter().any(|r| r.period == "Cretaceous"));

        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len(), "record ids must be unique");
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[{"id": "stub", "period": "Jurassic"}]"#).unwrap();

        let record = &records[0];
        assert_eq!(record.period, "Jurassic");
        assert!(record.name_primary.is_empty());
        assert!(!record.has_length());
        assert!(!record.has_mass());
        assert!(record.display_traits().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_records("data/does_not_exist.json").is_err());
        assert_eq!(load_or_fallback("data/does_not_exist.json").len(), fallback_records().len());
    }
}
