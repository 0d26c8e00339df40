use super::models::Record;

/// Snapshot of the catalogue controls, rebuilt from the UI on every frame.
/// `None` category filters match everything.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterState {
    pub term: String,
    pub period: Option<String>,
    pub diet: Option<String>,
}

impl FilterState {
    pub fn matches(&self, record: &Record) -> bool {
        let term = self.term.trim().to_lowercase();
        record_matches(record, &term, self.period.as_deref(), self.diet.as_deref())
    }
}

/// Returns the indices of the visible records, preserving collection order.
pub fn filter_records(records: &[Record], state: &FilterState) -> Vec<usize> {
    let term = state.term.trim().to_lowercase();
    let period = state.period.as_deref();
    let diet = state.diet.as_deref();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, &term, period, diet))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn results_label(count: usize) -> String {
    format!("{} results", count)
}

fn record_matches(
    record: &Record,
    term_lower: &str,
    period: Option<&str>,
    diet: Option<&str>,
) -> bool {
    let by_term = term_lower.is_empty()
        || record.name_primary.to_lowercase().contains(term_lower)
        || record.name_secondary.to_lowercase().contains(term_lower);
    let by_period = period.is_none_or(|p| record.period == p);
    let by_diet = diet.is_none_or(|d| record.diet == d);

    by_term && by_period && by_diet
}
