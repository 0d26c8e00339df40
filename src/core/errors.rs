use thiserror::Error;

#[derive(Error, Debug)]
pub enum DinodexError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load dataset: {0}")]
    FailedToLoadDataset(String),
}

impl From<std::io::Error> for DinodexError {
    fn from(error: std::io::Error) -> Self {
        DinodexError::Io(Box::new(error))
    }
}
