pub mod dataset;
pub mod errors;
pub mod filter;
pub mod models;
pub mod quiz;

pub use errors::DinodexError;
pub use models::Record;
