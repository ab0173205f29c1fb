//! Queries over a small flat-file dataset of world capitals: great-circle
//! distance, nearest capital, continent filter and country lookup.

pub mod error;
pub mod geo;
pub mod loader;
pub mod logging;
pub mod query;
pub mod record;
pub mod shell;

pub use error::{DatasetError, QueryError};
pub use loader::{load_dataset, load_from_path, load_from_reader, LoadPolicy, LoadReport};
pub use record::{CapitalRecord, Dataset};
