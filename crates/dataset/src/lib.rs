//! Loading and querying of the land-cover statistics dataset.
//!
//! Two CSV inputs feed the panel:
//! - the statistics table (semicolon-separated, comma decimals) with one
//!   row per municipality, year and cover class
//! - the municipality coordinate table (plain CSV, dot decimals)
//!
//! Loaded rows are joined against the MapBiomas legend, filtered with a
//! [`landcover_common::FilterSelection`] and exported back to CSV in the
//! same convention the statistics table uses.

pub mod coordinates;
pub mod export;
pub mod query;
pub mod statistics;

use thiserror::Error;

pub use coordinates::{load_coordinates, read_coordinates};
pub use export::{export_csv, write_csv};
pub use query::{class_names, filter_records, municipalities, states, years};
pub use statistics::{load_statistics, read_statistics};

/// Errors from reading or writing dataset CSV files.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
