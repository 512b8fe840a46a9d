//! Common types and utilities shared across the landcover-panel crates.

pub mod coordinate;
pub mod error;
pub mod filter;
pub mod legend;
pub mod record;

pub use coordinate::{normalize_name, MunicipalityCoordinate};
pub use error::{PanelError, PanelResult};
pub use filter::FilterSelection;
pub use legend::CoverClass;
pub use record::LandCoverRecord;
