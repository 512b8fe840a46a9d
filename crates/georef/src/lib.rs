//! World-file georeferencing for raster map sheets.
//!
//! Implements the six-parameter affine mapping between pixel and geographic
//! coordinates described by ESRI world files (.pgw and friends), including
//! the truncating inverse used to place markers on north-up rasters.

pub mod transform;
pub mod worldfile;

pub use transform::{AffineTransform, TransformError};
pub use worldfile::WorldFileError;
