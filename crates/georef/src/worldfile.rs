//! World-file sidecar parsing.
//!
//! A world file is the plain-text sidecar paired with a raster image:
//! exactly six lines, one affine coefficient per line, in the order
//! A, D, B, E, C, F.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::transform::AffineTransform;

/// Errors from reading a world-file sidecar.
#[derive(Debug, Error)]
pub enum WorldFileError {
    #[error("world file must have exactly 6 coefficient lines, found {0}")]
    LineCount(usize),

    #[error("invalid coefficient on line {line}: {content:?}")]
    InvalidCoefficient { line: usize, content: String },

    #[error("failed to read world file: {0}")]
    Io(#[from] std::io::Error),
}

impl AffineTransform {
    /// Parse world-file content.
    ///
    /// One coefficient per line, order A, D, B, E, C, F. Trailing blank
    /// lines are tolerated. Degenerate (zero) scales are accepted here and
    /// rejected only when the inverse projection runs, so loading a sheet
    /// never fails for a reason only projection cares about.
    pub fn from_world_file_str(content: &str) -> Result<Self, WorldFileError> {
        let mut lines: Vec<&str> = content.lines().collect();
        while let Some(last) = lines.last() {
            if last.trim().is_empty() {
                lines.pop();
            } else {
                break;
            }
        }

        if lines.len() != 6 {
            return Err(WorldFileError::LineCount(lines.len()));
        }

        let mut coefficients = [0.0_f64; 6];
        for (index, line) in lines.iter().enumerate() {
            coefficients[index] =
                line.trim()
                    .parse()
                    .map_err(|_| WorldFileError::InvalidCoefficient {
                        line: index + 1,
                        content: line.trim().to_string(),
                    })?;
        }

        let [a, d, b, e, c, f] = coefficients;
        Ok(AffineTransform::new(a, d, b, e, c, f))
    }

    /// Load a world-file sidecar from disk.
    pub fn from_world_file(path: impl AsRef<Path>) -> Result<Self, WorldFileError> {
        let content = fs::read_to_string(path)?;
        Self::from_world_file_str(&content)
    }
}
