//! Error types for landcover-panel services.

use thiserror::Error;

/// Result type alias using PanelError.
pub type PanelResult<T> = Result<T, PanelError>;

/// Primary error type for panel operations.
#[derive(Debug, Error)]
pub enum PanelError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("No map sheet registered for year: {0}")]
    MapYearNotFound(u16),

    // === Data Errors ===
    #[error("Failed to read data: {0}")]
    DataReadError(String),

    #[error("Invalid world file: {0}")]
    WorldFileError(String),

    #[error("Invalid coordinate table: {0}")]
    CoordinateTableError(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("Projection error: {0}")]
    ProjectionError(String),

    // === Infrastructure Errors ===
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl PanelError {
    /// Get the HTTP status code for this error.
    ///
    /// Loader failures map to 404 so that a missing or unreadable map sheet
    /// degrades to a per-map warning instead of a server fault; degenerate
    /// transforms and rendering failures are 500s.
    pub fn http_status_code(&self) -> u16 {
        match self {
            PanelError::MissingParameter(_) | PanelError::InvalidParameter { .. } => 400,

            PanelError::MapYearNotFound(_)
            | PanelError::DataReadError(_)
            | PanelError::WorldFileError(_)
            | PanelError::CoordinateTableError(_) => 404,

            PanelError::RenderError(_)
            | PanelError::ProjectionError(_)
            | PanelError::InternalError(_) => 500,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for PanelError {
    fn from(err: std::io::Error) -> Self {
        PanelError::InternalError(err.to_string())
    }
}
