//! Error types for scalar-map.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Primary error type for map rendering operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapError {
    // === Dataset Errors ===
    #[error("Dataset is empty: value range and map center cannot be computed")]
    EmptyDataset,

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Failed to parse dataset: {0}")]
    ParseError(String),

    // === Request Errors ===
    #[error("Sample size {requested} out of range: dataset has {available} records")]
    OutOfRange { requested: usize, available: usize },

    #[error("Invalid parameter value for '{param}': {value} (must be > 0)")]
    InvalidParameter { param: String, value: i64 },

    // === Style Errors ===
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),
}

impl MapError {
    /// Short machine-readable error kind for display shells.
    pub fn kind(&self) -> &'static str {
        match self {
            MapError::EmptyDataset => "EmptyDataset",
            MapError::InvalidRecord { .. } => "InvalidRecord",
            MapError::ParseError(_) => "ParseError",
            MapError::OutOfRange { .. } => "OutOfRange",
            MapError::InvalidParameter { .. } => "InvalidParameter",
            MapError::InvalidPalette(_) => "InvalidPalette",
        }
    }

    /// Whether the error was caused by the request parameters rather than the data.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            MapError::OutOfRange { .. } | MapError::InvalidParameter { .. }
        )
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::ParseError(format!("JSON error: {}", err))
    }
}
