//! Dataset-wide value range.

use serde::{Deserialize, Serialize};

/// Minimum and maximum of the scalar attribute over a whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when every record carries the same value.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}
