//! Dataset provider abstraction.

use crate::error::MapResult;
use crate::record::Dataset;

/// Anything that can supply a validated dataset.
///
/// How records are fetched or parsed is up to the implementation; the
/// rendering pipeline only ever sees the resulting [`Dataset`].
pub trait RecordSource {
    /// Human-readable description used in logs.
    fn describe(&self) -> String;

    fn load(&self) -> MapResult<Dataset>;
}

impl RecordSource for Dataset {
    fn describe(&self) -> String {
        format!("in-memory dataset ({} records)", self.len())
    }

    fn load(&self) -> MapResult<Dataset> {
        Ok(self.clone())
    }
}
