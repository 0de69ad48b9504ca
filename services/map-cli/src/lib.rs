//! Display shell for scalar-map.
//!
//! Loads a dataset from a JSON file, runs one render request and emits the
//! result on stdout in the requested format.

use map_common::MapError;

pub mod config;
pub mod output;
pub mod source;

/// Process exit status for a failed run.
///
/// Rejected request parameters exit with 2 and unusable data or palettes
/// with 3. Anything else (I/O, config syntax) exits with 1.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<MapError>() {
        Some(map_err) if map_err.is_request_error() => 2,
        Some(_) => 3,
        None => 1,
    }
}
