//! Load-time error types. Only total unavailability of the input source is
//! fatal; single-field coercion faults and empty partitions are recovered
//! where they occur and never surface as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a dataset load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read tabular input: {0}")]
    Malformed(#[from] csv::Error),
}
