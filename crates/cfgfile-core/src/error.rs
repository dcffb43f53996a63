//! Error types for loading, writing and assigning configuration options.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::value::Range;

/// Errors that can occur while reading, writing or updating a configuration.
#[derive(Error, Debug)]
pub enum CfgError {
    /// The config file could not be opened or read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file could not be created or written.
    #[error("failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A write was requested without a path and nothing was loaded before.
    #[error("no filename given and no file was previously loaded")]
    NoFilename,

    /// An assignment was rejected because the value lies outside the option's range.
    /// The option is left exactly as it was.
    #[error("value {value} is outside of the allowed range {range}")]
    OutOfRange { value: f64, range: Range },
}

/// Convenience alias used throughout cfgfile-core.
pub type Result<T> = std::result::Result<T, CfgError>;
