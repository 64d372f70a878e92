//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for docshelf operations.
///
/// This is an alias for `anyhow::Result`, with context added via
/// `.context()` and `.with_context()` at the application surfaces.
pub type Result<T> = anyhow::Result<T>;

/// Error isolated to a single library during a scan.
///
/// A missing metadata file is not an error; the library is simply not
/// documented and is omitted. These variants cover everything else, and each
/// one is confined to the library that produced it: sibling scans proceed.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The metadata file exists but could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The metadata file could not be parsed.
    #[error("malformed metadata in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
