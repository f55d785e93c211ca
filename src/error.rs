//! Error types for readmark.
//!
//! Parsing never fails; these cover file input, serialization and
//! conversions at the crate boundary.

use std::io;
use thiserror::Error;

/// Result type alias for readmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the article pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A heading level outside the supported `##`/`###` range.
    #[error("Invalid heading level: {0} (expected 2 or 3)")]
    InvalidHeadingLevel(u8),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
