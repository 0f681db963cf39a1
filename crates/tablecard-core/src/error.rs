//! Error types for report parsing and card generation.
//!
//! Individual reservation blocks that fail to parse are recovered locally
//! (skip-and-continue) and never surface here; everything in this enum is
//! fatal for the whole generation request.

use std::path::PathBuf;
use thiserror::Error;

/// Error types that can occur while turning a reservation report into cards.
#[derive(Error, Debug)]
pub enum CardError {
    /// The report stream could not be decoded or read.
    ///
    /// No partial output is produced.
    #[error("Failed to read report: {0}")]
    InputRead(String),

    /// After scanning and parsing, zero reservation records were produced.
    ///
    /// Either no reservation anchors were found, or every block failed
    /// metadata parsing.
    #[error("No valid reservations found in the report")]
    NoValidReservations,

    /// The resolved template resource does not exist.
    ///
    /// Checked before any rendering begins.
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// The rendering or composition capability failed for a record.
    ///
    /// Fatal for the whole request; intermediate artifacts are cleaned up
    /// before this surfaces.
    #[error("Render error: {0}")]
    Render(String),

    /// File I/O error persisting output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for [`Result<T, CardError>`].
pub type Result<T> = std::result::Result<T, CardError>;
