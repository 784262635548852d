//! Error types for the worldcal ecosystem.

use thiserror::Error;

/// Errors that can occur in worldcal operations.
#[derive(Error, Debug)]
pub enum WorldCalError {
    /// Export precondition: the selected months resolved to zero events.
    /// User-correctable; no artifact is produced.
    #[error("No events found in the selected months")]
    NoEventsSelected,

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Invalid month number: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid calendar date: {year}-{month:02}")]
    InvalidDate { year: i32, month: u32 },

    #[error("PDF generation error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for worldcal operations.
pub type WorldCalResult<T> = Result<T, WorldCalError>;
