//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Segments that match no rule are not errors; they are dropped and reported
/// through [`crate::SkippedSegment`]. Errors here reject a whole bulletin.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Bulletin timestamp is not a calendar date-time
    #[error("Malformed timestamp '{timestamp}' in bulletin {bulletin_id}")]
    MalformedTimestamp {
        /// Bulletin carrying the bad value
        bulletin_id: String,
        /// The raw timestamp string
        timestamp: String,
    },

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// A built-in rule failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
