//! Error types for transcoding operations

use std::fmt;

/// Errors that can occur while transcoding between blocks and Markdown.
///
/// Rendering and parsing never fail on malformed content (unrecognized
/// blocks and tokens degrade to empty output); the only hard failures are
/// bad arguments and frontmatter requested for partial store data.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscodeError {
    /// A required argument was empty or otherwise unusable
    InvalidArgument(String),
    /// The store returned only partial data where complete data is required
    PartialData(String),
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            TranscodeError::PartialData(msg) => write!(f, "Partial data: {msg}"),
        }
    }
}

impl std::error::Error for TranscodeError {}
