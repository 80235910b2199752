use thiserror::Error;

/// Result type alias using RedlineError
pub type Result<T> = std::result::Result<T, RedlineError>;

/// Error taxonomy for redline operations
///
/// The structural comparison itself is total and cannot fail; errors arise
/// only at the serialized-document boundary and when encoding values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RedlineError {
    /// Document text is not valid JSON
    #[error("Invalid {which} document: {reason}")]
    InvalidDocument { which: String, reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from serde_json::Error to RedlineError
impl From<serde_json::Error> for RedlineError {
    fn from(err: serde_json::Error) -> Self {
        RedlineError::Serialization {
            message: err.to_string(),
        }
    }
}
