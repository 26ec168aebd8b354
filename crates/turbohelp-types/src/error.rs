use thiserror::Error;

/// Errors raised while validating an inbound chat payload.
///
/// The `Display` text is returned to the client verbatim.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Messages array is required")]
    MissingMessages,

    #[error("Messages array must not be empty")]
    EmptyMessages,

    #[error("Invalid message at index {index}: {reason}")]
    InvalidTurn { index: usize, reason: String },

    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),
}
