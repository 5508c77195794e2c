use thiserror::Error;

/// Failure categories for a tally run.
///
/// Every variant is terminal: nothing retries, the caller prints the
/// message and the process exits non-zero.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("missing configuration: {reason}")]
    Config { reason: String },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("GraphQL HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("GraphQL errors: {}", .messages.join("; "))]
    Api { messages: Vec<String> },

    #[error("section markers not found: {start} ... {end}")]
    MarkersNotFound { start: String, end: String },
}

pub type TallyResult<T> = Result<T, TallyError>;
