use thiserror::Error;

/// Reasons a fetch ends in the `Failure` state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Transport failure or a non-2xx status.
    #[error("network error: {message}")]
    Network { status: Option<u16>, message: String },
    /// The body was not JSON, or its `jobs` collection was missing or not a list.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SearchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Network {
            status: Some(status),
            message: message.into(),
        }
    }
}
