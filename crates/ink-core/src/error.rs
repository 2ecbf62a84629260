use thiserror::Error;

/// Failure of a gallery operation.
///
/// Every variant is terminal for the operation that produced it. Nothing is
/// retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// Transport failure, no response received.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with something other than 200.
    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The operation was refused before any request was sent.
    #[error("{0}")]
    Precondition(String),

    /// Local I/O failure while reading a picked file.
    #[error("I/O error: {0}")]
    Io(String),
}

impl GalleryError {
    pub fn precondition(message: impl Into<String>) -> Self {
        GalleryError::Precondition(message.into())
    }

    /// Message suitable for showing to the user in an alert.
    ///
    /// Non-200 bodies are plain text written for humans, so they are shown
    /// as-is with the status appended.
    pub fn user_message(&self) -> String {
        match self {
            GalleryError::Http { status, body } if body.trim().is_empty() => {
                format!("Request failed with status: {}", status)
            }
            GalleryError::Http { status, body } => format!("{} (Status: {})", body.trim(), status),
            GalleryError::Network(message) => format!("Could not reach the server: {}", message),
            other => other.to_string(),
        }
    }
}
