//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (network error, bad URL).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The API answered with a non-success status.
    ///
    /// `message` is the server-supplied `detail` when there is one,
    /// otherwise `Error <status>`.
    #[error("{message}")]
    Api { message: String, status: u16 },
    /// A success response whose body does not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl Error {
    /// The message shown to the user for this failure.
    pub fn message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status for API-level failures, `None` for transport and decode errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
