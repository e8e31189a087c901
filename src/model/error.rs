use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// The result type of transport calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// A fault raised while performing a transport call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The remote host could not be reached or the connection was lost
    #[error("Connectivity error: {0}")]
    Connectivity(String),
    /// The remote host did not answer within the read timeout
    #[error("Timeout error: {0}")]
    Timeout(String),
    /// The response body could not be decoded
    #[error("Parsing error: {0}")]
    Parse(String),
    /// The request could not be built
    #[error("Request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();
        if error.is_timeout() {
            TransportError::Timeout(message)
        } else if error.is_decode() {
            TransportError::Parse(message)
        } else if error.is_builder() {
            TransportError::Request(message)
        } else {
            TransportError::Connectivity(message)
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(error: serde_json::Error) -> Self {
        TransportError::Parse(error.to_string())
    }
}
