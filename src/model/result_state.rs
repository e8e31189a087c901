use std::fmt::Display;

use super::TransportError;

/// The lifecycle state of a request, as observed by a consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultState<T> {
    /// No request has been made yet.
    None,

    /// A request is in flight.
    Loading,

    /// The request succeeded with the given data.
    Success(T),

    /// The request failed.
    ///
    /// An unsuccessful response sets `error` to its body (if any) and leaves
    /// `exception` empty, while a transport fault sets `exception` and leaves
    /// `error` empty.
    Error {
        /// The body of the unsuccessful response.
        error: Option<T>,
        /// The fault raised by the transport.
        exception: Option<TransportError>,
    },
}

impl<T> Default for ResultState<T> {
    fn default() -> Self {
        ResultState::None
    }
}

impl<T> ResultState<T> {
    /// Creates a `Success` state.
    pub fn success(data: T) -> Self {
        ResultState::Success(data)
    }

    /// Creates an `Error` state for an unsuccessful response.
    pub fn failure(error: Option<T>) -> Self {
        ResultState::Error {
            error,
            exception: None,
        }
    }

    /// Creates an `Error` state for a transport fault.
    pub fn fault(exception: TransportError) -> Self {
        ResultState::Error {
            error: None,
            exception: Some(exception),
        }
    }

    /// Whether no request has been made yet.
    pub fn is_none(&self) -> bool {
        matches!(self, ResultState::None)
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading)
    }

    /// Whether the state ends a request lifecycle (`Success` or `Error`).
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResultState::Success(_) | ResultState::Error { .. })
    }

    /// Retrieves the data of a `Success` state.
    pub fn data(&self) -> Option<&T> {
        match self {
            ResultState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Converts the carried data, keeping the variant.
    pub fn map<U, F>(self, f: F) -> ResultState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ResultState::None => ResultState::None,
            ResultState::Loading => ResultState::Loading,
            ResultState::Success(data) => ResultState::Success(f(data)),
            ResultState::Error { error, exception } => ResultState::Error {
                error: error.map(f),
                exception,
            },
        }
    }
}

impl<T: Display> Display for ResultState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultState::None => write!(f, "None"),
            ResultState::Loading => write!(f, "Loading"),
            ResultState::Success(data) => write!(f, "Success({data})"),
            ResultState::Error {
                error: _,
                exception: Some(exception),
            } => write!(f, "Error(exception={exception})"),
            ResultState::Error {
                error: Some(error),
                exception: None,
            } => write!(f, "Error(error={error})"),
            ResultState::Error {
                error: None,
                exception: None,
            } => write!(f, "Error"),
        }
    }
}
