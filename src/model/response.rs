/// A raw response of the transport: the HTTP status and the decoded body, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// The HTTP status code.
    pub(crate) status: u16,

    /// The decoded body, absent when empty or not decodable on failure.
    pub(crate) body: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a new `ApiResponse` instance.
    pub fn new(status: u16, body: Option<T>) -> Self {
        Self { status, body }
    }

    /// Retrieves the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Retrieves the decoded body.
    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Consumes the response and returns the decoded body.
    pub fn into_body(self) -> Option<T> {
        self.body
    }

    /// Whether the status is in the 2xx range.
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_successful_only_for_2xx() {
        assert!(ApiResponse::<()>::new(200, None).is_successful());
        assert!(ApiResponse::<()>::new(204, None).is_successful());
        assert!(!ApiResponse::<()>::new(199, None).is_successful());
        assert!(!ApiResponse::<()>::new(301, None).is_successful());
        assert!(!ApiResponse::<()>::new(500, None).is_successful());
    }
}
