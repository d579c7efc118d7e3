/// Failure of a single backend round trip
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The request never got a response (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
    /// The backend answered 2xx but the body was not what we expected
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
