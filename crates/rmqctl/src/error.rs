use std::fmt;

/// Selection failed before any matching began.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    InvalidPattern { pattern: String, reason: String },
}

/// The broker could not be reached at all, or the connection died
/// mid-request. Fatal for the remainder of a bulk batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportError {
    pub context: String,
}

/// A management API query (listing queues or users) failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Transport(TransportError),
    UnexpectedStatus { status: u16, body: String },
    Decode { reason: String },
}

impl TransportError {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid pattern '{pattern}': {reason}")
            }
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Broker unreachable: {}", self.context)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "{err}"),
            ApiError::UnexpectedStatus { status, body } => {
                write!(f, "Unexpected status {status}: {body}")
            }
            ApiError::Decode { reason } => write!(f, "Malformed API response: {reason}"),
        }
    }
}

impl std::error::Error for SelectionError {}
impl std::error::Error for TransportError {}
impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err)
    }
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
