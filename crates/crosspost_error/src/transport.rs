//! Transport error types.

/// Kinds of failures reported by a messaging transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// The platform refused to accept a media group.
    ///
    /// This is the only transport failure the dispatcher recovers from.
    #[display("Media group rejected: {}", _0)]
    GroupRejected(String),
    /// The platform rejected the request.
    #[display("Request rejected: {}", _0)]
    Rejected(String),
    /// Attached media could not be read.
    #[display("Failed to read media: {}", _0)]
    MediaRead(String),
    /// The platform could not be reached.
    #[display("Transport unavailable: {}", _0)]
    Unavailable(String),
}

/// Transport error with location tracking.
///
/// # Examples
///
/// ```
/// use crosspost_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::GroupRejected("too many files".into()));
/// assert!(err.is_group_rejection());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the transport refused a media group.
    pub fn is_group_rejection(&self) -> bool {
        matches!(self.kind, TransportErrorKind::GroupRejected(_))
    }
}
