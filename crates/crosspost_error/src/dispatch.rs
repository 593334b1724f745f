//! Dispatch error types.

use crate::TransportError;

/// A dispatch that stopped part-way through its plan.
///
/// Steps that were already delivered are not rolled back; their message
/// identifiers travel with the error so the caller can report a partial result.
///
/// # Examples
///
/// ```
/// use crosspost_error::{DispatchError, TransportError, TransportErrorKind};
///
/// let source = TransportError::new(TransportErrorKind::Rejected("chat not found".into()));
/// let err = DispatchError::new(1, vec!["42".to_string()], source);
/// assert_eq!(err.failed_step, 1);
/// assert_eq!(err.delivered, vec!["42".to_string()]);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Dispatch Error: step {} failed: {} at line {} in {}",
    failed_step,
    source,
    line,
    file
)]
pub struct DispatchError {
    /// Index of the plan step that failed; every earlier step was delivered
    pub failed_step: usize,
    /// Message identifiers of everything delivered before the failure
    pub delivered: Vec<String>,
    /// Transport failure that stopped the dispatch
    pub source: TransportError,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DispatchError {
    /// Create a new dispatch error with automatic location tracking.
    #[track_caller]
    pub fn new(failed_step: usize, delivered: Vec<String>, source: TransportError) -> Self {
        let location = std::panic::Location::caller();
        Self {
            failed_step,
            delivered,
            source,
            line: location.line(),
            file: location.file(),
        }
    }
}
