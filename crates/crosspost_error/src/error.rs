//! Top-level error wrapper types.

use crate::{ConfigError, DispatchError, MediaError, TransportError};

/// Every error a Crosspost operation can surface.
///
/// # Examples
///
/// ```
/// use crosspost_error::{ConfigError, ConfigErrorKind, CrosspostError};
///
/// let err: CrosspostError = ConfigError::new(ConfigErrorKind::InvalidLimits("bad limits".into())).into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CrosspostErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Blocking media condition
    #[from(MediaError)]
    Media(MediaError),
    /// Transport failure outside a dispatch
    #[from(TransportError)]
    Transport(TransportError),
    /// Dispatch stopped part-way
    #[from(DispatchError)]
    Dispatch(DispatchError),
}

/// Crosspost error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Crosspost Error: {}", _0)]
pub struct CrosspostError(Box<CrosspostErrorKind>);

impl CrosspostError {
    /// Create a new error from a kind.
    pub fn new(kind: CrosspostErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CrosspostErrorKind {
        &self.0
    }
}

impl<T> From<T> for CrosspostError
where
    T: Into<CrosspostErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Crosspost operations.
pub type CrosspostResult<T> = std::result::Result<T, CrosspostError>;
