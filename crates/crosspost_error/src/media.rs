//! Media validation error types.

use std::fmt;

/// Every reason that contributed to a blocking media condition.
///
/// Displayed as a bulleted list so all problems can be fixed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BlockingReasons(pub Vec<String>);

impl BlockingReasons {
    /// Number of reasons.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no reason was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the reasons in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl fmt::Display for BlockingReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reason) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "• {}", reason)?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for BlockingReasons {
    fn from(reasons: Vec<String>) -> Self {
        Self(reasons)
    }
}

/// Kinds of blocking media conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MediaErrorKind {
    /// One or more files are missing, unreadable or of an unsupported type.
    #[display("Media file validation failed:\n{}", _0)]
    InvalidFiles(BlockingReasons),
    /// Valid media exist but no platform accepts them.
    #[display("Media files do not meet any platform's requirements:\n{}", _0)]
    NoPlatformSupport(BlockingReasons),
}

impl MediaErrorKind {
    /// Reasons carried by this condition.
    pub fn reasons(&self) -> &BlockingReasons {
        match self {
            Self::InvalidFiles(reasons) | Self::NoPlatformSupport(reasons) => reasons,
        }
    }
}

/// Blocking media error with location tracking.
///
/// # Examples
///
/// ```
/// use crosspost_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::InvalidFiles(
///     vec!["missing.png: does not exist".to_string()].into(),
/// ));
/// assert!(format!("{}", err).contains("missing.png"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new media error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
