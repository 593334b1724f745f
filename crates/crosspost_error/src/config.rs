//! Configuration error types.

/// Ways loading or rendering the platform configuration can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The built-in platform limits could not be turned into a config source.
    #[display("Built-in platform limits could not be encoded: {}", _0)]
    Defaults(String),
    /// A configuration file could not be read or merged.
    #[display("Configuration sources could not be merged: {}", _0)]
    Sources(String),
    /// The merged values do not describe valid platform limits.
    #[display("Platform limits could not be parsed: {}", _0)]
    InvalidLimits(String),
    /// Configuration or results could not be written out.
    #[display("Output could not be serialized: {}", _0)]
    Output(String),
}

/// Configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError of the given kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspost_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::new(ConfigErrorKind::InvalidLimits("max_media: invalid type".into()));
    /// assert!(err.to_string().contains("Platform limits could not be parsed"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
