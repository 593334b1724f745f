//! Error types for the Crosspost engine.
//!
//! This crate provides the error types shared by every Crosspost crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use crosspost_error::{ConfigError, ConfigErrorKind, CrosspostResult};
//!
//! fn load() -> CrosspostResult<()> {
//!     Err(ConfigError::new(ConfigErrorKind::Sources("missing platform table".into())))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dispatch;
mod error;
mod media;
mod transport;

pub use config::{ConfigError, ConfigErrorKind};
pub use dispatch::DispatchError;
pub use error::{CrosspostError, CrosspostErrorKind, CrosspostResult};
pub use media::{BlockingReasons, MediaError, MediaErrorKind};
pub use transport::{TransportError, TransportErrorKind};
