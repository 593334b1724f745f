//! Media classification and compatibility evaluation.
//!
//! Paths are first resolved into [`FileRecord`](crosspost_core::FileRecord)s by
//! the [`MediaClassifier`], concurrently and in caller order. The
//! [`CompatibilityEvaluator`] then checks the batch against each platform's
//! count, size and format rules.
//!
//! # Example
//!
//! ```no_run
//! use crosspost_core::CrosspostConfig;
//! use crosspost_media::{MediaClassifier, evaluate_limits};
//!
//! # async fn run() -> Result<(), crosspost_error::MediaError> {
//! let records = MediaClassifier::default().classify(&["photo.png", "clip.mp4"]).await;
//! let report = evaluate_limits(&records, &CrosspostConfig::default());
//! report.check()?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod evaluate;
mod mime;

pub use classify::{
    AUDIO_UNSUPPORTED, MediaClassifier, NO_PERMISSION, NOT_A_FILE, NOT_FOUND, classify,
};
pub use evaluate::{
    CompatibilityEvaluator, CompatibilityReport, PlatformVerdict, SUPPORTED, evaluate_limits,
};
pub use mime::{MimeTable, OCTET_STREAM};
