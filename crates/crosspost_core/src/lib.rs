//! Core data types for the Crosspost publishing engine.
//!
//! This crate provides the types shared by the content optimizer, the media
//! evaluator and the dispatch planner, plus the per-platform configuration they
//! are parameterised with.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod content;
mod media;
mod platform;

pub use config::CrosspostConfig;
pub use content::OptimizationResult;
pub use media::{FileRecord, FileRecordBuilder, MediaCategory, format_file_size, name_and_extension};
pub use platform::{MediaRule, MediaRuleBuilder, Platform, PlatformLimits, PlatformLimitsBuilder};
