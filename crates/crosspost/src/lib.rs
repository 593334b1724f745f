//! Crosspost - adapt one post and its media for several platforms.
//!
//! Crosspost takes a single piece of authored content plus optional media and
//! prepares it for a 280-character microblog (Twitter), a professional network
//! (LinkedIn) and a messaging bot channel (Telegram).
//!
//! # Features
//!
//! - **Boundary-aware truncation**: cuts at sentence or paragraph markers
//! - **Platform transforms**: hashtag emphasis and link wrapping for messaging
//! - **Media evaluation**: per-platform count, size and format checks
//! - **Dispatch planning**: text, single media or media groups with fallback
//!
//! # Quick Start
//!
//! ```no_run
//! use crosspost::{CrosspostConfig, OptimizationOptions, Platform, prepare_publication};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CrosspostConfig::load()?;
//!     let publication = prepare_publication(
//!         "We shipped the new release today. #rust https://example.com",
//!         &["screenshot.png"],
//!         &config,
//!         OptimizationOptions::default(),
//!     )
//!     .await?;
//!
//!     println!("{}", publication.text(Platform::Telegram));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `crosspost_error` - Error types
//! - `crosspost_core` - Platforms, limits, records and configuration
//! - `crosspost_content` - Truncator, transforms and optimizer
//! - `crosspost_media` - Media classifier and compatibility evaluator
//! - `crosspost_social` - Dispatch planner, transport trait and dispatcher
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use crosspost_content::*;
pub use crosspost_core::*;
pub use crosspost_error::*;
pub use crosspost_media::*;
pub use crosspost_social::*;

mod pipeline;

pub use pipeline::{
    OptimizationOptions, Publication, Publisher, prepare_publication, publish_messaging,
};
