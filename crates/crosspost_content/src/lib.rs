//! Text adaptation for each publishing platform.
//!
//! - [`truncate`] cuts text to a hard limit at the best available cut marker
//! - [`TextTransform`] holds the cosmetic per-platform rewrites
//! - [`optimize`] and [`ContentOptimizer`] combine both with a platform's limits
//!
//! Everything here is pure and synchronous, so platforms can be optimized in
//! any order or in parallel.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod optimizer;
mod transform;
mod truncate;

pub use optimizer::{ContentOptimizer, optimize};
pub use transform::{
    LINK_LABEL, LinkWrapMode, TextTransform, collapse_blank_lines, emphasize_hashtags,
    wrap_links,
};
pub use truncate::{ELLIPSIS, truncate};
