//! Optimization results.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Text adapted for one platform, with length statistics.
///
/// Lengths are counted in characters. `length` always matches
/// `optimized_text` and `within_limit` always matches `length <= limit`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct OptimizationResult {
    optimized_text: String,
    length: usize,
    within_limit: bool,
    truncated: bool,
    original_length: usize,
    limit: usize,
}

impl OptimizationResult {
    /// Build a result, deriving the length statistics from the text.
    ///
    /// `truncated` records whether a length cut happened; cosmetic transforms
    /// never count.
    pub fn new(
        optimized_text: impl Into<String>,
        original_length: usize,
        limit: usize,
        truncated: bool,
    ) -> Self {
        let optimized_text = optimized_text.into();
        let length = optimized_text.chars().count();
        Self {
            optimized_text,
            length,
            within_limit: length <= limit,
            truncated,
            original_length,
            limit,
        }
    }

    /// Raw content for a platform whose optimization is switched off.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspost_core::OptimizationResult;
    ///
    /// let result = OptimizationResult::passthrough("hello", 280);
    /// assert_eq!(result.optimized_text(), "hello");
    /// assert!(!*result.truncated());
    /// ```
    pub fn passthrough(content: &str, limit: usize) -> Self {
        Self::new(content, content.chars().count(), limit, false)
    }

    /// Consume the result, keeping only the text.
    pub fn into_text(self) -> String {
        self.optimized_text
    }
}
