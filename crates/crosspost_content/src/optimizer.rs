//! Per-platform content optimization.

use crate::{TextTransform, truncate};
use crosspost_core::{CrosspostConfig, OptimizationResult, Platform, PlatformLimits};
use tracing::{debug, instrument};

/// Adapt content to one platform: transform it, then cut it to the limit.
///
/// # Examples
///
/// ```
/// use crosspost_content::{TextTransform, optimize};
/// use crosspost_core::PlatformLimits;
///
/// let result = optimize("Hello\n\n\n\nworld", &PlatformLimits::twitter(), TextTransform::Plain);
/// assert_eq!(result.optimized_text(), "Hello\n\nworld");
/// assert!(!*result.truncated());
/// ```
#[instrument(skip(content, limits), fields(content_len = content.chars().count(), limit = limits.char_limit()))]
pub fn optimize(
    content: &str,
    limits: &PlatformLimits,
    transform: TextTransform,
) -> OptimizationResult {
    let original_length = content.chars().count();
    let transformed = transform.apply(content);
    let hard_limit = *limits.char_limit();
    let truncated = transformed.chars().count() > hard_limit;

    let optimized = truncate(
        &transformed,
        hard_limit,
        limits.soft_cut_limit(),
        limits.cut_points().as_slice(),
        *limits.min_cut_length(),
    );

    let result = OptimizationResult::new(optimized, original_length, hard_limit, truncated);
    debug!(
        original_length,
        length = result.length(),
        truncated,
        "Content optimized"
    );
    result
}

/// Optimizer bound to one platform's limits and transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentOptimizer {
    platform: Platform,
    limits: PlatformLimits,
    transform: TextTransform,
}

impl ContentOptimizer {
    /// Create an optimizer from explicit limits and transform.
    pub fn new(platform: Platform, limits: PlatformLimits, transform: TextTransform) -> Self {
        Self {
            platform,
            limits,
            transform,
        }
    }

    /// Optimizer with the platform's configured limits and default transform.
    pub fn for_platform(platform: Platform, config: &CrosspostConfig) -> Self {
        Self::new(
            platform,
            config.limits(platform).clone(),
            TextTransform::for_platform(platform),
        )
    }

    /// Replace the transform hook.
    pub fn with_transform(mut self, transform: TextTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Platform this optimizer targets.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Limits this optimizer applies.
    pub fn limits(&self) -> &PlatformLimits {
        &self.limits
    }

    /// Optimize content for the platform.
    #[instrument(skip(self, content), fields(platform = %self.platform))]
    pub fn optimize(&self, content: &str) -> OptimizationResult {
        optimize(content, &self.limits, self.transform)
    }
}
