//! Per-platform media compatibility evaluation.

use crosspost_core::{CrosspostConfig, FileRecord, Platform, PlatformLimits, format_file_size};
use crosspost_error::{MediaError, MediaErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Message of a platform that accepts the whole batch.
pub const SUPPORTED: &str = "Supported";

/// Whether one platform can publish the media batch.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlatformVerdict {
    /// False once any rule of the platform is violated.
    supported: bool,
    /// First violation, or "Supported".
    message: String,
}

impl Default for PlatformVerdict {
    fn default() -> Self {
        Self {
            supported: true,
            message: SUPPORTED.to_string(),
        }
    }
}

impl PlatformVerdict {
    /// Mark the platform unsupported unless it already is.
    ///
    /// Returns true when this violation became the verdict message.
    fn reject(&mut self, message: &str) -> bool {
        if !self.supported {
            return false;
        }
        self.supported = false;
        self.message = message.to_string();
        true
    }
}

/// Outcome of evaluating a media batch against every platform.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// Verdict per platform.
    verdicts: BTreeMap<Platform, PlatformVerdict>,
    /// Blocking problems with individual files.
    errors: Vec<String>,
    /// Non-blocking platform restrictions, prefixed with the platform name.
    warnings: Vec<String>,
    /// Records that exist and have a publishable category, in input order.
    valid_files: Vec<FileRecord>,
}

impl CompatibilityReport {
    /// Verdict of one platform.
    pub fn verdict(&self, platform: Platform) -> PlatformVerdict {
        self.verdicts.get(&platform).cloned().unwrap_or_default()
    }

    /// Whether a platform accepts the batch.
    pub fn is_supported(&self, platform: Platform) -> bool {
        self.verdict(platform).supported
    }

    /// Any file was missing, unreadable or of an unsupported type.
    pub fn has_file_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// At least one platform accepts the batch.
    pub fn has_any_platform_support(&self) -> bool {
        self.verdicts.values().any(|v| v.supported)
    }

    /// Valid media exist but no platform accepts them.
    pub fn lacks_platform_support(&self) -> bool {
        !self.valid_files.is_empty() && !self.has_any_platform_support()
    }

    /// Whether publication must stop before any network call.
    pub fn is_blocking(&self) -> bool {
        self.has_file_errors() || self.lacks_platform_support()
    }

    /// Per-platform availability: every platform is unavailable when blocking.
    pub fn availability(&self) -> BTreeMap<Platform, bool> {
        let blocking = self.is_blocking();
        Platform::iter()
            .map(|p| (p, !blocking && self.is_supported(p)))
            .collect()
    }

    /// Raise the blocking condition, if any, with every reason behind it.
    ///
    /// # Errors
    ///
    /// `InvalidFiles` with every file error, or `NoPlatformSupport` with the
    /// verdict of each rejecting platform.
    pub fn check(&self) -> Result<(), MediaError> {
        if self.has_file_errors() {
            return Err(MediaError::new(MediaErrorKind::InvalidFiles(
                self.errors.clone().into(),
            )));
        }

        if self.lacks_platform_support() {
            let reasons: Vec<String> = self
                .verdicts
                .iter()
                .filter(|(_, v)| !v.supported)
                .map(|(p, v)| format!("{}: {}", p, v.message))
                .collect();
            return Err(MediaError::new(MediaErrorKind::NoPlatformSupport(
                reasons.into(),
            )));
        }

        Ok(())
    }
}

/// Evaluates classified media against each platform's limits.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEvaluator {
    config: CrosspostConfig,
}

impl CompatibilityEvaluator {
    /// Evaluator for the given platform configuration.
    pub fn new(config: CrosspostConfig) -> Self {
        Self { config }
    }

    /// Evaluate a batch of classified records.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn evaluate(&self, records: &[FileRecord]) -> CompatibilityReport {
        evaluate_limits(records, &self.config)
    }
}

/// Evaluate a batch of classified records against every platform.
///
/// A platform's verdict keeps the first violation found; later violations are
/// only recorded as warnings.
#[instrument(skip(records, config), fields(count = records.len()))]
pub fn evaluate_limits(records: &[FileRecord], config: &CrosspostConfig) -> CompatibilityReport {
    let errors: Vec<String> = records
        .iter()
        .filter(|r| !r.is_valid())
        .map(|r| {
            format!(
                "{}: {}",
                r.name(),
                r.error().as_deref().unwrap_or("unsupported type")
            )
        })
        .collect();

    let valid_files: Vec<FileRecord> = records.iter().filter(|r| r.is_valid()).cloned().collect();

    let mut verdicts = BTreeMap::new();
    let mut warnings = Vec::new();

    for platform in Platform::iter() {
        let limits = config.limits(platform);
        let mut verdict = PlatformVerdict::default();

        for violation in violations(&valid_files, limits) {
            if verdict.reject(&violation) {
                debug!(%platform, %violation, "Platform rejects media");
            }
            warnings.push(format!("{}: {}", platform, violation));
        }

        verdicts.insert(platform, verdict);
    }

    for warning in &warnings {
        warn!(%warning, "Media restriction");
    }
    info!(
        errors = errors.len(),
        warnings = warnings.len(),
        valid = valid_files.len(),
        "Media compatibility evaluated"
    );

    CompatibilityReport {
        verdicts,
        errors,
        warnings,
        valid_files,
    }
}

/// Every rule a platform's limits reject, in evaluation order.
fn violations(valid_files: &[FileRecord], limits: &PlatformLimits) -> Vec<String> {
    let mut found = Vec::new();

    if valid_files.len() > *limits.max_media() {
        found.push(format!(
            "too many media files ({}, max {})",
            valid_files.len(),
            limits.max_media()
        ));
    }

    for file in valid_files {
        let category = *file.category();
        let Some(rule) = limits.rule_for(category) else {
            found.push(format!("{}: {} files are not supported", file.name(), category));
            continue;
        };

        if let Some(max) = rule.max_size_bytes().filter(|max| file.size() > max) {
            found.push(format!(
                "{} exceeds the {} size limit ({} > {})",
                file.name(),
                category,
                format_file_size(*file.size()),
                format_file_size(max)
            ));
            continue;
        }

        if !rule.allows_extension(file.extension()) {
            let extension = if file.extension().is_empty() {
                "no extension".to_string()
            } else {
                format!(".{}", file.extension())
            };
            found.push(format!(
                "{} has an unsupported {} format ({})",
                file.name(),
                category,
                extension
            ));
        }
    }

    found
}
