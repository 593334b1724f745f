//! Per-platform configuration loading.

use crate::{Platform, PlatformLimits};
use config::{Config, ConfigBuilder, File, builder::DefaultState};
use crosspost_error::{ConfigError, ConfigErrorKind, CrosspostResult};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Limits for every supported platform.
///
/// Built-in defaults live in code; user files only need to name the values
/// they change.
///
/// # Example
///
/// ```no_run
/// use crosspost_core::{CrosspostConfig, Platform};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CrosspostConfig::load()?;
/// println!("Telegram limit: {}", config.limits(Platform::Telegram).char_limit());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CrosspostConfig {
    /// Twitter limits
    twitter: PlatformLimits,
    /// LinkedIn limits
    linkedin: PlatformLimits,
    /// Telegram limits
    telegram: PlatformLimits,
}

impl Default for CrosspostConfig {
    fn default() -> Self {
        Self {
            twitter: PlatformLimits::twitter(),
            linkedin: PlatformLimits::linkedin(),
            telegram: PlatformLimits::telegram(),
        }
    }
}

impl CrosspostConfig {
    /// Limits for one platform.
    pub fn limits(&self, platform: Platform) -> &PlatformLimits {
        match platform {
            Platform::Twitter => &self.twitter,
            Platform::LinkedIn => &self.linkedin,
            Platform::Telegram => &self.telegram,
        }
    }

    /// Load a configuration file layered over the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CrosspostResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::defaults_builder()?.add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load configuration with precedence: current dir > home dir > built-in defaults.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. User config in home directory (~/.config/crosspost/crosspost.toml)
    /// 3. User config in current directory (./crosspost.toml)
    ///
    /// User config files are optional and skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> CrosspostResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > defaults");

        let mut builder = Self::defaults_builder()?;

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/crosspost/crosspost.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("crosspost").required(false));

        Self::finish(builder)
    }

    /// Check for settings that make a platform behave oddly.
    ///
    /// # Returns
    ///
    /// List of validation warnings (empty if valid).
    #[instrument(skip(self))]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (platform, limits) in [
            (Platform::Twitter, &self.twitter),
            (Platform::LinkedIn, &self.linkedin),
            (Platform::Telegram, &self.telegram),
        ] {
            if *limits.char_limit() == 0 {
                warnings.push(format!("{}: char_limit is 0, every post will be cut", platform));
            }
            if limits.cut_buffer() >= limits.char_limit() {
                warnings.push(format!(
                    "{}: cut_buffer ({}) is not smaller than char_limit ({})",
                    platform,
                    limits.cut_buffer(),
                    limits.char_limit()
                ));
            }
            if *limits.min_cut_length() >= limits.soft_cut_limit() {
                warnings.push(format!(
                    "{}: min_cut_length ({}) reaches the soft cut point ({}), cut points will never be used",
                    platform,
                    limits.min_cut_length(),
                    limits.soft_cut_limit()
                ));
            }
            if *limits.max_media() == 0 {
                warnings.push(format!("{}: max_media is 0, media will never be accepted", platform));
            }
        }

        match self.telegram.caption_limit() {
            None => warnings.push("Telegram: caption_limit is not set".to_string()),
            Some(0) => warnings.push("Telegram: caption_limit is 0".to_string()),
            Some(_) => {}
        }

        debug!(warnings = warnings.len(), "Configuration validated");
        warnings
    }

    fn defaults_builder() -> CrosspostResult<ConfigBuilder<DefaultState>> {
        let defaults = Config::try_from(&Self::default())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Defaults(e.to_string())))?;
        Ok(Config::builder().add_source(defaults))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> CrosspostResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Sources(e.to_string())))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::InvalidLimits(e.to_string())))?;
        Ok(config)
    }
}
