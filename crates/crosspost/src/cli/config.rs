//! Configuration command handler.

use super::commands::OutputFormat;
use crosspost::{ConfigError, ConfigErrorKind, CrosspostConfig, CrosspostResult, Platform, format_file_size};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::warn;

/// Load the explicit configuration file, or the layered user configuration.
///
/// Validation warnings are logged, never fatal.
pub fn load_config(path: Option<&Path>) -> CrosspostResult<CrosspostConfig> {
    let config = match path {
        Some(path) => CrosspostConfig::from_file(path)?,
        None => CrosspostConfig::load()?,
    };

    for warning in config.validate() {
        warn!(%warning, "Configuration warning");
    }
    Ok(config)
}

/// Print the effective configuration.
pub fn handle_config_command(config: &CrosspostConfig, format: OutputFormat) -> CrosspostResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(config)
                .map_err(|e| ConfigError::new(ConfigErrorKind::Output(e.to_string())))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            for platform in Platform::iter() {
                let limits = config.limits(platform);
                println!("{}", platform);
                println!("{:-<60}", "");
                println!(
                    "  characters: {} (soft cut {}, min cut {})",
                    limits.char_limit(),
                    limits.soft_cut_limit(),
                    limits.min_cut_length()
                );
                println!("  cut points: {:?}", limits.cut_points());
                println!("  max media:  {}", limits.max_media());
                for (label, rule) in [
                    ("image", limits.image()),
                    ("video", limits.video()),
                    ("document", limits.document()),
                ] {
                    match rule {
                        Some(rule) => {
                            let size = rule
                                .max_size_bytes()
                                .map(format_file_size)
                                .unwrap_or_else(|| "no limit".to_string());
                            let formats = if rule.allowed_extensions().is_empty() {
                                "any".to_string()
                            } else {
                                rule.allowed_extensions().join(" ")
                            };
                            println!("  {:<9}   {} / {}", label, size, formats);
                        }
                        None => println!("  {:<9}   not supported", label),
                    }
                }
                if let Some(caption) = limits.caption_limit() {
                    println!("  captions:   {}", caption);
                }
                println!();
            }

            let warnings = config.validate();
            if warnings.is_empty() {
                println!("No configuration warnings");
            } else {
                println!("Warnings:");
                for warning in warnings {
                    println!("  - {}", warning);
                }
            }
        }
    }

    Ok(())
}
