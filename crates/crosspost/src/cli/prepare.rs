//! Prepare command handler.

use super::commands::{OutputFormat, PostInput};
use crosspost::{
    ConfigError, ConfigErrorKind, CrosspostConfig, CrosspostResult, Platform, Publisher,
    format_file_size,
};
use strum::IntoEnumIterator;

/// Optimize content, check media and print the result.
pub async fn handle_prepare_command(
    config: CrosspostConfig,
    input: &PostInput,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = input.read_content().await?;
    let publication = Publisher::new(config)
        .with_options(input.options())
        .prepare(&content, input.media.as_slice())
        .await?;

    match format {
        OutputFormat::Json => print_json(&publication)?,
        OutputFormat::Human => {
            println!("Media");
            println!("{:-<80}", "");
            if publication.records().is_empty() {
                println!("No media files");
            }
            for (i, record) in publication.records().iter().enumerate() {
                println!(
                    "{}. {} {} - {} ({})",
                    i + 1,
                    if record.is_valid() { "ok " } else { "err" },
                    record.category(),
                    record.name(),
                    format_file_size(*record.size())
                );
            }
            println!();

            for platform in Platform::iter() {
                let verdict = publication.report().verdict(platform);
                let result = &publication.results()[&platform];
                println!("{}", platform);
                println!("{:-<80}", "");
                println!(
                    "Characters: {}/{}{}",
                    result.length(),
                    result.limit(),
                    if *result.truncated() { " (truncated)" } else { "" }
                );
                println!(
                    "Media: {}",
                    if publication.is_available(platform) {
                        "supported".to_string()
                    } else {
                        format!("not supported - {}", verdict.message())
                    }
                );
                println!();
                println!("{}", result.optimized_text());
                println!();
            }

            if !publication.report().warnings().is_empty() {
                println!("Warnings");
                println!("{:-<80}", "");
                for warning in publication.report().warnings() {
                    println!("- {}", warning);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> CrosspostResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ConfigError::new(ConfigErrorKind::Output(e.to_string())))?;
    println!("{}", json);
    Ok(())
}
