//! Crosspost CLI binary.
//!
//! This binary provides command-line access to Crosspost's functionality:
//! - Optimize a post and check its media for every platform
//! - Plan and dry-run the Telegram delivery
//! - Inspect the effective platform configuration

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, handle_config_command, handle_plan_command, handle_prepare_command,
        load_config,
    };

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = load_config(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Prepare { input, format } => {
            handle_prepare_command(config, &input, format).await?;
        }

        Commands::Plan { input, channel } => {
            handle_plan_command(config, &input, &channel).await?;
        }

        Commands::Config { format } => {
            handle_config_command(&config, format)?;
        }
    }

    Ok(())
}
