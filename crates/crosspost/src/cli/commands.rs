//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use crosspost::{LinkWrapMode, OptimizationOptions, Platform};
use std::path::PathBuf;

/// Crosspost - adapt one post and its media for Twitter, LinkedIn and Telegram
#[derive(Parser, Debug)]
#[command(name = "crosspost")]
#[command(about = "Adapt one post and its media for Twitter, LinkedIn and Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the built-in limits
    #[arg(long, global = true, env = "CROSSPOST_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Optimize content and check media for every platform
    Prepare {
        #[command(flatten)]
        input: PostInput,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Plan the Telegram delivery and run it against the no-op transport
    Plan {
        #[command(flatten)]
        input: PostInput,

        /// Target channel identifier
        #[arg(long, default_value = "@dry_run", env = "TELEGRAM_CHANNEL_ID")]
        channel: String,
    },

    /// Show the effective configuration and its warnings
    Config {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Content and media of a post
#[derive(Args, Debug)]
pub struct PostInput {
    /// Post content
    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    pub content: Option<String>,

    /// Read the post content from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Media file to attach (repeatable)
    #[arg(long = "media")]
    pub media: Vec<PathBuf>,

    /// Publish raw content on this platform (repeatable)
    #[arg(long = "skip-optimization")]
    pub skip_optimization: Vec<Platform>,

    /// Leave URLs that already are markdown link targets untouched
    #[arg(long)]
    pub source_aware_links: bool,
}

impl PostInput {
    /// Optimization options selected on the command line.
    pub fn options(&self) -> OptimizationOptions {
        let link_wrap = if self.source_aware_links {
            LinkWrapMode::SourceAware
        } else {
            LinkWrapMode::RunningOutput
        };

        self.skip_optimization.iter().fold(
            OptimizationOptions::default().with_link_wrap(link_wrap),
            |options, platform| options.with_platform(*platform, false),
        )
    }

    /// Post content from the argument or the content file.
    pub async fn read_content(&self) -> std::io::Result<String> {
        match (&self.content, &self.content_file) {
            (Some(content), _) => Ok(content.clone()),
            (None, Some(path)) => tokio::fs::read_to_string(path).await,
            (None, None) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "either --content or --content-file is required",
            )),
        }
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
