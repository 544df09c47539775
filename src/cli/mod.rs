use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "fraudlens",
    about = "Analyze videos and images for AI-generated content",
    version,
    author,
    long_about = None
)]
pub struct FraudlensCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// LLM provider to use (ollama, openai, anthropic)
    #[arg(short, long, global = true)]
    pub provider: Option<String>,

    /// Model name to use
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single image or frame
    Image {
        /// Path to the image
        path: PathBuf,

        /// Write a JSON report to this file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Sample frames from a video and analyze each
    Video {
        /// Path to the video
        path: PathBuf,

        /// Number of frames to sample (default: 5, or sample_frames from config)
        #[arg(short, long)]
        frames: Option<usize>,

        /// Write a JSON report to this file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Parse a saved raw model reply without calling a provider
    Parse {
        /// File holding the reply, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> anyhow::Result<Self> {
        match format.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("Unsupported output format: {}", format)),
        }
    }
}
