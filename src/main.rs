use std::str::FromStr;
use clap::Parser;
use log::{ debug, error, info };
use anyhow::Result;

use fraudlens::{ build_provider, DetectorConfig, DetectorError, FraudDetectionAgent, ProviderKind };

mod cli;
use cli::{ Commands, FraudlensCli, OutputFormat };

#[tokio::main]
async fn main() {
    // Parse the command line arguments
    let cli = FraudlensCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        cli::ui::print_error(&format!("{:#}", e));
        std::process::exit(exit_status(&e));
    }
}

/// 2 when the media itself is unusable, 1 for everything else
fn exit_status(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DetectorError>() {
        Some(e) if e.is_input_error() => 2,
        _ => 1,
    }
}

async fn run(cli: FraudlensCli) -> Result<()> {
    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment variables from {}", path.display()),
        Err(_) => debug!("No .env file loaded"),
    }

    let format = OutputFormat::parse(&cli.output_format)?;

    // Parse mode needs no provider
    if let Commands::Parse { input } = &cli.command {
        return cli::commands::parse::execute(input, format);
    }

    let config = load_config(&cli)?;
    let provider = build_provider(&config)?;
    let agent = FraudDetectionAgent::new(provider);

    match &cli.command {
        Commands::Image { path, save } => {
            cli::commands::image::execute(&agent, path, format, save.as_deref()).await?;
        }

        Commands::Video { path, frames, save } => {
            let sample_frames = frames.unwrap_or_else(|| config.sample_frames());
            cli::commands::video::execute(
                &agent,
                path,
                sample_frames,
                format,
                save.as_deref()
            ).await.map_err(|e| {
                if let Some(DetectorError::FrameExtraction(_)) = e.downcast_ref::<DetectorError>() {
                    cli::ui::print_warning("Frame extraction needs ffmpeg and ffprobe on PATH");
                }
                e
            })?;
        }

        Commands::Parse { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Config file first, then command-line overrides
fn load_config(cli: &FraudlensCli) -> Result<DetectorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            DetectorConfig::from_file(path)?
        }
        None => DetectorConfig::default(),
    };

    if let Some(provider) = &cli.provider {
        config.provider = Some(ProviderKind::from_str(provider)?);
    }
    if let Some(model) = &cli.model {
        config.model = Some(model.clone());
    }

    debug!("Effective provider: {}, model: {}", config.provider(), config.model());
    Ok(config)
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    debug!("Logger initialized with level: {}", log_level);
}
