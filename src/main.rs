use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Configuration front-end for the utilicss generator
///
/// Loads and validates the project's build configuration before any
/// scanning or generation work starts.
#[derive(Parser, Debug)]
#[command(name = "utilicss-config")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file to load
    ///
    /// If not specified, resolves in order:
    /// 1. ./utilicss.toml
    /// 2. $UTILICSS_CONFIG
    /// 3. <config dir>/utilicss/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved document as JSON for the generator
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt().with_env_filter(filter).with_target(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    setup_logging(&args.log_level, args.log_file)?;

    info!("Starting utilicss-config v{}", env!("CARGO_PKG_VERSION"));

    // Build the plugin registry
    let loader = match utilicss_config::ConfigLoader::new() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to initialize plugin registry: {}", e);
            return Err(e.into());
        }
    };

    // Load and validate the declaration
    let result = match &args.config {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    };

    let document = match result {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Configuration loaded successfully");

    // Lint findings are advisory; they never fail the run
    for warning in utilicss_config::lint(&document) {
        warn!("{}", warning);
    }

    if args.json {
        println!("{}", document.to_json()?);
    } else {
        println!(
            "configuration OK: {} content patterns, dark mode '{}', {} plugins",
            document.content.len(),
            document.dark_mode,
            document.plugins.len()
        );
    }

    Ok(())
}
