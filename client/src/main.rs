pub mod command;
pub mod config;
pub mod game;
pub mod render;
pub mod ui;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Config, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(name = "tris", version)]
#[command(about = "Tic-tac-toe in the terminal, with a browsable move history")]
struct Args {
    /// Path to the JSON config file; created with defaults if missing
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Err(e) = start_app(&args.config) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn start_app(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    if !config_path.exists() {
        config.save_to(config_path)?;
    }

    if !config.use_color {
        colored::control::set_override(false);
    }

    init_logging(&config.log_file)?;
    info!(config = %config_path.display(), "starting tris");

    game::run(config)
}

/// Logs go to a file so they don't garble the interactive screen
fn init_logging(log_file: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {log_file}"))?;

    let filter = EnvFilter::try_from_env("TRIS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
