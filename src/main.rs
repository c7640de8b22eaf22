mod config;
mod logging;
mod render;

use anyhow::{Context, Result};
use appnotif_builder::XmlPolicy;
use clap::Parser;
use config::AppConfig;
use logging::LogConfig;
use render::NotificationSpec;
use std::path::PathBuf;

/// Render a Windows app notification payload from a JSON description
#[derive(Debug, Parser)]
#[command(name = "appnotif", version)]
struct Cli {
    /// JSON file describing texts and buttons
    spec: PathBuf,

    /// Config file (defaults to ~/.appnotif/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Quote and escape every interpolated value
    #[arg(long)]
    escaped: bool,

    /// Check the button limit and, when escaped, well-formedness
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };
    let config = AppConfig::load_from_path(&config_path)?;

    // Keep the guard alive for the entire application lifetime
    let _log_guard = logging::init_logging(LogConfig::from(&config))
        .context("Failed to initialize logging system")?;

    let policy = if cli.escaped || config.escape_values {
        XmlPolicy::Escaped
    } else {
        XmlPolicy::Verbatim
    };

    let toast = NotificationSpec::load(&cli.spec)?.build(policy)?;

    if cli.validate {
        toast.validate().context("Notification payload is invalid")?;
    }

    println!("{}", toast.to_xml());

    tracing::info!(target: "main", ?policy, "Notification payload rendered");

    Ok(())
}
