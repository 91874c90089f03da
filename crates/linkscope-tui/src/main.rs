//! Linkscope TUI entry point.

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::Parser;
use linkscope_client::Endpoint;
use linkscope_proto::Role;
use linkscope_tui::{AppConfig, Runtime, TerminalDriver, TerminalError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Linkscope terminal client
#[derive(Parser, Debug)]
#[command(name = "linkscope-tui")]
#[command(about = "Terminal client for the adaptive link demo relay")]
#[command(version)]
struct Args {
    /// Relay address (http, https, ws or wss)
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    server: String,

    /// Viewer role: tx (sender) or rx (receiver)
    #[arg(short, long, default_value = "tx")]
    role: Role,

    /// Room to join on startup
    #[arg(long)]
    room: Option<String>,

    /// Initial password
    #[arg(short, long, default_value = "")]
    password: String,

    /// Directory for saved downloads
    #[arg(short, long, default_value = ".")]
    download_dir: PathBuf,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(path: &Path, level: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    let endpoint = Endpoint::resolve(&args.server).map_err(TerminalError::Endpoint)?;
    tracing::info!(endpoint = endpoint.as_str(), role = %args.role, "starting");

    let mut config = AppConfig::new(endpoint, args.role);
    config.room = args.room;
    config.password = args.password;
    config.download_dir = args.download_dir;

    let driver = TerminalDriver::new()?;
    Ok(Runtime::new(driver, config).run().await?)
}
