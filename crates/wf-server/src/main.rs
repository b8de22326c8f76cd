//! wf-server: serves the built studio front end and its locale bundles.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wf_server::ServerConfig;
use wf_telemetry::logging::{self, LogFormat};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Static server for the AI Workflow Studio single-page app.
#[derive(Parser)]
#[command(name = "wf-server", version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address from the config file.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = ServerConfig::load(cli.config.as_deref()).context("failed to load server config")?;
    if let Some(bind) = cli.bind {
        cfg.bind = bind;
        cfg.validate().context("invalid --bind")?;
    }

    logging::init("wf-server", &cfg.log_level, LogFormat::from_json_flag(cfg.log_json));

    wf_server::serve(cfg).await.context("server exited with error")?;
    Ok(())
}
