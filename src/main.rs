use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use developer_registry::api::{create_app, AppState};
use developer_registry::config::ConfigLoader;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Developer registry HTTP service.
///
/// Loads server settings and tax rates from a configuration directory and
/// serves the developer endpoints.
#[derive(Debug, Parser)]
struct Cli {
    /// Directory containing service.yaml and tax_rates.yaml.
    #[arg(long, env = "DEVELOPER_REGISTRY_CONFIG", default_value = "./config")]
    config: PathBuf,

    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// Honours `RUST_LOG` when set and falls back to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?
        .into_config();
    if let Some(port) = cli.port {
        config.server_mut().port = port;
    }

    let state = AppState::from_config(&config);
    let app = create_app(state, config.server());

    let address = config.server().bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;

    info!(
        address = %address,
        context_path = %config.server().context_path,
        app = %config.info().name,
        version = %config.info().version,
        "Developer registry listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Developer registry stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
    }
}
