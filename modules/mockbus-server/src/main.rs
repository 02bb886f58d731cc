use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use mockbus_server::routes;
use mockbus_server::state::AppState;

#[derive(Parser)]
#[command(
    name = "mockbus-server",
    about = "Message-bus emulator for order-management integration testing"
)]
struct Cli {
    /// Path to config TOML file
    #[arg(long, default_value = "./config/mockbus.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.canonicalize().with_context(|| {
        format!(
            "Config file not found: {}. Create one or specify --config <path>",
            cli.config.display()
        )
    })?;
    tracing::info!(config = %config_path.display(), "Loading config");

    let config = mockbus_common::config::load_config(&config_path)?;
    tracing::info!(
        status_rules = config.export.status.len(),
        aggregates = config.export.aggregates.len(),
        "Export rules loaded"
    );

    let state = Arc::new(AppState::from_config(&config));
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.server.port);
    tracing::info!("mockbus-server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
