//! cashpoint-api — banknote withdrawal HTTP service.
//!
//! Serves `POST /withdraw/:amount` backed by greedy note selection over a
//! configurable denomination set, plus `GET /denominations` for the
//! configured note values.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cashpoint_api_lib::{routes, ApiConfig, AppState};
use cashpoint_core::{DenominationSet, Teller};

/// Cashpoint withdrawal API.
#[derive(Parser, Debug)]
#[command(
    name = "cashpoint-api",
    version,
    about = "Banknote withdrawal service with greedy note selection"
)]
struct Args {
    /// Address to bind the HTTP server
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,

    /// Note values to dispense, largest first (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "200,100,50,20,10,5,2")]
    denominations: Vec<i64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Convert CLI args into a validated service configuration.
    ///
    /// Refuses to start on a set that is empty, non-positive, or not
    /// strictly descending.
    fn into_config(self) -> Result<ApiConfig> {
        let denominations =
            DenominationSet::new(self.denominations).context("invalid --denominations")?;

        Ok(ApiConfig {
            bind_addr: self.bind,
            denominations,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.log_level.clone())),
        )
        .init();

    let config = args.into_config()?;

    info!(
        bind = %config.bind_addr,
        denominations = %config.denominations,
        smallest = config.denominations.smallest(),
        "Starting cashpoint-api"
    );

    let state = AppState {
        teller: Arc::new(Teller::new(config.denominations.clone())),
    };

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("HTTP server error")?;

    Ok(())
}
