//! Obesity Category Dashboard Server
//!
//! Loads the dataset once, then renders the dashboard for every request.

mod api;
mod config;
mod error;

use std::sync::Arc;

use clap::Parser;
use obesity_dash::data::{self, RecordTable};
use obesity_dash::selection::SelectionOptions;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Application state shared across handlers
pub struct AppState {
    pub table: RecordTable,
    pub options: SelectionOptions,
    pub config: Config,
}

impl AppState {
    pub fn new(table: RecordTable, config: Config) -> Self {
        let options = SelectionOptions::from_schema(table.schema());
        Self {
            table,
            options,
            config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "obesity_dash_server=debug,obesity_dash=info,tower_http=debug".into()
            }),
        )
        .init();

    // Parse CLI args
    let config = Config::parse();

    // The fetch is the only blocking step; a failure here is fatal.
    let source = config.source();
    let table = tokio::task::spawn_blocking(move || data::load(&source))
        .await?
        .map_err(|report| anyhow::anyhow!("{report:?}"))?;

    let state = Arc::new(AppState::new(table, config.clone()));
    let app = api::router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let url = format!("http://{}", addr);
    info!("Listening on {}", url);

    if config.open {
        if let Err(e) = open::that(&url) {
            warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}
