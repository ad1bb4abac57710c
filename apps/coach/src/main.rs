use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coach::coaching::coach::SimulatedCoach;
use coach::config::Config;
use coach::routes::build_router;
use coach::state::AppState;
use coach::CoachTables;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Coach API v{}", env!("CARGO_PKG_VERSION"));

    // Keyword tables: built-in unless overridden
    let tables = match &config.tables_path {
        Some(path) => {
            let tables = CoachTables::from_json_file(path)
                .with_context(|| format!("Failed to load keyword tables from {path}"))?;
            info!("Keyword tables loaded from {path}");
            tables
        }
        None => CoachTables::default(),
    };

    if config.seed.is_some() {
        info!("Coach seeded; question and phrase selection is reproducible");
    }
    let coach = Arc::new(SimulatedCoach::new(Arc::new(tables), config.seed));

    let state = AppState {
        config: config.clone(),
        coach,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
