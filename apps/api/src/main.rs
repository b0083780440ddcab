mod companies;
mod compare;
mod config;
mod documents;
mod errors;
mod reality;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::companies::StaticCompanyDirectory;
use crate::config::Config;
use crate::documents::{DocumentStore, InMemoryDocumentStore, RedisDocumentStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Off-Radar API v{}", env!("CARGO_PKG_VERSION"));

    // Load the company catalog
    let directory = match &config.company_data_path {
        Some(path) => StaticCompanyDirectory::from_path(path)?,
        None => StaticCompanyDirectory::embedded()?,
    };
    info!("Company directory ready ({} companies)", directory.len());

    // Initialize the document store
    let documents: Arc<dyn DocumentStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisDocumentStore::open(url)?),
        None => Arc::new(InMemoryDocumentStore::new()),
    };
    info!("Document store initialized (backend: {})", documents.backend());

    info!(
        "Reality heuristics: base={} bonus={} tax={}/{} above {} LPA",
        config.reality.financial.base_ratio,
        config.reality.financial.bonus_ratio,
        config.reality.financial.low_tax_rate,
        config.reality.financial.high_tax_rate,
        config.reality.financial.tax_threshold_lpa
    );

    // Build app state
    let state = AppState {
        directory: Arc::new(directory),
        documents,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
