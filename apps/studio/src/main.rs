mod config;
mod editor;
mod errors;
mod export;
mod models;
mod render;
mod routes;
mod session;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::{Exporter, GotenbergConverter, SystemBrowserViewport};
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Studio v{}", env!("CARGO_PKG_VERSION"));

    let store = storage::build_store(&config).await?;
    let session = Session::start(store).await;

    let converter = GotenbergConverter::new(
        config.converter_url.clone(),
        Duration::from_secs(config.converter_timeout_secs),
    )?;
    info!("PDF converter: {}", config.converter_url);
    let exporter = Exporter::new(Arc::new(converter), Arc::new(SystemBrowserViewport::default()));
    info!(
        "Export options: {:?} {:?}, margins {:?}in",
        exporter.options().format,
        exporter.options().orientation,
        exporter.options().margins_in
    );

    let state = AppState::new(session, exporter);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
