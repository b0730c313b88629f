pub mod handlers;
pub mod models;
pub mod routes;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{extract::Extension, http::Method};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::qa::StarWarsQa;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// `None` when startup failed; every question is then refused
    pub qa: Option<StarWarsQa>,
}

/// Serve the web chat until Ctrl-C
pub async fn run_server(host: &str, port: u16, qa: Option<StarWarsQa>) -> Result<()> {
    if qa.is_none() {
        warn!("QA system not initialized; /ask will report an error");
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    let app = routes::chat_router()
        .layer(Extension(AppState { qa }))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Web chat starting on http://{}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web chat stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
