use axum::{
    routing::{get, post},
    Router,
};

use crate::server::handlers;

/// Create the chat router
pub fn chat_router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/ask", post(handlers::ask))
        .route("/health", get(handlers::health_check))
}
