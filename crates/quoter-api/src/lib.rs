//! REST surface over the pricing engine and quote store.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use http::Method;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod handlers;
pub mod intake;
pub mod messages;
pub mod state;

pub use state::AppState;

/// Request body ceiling: the 50 MiB upload cap plus room for multipart
/// framing, so the intake check is the one that rejects oversized files.
const BODY_LIMIT_BYTES: usize = 64 * 1024 * 1024;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/materials", get(handlers::list_materials))
        .route("/api/analyze", post(handlers::analyze))
        .route(
            "/api/quotes",
            get(handlers::list_quotes).post(handlers::save_quote),
        )
        .route(
            "/api/quotes/{id}",
            get(handlers::get_quote).delete(handlers::delete_quote),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}
