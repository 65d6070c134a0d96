pub mod auth;
pub mod extract;
pub mod middleware;
pub mod state;
pub mod tickets;

pub use state::AppState;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Treat absent and empty strings alike
pub(crate) fn require(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn create_router(state: AppState) -> Router {
    // Ticket endpoints carry bearer authentication
    let authenticated = Router::new()
        .route("/api/tickets", post(tickets::create_ticket))
        .route("/api/admin/tickets", get(tickets::list_tickets))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ));

    Router::new()
        // Health check
        .route("/api/health", get(health))

        // Account endpoints
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))

        .merge(authenticated)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
