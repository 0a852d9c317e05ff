pub mod company;
pub mod hubspot;
pub mod models;
pub mod news;

// Re-exports
pub use models::*;

use axum::{routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "HubSpot Quirky News Integration API".to_string(),
    })
}

// Health never touches the store
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Full application router with CORS and request tracing
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
        .merge(company::routes())
        .merge(news::routes())
        .merge(hubspot::routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
