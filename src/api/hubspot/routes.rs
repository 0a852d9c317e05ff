use crate::api::hubspot::handlers::setup_handler;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/hubspot/setup", get(setup_handler))
}
