use crate::api::models::AppState;
use crate::api::news::handlers::quirky_news_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/quirky-news", get(quirky_news_handler))
}
