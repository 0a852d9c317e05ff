use crate::api::company::handlers::{
    create_company_handler, get_company_handler, list_companies_handler,
};
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/companies", get(list_companies_handler))
        .route(
            "/api/company-info",
            get(get_company_handler).post(create_company_handler),
        )
}
