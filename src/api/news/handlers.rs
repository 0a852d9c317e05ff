use crate::api::models::*;
use crate::storage::sample;
use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use tracing::info;

/// Quirky news for a company.
///
/// Served from the sample dataset only until a news provider is wired in;
/// an unknown company yields an empty list, never a 404.
pub async fn quirky_news_handler(
    query: Result<Query<QuirkyNewsQuery>, QueryRejection>,
) -> Result<Json<NewsResponse>, AppError> {
    let Query(query) = query?;
    let news = sample::quirky_news_for(&query.company_name);

    info!(company = %query.company_name, found = news.len(), "Quirky news");

    Ok(Json(NewsResponse { news }))
}
