use crate::api::models::*;
use crate::storage::{directory, Company, CompanyLookup, LIST_LIMIT};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use tracing::info;

pub async fn list_companies_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, AppError> {
    let listing = directory::list_companies(state.store.as_ref(), LIST_LIMIT).await?;
    let tier = listing.tier();
    let companies = listing.into_companies();

    info!(tier, count = companies.len(), "Listed companies");

    Ok(Json(companies))
}

pub async fn get_company_handler(
    State(state): State<AppState>,
    query: Result<Query<CompanyInfoQuery>, QueryRejection>,
) -> Result<Json<Company>, AppError> {
    let Query(query) = query?;
    if query.name.is_empty() {
        return Err(AppError::Validation(vec![FieldError::new(
            "name",
            "Company name cannot be empty",
        )]));
    }

    let lookup = directory::lookup_company(state.store.as_ref(), &query.name).await?;
    info!(name = %query.name, tier = lookup.tier(), "Company lookup");

    match lookup {
        CompanyLookup::Stored(company) | CompanyLookup::Sample(company) => Ok(Json(company)),
        CompanyLookup::NotFound => Err(AppError::NotFound(format!(
            "Company {} not found",
            query.name
        ))),
    }
}

pub async fn create_company_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> Result<Json<Company>, AppError> {
    let Json(request) = payload?;
    let company = request.validate().map_err(AppError::Validation)?;

    let storage_id = state.store.insert_company(&company).await?;

    info!(
        id = %company.id,
        storage_id = %storage_id,
        name = %company.name,
        news = company.quirk_news.len(),
        "Company created"
    );

    Ok(Json(company))
}
