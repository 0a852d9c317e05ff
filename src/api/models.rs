use crate::storage::records::new_id;
use crate::storage::{Company, CompanyStore, NewsItem, QuirkFactor, StoreError};
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompanyStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CompanyStore>) -> Self {
        Self { store }
    }
}

/// Query for a single company
#[derive(Debug, Deserialize)]
pub struct CompanyInfoQuery {
    pub name: String,
}

/// Query for quirky news
#[derive(Debug, Deserialize)]
pub struct QuirkyNewsQuery {
    pub company_name: String,
}

/// Body of `POST /api/company-info`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub quirk_news: Vec<NewNewsItem>,
}

/// A news item as submitted by a client
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsItem {
    #[serde(default)]
    pub id: Option<String>,
    pub headline: String,
    pub source: String,
    pub date: String,
    pub quirk_factor: i64,
    pub summary: String,
    pub sentiment: String,
    pub url: String,
}

/// Greeting at `/`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Quirky news for one company
#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub news: Vec<NewsItem>,
}

/// HubSpot OAuth setup placeholder
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HubspotSetupResponse {
    pub is_configured: bool,
    pub auth_url: String,
}

/// One failed field check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

fn assign_id(id: Option<String>) -> String {
    id.filter(|id| !id.is_empty()).unwrap_or_else(new_id)
}

impl CreateCompanyRequest {
    /// Check the body and build the document to persist.
    ///
    /// Collects every failing field instead of stopping at the first one.
    /// Missing identifiers are generated here.
    pub fn validate(self) -> Result<Company, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => Some(name),
            Some(_) => {
                errors.push(FieldError::new("name", "Company name cannot be empty"));
                None
            }
            None => {
                errors.push(FieldError::new("name", "Field required"));
                None
            }
        };

        let mut quirk_news = Vec::with_capacity(self.quirk_news.len());
        for (i, item) in self.quirk_news.into_iter().enumerate() {
            match QuirkFactor::try_from(item.quirk_factor) {
                Ok(quirk_factor) => quirk_news.push(NewsItem {
                    id: assign_id(item.id),
                    headline: item.headline,
                    source: item.source,
                    date: item.date,
                    quirk_factor,
                    summary: item.summary,
                    sentiment: item.sentiment,
                    url: item.url,
                }),
                Err(e) => errors.push(FieldError::new(
                    format!("quirkNews[{i}].quirkFactor"),
                    e.to_string(),
                )),
            }
        }

        match name {
            Some(name) if errors.is_empty() => Ok(Company {
                id: assign_id(self.id),
                name,
                industry: self.industry,
                quirk_news,
            }),
            _ => Err(errors),
        }
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Validation(Vec<FieldError>),
    NotFound(String),
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(vec![FieldError::new("query", rejection.body_text())])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail, fields) = match self {
            AppError::Validation(fields) => {
                let detail = fields
                    .iter()
                    .map(|f| format!("{}: {}", f.field, f.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                (StatusCode::UNPROCESSABLE_ENTITY, detail, fields)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, Vec::new())
            }
        };

        (status, Json(ErrorResponse {
            error: status.to_string(),
            detail,
            fields,
        }))
        .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quirk_factor: i64) -> NewNewsItem {
        NewNewsItem {
            id: None,
            headline: "Office goat elected to board".into(),
            source: "Daily Bleat".into(),
            date: "May 2, 2025".into(),
            quirk_factor,
            summary: "It abstained.".into(),
            sentiment: "🐐".into(),
            url: "#".into(),
        }
    }

    fn request(name: Option<&str>, news: Vec<NewNewsItem>) -> CreateCompanyRequest {
        CreateCompanyRequest {
            id: None,
            name: name.map(str::to_string),
            industry: Some("Agriculture".into()),
            quirk_news: news,
        }
    }

    #[test]
    fn valid_request_gets_identifiers() {
        let company = request(Some("Goat Co"), vec![item(1), item(5)]).validate().unwrap();
        assert!(!company.id.is_empty());
        assert_eq!(company.quirk_news.len(), 2);
        assert!(company.quirk_news.iter().all(|n| !n.id.is_empty()));
        assert_eq!(company.industry.as_deref(), Some("Agriculture"));
    }

    #[test]
    fn supplied_identifier_is_kept() {
        let mut req = request(Some("Goat Co"), vec![]);
        req.id = Some("fixed-id".into());
        assert_eq!(req.validate().unwrap().id, "fixed-id");
    }

    #[test]
    fn every_bad_field_is_reported() {
        let errors = request(None, vec![item(3), item(0), item(6)])
            .validate()
            .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["name", "quirkNews[1].quirkFactor", "quirkNews[2].quirkFactor"]
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = request(Some("   "), vec![]).validate().unwrap_err();
        assert_eq!(errors[0].field, "name");
    }
}
