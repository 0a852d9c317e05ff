use crate::api::models::HubspotSetupResponse;
use axum::Json;

const AUTHORIZE_URL: &str = "https://app.hubspot.com/oauth/authorize";
const PLACEHOLDER_CLIENT_ID: &str = "YOUR_CLIENT_ID";
const PLACEHOLDER_REDIRECT_URI: &str = "YOUR_REDIRECT_URI";
const SCOPE: &str = "contacts";

/// OAuth setup placeholder; no HubSpot app is configured yet
pub async fn setup_handler() -> Json<HubspotSetupResponse> {
    Json(HubspotSetupResponse {
        is_configured: false,
        auth_url: format!(
            "{AUTHORIZE_URL}?client_id={PLACEHOLDER_CLIENT_ID}&scope={SCOPE}&redirect_uri={PLACEHOLDER_REDIRECT_URI}"
        ),
    })
}
