use crate::{ClientError, ClientResult, TOKEN_PATH};

use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Exchange client credentials for a Management API access token.
///
/// # Arguments
/// * `base_url` - Tenant URL (e.g., "https://tenant.auth0.com")
/// * `audience` - Management API identifier, normally `{base_url}/api/v2/`
pub async fn fetch_client_credentials_token(
    client: &ReqwestClient,
    base_url: &str,
    client_id: &str,
    client_secret: &str,
    audience: &str,
) -> ClientResult<String> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), TOKEN_PATH);
    let body = TokenRequest {
        grant_type: "client_credentials",
        client_id,
        client_secret,
        audience,
    };

    let response = client.post(&url).json(&body).send().await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let rejected = ClientError::from_response(status.as_u16(), &text);
        return Err(ClientError::token(rejected.to_string()));
    }

    let token: TokenResponse = serde_json::from_str(&text)?;
    if token.access_token.is_empty() {
        return Err(ClientError::token("token endpoint returned an empty access_token"));
    }

    debug!(
        "Obtained management token for client {} (expires in {}s)",
        client_id,
        token.expires_in.unwrap_or(0)
    );

    Ok(token.access_token)
}
