use crate::{
    ClientError, ClientResult, USERS_PATH, User, UserApi, token::fetch_client_credentials_token,
};

use std::time::Duration;

use a0_config::ManagementConfig;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for the Management API user endpoints
pub struct ManagementClient {
    pub base_url: String,
    token: String,
    client: ReqwestClient,
}

impl ManagementClient {
    /// Create a new client with a pre-issued token
    ///
    /// # Arguments
    /// * `base_url` - Tenant URL (e.g., "https://tenant.auth0.com")
    /// * `token` - Management API bearer token
    pub fn new(base_url: &str, token: &str) -> Self {
        Self::with_http_client(base_url, token, ReqwestClient::new())
    }

    fn with_http_client(base_url: &str, token: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        }
    }

    /// Build a client from configuration.
    ///
    /// Uses a non-blank `api_token` when present, otherwise exchanges the client
    /// credentials for a token. Call `ManagementConfig::validate` first.
    pub async fn from_config(config: &ManagementConfig) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base_url = config.base_url();

        let token = match (config.token(), config.client_credentials()) {
            (Some(token), _) => token.to_string(),
            (None, Some((client_id, client_secret))) => {
                fetch_client_credentials_token(
                    &client,
                    &base_url,
                    client_id,
                    client_secret,
                    &config.audience(),
                )
                .await?
            }
            _ => {
                return Err(ClientError::token(
                    "no api_token or client credentials configured",
                ));
            }
        };

        Ok(Self::with_http_client(&base_url, &token, client))
    }

    /// URL of a single user. The id is percent-encoded as one path segment.
    pub fn user_url(&self, id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            USERS_PATH,
            urlencoding::encode(id)
        )
    }

    fn users_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    /// Build an authenticated request
    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.client.request(method, url).bearer_auth(&self.token)
    }

    /// Execute request and map error statuses.
    ///
    /// `id` is the user the request addresses; a 404 for it becomes
    /// `ClientError::NotFound`.
    async fn execute(&self, req: reqwest::RequestBuilder, id: Option<&str>) -> ClientResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        if status == StatusCode::NOT_FOUND
            && let Some(id) = id
        {
            return Err(ClientError::not_found(id));
        }

        Err(ClientError::from_response(status.as_u16(), &body))
    }

    fn decode<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl UserApi for ManagementClient {
    async fn create_user(&self, user: &User) -> ClientResult<User> {
        debug!("POST {} fields={:?}", USERS_PATH, user.set_fields());
        let req = self.request(Method::POST, &self.users_url()).json(user);
        let body = self.execute(req, None).await?;
        Self::decode(&body)
    }

    async fn read_user(&self, id: &str) -> ClientResult<User> {
        debug!("GET {}/{}", USERS_PATH, id);
        let req = self.request(Method::GET, &self.user_url(id));
        let body = self.execute(req, Some(id)).await?;
        Self::decode(&body)
    }

    async fn update_user(&self, id: &str, user: &User) -> ClientResult<User> {
        debug!("PATCH {}/{} fields={:?}", USERS_PATH, id, user.set_fields());
        let req = self.request(Method::PATCH, &self.user_url(id)).json(user);
        let body = self.execute(req, Some(id)).await?;
        Self::decode(&body)
    }

    async fn delete_user(&self, id: &str) -> ClientResult<()> {
        debug!("DELETE {}/{}", USERS_PATH, id);
        let req = self.request(Method::DELETE, &self.user_url(id));
        self.execute(req, Some(id)).await?;
        Ok(())
    }
}
