use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Connection settings for the Auth0 Management API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ManagementConfig {
    /// Tenant domain, e.g. "example.eu.auth0.com". May carry an explicit scheme.
    pub domain: String,
    /// Pre-issued Management API token. Takes precedence over client credentials.
    pub api_token: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Per-request timeout applied by the HTTP client
    pub timeout_secs: u64,
}

impl Default for ManagementConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            api_token: None,
            client_id: None,
            client_secret: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ManagementConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.domain.trim().is_empty() {
            return Err(ConfigError::management("management.domain is required"));
        }

        if self.token().is_none() && self.client_credentials().is_none() {
            return Err(ConfigError::management(
                "either management.api_token or both management.client_id and management.client_secret must be set",
            ));
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::management(format!(
                "management.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Base URL of the tenant. A bare domain gets `https://`.
    pub fn base_url(&self) -> String {
        let domain = self.domain.trim().trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        }
    }

    /// Audience requested by the client-credentials exchange
    pub fn audience(&self) -> String {
        format!("{}/api/v2/", self.base_url())
    }

    /// The static token, if one is set. A blank value counts as unset.
    pub fn token(&self) -> Option<&str> {
        non_blank(&self.api_token)
    }

    /// `(client_id, client_secret)` when both are set and non-blank
    pub fn client_credentials(&self) -> Option<(&str, &str)> {
        Some((non_blank(&self.client_id)?, non_blank(&self.client_secret)?))
    }

    /// Which auth mode `validate()` accepted, for logging
    pub fn auth_mode(&self) -> &'static str {
        if self.token().is_some() {
            "api_token"
        } else if self.client_credentials().is_some() {
            "client_credentials"
        } else {
            "none"
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
