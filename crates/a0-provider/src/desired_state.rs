use crate::{Metadata, ResourceError, ResourceResult};

use serde::{Deserialize, Serialize};

/// Namespace tag of database-connection user ids
pub const USER_ID_PREFIX: &str = "auth0|";

/// Stored/displayed form of a configured user id. Ids that already carry
/// the tag are returned unchanged.
pub fn state_user_id(raw: &str) -> String {
    if raw.starts_with(USER_ID_PREFIX) {
        raw.to_string()
    } else {
        format!("{}{}", USER_ID_PREFIX, raw)
    }
}

/// Declared attributes of an `auth0_user` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesiredState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Connection the user belongs to. Required for create and update.
    pub conn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_verified: Option<bool>,
}

impl DesiredState {
    pub fn new<S: Into<String>>(conn: S) -> Self {
        Self {
            conn: conn.into(),
            ..Default::default()
        }
    }

    /// Checks required before any write reaches the API
    pub fn validate(&self) -> ResourceResult<()> {
        if self.conn.trim().is_empty() {
            return Err(ResourceError::validation("conn is required"));
        }

        if let Some(ref user_id) = self.user_id
            && user_id.trim().is_empty()
        {
            return Err(ResourceError::validation("user_id cannot be empty when set"));
        }

        Ok(())
    }

    /// Whether both states name the same user, comparing ids in stored
    /// form. A state without `user_id` matches any other.
    pub fn same_user(&self, other: &Self) -> bool {
        match (self.user_id.as_deref(), other.user_id.as_deref()) {
            (Some(ours), Some(theirs)) => state_user_id(ours) == state_user_id(theirs),
            _ => true,
        }
    }
}
