use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form `user_metadata` / `app_metadata` map
pub type Metadata = BTreeMap<String, Value>;

/// A user as the Management API reads and writes it.
///
/// Every field is optional so "not sent" and "not returned" stay distinct
/// from empty values. Unset fields are left out of request bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "user_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
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

impl User {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == User::default()
    }

    /// Names of the fields that are set, in wire order. Used for logging
    /// request shapes without their values.
    pub fn set_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let mut mark = |set: bool, name: &'static str| {
            if set {
                fields.push(name);
            }
        };

        mark(self.id.is_some(), "user_id");
        mark(self.connection.is_some(), "connection");
        mark(self.email.is_some(), "email");
        mark(self.username.is_some(), "username");
        mark(self.password.is_some(), "password");
        mark(self.phone_number.is_some(), "phone_number");
        mark(self.user_metadata.is_some(), "user_metadata");
        mark(self.app_metadata.is_some(), "app_metadata");
        mark(self.email_verified.is_some(), "email_verified");
        mark(self.verify_email.is_some(), "verify_email");
        mark(self.phone_verified.is_some(), "phone_verified");

        fields
    }
}
