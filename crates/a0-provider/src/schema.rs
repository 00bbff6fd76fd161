use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    String,
    Bool,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub required: bool,
    /// Never echoed by the API
    pub sensitive: bool,
}

const fn attribute(name: &'static str, kind: AttributeKind) -> AttributeSchema {
    AttributeSchema {
        name,
        kind,
        required: false,
        sensitive: false,
    }
}

/// Attributes of `auth0_user`, in declaration order
pub const USER_SCHEMA: &[AttributeSchema] = &[
    attribute("user_id", AttributeKind::String),
    AttributeSchema {
        required: true,
        ..attribute("conn", AttributeKind::String)
    },
    attribute("email", AttributeKind::String),
    attribute("username", AttributeKind::String),
    AttributeSchema {
        sensitive: true,
        ..attribute("password", AttributeKind::String)
    },
    attribute("phone_number", AttributeKind::String),
    attribute("user_metadata", AttributeKind::Map),
    attribute("app_metadata", AttributeKind::Map),
    attribute("email_verified", AttributeKind::Bool),
    attribute("verify_email", AttributeKind::Bool),
    attribute("phone_verified", AttributeKind::Bool),
];
