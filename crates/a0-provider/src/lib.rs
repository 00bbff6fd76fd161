//! a0-provider
//!
//! The `auth0_user` resource: maps a declared user (`DesiredState`) onto
//! Management API calls and folds the API's answer back into state.

pub(crate) mod desired_state;
pub(crate) mod error;
pub(crate) mod mapping;
pub(crate) mod provider;
pub(crate) mod schema;
pub(crate) mod update_plan;
pub(crate) mod user_resource;

#[cfg(test)]
mod tests;

pub use desired_state::{DesiredState, USER_ID_PREFIX, state_user_id};
pub use error::{ResourceError, Result as ResourceResult};
pub use mapping::{apply_user, build_user};
pub use provider::{Provider, ResourceType};
pub use schema::{AttributeKind, AttributeSchema, USER_SCHEMA};
pub use update_plan::{
    PlannedUpdate, email_update, email_verified_update, password_update, plan_updates,
    profile_update, username_update,
};
pub use user_resource::UserResource;

pub use a0_management::Metadata;
