//! a0-management
//!
//! Typed client for the user endpoints of the Auth0 Management API v2.
//! `UserApi` is the seam the resource layer is written against;
//! `ManagementClient` is the HTTP implementation.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod token;
pub(crate) mod user;
pub(crate) mod user_api;


pub use client::ManagementClient;
pub use error::{ClientError, Result as ClientResult};
pub use token::fetch_client_credentials_token;
pub use user::{Metadata, User};
pub use user_api::UserApi;

/// Path of the users collection, relative to the tenant base URL
pub const USERS_PATH: &str = "/api/v2/users";
/// Path of the token endpoint used by the client-credentials exchange
pub const TOKEN_PATH: &str = "/oauth/token";
