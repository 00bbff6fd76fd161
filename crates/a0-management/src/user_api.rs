use crate::{ClientResult, User};

use async_trait::async_trait;

/// User CRUD against the identity provider.
///
/// Implementations return `ClientError::NotFound` when the id does not
/// resolve to a user, and `ClientError::Api` for any other rejection.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Create a user. The returned record carries the provider-assigned id.
    async fn create_user(&self, user: &User) -> ClientResult<User>;

    async fn read_user(&self, id: &str) -> ClientResult<User>;

    /// Apply the set fields of `user` to an existing user.
    async fn update_user(&self, id: &str, user: &User) -> ClientResult<User>;

    async fn delete_user(&self, id: &str) -> ClientResult<()>;
}
