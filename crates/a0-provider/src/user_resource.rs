use crate::{
    DesiredState, ResourceError, ResourceResult, apply_user, build_user, plan_updates,
};

use a0_management::UserApi;
use log::{debug, info, warn};

/// Lifecycle operations of the `auth0_user` resource.
///
/// Holds no state of its own; the tracked id and prior state are passed in
/// by the caller on every call.
pub struct UserResource<'a> {
    api: &'a dyn UserApi,
}

impl<'a> UserResource<'a> {
    pub fn new(api: &'a dyn UserApi) -> Self {
        Self { api }
    }

    /// Create the user and return the id the API assigned to it.
    pub async fn create(&self, desired: &DesiredState) -> ResourceResult<String> {
        desired.validate()?;

        let request = build_user(desired);
        info!(
            "Creating user in connection {} (fields: {:?})",
            desired.conn,
            request.set_fields()
        );

        let created = self.api.create_user(&request).await?;
        let id = created.id.ok_or_else(ResourceError::missing_user_id)?;

        info!("Created user {}", id);
        Ok(id)
    }

    /// Fetch the user and fold it into `prior`.
    pub async fn read(&self, id: &str, prior: &DesiredState) -> ResourceResult<DesiredState> {
        debug!("Reading user {}", id);
        let user = self.api.read_user(id).await?;
        Ok(apply_user(prior, &user))
    }

    /// Send the changes between `old` and `new`, then read back.
    ///
    /// Calls go out in plan order and stop at the first failure; calls that
    /// already succeeded stay applied.
    pub async fn update(
        &self,
        id: &str,
        old: &DesiredState,
        new: &DesiredState,
    ) -> ResourceResult<DesiredState> {
        new.validate()?;

        if !old.same_user(new) {
            warn!("user_id of user {} cannot be changed by update; ignoring it", id);
        }

        let plan = plan_updates(old, new);
        info!("Updating user {} ({} call(s))", id, plan.len());

        for step in &plan {
            debug!(
                "Update {} for user {} (fields: {:?})",
                step.label,
                id,
                step.user.set_fields()
            );
            self.api.update_user(id, &step.user).await?;
        }

        self.read(id, new).await
    }

    pub async fn delete(&self, id: &str) -> ResourceResult<()> {
        info!("Deleting user {}", id);
        self.api.delete_user(id).await?;
        Ok(())
    }

    /// Import takes the id verbatim; follow with `read` to populate state.
    pub fn import(&self, id: &str) -> String {
        id.to_string()
    }
}
