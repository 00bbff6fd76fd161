use crate::DesiredState;

use a0_management::User;

/// Request body for create: every populated attribute, with `conn` as the
/// connection and `user_id` unprefixed.
pub fn build_user(desired: &DesiredState) -> User {
    User {
        id: desired.user_id.clone(),
        connection: Some(desired.conn.clone()),
        email: desired.email.clone(),
        username: desired.username.clone(),
        password: desired.password.clone(),
        phone_number: desired.phone_number.clone(),
        user_metadata: desired.user_metadata.clone(),
        app_metadata: desired.app_metadata.clone(),
        email_verified: desired.email_verified,
        verify_email: desired.verify_email,
        phone_verified: desired.phone_verified,
    }
}

/// Fold a remote user into state.
///
/// Every attribute takes the remote value, unset included, except
/// `password` and `conn`: the API never echoes the password and only
/// reports the connection inside identities, so an unset value there keeps
/// what `prior` had.
pub fn apply_user(prior: &DesiredState, user: &User) -> DesiredState {
    DesiredState {
        user_id: user.id.clone(),
        conn: user.connection.clone().unwrap_or_else(|| prior.conn.clone()),
        email: user.email.clone(),
        username: user.username.clone(),
        password: user.password.clone().or_else(|| prior.password.clone()),
        phone_number: user.phone_number.clone(),
        user_metadata: user.user_metadata.clone(),
        app_metadata: user.app_metadata.clone(),
        email_verified: user.email_verified,
        verify_email: user.verify_email,
        phone_verified: user.phone_verified,
    }
}
