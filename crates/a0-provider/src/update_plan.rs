use crate::DesiredState;

use a0_management::User;

/// One PATCH the update will send, labelled for logging
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedUpdate {
    pub label: &'static str,
    pub user: User,
}

fn with_connection(new: &DesiredState) -> User {
    User {
        connection: Some(new.conn.clone()),
        ..Default::default()
    }
}

// Identity fields: each is sent alone, paired with the connection.

pub fn username_update(new: &DesiredState) -> User {
    User {
        username: new.username.clone(),
        ..with_connection(new)
    }
}

pub fn password_update(new: &DesiredState) -> User {
    User {
        password: new.password.clone(),
        ..with_connection(new)
    }
}

pub fn email_update(new: &DesiredState) -> User {
    User {
        email: new.email.clone(),
        ..with_connection(new)
    }
}

pub fn email_verified_update(new: &DesiredState) -> User {
    User {
        email_verified: new.email_verified,
        ..with_connection(new)
    }
}

/// Batched update of the free-form fields that changed between `old` and
/// `new`. None when nothing in the group changed.
pub fn profile_update(old: &DesiredState, new: &DesiredState) -> Option<User> {
    let mut user = User::default();

    if old.phone_number != new.phone_number {
        user.phone_number = new.phone_number.clone();
        user.connection = Some(new.conn.clone());
    }
    if old.phone_verified != new.phone_verified {
        user.phone_verified = new.phone_verified;
        user.connection = Some(new.conn.clone());
    }
    if old.app_metadata != new.app_metadata {
        user.app_metadata = new.app_metadata.clone();
        user.connection = Some(new.conn.clone());
    }
    if old.user_metadata != new.user_metadata {
        user.user_metadata = new.user_metadata.clone();
        user.connection = Some(new.conn.clone());
    }

    if user.is_empty() { None } else { Some(user) }
}

/// Ordered PATCH bodies turning `old` into `new`: one per changed identity
/// field (username, password, email, email_verified), then at most one
/// for the profile group.
pub fn plan_updates(old: &DesiredState, new: &DesiredState) -> Vec<PlannedUpdate> {
    let identity: [(&'static str, bool, fn(&DesiredState) -> User); 4] = [
        ("username", old.username != new.username, username_update),
        ("password", old.password != new.password, password_update),
        ("email", old.email != new.email, email_update),
        (
            "email_verified",
            old.email_verified != new.email_verified,
            email_verified_update,
        ),
    ];

    let mut plan: Vec<PlannedUpdate> = identity
        .into_iter()
        .filter(|(_, changed, _)| *changed)
        .map(|(label, _, build)| PlannedUpdate {
            label,
            user: build(new),
        })
        .collect();

    if let Some(user) = profile_update(old, new) {
        plan.push(PlannedUpdate {
            label: "profile",
            user,
        });
    }

    plan
}
