
use std::collections::BTreeMap;
use std::sync::Mutex;

use a0_management::{ClientError, ClientResult, User, UserApi};
use async_trait::async_trait;

/// Remote call as the fake saw it
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Create(User),
    Read(String),
    Update(String, User),
    Delete(String),
}

/// How the fake answers `create_user`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) enum CreateReply {
    #[default]
    Store,
    /// 409 without storing anything
    Conflict,
    /// Store the user but leave `user_id` out of the response
    WithoutId,
}

/// In-memory `UserApi` that records every call.
///
/// Like the real API it never returns `password` or `connection` on reads.
/// Ids are assigned sequentially from "1".
#[derive(Default)]
pub(crate) struct RecordingUserApi {
    users: Mutex<BTreeMap<String, User>>,
    calls: Mutex<Vec<Call>>,
    next_id: Mutex<u32>,
    /// Zero-based index of the update call that should be rejected
    fail_update_at: Option<usize>,
    create_reply: CreateReply,
}

impl RecordingUserApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_update_at(index: usize) -> Self {
        Self {
            fail_update_at: Some(index),
            ..Self::default()
        }
    }

    pub(crate) fn replying_to_create(create_reply: CreateReply) -> Self {
        Self {
            create_reply,
            ..Self::default()
        }
    }

    pub(crate) fn stored_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn updates(&self) -> Vec<User> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Update(_, user) => Some(user),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub(crate) fn stored(&self, id: &str) -> Option<User> {
        self.users.lock().unwrap().get(id).cloned()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn echoed(user: &User) -> User {
        User {
            password: None,
            connection: None,
            ..user.clone()
        }
    }
}

fn merge(target: &mut User, patch: &User) {
    macro_rules! take {
        ($($field:ident),*) => {
            $(if patch.$field.is_some() { target.$field = patch.$field.clone(); })*
        };
    }
    take!(
        connection,
        email,
        username,
        password,
        phone_number,
        user_metadata,
        app_metadata,
        email_verified,
        verify_email,
        phone_verified
    );
}

#[async_trait]
impl UserApi for RecordingUserApi {
    async fn create_user(&self, user: &User) -> ClientResult<User> {
        self.record(Call::Create(user.clone()));

        if self.create_reply == CreateReply::Conflict {
            return Err(ClientError::api_error(
                409,
                "auth0_idp_error".into(),
                "The user already exists.".into(),
            ));
        }

        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            next.to_string()
        };
        let stored = User {
            id: Some(id.clone()),
            ..user.clone()
        };
        self.users.lock().unwrap().insert(id, stored.clone());

        let mut reply = Self::echoed(&stored);
        if self.create_reply == CreateReply::WithoutId {
            reply.id = None;
        }
        Ok(reply)
    }

    async fn read_user(&self, id: &str) -> ClientResult<User> {
        self.record(Call::Read(id.to_string()));

        self.users
            .lock()
            .unwrap()
            .get(id)
            .map(Self::echoed)
            .ok_or_else(|| ClientError::not_found(id))
    }

    async fn update_user(&self, id: &str, user: &User) -> ClientResult<User> {
        let index = self.updates().len();
        self.record(Call::Update(id.to_string(), user.clone()));

        if self.fail_update_at == Some(index) {
            return Err(ClientError::api_error(
                400,
                "invalid_body".into(),
                "rejected by test".into(),
            ));
        }

        let mut users = self.users.lock().unwrap();
        let target = users.get_mut(id).ok_or_else(|| ClientError::not_found(id))?;
        merge(target, user);

        Ok(Self::echoed(target))
    }

    async fn delete_user(&self, id: &str) -> ClientResult<()> {
        self.record(Call::Delete(id.to_string()));

        self.users
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ClientError::not_found(id))
    }
}
