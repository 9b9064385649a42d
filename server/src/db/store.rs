//! User directory.
//!
//! Lookup interface the policy callers resolve actors and targets through,
//! plus an in-memory implementation.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::models::UserRecord;

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Read access to users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find the user owning an identity-provider subject.
    async fn find_user_by_auth_id(&self, auth_id: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Find a user by id.
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError>;
}

/// In-memory user directory.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: DashMap<Uuid, UserRecord>,
    auth_index: DashMap<String, Uuid>,
}

impl InMemoryUserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user.
    ///
    /// Returns `false` and stores nothing when the auth id already belongs to
    /// another user.
    #[must_use]
    pub fn insert(&self, record: UserRecord) -> bool {
        let id = record.attributes.id;
        match self.auth_index.entry(record.auth_id.clone()) {
            Entry::Occupied(owner) if *owner.get() != id => return false,
            Entry::Occupied(_) => {}
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let auth_id = record.auth_id.clone();
        if let Some(previous) = self.users.insert(id, record) {
            if previous.auth_id != auth_id {
                self.auth_index.remove(&previous.auth_id);
            }
        }
        true
    }

    /// Apply `update` to a stored user. Returns `false` if the user is unknown.
    pub fn update(&self, id: Uuid, update: impl FnOnce(&mut UserRecord)) -> bool {
        match self.users.get_mut(&id) {
            Some(mut entry) => {
                update(entry.value_mut());
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_user_by_auth_id(&self, auth_id: &str) -> Result<Option<UserRecord>, StoreError> {
        let Some(id) = self.auth_index.get(auth_id).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }
}
