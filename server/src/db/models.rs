//! Storage Models

use chrono::{DateTime, Utc};
use pulse_common::{PartialPrivacySettings, UserAttributes};
use serde::{Deserialize, Serialize};

/// User as held by the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Subject from the identity provider.
    pub auth_id: String,
    pub attributes: UserAttributes,
    /// Stored privacy settings; `None` for accounts that never saved any.
    pub privacy: Option<PartialPrivacySettings>,
    /// Blocked by an administrator.
    pub is_blocked: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    pub fn new(auth_id: impl Into<String>, attributes: UserAttributes) -> Self {
        Self {
            auth_id: auth_id.into(),
            attributes,
            privacy: None,
            is_blocked: false,
            deleted_at: None,
        }
    }

    /// Hidden from public profile reads.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.is_blocked || self.deleted_at.is_some()
    }
}
