//! Wire-level error envelope.

use serde::{Deserialize, Serialize};

/// Machine-readable reason code carried in every error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Actor holds neither `ADMIN` nor `SUPER_ADMIN`.
    NotPrivileged,
    /// Target is an admin and the actor is not a super-admin.
    TargetProtected,
    /// Change touches admin membership without super-admin authority.
    RoleEscalation,
    /// Change adds or removes `SUPER_ADMIN`.
    SuperAdminImmutable,
    /// Actor would strip their own last admin-level role.
    SelfLockout,
    /// Actor tried to block themselves.
    SelfBlock,
    /// Super-admins cannot be blocked.
    SuperAdminUnblockable,
    /// Caller could not be resolved to a user.
    Unauthenticated,
    /// Target user does not exist or is hidden.
    UserNotFound,
    /// Collaborator failure.
    InternalError,
}

impl ErrorCode {
    /// Returns the wire name of the code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotPrivileged => "NOT_PRIVILEGED",
            Self::TargetProtected => "TARGET_PROTECTED",
            Self::RoleEscalation => "ROLE_ESCALATION",
            Self::SuperAdminImmutable => "SUPER_ADMIN_IMMUTABLE",
            Self::SelfLockout => "SELF_LOCKOUT",
            Self::SelfBlock => "SELF_BLOCK",
            Self::SuperAdminUnblockable => "SUPER_ADMIN_UNBLOCKABLE",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON error envelope: `{ "error": string, "code": ErrorCode }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub code: ErrorCode,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}
