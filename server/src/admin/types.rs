//! Admin module types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_common::{ErrorBody, ErrorCode, RoleSet};
use thiserror::Error;
use uuid::Uuid;

use crate::db::StoreError;
use crate::permissions::PolicyDenial;

/// Admin API error type.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Caller does not map to an active user.
    #[error("Authentication required")]
    Unauthenticated,

    /// Target user does not exist.
    #[error("User not found")]
    UserNotFound,

    /// Policy refused the action.
    #[error(transparent)]
    Denied(#[from] PolicyDenial),

    /// User directory failure.
    #[error("User directory error")]
    Directory(#[from] StoreError),
}

impl AdminError {
    /// Wire reason code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Unauthenticated => ErrorCode::Unauthenticated,
            Self::UserNotFound => ErrorCode::UserNotFound,
            Self::Denied(denial) => denial.code(),
            Self::Directory(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Denied(denial) => denial.status(),
            Self::Directory(e) => {
                tracing::error!(error = %e, "Admin directory error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match &self {
            Self::Directory(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };
        (status, Json(ErrorBody::new(self.code(), message))).into_response()
    }
}

/// Approved role change; the caller persists `roles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleChange {
    pub user_id: Uuid,
    pub previous: RoleSet,
    pub roles: RoleSet,
}

impl RoleChange {
    /// Roles added by the change.
    #[must_use]
    pub const fn granted(&self) -> RoleSet {
        self.roles.difference(self.previous)
    }

    /// Roles removed by the change.
    #[must_use]
    pub const fn revoked(&self) -> RoleSet {
        self.previous.difference(self.roles)
    }
}
