//! Authorization decisions.
//!
//! Combines the [`super::authority`] predicates into decisions that carry the
//! reason a request was refused.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pulse_common::{ErrorBody, ErrorCode, RoleSet};

use super::authority::{
    can_manage_user, can_self_modify_roles, changes_admin_membership,
    changes_super_admin_membership, has_admin_privileges, is_super_admin,
};

/// Proposed replacement of a target's role set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleChangeRequest {
    pub actor_roles: RoleSet,
    pub target_roles: RoleSet,
    pub requested_roles: RoleSet,
    pub actor_is_target: bool,
}

/// Proposed change of a target's blocked flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRequest {
    pub actor_roles: RoleSet,
    pub target_roles: RoleSet,
    pub actor_is_target: bool,
    pub requested_blocked: bool,
}

/// Why a policy decision was negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PolicyDenial {
    /// Actor holds no admin-level role.
    #[error("Admin privileges required")]
    NotPrivileged,

    /// Target is an admin and actor is not a super-admin.
    #[error("Only a super admin can manage administrators")]
    TargetProtected,

    /// Change alters admin membership without super-admin authority.
    #[error("Only a super admin can grant or revoke admin roles")]
    RoleEscalation,

    /// Change adds or removes `SUPER_ADMIN`.
    #[error("The super admin role cannot be granted or revoked")]
    SuperAdminImmutable,

    /// Actor would drop their own last admin-level role.
    #[error("Cannot remove own admin privileges")]
    SelfLockout,

    /// Actor tried to block themselves.
    #[error("Cannot block yourself")]
    SelfBlock,

    /// Target is a super-admin.
    #[error("Super admins cannot be blocked")]
    SuperAdminUnblockable,
}

impl PolicyDenial {
    /// Wire reason code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotPrivileged => ErrorCode::NotPrivileged,
            Self::TargetProtected => ErrorCode::TargetProtected,
            Self::RoleEscalation => ErrorCode::RoleEscalation,
            Self::SuperAdminImmutable => ErrorCode::SuperAdminImmutable,
            Self::SelfLockout => ErrorCode::SelfLockout,
            Self::SelfBlock => ErrorCode::SelfBlock,
            Self::SuperAdminUnblockable => ErrorCode::SuperAdminUnblockable,
        }
    }

    /// HTTP status the denial maps to.
    ///
    /// Requests that are malformed with respect to the actor themselves are
    /// `400`, everything else is `403`.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::SelfLockout | Self::SelfBlock => StatusCode::BAD_REQUEST,
            _ => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for PolicyDenial {
    fn into_response(self) -> Response {
        let body = ErrorBody::new(self.code(), self.to_string());
        (self.status(), Json(body)).into_response()
    }
}

/// Decide whether an actor may manage a target user at all.
pub fn authorize_manage(actor_roles: RoleSet, target_roles: RoleSet) -> Result<(), PolicyDenial> {
    if !has_admin_privileges(actor_roles) {
        return Err(PolicyDenial::NotPrivileged);
    }

    if !can_manage_user(actor_roles, target_roles) {
        return Err(PolicyDenial::TargetProtected);
    }

    Ok(())
}

/// Decide a role-set replacement.
///
/// Checks, in order:
/// 1. Actor holds an admin-level role
/// 2. Another user's roles: actor may manage the target.
///    Own roles: actor keeps an admin-level role
/// 3. Non-super-admins do not touch admin membership
/// 4. Nobody touches super-admin membership
pub fn authorize_role_change(request: &RoleChangeRequest) -> Result<(), PolicyDenial> {
    let actor_is_super_admin = is_super_admin(request.actor_roles);

    if request.actor_is_target {
        if !has_admin_privileges(request.actor_roles) {
            return Err(PolicyDenial::NotPrivileged);
        }
        if !can_self_modify_roles(actor_is_super_admin, request.requested_roles) {
            return Err(PolicyDenial::SelfLockout);
        }
    } else {
        authorize_manage(request.actor_roles, request.target_roles)?;
    }

    if !actor_is_super_admin
        && changes_admin_membership(request.target_roles, request.requested_roles)
    {
        return Err(PolicyDenial::RoleEscalation);
    }

    if changes_super_admin_membership(request.target_roles, request.requested_roles) {
        return Err(PolicyDenial::SuperAdminImmutable);
    }

    Ok(())
}

/// Decide a change of the blocked flag.
///
/// Self-block and super-admin checks only apply when blocking.
pub fn authorize_block(request: &BlockRequest) -> Result<(), PolicyDenial> {
    if !has_admin_privileges(request.actor_roles) {
        return Err(PolicyDenial::NotPrivileged);
    }

    if request.requested_blocked {
        if request.actor_is_target {
            return Err(PolicyDenial::SelfBlock);
        }
        if is_super_admin(request.target_roles) {
            return Err(PolicyDenial::SuperAdminUnblockable);
        }
    }

    if !can_manage_user(request.actor_roles, request.target_roles) {
        return Err(PolicyDenial::TargetProtected);
    }

    Ok(())
}
