//! Admin actions on users.
//!
//! Resolves actor and target through the [`UserDirectory`] and asks the role
//! authority. Nothing is persisted here: an approved change is returned for
//! the caller to store.

use std::sync::Arc;

use pulse_common::{Role, RoleSet, UserAttributes};
use tracing::{info, warn};
use uuid::Uuid;

use super::types::{AdminError, RoleChange};
use crate::db::{UserDirectory, UserRecord};
use crate::permissions::{
    authorize_block, authorize_manage, authorize_role_change, has_admin_privileges,
    BlockRequest, PolicyDenial, RoleChangeRequest,
};

/// Admin operations over a user directory.
pub struct AdminService<D> {
    users: Arc<D>,
}

impl<D> Clone for AdminService<D> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<D: UserDirectory> AdminService<D> {
    pub const fn new(users: Arc<D>) -> Self {
        Self { users }
    }

    /// Resolve the calling admin.
    ///
    /// Unknown, blocked or deleted accounts are unauthenticated; accounts
    /// without an admin-level role are refused.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_actor(&self, auth_id: &str) -> Result<UserRecord, AdminError> {
        let actor = self
            .users
            .find_user_by_auth_id(auth_id)
            .await?
            .filter(|user| !user.is_hidden())
            .ok_or(AdminError::Unauthenticated)?;

        if !has_admin_privileges(actor.attributes.roles) {
            warn!(actor_id = %actor.attributes.id, "Admin action without admin role");
            return Err(PolicyDenial::NotPrivileged.into());
        }

        Ok(actor)
    }

    /// Load a target user. Blocked users stay reachable so they can be unblocked.
    async fn load_target(&self, target_id: Uuid) -> Result<UserRecord, AdminError> {
        self.users
            .find_user_by_id(target_id)
            .await?
            .filter(|user| user.deleted_at.is_none())
            .ok_or(AdminError::UserNotFound)
    }

    /// Return a target's full attributes if the caller may manage them.
    ///
    /// Admins can always read their own record.
    #[tracing::instrument(skip(self))]
    pub async fn get_managed_user(
        &self,
        auth_id: &str,
        target_id: Uuid,
    ) -> Result<UserAttributes, AdminError> {
        let actor = self.resolve_actor(auth_id).await?;
        let target = self.load_target(target_id).await?;

        if actor.attributes.id != target.attributes.id {
            authorize_manage(actor.attributes.roles, target.attributes.roles)
                .map_err(|denial| denied(&actor, &target, denial))?;
        }

        Ok(target.attributes)
    }

    /// Approve replacing a target's roles with `requested`.
    ///
    /// `MEMBER` is always kept.
    #[tracing::instrument(skip(self))]
    pub async fn update_roles(
        &self,
        auth_id: &str,
        target_id: Uuid,
        requested: RoleSet,
    ) -> Result<RoleChange, AdminError> {
        let actor = self.resolve_actor(auth_id).await?;
        let target = self.load_target(target_id).await?;
        let requested = requested.with_role(Role::Member);

        let request = RoleChangeRequest {
            actor_roles: actor.attributes.roles,
            target_roles: target.attributes.roles,
            requested_roles: requested,
            actor_is_target: actor.attributes.id == target.attributes.id,
        };
        authorize_role_change(&request).map_err(|denial| denied(&actor, &target, denial))?;

        let change = RoleChange {
            user_id: target.attributes.id,
            previous: target.attributes.roles,
            roles: requested,
        };
        info!(
            actor_id = %actor.attributes.id,
            target_id = %target.attributes.id,
            granted = ?change.granted(),
            revoked = ?change.revoked(),
            "Role change approved"
        );
        Ok(change)
    }

    /// Approve setting a target's blocked flag.
    #[tracing::instrument(skip(self))]
    pub async fn set_blocked(
        &self,
        auth_id: &str,
        target_id: Uuid,
        blocked: bool,
    ) -> Result<bool, AdminError> {
        let actor = self.resolve_actor(auth_id).await?;
        let target = self.load_target(target_id).await?;

        let request = BlockRequest {
            actor_roles: actor.attributes.roles,
            target_roles: target.attributes.roles,
            actor_is_target: actor.attributes.id == target.attributes.id,
            requested_blocked: blocked,
        };
        authorize_block(&request).map_err(|denial| denied(&actor, &target, denial))?;

        info!(
            actor_id = %actor.attributes.id,
            target_id = %target.attributes.id,
            blocked,
            "Block change approved"
        );
        Ok(blocked)
    }
}

fn denied(actor: &UserRecord, target: &UserRecord, denial: PolicyDenial) -> AdminError {
    warn!(
        actor_id = %actor.attributes.id,
        target_id = %target.attributes.id,
        code = %denial.code(),
        "Admin action denied"
    );
    AdminError::Denied(denial)
}
