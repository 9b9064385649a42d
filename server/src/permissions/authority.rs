//! Role authority predicates.
//!
//! Pure boolean checks over role sets. They know nothing about users, storage
//! or HTTP and never fail; [`super::resolver`] turns them into decisions with
//! a reason.

use pulse_common::{Role, RoleSet};

/// `SUPER_ADMIN` is in `roles`.
#[must_use]
pub const fn is_super_admin(roles: RoleSet) -> bool {
    roles.has_role(Role::SuperAdmin)
}

/// `ADMIN` is in `roles`.
#[must_use]
pub const fn is_admin(roles: RoleSet) -> bool {
    roles.has_role(Role::Admin)
}

/// `roles` holds `ADMIN` or `SUPER_ADMIN`.
#[must_use]
pub const fn has_admin_privileges(roles: RoleSet) -> bool {
    is_admin(roles) || is_super_admin(roles)
}

/// Check if an actor may manage a target user at all.
///
/// Rules:
/// 1. An actor without admin privileges manages no one, even if the caller
///    forgot to check that first
/// 2. A super-admin manages anyone
/// 3. Anyone else manages only targets without admin privileges
#[must_use]
pub const fn can_manage_user(actor_roles: RoleSet, target_roles: RoleSet) -> bool {
    if !has_admin_privileges(actor_roles) {
        return false;
    }

    if is_super_admin(actor_roles) {
        return true;
    }

    !has_admin_privileges(target_roles)
}

/// Check if `requested_roles` may replace `target_roles`.
///
/// Rules:
/// 1. A non-super-admin may not change the target's `ADMIN` or `SUPER_ADMIN`
///    membership
/// 2. Nobody may add or remove `SUPER_ADMIN` through a role update
#[must_use]
pub const fn can_manage_admin_role(
    actor_roles: RoleSet,
    target_roles: RoleSet,
    requested_roles: RoleSet,
) -> bool {
    if !is_super_admin(actor_roles) && changes_admin_membership(target_roles, requested_roles) {
        return false;
    }

    !changes_super_admin_membership(target_roles, requested_roles)
}

/// Check if an actor editing their own roles keeps an admin-level role.
///
/// Only meaningful when actor and target are the same user, after
/// [`can_manage_admin_role`] passed.
#[must_use]
pub const fn can_self_modify_roles(actor_is_super_admin: bool, requested_roles: RoleSet) -> bool {
    if actor_is_super_admin {
        requested_roles.intersects(RoleSet::ADMIN_LEVEL)
    } else {
        is_admin(requested_roles)
    }
}

/// Check if an actor may set the blocked flag on a target.
///
/// Blocking yourself or a super-admin is never allowed. Unblocking has no such
/// restriction. Both directions require [`can_manage_user`].
#[must_use]
pub const fn can_block_user(
    actor_roles: RoleSet,
    target_roles: RoleSet,
    actor_is_target: bool,
    requested_blocked: bool,
) -> bool {
    if requested_blocked && (actor_is_target || is_super_admin(target_roles)) {
        return false;
    }

    can_manage_user(actor_roles, target_roles)
}

pub(crate) const fn changes_admin_membership(current: RoleSet, requested: RoleSet) -> bool {
    is_admin(current) != is_admin(requested) || changes_super_admin_membership(current, requested)
}

pub(crate) const fn changes_super_admin_membership(current: RoleSet, requested: RoleSet) -> bool {
    is_super_admin(current) != is_super_admin(requested)
}
