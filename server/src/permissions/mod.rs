//! Role authority.
//!
//! Two layers:
//! - Predicates: pure `bool` checks over role sets
//! - Decisions: the same rules, returning the reason a request is refused

pub mod authority;
pub mod resolver;

pub use authority::{
    can_block_user, can_manage_admin_role, can_manage_user, can_self_modify_roles,
    has_admin_privileges, is_admin, is_super_admin,
};
pub use resolver::{
    authorize_block, authorize_manage, authorize_role_change, BlockRequest, PolicyDenial,
    RoleChangeRequest,
};
