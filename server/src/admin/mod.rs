//! Admin Module
//!
//! Role updates, blocking and user lookups performed by administrators.

pub mod service;
pub mod types;

pub use service::AdminService;
pub use types::{AdminError, RoleChange};
