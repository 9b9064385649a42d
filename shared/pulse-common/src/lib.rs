//! Pulse Common Library
//!
//! Role, privacy and profile types shared by the policy engine and its callers.

pub mod error;
pub mod types;

pub use error::{ErrorBody, ErrorCode};
pub use types::*;
