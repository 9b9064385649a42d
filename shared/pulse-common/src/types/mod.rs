//! Shared Types

pub mod privacy;
pub mod role;
pub mod user;

pub use privacy::*;
pub use role::*;
pub use user::*;
