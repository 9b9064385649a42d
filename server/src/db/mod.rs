//! Storage Layer
//!
//! User lookups needed by the policy callers. Persistence itself lives behind
//! [`UserDirectory`].

mod models;
mod store;

pub use models::*;
pub use store::*;
