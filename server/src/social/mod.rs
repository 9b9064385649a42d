//! Social graph lookups used by profile reads.

pub mod follows;
pub mod types;

pub use follows::{FollowGraph, InMemoryFollowGraph};
pub use types::{Follow, FollowStatus};
