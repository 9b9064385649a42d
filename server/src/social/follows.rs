//! Follow graph.
//!
//! Directed follow edges. Only accepted edges count for privacy decisions.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::types::{Follow, FollowStatus};
use crate::db::StoreError;

/// Read access to follow edges.
#[async_trait]
pub trait FollowGraph: Send + Sync {
    /// Whether `follower_id` has an accepted follow edge to `following_id`.
    async fn find_follow(&self, follower_id: Uuid, following_id: Uuid) -> Result<bool, StoreError>;
}

/// In-memory follow graph keyed by `(follower, following)`.
#[derive(Debug, Default)]
pub struct InMemoryFollowGraph {
    edges: DashMap<(Uuid, Uuid), Follow>,
}

impl InMemoryFollowGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a follow request, or update the status of an existing edge.
    pub fn upsert(&self, follower_id: Uuid, following_id: Uuid, status: FollowStatus) {
        let now = Utc::now();
        self.edges
            .entry((follower_id, following_id))
            .and_modify(|edge| {
                edge.status = status;
                edge.updated_at = now;
            })
            .or_insert_with(|| Follow {
                follower_id,
                following_id,
                status,
                created_at: now,
                updated_at: now,
            });
    }

    /// Record an accepted follow edge.
    pub fn follow(&self, follower_id: Uuid, following_id: Uuid) {
        self.upsert(follower_id, following_id, FollowStatus::Accepted);
    }

    /// Remove an edge. Returns `true` if one existed.
    pub fn unfollow(&self, follower_id: Uuid, following_id: Uuid) -> bool {
        self.edges.remove(&(follower_id, following_id)).is_some()
    }

    /// Edge between the two users, if any.
    #[must_use]
    pub fn get(&self, follower_id: Uuid, following_id: Uuid) -> Option<Follow> {
        self.edges
            .get(&(follower_id, following_id))
            .map(|edge| edge.value().clone())
    }
}

#[async_trait]
impl FollowGraph for InMemoryFollowGraph {
    async fn find_follow(&self, follower_id: Uuid, following_id: Uuid) -> Result<bool, StoreError> {
        Ok(self
            .edges
            .get(&(follower_id, following_id))
            .is_some_and(|edge| edge.status == FollowStatus::Accepted))
    }
}
