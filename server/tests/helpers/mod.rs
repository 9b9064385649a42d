//! Reusable test helpers for policy integration tests.
//!
//! Provides an in-memory world (user directory plus follow graph) with
//! helpers to create users, plus response-body utilities.
#![allow(dead_code)]

use std::sync::{Arc, Once};

use axum::body::Body;
use axum::http::Response;
use http_body_util::BodyExt;
use pulse_common::{RoleSet, UserAttributes};
use pulse_server::admin::AdminService;
use pulse_server::config::PolicyConfig;
use pulse_server::db::{InMemoryUserDirectory, UserRecord};
use pulse_server::profile::ProfileService;
use pulse_server::social::InMemoryFollowGraph;
use uuid::Uuid;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// In-memory collaborators shared by the services under test.
pub struct TestWorld {
    pub users: Arc<InMemoryUserDirectory>,
    pub follows: Arc<InMemoryFollowGraph>,
}

impl TestWorld {
    pub fn new() -> Self {
        init_tracing();
        Self {
            users: Arc::new(InMemoryUserDirectory::new()),
            follows: Arc::new(InMemoryFollowGraph::new()),
        }
    }

    pub fn admin_service(&self) -> AdminService<InMemoryUserDirectory> {
        AdminService::new(Arc::clone(&self.users))
    }

    pub fn profile_service(
        &self,
        config: &PolicyConfig,
    ) -> ProfileService<InMemoryUserDirectory, InMemoryFollowGraph> {
        ProfileService::from_config(Arc::clone(&self.users), Arc::clone(&self.follows), config)
    }

    /// Create a user holding `roles`. Returns `(user_id, auth_id)`.
    pub fn create_user(&self, nickname: &str, roles: RoleSet) -> (Uuid, String) {
        let mut attributes = UserAttributes::new_member(
            "Test",
            "User",
            nickname,
            format!("{nickname}@example.com"),
        );
        attributes.roles = roles;
        let id = attributes.id;
        let auth_id = format!("auth|{nickname}");
        assert!(
            self.users.insert(UserRecord::new(auth_id.clone(), attributes)),
            "duplicate auth id {auth_id}"
        );
        (id, auth_id)
    }

    /// Apply `update` to a stored user.
    pub fn update_user(&self, id: Uuid, update: impl FnOnce(&mut UserRecord)) {
        assert!(self.users.update(id, update), "unknown user {id}");
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

pub const MEMBER: RoleSet = RoleSet::MEMBER;
pub const ADMIN: RoleSet = RoleSet::MEMBER.union(RoleSet::ADMIN);
pub const SUPER_ADMIN: RoleSet = RoleSet::MEMBER.union(RoleSet::SUPER_ADMIN);

/// Collect a response body and parse it as JSON.
pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response as JSON: {e}\nBody: {preview}")
    })
}
