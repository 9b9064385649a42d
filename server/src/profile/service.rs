//! Public profile reads.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_common::{ErrorBody, ErrorCode, PublicProfile};
use tracing::debug;
use uuid::Uuid;

use super::projector::ProfileProjector;
use super::viewer::ViewerContext;
use crate::config::PolicyConfig;
use crate::db::{StoreError, UserDirectory};
use crate::social::FollowGraph;

/// Profile read error type.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Target does not exist, is blocked or deleted.
    #[error("User not found")]
    UserNotFound,

    /// Collaborator failure.
    #[error("Storage error")]
    Store(#[from] StoreError),
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::UserNotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(ErrorCode::UserNotFound, self.to_string()),
            ),
            Self::Store(e) => {
                tracing::error!(error = %e, "Profile storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(ErrorCode::InternalError, "Internal server error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Builds public profiles from the user directory and follow graph.
pub struct ProfileService<D, F> {
    users: Arc<D>,
    follows: Arc<F>,
    projector: ProfileProjector,
}

impl<D, F> Clone for ProfileService<D, F> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            follows: Arc::clone(&self.follows),
            projector: self.projector,
        }
    }
}

impl<D: UserDirectory, F: FollowGraph> ProfileService<D, F> {
    pub const fn new(users: Arc<D>, follows: Arc<F>, projector: ProfileProjector) -> Self {
        Self {
            users,
            follows,
            projector,
        }
    }

    /// Service using the fallback from `config`.
    pub const fn from_config(users: Arc<D>, follows: Arc<F>, config: &PolicyConfig) -> Self {
        Self::new(users, follows, ProfileProjector::new(config.privacy_fallback))
    }

    /// Work out who is looking.
    ///
    /// No session, an unknown subject, or a blocked or deleted account all
    /// read as anonymous.
    pub async fn viewer_context(
        &self,
        viewer_auth_id: Option<&str>,
        target_id: Uuid,
    ) -> Result<ViewerContext, ProfileError> {
        let Some(auth_id) = viewer_auth_id else {
            return Ok(ViewerContext::anonymous());
        };

        let viewer = match self.users.find_user_by_auth_id(auth_id).await? {
            Some(viewer) if !viewer.is_hidden() => viewer,
            _ => return Ok(ViewerContext::anonymous()),
        };

        let following = self
            .follows
            .find_follow(viewer.attributes.id, target_id)
            .await?;
        Ok(ViewerContext::authenticated(following))
    }

    /// Profile of `target_id` as seen by the viewer behind `viewer_auth_id`.
    #[tracing::instrument(skip(self))]
    pub async fn public_profile(
        &self,
        viewer_auth_id: Option<&str>,
        target_id: Uuid,
    ) -> Result<PublicProfile, ProfileError> {
        let target = self
            .users
            .find_user_by_id(target_id)
            .await?
            .filter(|user| !user.is_hidden())
            .ok_or(ProfileError::UserNotFound)?;

        let viewer = self.viewer_context(viewer_auth_id, target_id).await?;
        debug!(
            authenticated = viewer.is_authenticated(),
            following = viewer.is_following_target(),
            "Projecting public profile"
        );

        Ok(self
            .projector
            .project(&target.attributes, target.privacy.as_ref(), viewer))
    }
}
