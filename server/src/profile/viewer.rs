//! Viewer context for public profile reads.

/// What the policy knows about the person looking at a profile.
///
/// Computed per request by the caller from follow storage. Fields are private
/// so an anonymous viewer can never be marked as following.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerContext {
    is_authenticated: bool,
    is_following_target: bool,
}

impl ViewerContext {
    /// Viewer without a session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            is_following_target: false,
        }
    }

    /// Signed-in viewer, with whether an accepted follow edge to the target
    /// exists.
    #[must_use]
    pub const fn authenticated(is_following_target: bool) -> Self {
        Self {
            is_authenticated: true,
            is_following_target,
        }
    }

    /// Build from raw flags. `is_following_target` is ignored when the viewer
    /// is not authenticated.
    #[must_use]
    pub const fn new(is_authenticated: bool, is_following_target: bool) -> Self {
        Self {
            is_authenticated,
            is_following_target: is_authenticated && is_following_target,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub const fn is_following_target(&self) -> bool {
        self.is_following_target
    }
}
