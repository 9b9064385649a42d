//! Privacy projection of public profiles.
//!
//! Decides which attribute groups of a target a viewer may see. Identity
//! fields (`id`, `name`, `surname`, `nickname`, `createdAt`, `roles`) are never
//! gated, and neither is `country`, which sits outside every privacy group.
//! Blocked or deleted targets must be filtered before projecting.

use pulse_common::{
    PartialPrivacySettings, PrivacyGroup, PrivacyLevel, PrivacySettings, PublicProfile,
    UserAttributes,
};

use super::viewer::ViewerContext;
use crate::config::PrivacyFallback;

/// Check whether a group at `level` is visible to `viewer`.
///
/// There is no role override: `PRIVATE` is hidden from everyone on this path.
#[must_use]
pub const fn is_visible(level: PrivacyLevel, viewer: ViewerContext) -> bool {
    match level {
        PrivacyLevel::Public => true,
        PrivacyLevel::Followers => viewer.is_authenticated() && viewer.is_following_target(),
        PrivacyLevel::Private => false,
    }
}

/// Projects profiles using a configured fallback for unset groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileProjector {
    fallback: PrivacyFallback,
}

impl ProfileProjector {
    #[must_use]
    pub const fn new(fallback: PrivacyFallback) -> Self {
        Self { fallback }
    }

    #[must_use]
    pub const fn fallback(&self) -> PrivacyFallback {
        self.fallback
    }

    /// Resolve stored settings, filling unset groups with the fallback.
    ///
    /// A target without any stored settings gets the fallback everywhere.
    #[must_use]
    pub fn resolve(&self, privacy: Option<&PartialPrivacySettings>) -> PrivacySettings {
        match privacy {
            Some(partial) => partial.resolve(self.fallback.level()),
            None => PrivacySettings::uniform(self.fallback.level()),
        }
    }

    /// Project `target` for `viewer` from possibly incomplete settings.
    #[must_use]
    pub fn project(
        &self,
        target: &UserAttributes,
        privacy: Option<&PartialPrivacySettings>,
        viewer: ViewerContext,
    ) -> PublicProfile {
        project_resolved(target, &self.resolve(privacy), viewer)
    }
}

/// Project `target` for `viewer` with fail-open defaults.
#[must_use]
pub fn project(
    target: &UserAttributes,
    privacy: Option<&PartialPrivacySettings>,
    viewer: ViewerContext,
) -> PublicProfile {
    ProfileProjector::default().project(target, privacy, viewer)
}

/// Project `target` for `viewer` from fully resolved settings.
#[must_use]
pub fn project_resolved(
    target: &UserAttributes,
    settings: &PrivacySettings,
    viewer: ViewerContext,
) -> PublicProfile {
    let visible = |group: PrivacyGroup| is_visible(settings.level(group), viewer);
    let mut profile = PublicProfile::identity_of(target);

    if visible(PrivacyGroup::Email) {
        profile.email = Some(target.email.clone());
    }
    if visible(PrivacyGroup::DateOfBirth) {
        profile.date_of_birth = target.date_of_birth;
    }
    if visible(PrivacyGroup::SportTypes) {
        profile.sport_types = Some(target.sport_types.clone());
    }
    if visible(PrivacyGroup::SocialLinks) {
        profile.social_links = Some(target.social_links.clone());
    }
    if visible(PrivacyGroup::Avatar) {
        profile.avatar.clone_from(&target.avatar);
    }
    if visible(PrivacyGroup::Banner) {
        profile.banner.clone_from(&target.banner);
    }
    if visible(PrivacyGroup::Description) {
        profile.description.clone_from(&target.description);
    }
    if visible(PrivacyGroup::CityRegion) {
        profile.city.clone_from(&target.city);
        profile.region.clone_from(&target.region);
    }
    if visible(PrivacyGroup::PersonalStats) {
        profile.personal_stats.clone_from(&target.personal_stats);
    }
    if visible(PrivacyGroup::PersonalAchievements) {
        profile.personal_achievements = Some(target.personal_achievements.clone());
    }

    profile
}
