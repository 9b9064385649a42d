//! Privacy Types
//!
//! Per-group privacy configuration for public profiles.

use serde::{Deserialize, Serialize};

/// Who may see an attribute group on a public profile.
///
/// Variants are ordered from most to least visible.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrivacyLevel {
    /// Visible to anyone who can resolve the profile.
    #[default]
    Public,
    /// Visible to authenticated viewers with an accepted follow edge.
    Followers,
    /// Never visible on the public profile.
    Private,
}

/// Privacy-gated attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PrivacyGroup {
    Email,
    DateOfBirth,
    SportTypes,
    SocialLinks,
    Avatar,
    Banner,
    Description,
    CityRegion,
    PersonalStats,
    PersonalAchievements,
}

impl PrivacyGroup {
    /// Returns every group.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Email,
            Self::DateOfBirth,
            Self::SportTypes,
            Self::SocialLinks,
            Self::Avatar,
            Self::Banner,
            Self::Description,
            Self::CityRegion,
            Self::PersonalStats,
            Self::PersonalAchievements,
        ]
    }

    /// Settings key of the group.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::DateOfBirth => "dateOfBirth",
            Self::SportTypes => "sportTypes",
            Self::SocialLinks => "socialLinks",
            Self::Avatar => "avatar",
            Self::Banner => "banner",
            Self::Description => "description",
            Self::CityRegion => "cityRegion",
            Self::PersonalStats => "personalStats",
            Self::PersonalAchievements => "personalAchievements",
        }
    }
}

/// Fully resolved privacy configuration: one level per group.
///
/// Every key is required on the wire. Sparse input is
/// [`PartialPrivacySettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub email: PrivacyLevel,
    pub date_of_birth: PrivacyLevel,
    pub sport_types: PrivacyLevel,
    pub social_links: PrivacyLevel,
    pub avatar: PrivacyLevel,
    pub banner: PrivacyLevel,
    pub description: PrivacyLevel,
    pub city_region: PrivacyLevel,
    pub personal_stats: PrivacyLevel,
    pub personal_achievements: PrivacyLevel,
}

impl PrivacySettings {
    /// Every group at `level`.
    #[must_use]
    pub const fn uniform(level: PrivacyLevel) -> Self {
        Self {
            email: level,
            date_of_birth: level,
            sport_types: level,
            social_links: level,
            avatar: level,
            banner: level,
            description: level,
            city_region: level,
            personal_stats: level,
            personal_achievements: level,
        }
    }

    /// Settings for a new profile: caller-supplied values merged over the
    /// `PUBLIC` defaults.
    #[must_use]
    pub fn for_new_profile(input: &PartialPrivacySettings) -> Self {
        input.resolve(PrivacyLevel::Public)
    }

    /// Level configured for `group`.
    #[must_use]
    pub const fn level(&self, group: PrivacyGroup) -> PrivacyLevel {
        match group {
            PrivacyGroup::Email => self.email,
            PrivacyGroup::DateOfBirth => self.date_of_birth,
            PrivacyGroup::SportTypes => self.sport_types,
            PrivacyGroup::SocialLinks => self.social_links,
            PrivacyGroup::Avatar => self.avatar,
            PrivacyGroup::Banner => self.banner,
            PrivacyGroup::Description => self.description,
            PrivacyGroup::CityRegion => self.city_region,
            PrivacyGroup::PersonalStats => self.personal_stats,
            PrivacyGroup::PersonalAchievements => self.personal_achievements,
        }
    }

    /// Return a copy with `group` set to `level`.
    #[must_use]
    pub fn with_level(mut self, group: PrivacyGroup, level: PrivacyLevel) -> Self {
        match group {
            PrivacyGroup::Email => self.email = level,
            PrivacyGroup::DateOfBirth => self.date_of_birth = level,
            PrivacyGroup::SportTypes => self.sport_types = level,
            PrivacyGroup::SocialLinks => self.social_links = level,
            PrivacyGroup::Avatar => self.avatar = level,
            PrivacyGroup::Banner => self.banner = level,
            PrivacyGroup::Description => self.description = level,
            PrivacyGroup::CityRegion => self.city_region = level,
            PrivacyGroup::PersonalStats => self.personal_stats = level,
            PrivacyGroup::PersonalAchievements => self.personal_achievements = level,
        }
        self
    }
}

/// Privacy configuration where any group may be unset.
///
/// This is the shape of caller input and of stored records that predate a
/// group. Turn it into [`PrivacySettings`] with [`PartialPrivacySettings::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialPrivacySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_types: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_region: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_stats: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_achievements: Option<PrivacyLevel>,
}

impl PartialPrivacySettings {
    /// Level set for `group`, if any.
    #[must_use]
    pub const fn get(&self, group: PrivacyGroup) -> Option<PrivacyLevel> {
        match group {
            PrivacyGroup::Email => self.email,
            PrivacyGroup::DateOfBirth => self.date_of_birth,
            PrivacyGroup::SportTypes => self.sport_types,
            PrivacyGroup::SocialLinks => self.social_links,
            PrivacyGroup::Avatar => self.avatar,
            PrivacyGroup::Banner => self.banner,
            PrivacyGroup::Description => self.description,
            PrivacyGroup::CityRegion => self.city_region,
            PrivacyGroup::PersonalStats => self.personal_stats,
            PrivacyGroup::PersonalAchievements => self.personal_achievements,
        }
    }

    /// Fill every unset group with `fallback`.
    ///
    /// This is the only place a missing level is defaulted.
    #[must_use]
    pub fn resolve(&self, fallback: PrivacyLevel) -> PrivacySettings {
        PrivacyGroup::all()
            .iter()
            .fold(PrivacySettings::uniform(fallback), |settings, group| {
                match self.get(*group) {
                    Some(level) => settings.with_level(*group, level),
                    None => settings,
                }
            })
    }
}

impl From<PrivacySettings> for PartialPrivacySettings {
    fn from(settings: PrivacySettings) -> Self {
        Self {
            email: Some(settings.email),
            date_of_birth: Some(settings.date_of_birth),
            sport_types: Some(settings.sport_types),
            social_links: Some(settings.social_links),
            avatar: Some(settings.avatar),
            banner: Some(settings.banner),
            description: Some(settings.description),
            city_region: Some(settings.city_region),
            personal_stats: Some(settings.personal_stats),
            personal_achievements: Some(settings.personal_achievements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_public() {
        let settings = PrivacySettings::default();
        for group in PrivacyGroup::all() {
            assert_eq!(settings.level(*group), PrivacyLevel::Public);
        }
    }

    #[test]
    fn test_new_profile_merges_over_defaults() {
        let input = PartialPrivacySettings {
            email: Some(PrivacyLevel::Private),
            city_region: Some(PrivacyLevel::Followers),
            ..Default::default()
        };
        let settings = PrivacySettings::for_new_profile(&input);
        assert_eq!(settings.email, PrivacyLevel::Private);
        assert_eq!(settings.city_region, PrivacyLevel::Followers);
        assert_eq!(settings.avatar, PrivacyLevel::Public);
        assert_eq!(settings.personal_stats, PrivacyLevel::Public);
    }

    #[test]
    fn test_resolve_uses_fallback_only_for_missing_groups() {
        let input = PartialPrivacySettings {
            banner: Some(PrivacyLevel::Public),
            ..Default::default()
        };
        let settings = input.resolve(PrivacyLevel::Private);
        assert_eq!(settings.banner, PrivacyLevel::Public);
        for group in PrivacyGroup::all() {
            if *group != PrivacyGroup::Banner {
                assert_eq!(settings.level(*group), PrivacyLevel::Private, "{group:?}");
            }
        }
    }

    #[test]
    fn test_with_level_touches_one_group() {
        for group in PrivacyGroup::all() {
            let settings = PrivacySettings::default().with_level(*group, PrivacyLevel::Followers);
            for other in PrivacyGroup::all() {
                let expected = if other == group {
                    PrivacyLevel::Followers
                } else {
                    PrivacyLevel::Public
                };
                assert_eq!(settings.level(*other), expected);
            }
        }
    }

    #[test]
    fn test_wire_keys_match_group_keys() {
        let settings = PrivacySettings::uniform(PrivacyLevel::Followers);
        let value = serde_json::to_value(settings).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), PrivacyGroup::all().len());
        for group in PrivacyGroup::all() {
            assert_eq!(object[group.key()], "FOLLOWERS");
            let key_json = serde_json::to_string(group).unwrap();
            assert_eq!(key_json, format!("\"{}\"", group.key()));
        }
    }

    #[test]
    fn test_partial_settings_deserialize_from_sparse_json() {
        let input: PartialPrivacySettings =
            serde_json::from_str(r#"{"dateOfBirth":"PRIVATE"}"#).unwrap();
        assert_eq!(input.date_of_birth, Some(PrivacyLevel::Private));
        assert_eq!(input.email, None);
    }

    #[test]
    fn test_resolved_settings_reject_sparse_json() {
        let sparse = serde_json::from_str::<PrivacySettings>(r#"{"email":"FOLLOWERS"}"#);
        assert!(sparse.is_err());

        let full = serde_json::to_string(&PrivacySettings::uniform(PrivacyLevel::Private)).unwrap();
        let parsed: PrivacySettings = serde_json::from_str(&full).unwrap();
        assert_eq!(parsed, PrivacySettings::uniform(PrivacyLevel::Private));
    }

    #[test]
    fn test_levels_ordered_by_visibility() {
        assert!(PrivacyLevel::Public < PrivacyLevel::Followers);
        assert!(PrivacyLevel::Followers < PrivacyLevel::Private);
    }
}
