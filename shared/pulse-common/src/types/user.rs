//! User Types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::{Role, RoleSet};

/// Links to a user's external profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strava: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Stored image with its thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Aggregated workout statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalStats {
    pub total_workouts: u32,
    pub total_distance_km: f64,
    pub total_duration_minutes: u64,
}

/// Personal best or badge earned by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub achieved_at: DateTime<Utc>,
}

/// Full attribute set of a user, as loaded from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAttributes {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
    #[schema(value_type = Vec<Role>)]
    pub roles: RoleSet,
    /// Not covered by any privacy group.
    pub country: Option<String>,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub sport_types: Vec<String>,
    pub social_links: SocialLinks,
    pub avatar: Option<ImageRef>,
    pub banner: Option<ImageRef>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub personal_stats: Option<PersonalStats>,
    pub personal_achievements: Vec<Achievement>,
}

impl UserAttributes {
    /// Attributes for a fresh member with only identity fields set.
    pub fn new_member(
        name: impl Into<String>,
        surname: impl Into<String>,
        nickname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            surname: surname.into(),
            nickname: nickname.into(),
            created_at: Utc::now(),
            roles: RoleSet::MEMBER,
            country: None,
            email: email.into(),
            date_of_birth: None,
            sport_types: Vec::new(),
            social_links: SocialLinks::default(),
            avatar: None,
            banner: None,
            description: None,
            city: None,
            region: None,
            personal_stats: None,
            personal_achievements: Vec::new(),
        }
    }
}

/// Profile as seen by a particular viewer.
///
/// Identity fields and `country` are always present. Each privacy-gated group
/// is `None` when hidden and is then omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
    #[schema(value_type = Vec<Role>)]
    pub roles: RoleSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_stats: Option<PersonalStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_achievements: Option<Vec<Achievement>>,
}

impl PublicProfile {
    /// Profile carrying only the always-visible fields of `user`.
    #[must_use]
    pub fn identity_of(user: &UserAttributes) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            surname: user.surname.clone(),
            nickname: user.nickname.clone(),
            created_at: user.created_at,
            roles: user.roles,
            country: user.country.clone(),
            email: None,
            date_of_birth: None,
            sport_types: None,
            social_links: None,
            avatar: None,
            banner: None,
            description: None,
            city: None,
            region: None,
            personal_stats: None,
            personal_achievements: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_holds_member_role() {
        let user = UserAttributes::new_member("Ada", "Lovelace", "ada", "ada@example.com");
        assert_eq!(user.roles, RoleSet::MEMBER);
        assert!(user.sport_types.is_empty());
    }

    #[test]
    fn test_identity_profile_omits_gated_keys() {
        let mut user = UserAttributes::new_member("Ada", "Lovelace", "ada", "ada@example.com");
        user.country = Some("UK".into());
        let value = serde_json::to_value(PublicProfile::identity_of(&user)).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["country", "createdAt", "id", "name", "nickname", "roles", "surname"]
        );
        assert_eq!(object["roles"], serde_json::json!(["MEMBER"]));
    }
}
