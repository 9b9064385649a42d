//! Public profile reads resolved through the directory and follow graph.

mod helpers;

use helpers::{TestWorld, MEMBER, SUPER_ADMIN};
use pulse_common::{PartialPrivacySettings, PrivacyLevel, PrivacySettings};
use pulse_server::config::{PolicyConfig, PrivacyFallback};
use pulse_server::profile::ProfileError;
use pulse_server::social::FollowStatus;
use uuid::Uuid;

fn followers_only_email() -> PartialPrivacySettings {
    PrivacySettings::default()
        .with_level(pulse_common::PrivacyGroup::Email, PrivacyLevel::Followers)
        .into()
}

#[tokio::test]
async fn test_follower_sees_followers_fields() {
    let world = TestWorld::new();
    let (target, _) = world.create_user("target", MEMBER);
    let (viewer, viewer_auth) = world.create_user("viewer", MEMBER);
    world.update_user(target, |u| u.privacy = Some(followers_only_email()));
    world.follows.follow(viewer, target);

    let profile = world
        .profile_service(&PolicyConfig::default_for_test())
        .public_profile(Some(&viewer_auth), target)
        .await
        .unwrap();
    assert_eq!(profile.email.as_deref(), Some("target@example.com"));
}

#[tokio::test]
async fn test_pending_follow_is_not_enough() {
    let world = TestWorld::new();
    let (target, _) = world.create_user("target", MEMBER);
    let (viewer, viewer_auth) = world.create_user("viewer", MEMBER);
    world.update_user(target, |u| u.privacy = Some(followers_only_email()));
    world.follows.upsert(viewer, target, FollowStatus::Pending);

    let profile = world
        .profile_service(&PolicyConfig::default_for_test())
        .public_profile(Some(&viewer_auth), target)
        .await
        .unwrap();
    assert_eq!(profile.email, None);
}

#[tokio::test]
async fn test_anonymous_and_unknown_viewers() {
    let world = TestWorld::new();
    let (target, _) = world.create_user("target", MEMBER);
    world.update_user(target, |u| u.privacy = Some(followers_only_email()));
    let service = world.profile_service(&PolicyConfig::default_for_test());

    let anonymous = service.public_profile(None, target).await.unwrap();
    assert_eq!(anonymous.email, None);
    assert_eq!(anonymous.nickname, "target");

    let unknown = service.public_profile(Some("auth|ghost"), target).await.unwrap();
    assert_eq!(unknown, anonymous);
}

#[tokio::test]
async fn test_blocked_viewer_reads_as_anonymous() {
    let world = TestWorld::new();
    let (target, _) = world.create_user("target", MEMBER);
    let (viewer, viewer_auth) = world.create_user("viewer", MEMBER);
    world.update_user(target, |u| u.privacy = Some(followers_only_email()));
    world.follows.follow(viewer, target);
    world.update_user(viewer, |u| u.is_blocked = true);

    let service = world.profile_service(&PolicyConfig::default_for_test());
    let context = service.viewer_context(Some(&viewer_auth), target).await.unwrap();
    assert!(!context.is_authenticated());

    let profile = service.public_profile(Some(&viewer_auth), target).await.unwrap();
    assert_eq!(profile.email, None);
}

#[tokio::test]
async fn test_hidden_targets_not_found() {
    let world = TestWorld::new();
    let (blocked, _) = world.create_user("blocked", MEMBER);
    let (deleted, _) = world.create_user("deleted", SUPER_ADMIN);
    world.update_user(blocked, |u| u.is_blocked = true);
    world.update_user(deleted, |u| u.deleted_at = Some(chrono::Utc::now()));
    let service = world.profile_service(&PolicyConfig::default_for_test());

    for id in [blocked, deleted, Uuid::now_v7()] {
        let result = service.public_profile(None, id).await;
        assert!(matches!(result, Err(ProfileError::UserNotFound)), "{id}");
    }
}

#[tokio::test]
async fn test_owner_has_no_private_override() {
    let world = TestWorld::new();
    let (target, target_auth) = world.create_user("target", MEMBER);
    world.update_user(target, |u| {
        u.privacy = Some(PrivacySettings::uniform(PrivacyLevel::Private).into());
    });

    let profile = world
        .profile_service(&PolicyConfig::default_for_test())
        .public_profile(Some(&target_auth), target)
        .await
        .unwrap();
    assert_eq!(profile.email, None);
}

#[tokio::test]
async fn test_fail_closed_config_hides_unset_groups() {
    let world = TestWorld::new();
    let (target, _) = world.create_user("target", MEMBER);
    world.update_user(target, |u| {
        u.attributes.description = Some("Morning swims".into());
        u.privacy = Some(PartialPrivacySettings {
            description: Some(PrivacyLevel::Public),
            ..Default::default()
        });
    });

    let open = world
        .profile_service(&PolicyConfig::default_for_test())
        .public_profile(None, target)
        .await
        .unwrap();
    assert_eq!(open.email.as_deref(), Some("target@example.com"));

    let closed_config = PolicyConfig {
        privacy_fallback: PrivacyFallback::FailClosed,
    };
    let closed = world
        .profile_service(&closed_config)
        .public_profile(None, target)
        .await
        .unwrap();
    assert_eq!(closed.email, None);
    assert_eq!(closed.description.as_deref(), Some("Morning swims"));
}
