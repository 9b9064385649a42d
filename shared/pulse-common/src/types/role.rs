//! Role Types
//!
//! Roles are a closed enum; a user's roles are a [`RoleSet`] bitfield so that
//! duplicates are impossible and set algebra is cheap.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Platform role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular community member.
    Member,
    /// Platform administrator.
    Admin,
    /// Administrator who may also manage other admins.
    SuperAdmin,
    /// Member of the organization committee.
    OrganizationCommittee,
    /// Community leader.
    CommunityLeader,
    /// Featured community member.
    CommunityStar,
    /// Gamer badge.
    Gamer,
}

impl Role {
    /// Returns every role, in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Member,
            Self::Admin,
            Self::SuperAdmin,
            Self::OrganizationCommittee,
            Self::CommunityLeader,
            Self::CommunityStar,
            Self::Gamer,
        ]
    }

    /// Wire name of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "MEMBER",
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::OrganizationCommittee => "ORGANIZATION_COMMITTEE",
            Self::CommunityLeader => "COMMUNITY_LEADER",
            Self::CommunityStar => "COMMUNITY_STAR",
            Self::Gamer => "GAMER",
        }
    }

    /// The single-bit [`RoleSet`] for this role.
    #[must_use]
    pub const fn flag(self) -> RoleSet {
        match self {
            Self::Member => RoleSet::MEMBER,
            Self::Admin => RoleSet::ADMIN,
            Self::SuperAdmin => RoleSet::SUPER_ADMIN,
            Self::OrganizationCommittee => RoleSet::ORGANIZATION_COMMITTEE,
            Self::CommunityLeader => RoleSet::COMMUNITY_LEADER,
            Self::CommunityStar => RoleSet::COMMUNITY_STAR,
            Self::Gamer => RoleSet::GAMER,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

bitflags! {
    /// Set of roles held by a user, one bit per [`Role`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RoleSet: u8 {
        const MEMBER                 = 1 << 0;
        const ADMIN                  = 1 << 1;
        const SUPER_ADMIN            = 1 << 2;
        const ORGANIZATION_COMMITTEE = 1 << 3;
        const COMMUNITY_LEADER       = 1 << 4;
        const COMMUNITY_STAR         = 1 << 5;
        const GAMER                  = 1 << 6;
    }
}

impl RoleSet {
    /// Roles that carry admin privilege.
    pub const ADMIN_LEVEL: Self = Self::ADMIN.union(Self::SUPER_ADMIN);

    /// Check whether `role` is in the set.
    #[must_use]
    pub const fn has_role(self, role: Role) -> bool {
        self.contains(role.flag())
    }

    /// Return a copy of the set with `role` added.
    #[must_use]
    pub const fn with_role(self, role: Role) -> Self {
        self.union(role.flag())
    }

    /// Return a copy of the set with `role` removed.
    #[must_use]
    pub const fn without_role(self, role: Role) -> Self {
        self.difference(role.flag())
    }

    /// Iterate the roles in the set in declaration order.
    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::all()
            .iter()
            .copied()
            .filter(move |role| self.has_role(*role))
    }

    /// Parse a list of role names.
    pub fn parse<I, S>(names: I) -> Result<Self, ParseRoleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<Role>())
            .collect()
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        role.flag()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, role| set.with_role(role))
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.roles())
    }
}

impl<'de> Deserialize<'de> for RoleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let roles = Vec::<Role>::deserialize(deserializer)?;
        Ok(roles.into_iter().collect())
    }
}
