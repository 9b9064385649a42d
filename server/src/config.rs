//! Policy Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use pulse_common::PrivacyLevel;

/// Level applied to a privacy group that has no stored setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrivacyFallback {
    /// Missing groups are `PUBLIC`.
    #[default]
    FailOpen,
    /// Missing groups are `PRIVATE`.
    FailClosed,
}

impl PrivacyFallback {
    /// Level a missing group resolves to.
    #[must_use]
    pub const fn level(self) -> PrivacyLevel {
        match self {
            Self::FailOpen => PrivacyLevel::Public,
            Self::FailClosed => PrivacyLevel::Private,
        }
    }
}

impl FromStr for PrivacyFallback {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_open" | "open" | "public" => Ok(Self::FailOpen),
            "fail_closed" | "closed" | "private" => Ok(Self::FailClosed),
            other => anyhow::bail!("unknown privacy fallback '{other}'"),
        }
    }
}

/// Policy configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct PolicyConfig {
    /// How unset privacy groups are treated (default: fail open)
    pub privacy_fallback: PrivacyFallback,
}

impl PolicyConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let privacy_fallback = match env::var("PRIVACY_FALLBACK") {
            Ok(value) => value
                .parse()
                .context("PRIVACY_FALLBACK must be fail_open or fail_closed")?,
            Err(_) => PrivacyFallback::default(),
        };

        Ok(Self { privacy_fallback })
    }

    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            privacy_fallback: PrivacyFallback::FailOpen,
        }
    }
}
