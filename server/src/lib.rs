//! Pulse Server
//!
//! Access-control and privacy policy for the Pulse fitness community:
//! - [`permissions`]: role hierarchy rules for admin actions
//! - [`profile`]: per-field projection of public profiles
//!
//! Both are pure and synchronous. [`admin`] and [`profile::ProfileService`]
//! resolve users and follow edges through the [`db`] and [`social`] traits
//! and feed the rules.

pub mod admin;
pub mod config;
pub mod db;
pub mod permissions;
pub mod profile;
pub mod social;
