//! Public profile privacy.
//!
//! Per-group projection of profile attributes based on follow state.

pub mod projector;
pub mod service;
pub mod viewer;

pub use projector::{is_visible, project, project_resolved, ProfileProjector};
pub use service::{ProfileError, ProfileService};
pub use viewer::ViewerContext;
