//! Data models for project burndown.
//!
//! This module contains the domain models:
//! - ProjectItem (tracked work or a redacted placeholder)
//! - Iteration
//! - Points

pub mod item;
pub mod points;

pub use item::{ItemKind, Iteration, ProjectItem, TrackedItem};
pub use points::Points;
