//! Shared deterministic simulation helpers
//!
//! Everything here is pure and frame-based:
//! - Fixed per-frame steps only (pixels per frame)
//! - No rendering or host dependencies
//! - Value-returning updates; callers decide what to store

pub mod bounce;
pub mod collision;
pub mod physics;

pub use bounce::{AngleTable, CENTER_SECTION, SECTIONS, bounce_angle, section_at, section_side};
pub use collision::{Rect, lands_on};
pub use physics::{Bounds, Reflection, Walls, apply_gravity, integrate, reflect_off_walls};
