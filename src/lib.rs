//! Retro Arcade - three small pixel games on a host-engine seam
//!
//! Core modules:
//! - `sim`: Shared physics (gravity, wall reflection, landing, paddle sections)
//! - `host`: Keyboard/canvas/frame-loop seam and a headless recording host
//! - `arkanoid`, `pong`, `egg_rise`: One game each, as state + tick + draw
//! - `settings`: Data-driven tuning for every game

pub mod arkanoid;
pub mod egg_rise;
pub mod error;
pub mod host;
pub mod pong;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::Settings;

/// Engine constants shared by every game
pub mod consts {
    /// Frame rate every game is tuned for; speeds are in px per frame
    pub const FPS: u32 = 60;
    /// Width of one glyph in the host's built-in font
    pub const CHAR_WIDTH: f32 = 4.0;
}

/// Number of frames covering `seconds` at `fps`, at least one
#[inline]
pub fn seconds_to_frames(seconds: f32, fps: u32) -> u64 {
    ((seconds * fps as f32).round() as u64).max(1)
}
