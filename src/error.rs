//! Startup and configuration errors
//!
//! In-game failures (lost lives, lost rounds) are state transitions, not errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Platforms were asked to move before any were generated
    #[error("no platforms to update")]
    NoPlatforms,

    #[error("at least 2 platforms are required, got {count}")]
    TooFewPlatforms { count: usize },

    /// Infinite mode would let the egg outrun generation
    #[error("platform window of {window} must be at least twice the removal batch of {batch}")]
    WindowTooSmall { window: usize, batch: usize },

    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("failed to read settings from {path}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings")]
    SettingsParse(#[from] serde_json::Error),
}
