//! Game settings and tuning
//!
//! Defaults reproduce the classic feel of each game. A `retro-arcade.json`
//! in the working directory overrides any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FPS;
use crate::error::GameError;
use crate::host::{Color, palette};

/// Arkanoid tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArkanoidSettings {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Downward acceleration, px/frame²
    pub gravity: f32,
    pub ball_radius: f32,
    /// Horizontal speed scale of a paddle bounce
    pub ball_speed: f32,
    /// Vertical velocity given by every paddle bounce (negative is up)
    pub jump_speed: f32,
    pub ball_color: Color,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Distance from the paddle's top to the bottom of the screen
    pub paddle_offset: f32,
    pub paddle_color: Color,
    /// Show ball, paddle and section debug lines
    pub debug_overlay: bool,
}

impl Default for ArkanoidSettings {
    fn default() -> Self {
        Self {
            width: 360,
            height: 240,
            fps: FPS,
            gravity: 0.3,
            ball_radius: 3.0,
            ball_speed: 2.0,
            jump_speed: -9.8,
            ball_color: palette::WHITE,
            paddle_width: 40.0,
            paddle_height: 2.0,
            paddle_speed: 3.0,
            paddle_offset: 20.0,
            paddle_color: palette::WHITE,
            debug_overlay: true,
        }
    }
}

/// Pong tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongSettings {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_color: Color,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Gap between each paddle and its side of the screen
    pub paddle_offset: f32,
    pub paddle_color: Color,
    /// Distance of the score line from the top
    pub score_offset: f32,
    /// Pause after a point before the next serve
    pub round_end_secs: f32,
}

impl Default for PongSettings {
    fn default() -> Self {
        Self {
            width: 240,
            height: 160,
            fps: FPS,
            ball_radius: 2.0,
            ball_speed: 3.0,
            ball_color: palette::WHITE,
            paddle_width: 4.0,
            paddle_height: 30.0,
            paddle_speed: 3.0,
            paddle_offset: 10.0,
            paddle_color: palette::WHITE,
            score_offset: 10.0,
            round_end_secs: 1.0,
        }
    }
}

/// Egg Rise tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EggRiseSettings {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub max_eggs: u32,
    /// Platforms in a finite run, or the sliding window size in infinite mode
    pub num_platforms: usize,
    pub infinite: bool,
    /// Platforms recycled per batch in infinite mode
    pub remove_amount: usize,
    pub camera_speed: f32,
    /// Camera scrolls until the egg sits below `height * camera_offset`
    pub camera_offset: f32,
    pub respawn_secs: f32,
    /// Minimum time between cheat teleports while C is held
    pub teleport_secs: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_min_speed: f32,
    pub platform_max_speed: f32,
    /// Vertical distance between consecutive platforms
    pub platform_gap: f32,
    /// Distance from the first platform to the bottom of the screen
    pub platform_base_offset: f32,
    pub platform_color: Color,
    pub last_platform_color: Color,
    pub egg_radius: f32,
    pub gravity: f32,
    /// Jump apex as a multiple of the platform gap
    pub jump_multiplier: f32,
    pub background_color: Color,
    pub text_color: Color,
    pub debug_color: Color,
    pub win_color: Color,
    pub lose_color: Color,
    /// Show state flags and the next platform position
    pub debug_overlay: bool,
}

impl Default for EggRiseSettings {
    fn default() -> Self {
        Self {
            width: 240,
            height: 360,
            fps: FPS,
            max_eggs: 3,
            num_platforms: 10,
            infinite: false,
            remove_amount: 2,
            camera_speed: 2.0,
            camera_offset: 0.9,
            respawn_secs: 1.0,
            teleport_secs: 0.5,
            platform_width: 60.0,
            platform_height: 4.0,
            platform_min_speed: 2.0,
            platform_max_speed: 4.0,
            platform_gap: 200.0,
            platform_base_offset: 40.0,
            platform_color: palette::PEACH,
            last_platform_color: palette::LIME,
            egg_radius: 8.0,
            gravity: 0.5,
            jump_multiplier: 1.4,
            background_color: palette::DARK_BLUE,
            text_color: palette::WHITE,
            debug_color: palette::GREEN,
            win_color: palette::YELLOW,
            lose_color: palette::RED,
            debug_overlay: true,
        }
    }
}

impl EggRiseSettings {
    /// Initial jump velocity that clears `platform_gap * jump_multiplier`
    pub fn jump_force(&self) -> f32 {
        -(2.0 * self.gravity * self.platform_gap * self.jump_multiplier).sqrt()
    }

    /// Reject configurations the game cannot start with
    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_platforms < 2 {
            return Err(GameError::TooFewPlatforms {
                count: self.num_platforms,
            });
        }
        if self.infinite && (self.remove_amount == 0 || self.num_platforms < 2 * self.remove_amount) {
            return Err(GameError::WindowTooSmall {
                window: self.num_platforms,
                batch: self.remove_amount,
            });
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("platform_gap", self.platform_gap),
            ("jump_multiplier", self.jump_multiplier),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidSetting {
                    name,
                    reason: format!("{} must be positive", value),
                });
            }
        }
        if self.platform_min_speed > self.platform_max_speed {
            return Err(GameError::InvalidSetting {
                name: "platform_min_speed",
                reason: format!(
                    "{} exceeds platform_max_speed {}",
                    self.platform_min_speed, self.platform_max_speed
                ),
            });
        }
        if self.platform_width >= self.width as f32 {
            return Err(GameError::InvalidSetting {
                name: "platform_width",
                reason: format!("{} does not fit a {}px screen", self.platform_width, self.width),
            });
        }
        if self.fps == 0 {
            return Err(GameError::InvalidSetting {
                name: "fps",
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}

/// All settings, one block per game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed shared by all games
    pub seed: u64,
    /// Frames each demo binary runs before exiting
    pub demo_frames: u64,
    pub arkanoid: ArkanoidSettings,
    pub pong: PongSettings,
    pub egg_rise: EggRiseSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            demo_frames: 60 * 60,
            arkanoid: ArkanoidSettings::default(),
            pong: PongSettings::default(),
            egg_rise: EggRiseSettings::default(),
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "retro-arcade.json";

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        for (name, fps) in [
            ("arkanoid.fps", self.arkanoid.fps),
            ("pong.fps", self.pong.fps),
        ] {
            if fps == 0 {
                return Err(GameError::InvalidSetting {
                    name,
                    reason: "must be positive".into(),
                });
            }
        }
        self.egg_rise.validate()
    }

    /// Load settings from `path`
    pub fn load_from(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load `retro-arcade.json` from the working directory, or the defaults
    pub fn load() -> Result<Self, GameError> {
        Self::load_or_default(Path::new(Self::FILE_NAME))
    }

    /// Load `path` if it exists. A file that cannot be read falls back to the
    /// defaults; a malformed or invalid one is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, GameError> {
        if !path.exists() {
            log::info!("Using default settings");
            return Ok(Self::default());
        }
        match Self::load_from(path) {
            Err(err @ GameError::SettingsIo { .. }) => {
                log::warn!("{}, using default settings", err);
                Ok(Self::default())
            }
            result => result,
        }
    }
}
