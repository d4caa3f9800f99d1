//! Egg Rise game state

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::generator::PlatformGenerator;
use crate::error::GameError;
use crate::host::{Color, palette};
use crate::settings::EggRiseSettings;
use crate::sim::Rect;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Egg {
    pub pos: Vec2,
    /// `vel.x` is a speed; the current platform's direction gives its sign
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    pub grounded: bool,
    pub jumping: bool,
}

impl Egg {
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Leave the ground with vertical velocity `force`.
    ///
    /// Returns false, leaving the egg untouched, while it is airborne.
    pub fn jump(&mut self, force: f32) -> bool {
        if !self.grounded || self.jumping {
            return false;
        }
        self.grounded = false;
        self.jumping = true;
        self.vel.y = force;
        true
    }
}

/// Horizontal travel direction of a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Position in the climb; the egg always targets `current + 1`
    pub index: u64,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub speed: f32,
    pub direction: Direction,
}

impl Platform {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Slide one frame, turning around at either side of the screen
    pub fn step(&mut self, screen_width: f32) {
        self.pos.x += self.speed * self.direction.sign();

        if self.pos.x <= 0.0 {
            self.pos.x = 0.0;
            self.direction = Direction::Right;
        } else if self.pos.x + self.size.x >= screen_width {
            self.pos.x = screen_width - self.size.x;
            self.direction = Direction::Left;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Won,
    GameOver,
}

/// Complete Egg Rise state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: EggRiseSettings,
    pub egg: Egg,
    pub platforms: PlatformGenerator,
    /// Index of the platform the egg last stood on
    pub current: u64,
    pub score: u64,
    pub eggs_left: u32,
    pub phase: GamePhase,
    /// Tick at which the egg fell off the screen
    pub respawning_since: Option<u64>,
    pub camera_moving: bool,
    /// Platform index that triggered the latest window recycle
    pub last_removed_index: u64,
    /// Tick of the latest cheat teleport
    pub last_teleport: Option<u64>,
    /// Frames since start
    pub time_ticks: u64,
    pub quit_requested: bool,
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(settings: EggRiseSettings, seed: u64) -> Result<Self, GameError> {
        settings.validate()?;

        let egg = Egg {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: settings.egg_radius,
            color: palette::PEACH,
            grounded: false,
            jumping: false,
        };
        let mut state = Self {
            platforms: PlatformGenerator::new(&settings),
            settings,
            egg,
            current: 0,
            score: 0,
            eggs_left: 0,
            phase: GamePhase::Playing,
            respawning_since: None,
            camera_moving: false,
            last_removed_index: 0,
            last_teleport: None,
            time_ticks: 0,
            quit_requested: false,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.start_game()?;
        Ok(state)
    }

    pub fn width(&self) -> f32 {
        self.settings.width as f32
    }

    pub fn height(&self) -> f32 {
        self.settings.height as f32
    }

    /// Fresh platforms, full lives, zero score, egg on the first platform
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.phase = GamePhase::Playing;
        self.eggs_left = self.settings.max_eggs;
        self.score = 0;
        self.last_removed_index = 0;
        self.last_teleport = None;

        self.platforms.reset();
        self.platforms.fill(&mut self.rng);
        self.place_egg(0)
    }

    /// Stand the egg in the middle of platform `index`, or of the lowest
    /// platform when `index` is not in the window
    pub fn place_egg(&mut self, index: u64) -> Result<(), GameError> {
        let platform = self
            .platforms
            .get(index)
            .or_else(|| self.platforms.first())
            .ok_or(GameError::NoPlatforms)?;

        self.current = platform.index;
        self.egg.pos = Vec2::new(
            platform.pos.x + (platform.size.x / 2.0).floor(),
            platform.pos.y - self.egg.radius,
        );
        self.egg.vel = Vec2::new(platform.speed, 0.0);
        self.egg.grounded = true;
        self.egg.jumping = false;
        self.randomize_egg_color();

        self.camera_moving = false;
        self.respawning_since = None;
        Ok(())
    }

    /// Any palette color except the background
    pub fn randomize_egg_color(&mut self) {
        loop {
            let color = self.rng.random_range(0..palette::COUNT);
            if color != self.settings.background_color {
                self.egg.color = color;
                return;
            }
        }
    }

    pub fn current_platform(&self) -> Option<&Platform> {
        self.platforms.get(self.current)
    }

    /// The only platform the egg can land on
    pub fn next_platform(&self) -> Option<&Platform> {
        self.platforms.get(self.current + 1)
    }

    pub fn has_reached(&self, index: u64) -> bool {
        self.current >= index
    }

    /// Index of the final platform of a finite climb
    pub fn final_index(&self) -> Option<u64> {
        (!self.settings.infinite).then(|| self.settings.num_platforms as u64 - 1)
    }

    pub fn is_respawning(&self) -> bool {
        self.respawning_since.is_some()
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(EggRiseSettings::default(), 11).unwrap()
    }

    #[test]
    fn test_egg_jumps_only_from_ground() {
        let mut egg = new_state().egg;
        assert!(egg.jump(-10.0));
        assert_eq!(egg.vel.y, -10.0);
        assert!(!egg.grounded && egg.jumping);

        egg.vel.y = 2.0;
        assert!(!egg.jump(-10.0));
        assert_eq!(egg.vel.y, 2.0);
    }

    #[test]
    fn test_platform_turns_at_walls() {
        let mut platform = Platform {
            index: 0,
            pos: Vec2::new(2.0, 100.0),
            size: Vec2::new(60.0, 4.0),
            color: palette::PEACH,
            speed: 3.0,
            direction: Direction::Left,
        };
        platform.step(240.0);
        assert_eq!(platform.pos.x, 0.0);
        assert_eq!(platform.direction, Direction::Right);

        platform.pos.x = 178.0;
        platform.step(240.0);
        assert_eq!(platform.pos.x, 180.0);
        assert_eq!(platform.direction, Direction::Left);
    }

    #[test]
    fn test_start_places_egg_on_first_platform() {
        let state = new_state();
        let first = state.current_platform().unwrap();
        assert_eq!(state.current, 0);
        assert_eq!(first.pos.y, 320.0);
        assert_eq!(state.egg.bottom(), first.pos.y);
        assert!(first.rect().spans_x(state.egg.pos.x));
        assert!(state.egg.grounded);
        assert_eq!(state.eggs_left, 3);
        assert_eq!(state.egg.vel, Vec2::new(first.speed, 0.0));
    }

    #[test]
    fn test_egg_color_never_background() {
        let mut state = new_state();
        for _ in 0..200 {
            state.randomize_egg_color();
            assert_ne!(state.egg.color, state.settings.background_color);
            assert!(state.egg.color < palette::COUNT);
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = EggRiseSettings {
            num_platforms: 1,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(settings, 0),
            Err(GameError::TooFewPlatforms { count: 1 })
        ));
    }

    #[test]
    fn test_final_index() {
        let state = new_state();
        assert_eq!(state.final_index(), Some(9));

        let infinite = GameState::new(
            EggRiseSettings {
                infinite: true,
                ..Default::default()
            },
            0,
        )
        .unwrap();
        assert_eq!(infinite.final_index(), None);
    }
}
