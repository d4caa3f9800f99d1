//! Egg Rise
//!
//! An egg climbs a stack of sliding platforms one jump at a time. Each
//! platform reached scores a point; falling off the screen costs an egg.
//! A finite climb is won on the last platform, an infinite one keeps
//! generating platforms above the egg.

pub mod draw;
pub mod generator;
pub mod state;
pub mod tick;

pub use draw::draw;
pub use generator::PlatformGenerator;
pub use state::{Direction, Egg, GamePhase, GameState, Platform};
pub use tick::{TickInput, tick};

use crate::error::GameError;
use crate::host::{Canvas, Game, Key, Keyboard, WindowSpec};
use crate::settings::EggRiseSettings;

/// Egg Rise wired to the host frame loop
pub struct EggRise {
    pub state: GameState,
    /// Let the egg jump by itself
    pub autopilot: bool,
}

impl EggRise {
    pub fn new(settings: EggRiseSettings, seed: u64) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(settings, seed)?,
            autopilot: false,
        })
    }
}

impl Game for EggRise {
    type Input = TickInput;

    fn window(&self) -> WindowSpec {
        WindowSpec {
            width: self.state.settings.width,
            height: self.state.settings.height,
            title: "Egg Rise".into(),
            fps: self.state.settings.fps,
        }
    }

    fn read_input(&self, keys: &dyn Keyboard) -> TickInput {
        TickInput {
            jump: keys.is_key_pressed(Key::Space),
            restart: keys.is_key_pressed(Key::R),
            teleport: keys.is_key_down(Key::C),
            quit: keys.is_key_pressed(Key::Q),
            idle_mode: self.autopilot,
        }
    }

    fn update(&mut self, input: &TickInput) -> Result<(), GameError> {
        tick(&mut self.state, input)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw(&self.state, canvas);
    }

    fn wants_quit(&self) -> bool {
        self.state.quit_requested
    }
}
