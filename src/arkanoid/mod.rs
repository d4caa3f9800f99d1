//! Arkanoid
//!
//! A single paddle keeps a gravity-driven ball in the air. Where the ball
//! lands on the paddle picks its bounce angle and the points scored.

pub mod draw;
pub mod state;
pub mod tick;

pub use draw::draw;
pub use state::{BOUNCE_ANGLES, Ball, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};

use crate::error::GameError;
use crate::host::{Canvas, Game, Key, Keyboard, WindowSpec};
use crate::settings::ArkanoidSettings;

/// Arkanoid wired to the host frame loop
pub struct Arkanoid {
    pub state: GameState,
    /// Let the paddle play itself
    pub autopilot: bool,
}

impl Arkanoid {
    pub fn new(settings: ArkanoidSettings) -> Self {
        Self {
            state: GameState::new(settings),
            autopilot: false,
        }
    }
}

impl Game for Arkanoid {
    type Input = TickInput;

    fn window(&self) -> WindowSpec {
        WindowSpec {
            width: self.state.settings.width,
            height: self.state.settings.height,
            title: "Arkanoid".into(),
            fps: self.state.settings.fps,
        }
    }

    fn read_input(&self, keys: &dyn Keyboard) -> TickInput {
        TickInput {
            left: keys.is_key_down(Key::A),
            right: keys.is_key_down(Key::D),
            restart: keys.is_key_pressed(Key::R),
            idle_mode: self.autopilot,
        }
    }

    fn update(&mut self, input: &TickInput) -> Result<(), GameError> {
        tick(&mut self.state, input);
        Ok(())
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw(&self.state, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HeadlessHost, Host};

    #[test]
    fn test_run_on_headless_host() {
        let mut game = Arkanoid::new(ArkanoidSettings::default());
        let mut host = HeadlessHost::with_frame_limit(10);
        host.hold(Key::D);
        host.run(&mut game).unwrap();

        assert_eq!(game.state.time_ticks, 10);
        assert_eq!(game.state.paddle.pos.x, 160.0 + 30.0);
        assert_eq!(host.window().map(|w| w.title.as_str()), Some("Arkanoid"));
    }

    #[test]
    fn test_restart_key_after_game_over() {
        let mut game = Arkanoid::new(ArkanoidSettings::default());
        game.state.phase = GamePhase::GameOver;
        let mut host = HeadlessHost::with_frame_limit(2);
        host.press_at(1, Key::R);
        host.run(&mut game).unwrap();

        assert!(!game.state.is_game_over());
    }
}
