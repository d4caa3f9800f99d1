//! Pong
//!
//! Two paddles return a ball across the field. Where the ball meets a paddle
//! picks its outgoing angle; a ball leaving the left or right edge is a point
//! for the player it was moving away from.

pub mod draw;
pub mod state;
pub mod tick;

pub use draw::draw;
pub use state::{BOUNCE_ANGLES, Ball, GamePhase, GameState, Paddle, PaddleKeys, Side};
pub use tick::{TickInput, tick};

use crate::error::GameError;
use crate::host::{Canvas, Game, Keyboard, WindowSpec};
use crate::settings::PongSettings;

/// Pong wired to the host frame loop
pub struct Pong {
    pub state: GameState,
    /// Let both paddles play themselves
    pub autopilot: bool,
}

impl Pong {
    pub fn new(settings: PongSettings, seed: u64) -> Self {
        Self {
            state: GameState::new(settings, seed),
            autopilot: false,
        }
    }
}

impl Game for Pong {
    type Input = TickInput;

    fn window(&self) -> WindowSpec {
        WindowSpec {
            width: self.state.settings.width,
            height: self.state.settings.height,
            title: "Pong".into(),
            fps: self.state.settings.fps,
        }
    }

    fn read_input(&self, keys: &dyn Keyboard) -> TickInput {
        let left = self.state.left.keys;
        let right = self.state.right.keys;
        TickInput {
            left_up: keys.is_key_down(left.up),
            left_down: keys.is_key_down(left.down),
            right_up: keys.is_key_down(right.up),
            right_down: keys.is_key_down(right.down),
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
    use crate::host::{HeadlessHost, Host, Key};

    #[test]
    fn test_player_keys_move_their_paddles() {
        let mut game = Pong::new(PongSettings::default(), 9);
        let mut host = HeadlessHost::with_frame_limit(5);
        host.hold(Key::W);
        host.hold(Key::Down);
        host.run(&mut game).unwrap();

        assert_eq!(game.state.time_ticks, 5);
        assert_eq!(game.state.left.pos.y, 65.0 - 15.0);
        assert_eq!(game.state.right.pos.y, 65.0 + 15.0);
        assert_eq!(host.window().map(|w| w.title.as_str()), Some("Pong"));
    }

    #[test]
    fn test_autopilot_ignores_keyboard() {
        let mut game = Pong::new(PongSettings::default(), 9);
        game.autopilot = true;
        let mut host = HeadlessHost::with_frame_limit(600);
        host.run(&mut game).unwrap();

        assert_eq!(game.state.time_ticks, 600);
        assert_eq!(host.frames_run(), 600);
    }
}
