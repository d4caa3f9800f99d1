//! Host engine seam
//!
//! The host supplies the window, the frame loop, keyboard polling and the
//! drawing primitives. Games only see the [`Keyboard`] and [`Canvas`] halves;
//! [`Host::run`] drives the `update`/`draw` pair once per frame.

pub mod headless;

pub use headless::{DrawCommand, HeadlessHost};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Palette index into the host's 16-color palette
pub type Color = u8;

/// The 16-color retro palette
pub mod palette {
    use super::Color;

    pub const BLACK: Color = 0;
    pub const NAVY: Color = 1;
    pub const PURPLE: Color = 2;
    pub const GREEN: Color = 3;
    pub const BROWN: Color = 4;
    pub const DARK_BLUE: Color = 5;
    pub const LIGHT_BLUE: Color = 6;
    pub const WHITE: Color = 7;
    pub const RED: Color = 8;
    pub const ORANGE: Color = 9;
    pub const YELLOW: Color = 10;
    pub const LIME: Color = 11;
    pub const CYAN: Color = 12;
    pub const GRAY: Color = 13;
    pub const PINK: Color = 14;
    pub const PEACH: Color = 15;

    /// Number of palette entries
    pub const COUNT: Color = 16;
}

/// Keys the games poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    W,
    S,
    Up,
    Down,
    Space,
    C,
    Q,
    R,
}

/// Keyboard state for the current frame
pub trait Keyboard {
    /// Key is held this frame
    fn is_key_down(&self, key: Key) -> bool;
    /// Key went down this frame
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// Drawing primitives, in screen pixels
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color);
}

/// Window parameters passed to [`Host::init`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fps: u32,
}

/// A game driven by the host's frame loop
pub trait Game {
    /// Per-frame commands derived from the keyboard
    type Input;

    fn window(&self) -> WindowSpec;

    fn read_input(&self, keys: &dyn Keyboard) -> Self::Input;

    /// Advance one frame
    fn update(&mut self, input: &Self::Input) -> Result<(), GameError>;

    /// Render the current state; no game logic happens here
    fn draw(&self, canvas: &mut dyn Canvas);

    /// The game asked the host to close
    fn wants_quit(&self) -> bool {
        false
    }
}

/// The engine side: window, frame lifecycle, input and drawing
pub trait Host: Keyboard + Canvas {
    fn init(&mut self, window: &WindowSpec);

    /// Start the next frame; returns false once the host is shutting down
    fn begin_frame(&mut self) -> bool;

    /// Index of the current frame, starting at 0
    fn frame_count(&self) -> u64;

    fn quit(&mut self);

    /// Run `game` until the host stops or the game quits
    fn run<G: Game>(&mut self, game: &mut G) -> Result<(), GameError>
    where
        Self: Sized,
    {
        let window = game.window();
        log::info!("{} starting ({}x{} @ {} fps)", window.title, window.width, window.height, window.fps);
        self.init(&window);

        while self.begin_frame() {
            let input = game.read_input(&*self);
            game.update(&input)?;
            if game.wants_quit() {
                log::info!("{} quit at frame {}", window.title, self.frame_count());
                self.quit();
                continue;
            }
            game.draw(self);
        }

        Ok(())
    }
}

/// x that centres `text` on `center_x` in the host's 4px-wide font
pub fn centered_text_x(center_x: f32, text: &str) -> f32 {
    center_x - (text.chars().count() as f32 * crate::consts::CHAR_WIDTH) / 2.0
}
