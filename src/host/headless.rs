//! Headless recording host
//!
//! Runs games without a window: keyboard input comes from a script and every
//! drawing call of the latest frame is kept as a [`DrawCommand`].

use std::collections::{BTreeMap, HashSet};

use super::{Canvas, Color, Host, Key, Keyboard, WindowSpec};

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    Circle { x: f32, y: f32, radius: f32, color: Color },
    Text { x: f32, y: f32, text: String, color: Color },
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    window: Option<WindowSpec>,
    /// Frames begun so far
    frames: u64,
    frame_limit: Option<u64>,
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    /// One-shot presses keyed by frame index
    script: BTreeMap<u64, Vec<Key>>,
    commands: Vec<DrawCommand>,
    quit: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after `frames` frames
    pub fn with_frame_limit(frames: u64) -> Self {
        Self {
            frame_limit: Some(frames),
            ..Self::default()
        }
    }

    /// Press `key` for a single frame at `frame`
    pub fn press_at(&mut self, frame: u64, key: Key) {
        self.script.entry(frame).or_default().push(key);
    }

    /// Hold `key` down until released
    pub fn hold(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Drawing calls of the latest frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text drawn in the latest frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn window(&self) -> Option<&WindowSpec> {
        self.window.as_ref()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }
}

impl Keyboard for HeadlessHost {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key) || self.pressed.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

impl Canvas for HeadlessHost {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }
}

impl Host for HeadlessHost {
    fn init(&mut self, window: &WindowSpec) {
        log::debug!("headless host init: {:?}", window);
        self.window = Some(window.clone());
    }

    fn begin_frame(&mut self) -> bool {
        if self.quit || self.frame_limit.is_some_and(|limit| self.frames >= limit) {
            return false;
        }

        let frame = self.frames;
        self.frames += 1;
        self.commands.clear();
        self.pressed = self.script.remove(&frame).unwrap_or_default().into_iter().collect();
        true
    }

    fn frame_count(&self) -> u64 {
        self.frames.saturating_sub(1)
    }

    fn quit(&mut self) {
        self.quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::host::Game;

    /// Counts frames and quits when Q is pressed
    struct Counter {
        updates: u32,
        quit: bool,
    }

    impl Game for Counter {
        type Input = bool;

        fn window(&self) -> WindowSpec {
            WindowSpec {
                width: 8,
                height: 8,
                title: "counter".into(),
                fps: 60,
            }
        }

        fn read_input(&self, keys: &dyn Keyboard) -> bool {
            keys.is_key_pressed(Key::Q)
        }

        fn update(&mut self, quit: &bool) -> Result<(), GameError> {
            self.updates += 1;
            self.quit = *quit;
            Ok(())
        }

        fn draw(&self, canvas: &mut dyn Canvas) {
            canvas.clear(0);
            canvas.draw_text(0.0, 0.0, &self.updates.to_string(), 7);
        }

        fn wants_quit(&self) -> bool {
            self.quit
        }
    }

    #[test]
    fn test_frame_limit_stops_run() {
        let mut host = HeadlessHost::with_frame_limit(5);
        let mut game = Counter { updates: 0, quit: false };
        host.run(&mut game).unwrap();

        assert_eq!(game.updates, 5);
        assert_eq!(host.frames_run(), 5);
        assert_eq!(host.frame_count(), 4);
        assert_eq!(host.window().map(|w| w.width), Some(8));
        assert_eq!(host.texts().collect::<Vec<_>>(), vec!["5"]);
    }

    #[test]
    fn test_scripted_press_quits() {
        let mut host = HeadlessHost::with_frame_limit(100);
        host.press_at(3, Key::Q);
        let mut game = Counter { updates: 0, quit: false };
        host.run(&mut game).unwrap();

        assert!(host.has_quit());
        assert_eq!(game.updates, 4);
    }

    #[test]
    fn test_pressed_is_one_shot_and_held_persists() {
        let mut host = HeadlessHost::new();
        host.press_at(0, Key::Space);
        host.hold(Key::A);

        assert!(host.begin_frame());
        assert!(host.is_key_pressed(Key::Space));
        assert!(host.is_key_down(Key::Space));
        assert!(host.is_key_down(Key::A));
        assert!(!host.is_key_pressed(Key::A));

        assert!(host.begin_frame());
        assert!(!host.is_key_down(Key::Space));
        assert!(host.is_key_down(Key::A));

        host.release(Key::A);
        assert!(!host.is_key_down(Key::A));
    }
}
