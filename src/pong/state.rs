//! Pong game state

use std::cmp::Ordering;
use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::host::{Color, Key};
use crate::settings::PongSettings;
use crate::sim::{AngleTable, Rect, bounce_angle, section_at, section_side};

/// Outgoing angle per paddle section, top to bottom.
///
/// Angles point left; the right paddle uses them as-is and the left paddle
/// mirrors them horizontally.
pub const BOUNCE_ANGLES: AngleTable = [
    4.0 * PI / 6.0, // 120°
    5.0 * PI / 6.0, // 150°
    PI,             // 180°
    7.0 * PI / 6.0, // 210°
    8.0 * PI / 6.0, // 240°
];

/// Velocity after the ball leaves a paddle section.
///
/// `mirror` is +1 for the right paddle and -1 for the left. Upper sections
/// send the ball up, lower sections down, the center one straight across.
pub fn bounce_velocity(section: usize, angle: f32, ball_speed: f32, mirror: f32) -> Vec2 {
    let vx = angle.cos() * ball_speed * mirror;
    let vy = (angle.sin() * ball_speed).abs();
    let vy = match section_side(section) {
        Ordering::Less => -vy,
        Ordering::Greater => vy,
        Ordering::Equal => 0.0,
    };
    Vec2::new(vx, vy)
}

/// A player, by the side of the screen they defend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign applied to the bounce table for this side's paddle
    pub fn mirror(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleKeys {
    pub up: Key,
    pub down: Key,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
    pub keys: PaddleKeys,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Section under `ball_y`
    pub fn section_at(&self, ball_y: f32) -> usize {
        section_at(ball_y, self.pos.y, self.size.y)
    }

    pub fn bounce_angle(&self, section: usize) -> f32 {
        bounce_angle(&BOUNCE_ANGLES, section)
    }

    /// Paddle shifted by `dy`, kept inside `[0, field_height]`
    pub fn moved(&self, dy: f32, field_height: f32) -> Vec2 {
        let max_y = (field_height - self.size.y).max(0.0);
        Vec2::new(self.pos.x, (self.pos.y + dy).clamp(0.0, max_y))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Point scored; play resumes at tick `resume_at`
    RoundOver { winner: Side, resume_at: u64 },
}

/// Complete Pong state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: PongSettings,
    /// Player 1 (W/S)
    pub left: Paddle,
    /// Player 2 (Up/Down)
    pub right: Paddle,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: GamePhase,
    /// Frames since start
    pub time_ticks: u64,
    /// Serve direction RNG
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(settings: PongSettings, seed: u64) -> Self {
        let size = Vec2::new(settings.paddle_width, settings.paddle_height);
        let width = settings.width as f32;
        let paddle = |x: f32, keys: PaddleKeys| Paddle {
            pos: Vec2::new(x, 0.0),
            size,
            speed: settings.paddle_speed,
            color: settings.paddle_color,
            keys,
        };

        let left = paddle(
            settings.paddle_offset,
            PaddleKeys {
                up: Key::W,
                down: Key::S,
            },
        );
        let right = paddle(
            width - settings.paddle_offset - settings.paddle_width,
            PaddleKeys {
                up: Key::Up,
                down: Key::Down,
            },
        );
        let ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::new(settings.ball_speed, 0.0),
            radius: settings.ball_radius,
            color: settings.ball_color,
        };

        let mut state = Self {
            settings,
            left,
            right,
            ball,
            left_score: 0,
            right_score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_positions();
        state
    }

    pub fn width(&self) -> f32 {
        self.settings.width as f32
    }

    pub fn height(&self) -> f32 {
        self.settings.height as f32
    }

    pub fn mid_height(&self) -> f32 {
        (self.height() / 2.0).floor()
    }

    /// Paddles centered vertically, ball at the center; velocity untouched
    pub fn reset_positions(&mut self) {
        let mid_height = self.mid_height();
        let paddle_y = mid_height - (self.settings.paddle_height / 2.0).floor();
        self.left.pos.y = paddle_y;
        self.right.pos.y = paddle_y;
        self.ball.pos = Vec2::new((self.width() / 2.0).floor(), mid_height);
    }

    /// Give each velocity component a random sign for the next serve
    pub fn randomize_serve(&mut self) {
        let sx = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vel *= Vec2::new(sx, sy);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }
}
