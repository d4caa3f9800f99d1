//! Arkanoid game state

use std::cmp::Ordering;
use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::host::Color;
use crate::settings::ArkanoidSettings;
use crate::sim::{AngleTable, Rect, bounce_angle, section_at, section_side};

/// Outgoing angle per paddle section, left to right
pub const BOUNCE_ANGLES: AngleTable = [
    5.0 * PI / 6.0, // 150°
    2.0 * PI / 3.0, // 120°
    PI,             // 180°
    PI / 6.0,       // 30°
    PI / 3.0,       // 60°
];

/// Points for a paddle hit in a section; the edges are worth the most
pub fn score_for_section(section: usize) -> u64 {
    match section {
        0 | 4 => 100,
        1 | 3 => 80,
        _ => 20,
    }
}

/// Velocity after the ball leaves a paddle section.
///
/// Every bounce launches upward at `jump_speed`; the section decides the
/// horizontal direction, and the center section sends the ball straight up.
pub fn bounce_velocity(section: usize, angle: f32, ball_speed: f32, jump_speed: f32) -> Vec2 {
    let vx = (angle.cos() * ball_speed).abs();
    let vx = match section_side(section) {
        Ordering::Less => -vx,
        Ordering::Greater => vx,
        Ordering::Equal => 0.0,
    };
    Vec2::new(vx, jump_speed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Section under `ball_x`
    pub fn section_at(&self, ball_x: f32) -> usize {
        section_at(ball_x, self.pos.x, self.size.x)
    }

    /// Bounce angle for a ball at `ball_x`
    pub fn bounce_angle(&self, ball_x: f32) -> f32 {
        bounce_angle(&BOUNCE_ANGLES, self.section_at(ball_x))
    }

    /// Paddle shifted by `dx`, kept inside `[0, field_width]`
    pub fn moved(&self, dx: f32, field_width: f32) -> Vec2 {
        let max_x = (field_width - self.size.x).max(0.0);
        Vec2::new((self.pos.x + dx).clamp(0.0, max_x), self.pos.y)
    }
}

/// Complete Arkanoid state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: ArkanoidSettings,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: u64,
    pub phase: GamePhase,
    /// Frames since start
    pub time_ticks: u64,
    /// Section of the latest paddle hit
    pub last_section: Option<usize>,
}

impl GameState {
    pub fn new(settings: ArkanoidSettings) -> Self {
        let ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: settings.ball_radius,
            color: settings.ball_color,
        };
        let paddle = Paddle {
            pos: Vec2::ZERO,
            size: Vec2::new(settings.paddle_width, settings.paddle_height),
            speed: settings.paddle_speed,
            color: settings.paddle_color,
        };
        let mut state = Self {
            settings,
            ball,
            paddle,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            last_section: None,
        };
        state.restart();
        state
    }

    pub fn width(&self) -> f32 {
        self.settings.width as f32
    }

    pub fn height(&self) -> f32 {
        self.settings.height as f32
    }

    /// Ball back at the center at rest, paddle centered, score cleared
    pub fn restart(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.ball.pos = Vec2::new((width / 2.0).floor(), (height / 2.0).floor());
        self.ball.vel = Vec2::ZERO;
        self.paddle.pos = Vec2::new(
            ((width - self.paddle.size.x) / 2.0).floor(),
            height - self.settings.paddle_offset,
        );
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.last_section = None;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_table() {
        let expected = [150.0, 120.0, 180.0, 30.0, 60.0];
        for (section, degrees) in expected.iter().enumerate() {
            let angle = bounce_angle(&BOUNCE_ANGLES, section);
            assert!((angle.to_degrees() - degrees).abs() < 1e-3);
        }
    }

    #[test]
    fn test_paddle_section_clamps() {
        let state = GameState::new(ArkanoidSettings::default());
        let paddle = &state.paddle;
        assert_eq!(paddle.section_at(paddle.pos.x - 30.0), 0);
        assert_eq!(paddle.section_at(paddle.pos.x + 20.0), 2);
        assert_eq!(paddle.section_at(paddle.pos.x + 100.0), 4);
        assert_eq!(paddle.bounce_angle(paddle.pos.x + 100.0), PI / 3.0);
    }

    #[test]
    fn test_bounce_velocity_direction_by_section() {
        let left = bounce_velocity(0, BOUNCE_ANGLES[0], 2.0, -9.8);
        assert!(left.x < 0.0);
        assert!((left.x + (3.0f32.sqrt())).abs() < 1e-4);
        assert_eq!(left.y, -9.8);

        let inner_left = bounce_velocity(1, BOUNCE_ANGLES[1], 2.0, -9.8);
        assert!((inner_left.x + 1.0).abs() < 1e-4);

        let center = bounce_velocity(2, BOUNCE_ANGLES[2], 2.0, -9.8);
        assert_eq!(center.x, 0.0);

        let right = bounce_velocity(4, BOUNCE_ANGLES[4], 2.0, -9.8);
        assert!((right.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_moves_within_field() {
        let state = GameState::new(ArkanoidSettings::default());
        let paddle = &state.paddle;
        assert_eq!(paddle.moved(-1000.0, 360.0).x, 0.0);
        assert_eq!(paddle.moved(1000.0, 360.0).x, 320.0);
        assert_eq!(paddle.moved(3.0, 360.0).x, paddle.pos.x + 3.0);
    }

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(ArkanoidSettings::default());
        assert_eq!(state.ball.pos, Vec2::new(180.0, 120.0));
        assert_eq!(state.paddle.pos, Vec2::new(160.0, 220.0));
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_section_scores() {
        assert_eq!(score_for_section(0), 100);
        assert_eq!(score_for_section(3), 80);
        assert_eq!(score_for_section(2), 20);
    }
}
