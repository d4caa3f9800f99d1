//! Arkanoid frame step

use super::state::{GamePhase, GameState, bounce_velocity, score_for_section};
use crate::sim::{Bounds, Walls, apply_gravity, integrate, reflect_off_walls};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Restart after game over
    pub restart: bool,
    /// Demo mode - the paddle follows the ball
    pub idle_mode: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if state.phase == GamePhase::GameOver {
        if input.restart || input.idle_mode {
            log::info!("Arkanoid restarted");
            state.restart();
        }
        return;
    }

    let mut input = input.clone();
    if input.idle_mode {
        steer_toward_ball(state, &mut input);
    }

    resolve_paddle_collision(state);
    step_ball(state);
    step_paddle(state, &input);

    if state.ball.bottom() >= state.height() {
        state.phase = GamePhase::GameOver;
        log::info!("Arkanoid game over, score {}", state.score);
    }
}

/// Bounce the ball off the paddle if it is falling onto it.
///
/// Returns the section that was hit.
pub fn resolve_paddle_collision(state: &mut GameState) -> Option<usize> {
    let ball = &state.ball;
    let paddle = &state.paddle;

    let falling = ball.vel.y > 0.0;
    let reached = ball.bottom() >= paddle.pos.y;
    if !(falling && reached && paddle.rect().spans_x(ball.pos.x)) {
        return None;
    }

    let section = paddle.section_at(ball.pos.x);
    let angle = paddle.bounce_angle(ball.pos.x);
    state.ball.vel = bounce_velocity(section, angle, state.settings.ball_speed, state.settings.jump_speed);
    state.score += score_for_section(section);
    state.last_section = Some(section);

    log::debug!(
        "paddle hit: section {} angle {:.0}° score {}",
        section,
        angle.to_degrees(),
        state.score
    );
    Some(section)
}

/// Gravity, motion and the left/right/top walls
fn step_ball(state: &mut GameState) {
    let bounds = Bounds::screen(state.width(), state.height());
    let ball = &mut state.ball;

    let vel = apply_gravity(ball.vel, state.settings.gravity);
    let pos = integrate(ball.pos, vel);
    let reflection = reflect_off_walls(pos, vel, ball.radius, bounds, Walls::OPEN_FLOOR);

    ball.pos = reflection.pos;
    ball.vel = reflection.vel;
}

fn step_paddle(state: &mut GameState, input: &TickInput) {
    let dx = match (input.left, input.right) {
        (true, false) => -state.paddle.speed,
        (false, true) => state.paddle.speed,
        _ => 0.0,
    };
    if dx != 0.0 {
        state.paddle.pos = state.paddle.moved(dx, state.width());
    }
}

/// Keep the paddle under the ball, drifting the aim point so the demo hits
/// every section instead of always the center
fn steer_toward_ball(state: &GameState, input: &mut TickInput) {
    let time_factor = state.time_ticks as f32 * 0.01;
    let drift = time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15;
    let target = state.ball.pos.x - drift * state.paddle.size.x * 0.8;
    let center = state.paddle.rect().center().x;
    let dead_zone = state.paddle.speed;

    input.left = target < center - dead_zone;
    input.right = target > center + dead_zone;
}
