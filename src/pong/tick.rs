//! Pong frame step

use super::state::{GamePhase, GameState, Side, bounce_velocity};
use crate::sim::{Bounds, Walls, integrate, reflect_off_walls};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Demo mode - both paddles follow the ball
    pub idle_mode: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if let GamePhase::RoundOver { resume_at, .. } = state.phase {
        if state.time_ticks >= resume_at {
            state.randomize_serve();
            state.phase = GamePhase::Playing;
        }
        return;
    }

    if let Some(winner) = round_winner(state) {
        end_round(state, winner);
        return;
    }

    let mut input = input.clone();
    if input.idle_mode {
        track_ball(state, &mut input);
    }

    let height = state.height();
    let dy = |up: bool, down: bool, speed: f32| match (up, down) {
        (true, _) => -speed,
        (false, true) => speed,
        _ => 0.0,
    };
    state.left.pos = state.left.moved(dy(input.left_up, input.left_down, state.left.speed), height);
    state.right.pos = state.right.moved(dy(input.right_up, input.right_down, state.right.speed), height);

    state.ball.pos = integrate(state.ball.pos, state.ball.vel);

    resolve_paddle_collisions(state);
    resolve_border_collisions(state);
}

/// Side that scores if the ball has reached the left or right edge
pub fn round_winner(state: &GameState) -> Option<Side> {
    let ball = &state.ball;
    if ball.pos.x + ball.radius >= state.width() {
        Some(Side::Left)
    } else if ball.pos.x - ball.radius <= 0.0 {
        Some(Side::Right)
    } else {
        None
    }
}

/// Award the point and freeze the field in serve position for the pause
fn end_round(state: &mut GameState, winner: Side) {
    match winner {
        Side::Left => state.left_score += 1,
        Side::Right => state.right_score += 1,
    }
    let pause = crate::seconds_to_frames(state.settings.round_end_secs, state.settings.fps);
    state.phase = GamePhase::RoundOver {
        winner,
        resume_at: state.time_ticks + pause,
    };
    state.reset_positions();

    log::info!(
        "Point to {:?} player ({} - {})",
        winner,
        state.left_score,
        state.right_score
    );
}

/// Bounce the ball off whichever paddle it is moving into.
///
/// A paddle is hit once the ball's leading edge reaches the paddle's inner
/// face (inclusive) while the ball overlaps it vertically. The ball is put
/// back against the face so it cannot be caught twice.
pub fn resolve_paddle_collisions(state: &mut GameState) -> Option<(Side, usize)> {
    let ball = &state.ball;
    let r = ball.radius;

    let side = if ball.vel.x > 0.0
        && ball.pos.x + r >= state.right.rect().left()
        && state.right.rect().overlaps_y(ball.pos.y - r, ball.pos.y + r)
    {
        Side::Right
    } else if ball.vel.x < 0.0
        && ball.pos.x - r <= state.left.rect().right()
        && state.left.rect().overlaps_y(ball.pos.y - r, ball.pos.y + r)
    {
        Side::Left
    } else {
        return None;
    };

    let paddle = state.paddle(side);
    let section = paddle.section_at(ball.pos.y);
    let angle = paddle.bounce_angle(section);
    let face_x = match side {
        Side::Right => paddle.rect().left() - r,
        Side::Left => paddle.rect().right() + r,
    };

    state.ball.vel = bounce_velocity(section, angle, state.settings.ball_speed, side.mirror());
    state.ball.pos.x = face_x;

    log::debug!("{:?} paddle hit: section {} angle {:.0}°", side, section, angle.to_degrees());
    Some((side, section))
}

/// Top and bottom walls
pub fn resolve_border_collisions(state: &mut GameState) {
    let bounds = Bounds::screen(state.width(), state.height());
    let ball = &mut state.ball;
    let reflection = reflect_off_walls(ball.pos, ball.vel, ball.radius, bounds, Walls::TOP_BOTTOM);
    ball.pos = reflection.pos;
    ball.vel = reflection.vel;
}

/// Each paddle chases the ball with a wandering aim offset, so rallies end
fn track_ball(state: &GameState, input: &mut TickInput) {
    let time_factor = state.time_ticks as f32 * 0.013;
    let ball_y = state.ball.pos.y;

    for (side, phase) in [(Side::Left, 0.0), (Side::Right, 2.1)] {
        let paddle = state.paddle(side);
        let offset = (time_factor + phase).sin() * paddle.size.y * 0.6;
        let center = paddle.rect().center().y + offset;
        let dead_zone = paddle.speed;
        let up = ball_y < center - dead_zone;
        let down = ball_y > center + dead_zone;
        match side {
            Side::Left => {
                input.left_up = up;
                input.left_down = down;
            }
            Side::Right => {
                input.right_up = up;
                input.right_down = down;
            }
        }
    }
}
