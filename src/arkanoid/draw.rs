//! Arkanoid render pass

use super::state::GameState;
use crate::host::{Canvas, Color, centered_text_x, palette};

const DEBUG_COLOR: Color = palette::GREEN;

pub fn draw(state: &GameState, canvas: &mut dyn Canvas) {
    canvas.clear(palette::BLACK);

    let center_x = state.width() / 2.0;
    let score = format!("Score: {}", state.score);
    canvas.draw_text(centered_text_x(center_x, &score), 10.0, &score, palette::WHITE);

    let ball = &state.ball;
    canvas.draw_circle(ball.pos.x, ball.pos.y, ball.radius, ball.color);

    let paddle = &state.paddle;
    canvas.draw_rect(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y, paddle.color);

    if state.settings.debug_overlay {
        draw_debug(state, canvas);
    }

    if state.is_game_over() {
        let center_y = state.height() / 2.0;
        let title = "Game Over";
        let hint = "'Press R to restart'";
        canvas.draw_text(centered_text_x(center_x, title), center_y - 10.0, title, palette::WHITE);
        canvas.draw_text(centered_text_x(center_x, hint), center_y + 10.0, hint, palette::WHITE);
    }
}

fn draw_debug(state: &GameState, canvas: &mut dyn Canvas) {
    let ball = &state.ball;
    let paddle = &state.paddle;
    let section = paddle.section_at(ball.pos.x);
    let angle = paddle.bounce_angle(ball.pos.x).to_degrees();

    let lines = [
        format!("Ball: ({:.0}, {:.0})", ball.pos.x, ball.pos.y),
        format!("Paddle: ({:.0}, {:.0})", paddle.pos.x, paddle.pos.y),
        format!("Section: {}", section),
        format!("Angle: {:.2}", angle),
        match state.last_section {
            Some(hit) => format!("Last hit: {}", hit),
            None => "Last hit: -".to_string(),
        },
    ];
    for (i, line) in lines.iter().enumerate() {
        canvas.draw_text(10.0, 10.0 + i as f32 * 10.0, line, DEBUG_COLOR);
    }
}
