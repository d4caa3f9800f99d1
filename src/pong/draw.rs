//! Pong render pass

use super::state::{GameState, Side};
use crate::host::{Canvas, centered_text_x, palette};

pub fn draw(state: &GameState, canvas: &mut dyn Canvas) {
    canvas.clear(palette::BLACK);

    for paddle in [&state.left, &state.right] {
        canvas.draw_rect(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y, paddle.color);
    }

    let ball = &state.ball;
    canvas.draw_circle(ball.pos.x, ball.pos.y, ball.radius, ball.color);

    draw_scores(state, canvas);
}

/// Each player's score centred on a third of the width
fn draw_scores(state: &GameState, canvas: &mut dyn Canvas) {
    let third = (state.width() / 3.0).floor();
    for (side, column_x) in [(Side::Left, third), (Side::Right, third * 2.0)] {
        let score = state.score(side).to_string();
        canvas.draw_text(
            centered_text_x(column_x, &score),
            state.settings.score_offset,
            &score,
            palette::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{DrawCommand, HeadlessHost};
    use crate::settings::PongSettings;

    #[test]
    fn test_draw_field_and_scores() {
        let mut state = GameState::new(PongSettings::default(), 3);
        state.left_score = 4;
        state.right_score = 12;
        let mut host = HeadlessHost::new();
        draw(&state, &mut host);

        let commands = host.commands();
        assert_eq!(commands[0], DrawCommand::Clear(palette::BLACK));
        let rects = commands.iter().filter(|c| matches!(c, DrawCommand::Rect { .. })).count();
        assert_eq!(rects, 2);
        assert!(commands.contains(&DrawCommand::Circle {
            x: 120.0,
            y: 80.0,
            radius: 2.0,
            color: palette::WHITE,
        }));
        // "4" is 4px wide, centred on x = 80; "12" is 8px wide, centred on x = 160
        assert!(commands.contains(&DrawCommand::Text {
            x: 78.0,
            y: 10.0,
            text: "4".into(),
            color: palette::WHITE,
        }));
        assert!(commands.contains(&DrawCommand::Text {
            x: 156.0,
            y: 10.0,
            text: "12".into(),
            color: palette::WHITE,
        }));
    }
}
