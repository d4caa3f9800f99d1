//! Egg Rise render pass

use super::state::{GamePhase, GameState};
use crate::consts::CHAR_WIDTH;
use crate::host::{Canvas, centered_text_x};

pub fn draw(state: &GameState, canvas: &mut dyn Canvas) {
    let settings = &state.settings;
    canvas.clear(settings.background_color);

    let egg = &state.egg;
    canvas.draw_circle(egg.pos.x, egg.pos.y, egg.radius, egg.color);
    for platform in state.platforms.iter() {
        canvas.draw_rect(
            platform.pos.x,
            platform.pos.y,
            platform.size.x,
            platform.size.y,
            platform.color,
        );
    }

    draw_status(state, canvas);
    if settings.debug_overlay {
        draw_debug(state, canvas);
    }

    let (banner, color) = match state.phase {
        GamePhase::Playing => return,
        GamePhase::Won => ("You Win!", settings.win_color),
        GamePhase::GameOver => ("Game Over", settings.lose_color),
    };
    let center_x = (state.width() / 2.0).floor();
    let center_y = (state.height() / 2.0).floor();
    let hint = "Press 'R' to restart";
    canvas.draw_text(centered_text_x(center_x, banner), center_y, banner, color);
    canvas.draw_text(centered_text_x(center_x, hint), center_y + 10.0, hint, color);
}

fn draw_status(state: &GameState, canvas: &mut dyn Canvas) {
    let color = state.settings.text_color;
    canvas.draw_text(10.0, 10.0, &format!("Eggs Left: {}", state.eggs_left), color);
    canvas.draw_text(10.0, 20.0, &format!("Score: {}", state.score), color);

    let settings = &state.settings;
    let platforms = if settings.infinite {
        format!("Platforms: {} (Infinite)", settings.num_platforms)
    } else {
        format!("Platforms: {}", settings.num_platforms)
    };
    canvas.draw_text(10.0, 30.0, &platforms, settings.debug_color);

    // Right-aligned with a 10px margin
    let help = "Press 'C' to teleport";
    let help_x = state.width() - help.len() as f32 * CHAR_WIDTH - 10.0;
    canvas.draw_text(help_x, 10.0, help, color);
}

fn draw_debug(state: &GameState, canvas: &mut dyn Canvas) {
    let settings = &state.settings;
    let egg = &state.egg;
    let next = state
        .next_platform()
        .map_or_else(|| "-".to_string(), |p| format!("({:.0}, {:.0})", p.pos.x, p.pos.y));
    let lines = [
        format!("Game over: {}", state.phase == GamePhase::GameOver),
        format!("Won: {}", state.phase == GamePhase::Won),
        format!("Grounded: {}", egg.grounded),
        format!("Camera moving: {}", state.camera_moving),
        format!("Egg: ({:.0}, {:.0})", egg.pos.x, egg.pos.y),
        format!("Next platform: {}", next),
    ];
    for (i, line) in lines.iter().enumerate() {
        canvas.draw_text(10.0, 40.0 + i as f32 * 10.0, line, settings.debug_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{DrawCommand, HeadlessHost, palette};
    use crate::settings::EggRiseSettings;

    fn new_state(settings: EggRiseSettings) -> GameState {
        GameState::new(settings, 21).unwrap()
    }

    #[test]
    fn test_draw_playing_hud() {
        let state = new_state(EggRiseSettings::default());
        let mut host = HeadlessHost::new();
        draw(&state, &mut host);

        let commands = host.commands();
        assert_eq!(commands[0], DrawCommand::Clear(palette::DARK_BLUE));
        let platforms = commands.iter().filter(|c| matches!(c, DrawCommand::Rect { .. })).count();
        assert_eq!(platforms, 10);

        let texts: Vec<_> = host.texts().collect();
        assert!(texts.contains(&"Eggs Left: 3"));
        assert!(texts.contains(&"Score: 0"));
        assert!(texts.contains(&"Platforms: 10"));
        assert!(texts.contains(&"Grounded: true"));
        assert!(!texts.contains(&"You Win!"));

        // 21 chars * 4px from the right edge, less the margin
        assert!(commands.contains(&DrawCommand::Text {
            x: 240.0 - 84.0 - 10.0,
            y: 10.0,
            text: "Press 'C' to teleport".into(),
            color: palette::WHITE,
        }));
    }

    #[test]
    fn test_draw_banners() {
        let mut state = new_state(EggRiseSettings {
            infinite: true,
            debug_overlay: false,
            ..Default::default()
        });
        state.phase = GamePhase::GameOver;
        let mut host = HeadlessHost::new();
        draw(&state, &mut host);

        // Platform count stays in the HUD without the debug lines
        assert!(host.commands().contains(&DrawCommand::Text {
            x: 10.0,
            y: 30.0,
            text: "Platforms: 10 (Infinite)".into(),
            color: palette::GREEN,
        }));
        let texts: Vec<_> = host.texts().collect();
        assert!(!texts.iter().any(|t| t.starts_with("Grounded")));
        assert!(host.commands().contains(&DrawCommand::Text {
            x: 120.0 - 18.0,
            y: 180.0,
            text: "Game Over".into(),
            color: palette::RED,
        }));

        state.phase = GamePhase::Won;
        let mut host = HeadlessHost::new();
        draw(&state, &mut host);
        let texts: Vec<_> = host.texts().collect();
        assert!(texts.contains(&"You Win!"));
        assert!(texts.contains(&"Press 'R' to restart"));
        assert!(!texts.contains(&"Game Over"));
    }
}
