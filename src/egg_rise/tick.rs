//! Egg Rise frame step
//!
//! `update` runs the world: platform recycling, egg motion, falling off the
//! screen, platform motion, landing and the camera. Player commands are
//! applied after it, once per frame.

use glam::Vec2;

use super::state::{Egg, GamePhase, GameState};
use crate::error::GameError;
use crate::seconds_to_frames;
use crate::sim::{integrate, lands_on};

/// Longest jump the autopilot will look ahead through
const MAX_FLIGHT_SECS: f32 = 10.0;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub jump: bool,
    pub restart: bool,
    /// Cheat: hop straight to the next platform
    pub teleport: bool,
    pub quit: bool,
    /// Demo mode - jump whenever the next platform will be under the egg
    pub idle_mode: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<(), GameError> {
    state.time_ticks += 1;

    update(state)?;

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    handle_input(state, &input)
}

fn update(state: &mut GameState) -> Result<(), GameError> {
    if state.phase == GamePhase::GameOver {
        return Ok(());
    }
    if state.eggs_left == 0 {
        game_over(state);
        return Ok(());
    }

    if state.settings.infinite {
        recycle_platforms(state);
    }

    if !state.is_respawning() {
        move_egg(state);
    }
    check_out_of_bounds(state)?;
    if state.phase == GamePhase::GameOver {
        return Ok(());
    }

    move_platforms(state)?;
    check_support(state);
    handle_landing(state);
    move_camera(state);
    Ok(())
}

/// Once the egg has climbed a full batch past the last recycle, swap the
/// lowest platforms for new ones on top
fn recycle_platforms(state: &mut GameState) {
    let amount = state.settings.remove_amount as u64;
    let current = state.current;
    let due = current >= state.last_removed_index + amount && current > 0 && current % amount == 0;
    if !due || state.platforms.len() != state.platforms.window() {
        return;
    }

    state.last_removed_index = current;
    state.platforms.recycle(state.settings.remove_amount, &mut state.rng);
    log::debug!(
        "recycled {} platforms at platform {}, window now {:?}..={:?}",
        amount,
        current,
        state.platforms.first().map(|p| p.index),
        state.platforms.iter().last().map(|p| p.index)
    );
}

/// A grounded egg rides its platform; an airborne one only moves vertically
fn move_egg(state: &mut GameState) {
    let direction = state.current_platform().map_or(0.0, |p| p.direction.sign());
    let egg = &mut state.egg;

    let vel = egg.vel * Vec2::new(direction, 1.0);
    egg.pos = integrate(egg.pos, vel);
    if !egg.grounded {
        egg.vel.y += state.settings.gravity;
    }
}

fn check_out_of_bounds(state: &mut GameState) -> Result<(), GameError> {
    let height = state.height();
    if state.egg.pos.y <= height {
        return Ok(());
    }

    // Park just below the screen while waiting to respawn
    state.egg.pos.y = height + state.egg.radius;

    let Some(since) = state.respawning_since else {
        state.eggs_left = state.eggs_left.saturating_sub(1);
        state.respawning_since = Some(state.time_ticks);
        state.egg.grounded = false;
        log::debug!("egg lost, {} left", state.eggs_left);
        if state.eggs_left == 0 {
            game_over(state);
        }
        return Ok(());
    };

    let delay = seconds_to_frames(state.settings.respawn_secs, state.settings.fps);
    if state.time_ticks - since >= delay {
        let current = state.current;
        state.place_egg(current)?;
        log::debug!("egg respawned on platform {}", state.current);
    }
    Ok(())
}

fn move_platforms(state: &mut GameState) -> Result<(), GameError> {
    if state.platforms.is_empty() {
        return Err(GameError::NoPlatforms);
    }
    let width = state.width();
    for platform in state.platforms.iter_mut() {
        platform.step(width);
    }
    Ok(())
}

/// Drop the egg once its platform slides out from under it
fn check_support(state: &mut GameState) {
    if !state.egg.grounded {
        return;
    }
    let supported = state
        .current_platform()
        .is_some_and(|p| p.rect().spans_x(state.egg.pos.x));
    if !supported {
        state.egg.grounded = false;
        state.egg.vel.x = 0.0;
        log::debug!("egg slid off platform {}", state.current);
    }
}

/// Land on the next platform, scoring one point per platform climbed
fn handle_landing(state: &mut GameState) {
    if state.phase != GamePhase::Playing || state.is_respawning() {
        return;
    }
    if check_win(state) {
        return;
    }

    let Some(next) = state.next_platform() else {
        return;
    };
    let egg = &state.egg;
    if !lands_on(egg.bottom(), egg.pos.x, egg.vel.y, &next.rect()) {
        return;
    }

    let (index, top, speed) = (next.index, next.pos.y, next.speed);
    let egg = &mut state.egg;
    egg.pos.y = top - egg.radius;
    egg.vel = Vec2::new(speed, 0.0);
    egg.grounded = true;
    egg.jumping = false;
    state.current = index;
    state.score += 1;
    log::debug!("landed on platform {}, score {}", index, state.score);

    check_win(state);
}

/// Standing on the final platform of a finite climb wins
fn check_win(state: &mut GameState) -> bool {
    let won = state.final_index().is_some_and(|last| state.has_reached(last));
    if won && state.phase == GamePhase::Playing {
        state.phase = GamePhase::Won;
        log::info!("Egg Rise won with score {}", state.score);
    }
    won
}

/// Scroll egg and platforms down until the egg sits low on the screen
fn move_camera(state: &mut GameState) {
    if !(state.egg.grounded && state.has_reached(1)) {
        state.camera_moving = false;
        return;
    }

    let target_y = state.height() * state.settings.camera_offset;
    state.camera_moving = state.egg.pos.y < target_y;
    if state.camera_moving {
        let speed = state.settings.camera_speed;
        state.egg.pos.y += speed;
        for platform in state.platforms.iter_mut() {
            platform.pos.y += speed;
        }
    }
}

fn game_over(state: &mut GameState) {
    if state.phase != GamePhase::GameOver {
        state.phase = GamePhase::GameOver;
        log::info!("Egg Rise game over, score {}", state.score);
    }
}

fn handle_input(state: &mut GameState, input: &TickInput) -> Result<(), GameError> {
    if input.quit {
        state.quit_requested = true;
    }

    if input.restart {
        state.start_game()?;
        log::info!("Egg Rise restarted");
        return Ok(());
    }

    if input.jump && !state.is_over() && !state.camera_moving && state.egg.jump(state.settings.jump_force()) {
        state.egg.vel.x = 0.0;
    }

    if input.teleport && can_teleport(state) {
        let next = state.current + 1;
        state.place_egg(next)?;
        state.score += 1;
        state.last_teleport = Some(state.time_ticks);
        log::debug!("teleported to platform {}", state.current);
    }
    Ok(())
}

fn can_teleport(state: &GameState) -> bool {
    let cooldown = seconds_to_frames(state.settings.teleport_secs, state.settings.fps);
    let cooled = state
        .last_teleport
        .is_none_or(|at| state.time_ticks - at >= cooldown);
    cooled && !state.is_over() && !state.is_respawning() && state.next_platform().is_some()
}

fn autopilot(state: &GameState, input: &mut TickInput) {
    if state.is_over() {
        input.restart = true;
        return;
    }
    let ready = state.egg.grounded && !state.camera_moving && !state.is_respawning();
    input.jump = ready && jump_would_land(state);
}

/// Fly a copy of the egg and the next platform forward, frame by frame in
/// `update` order, and report whether the jump ends on the platform
fn jump_would_land(state: &GameState) -> bool {
    let Some(next) = state.next_platform() else {
        return false;
    };
    let mut platform = next.clone();
    let mut egg: Egg = state.egg.clone();
    if !egg.jump(state.settings.jump_force()) {
        return false;
    }
    egg.vel.x = 0.0;

    let (width, height) = (state.width(), state.height());
    // A jump lasting longer than this never comes back down on screen
    let max_frames = seconds_to_frames(MAX_FLIGHT_SECS, state.settings.fps);
    for _ in 0..max_frames {
        if egg.pos.y > height {
            break;
        }
        egg.pos += egg.vel;
        egg.vel.y += state.settings.gravity;
        platform.step(width);
        if lands_on(egg.bottom(), egg.pos.x, egg.vel.y, &platform.rect()) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::EggRiseSettings;

    fn new_state(settings: EggRiseSettings) -> GameState {
        GameState::new(settings, 5).unwrap()
    }

    fn still_platforms(state: &mut GameState) {
        for platform in state.platforms.iter_mut() {
            platform.speed = 0.0;
        }
    }

    /// Put the egg just above the next platform, falling
    fn drop_onto_next(state: &mut GameState) {
        let next = state.next_platform().unwrap().clone();
        state.egg.grounded = false;
        state.egg.jumping = true;
        state.egg.pos = Vec2::new(next.rect().center().x, next.pos.y - state.egg.radius - 1.0);
        state.egg.vel = Vec2::new(0.0, 2.0);
    }

    #[test]
    fn test_grounded_egg_rides_platform() {
        let mut state = new_state(EggRiseSettings::default());
        let before = state.egg.pos;
        let platform = state.current_platform().unwrap().clone();

        tick(&mut state, &TickInput::default()).unwrap();
        let moved = state.egg.pos - before;
        assert_eq!(moved.y, 0.0);
        assert_eq!(moved.x.abs(), platform.speed);
        assert!(state.egg.grounded);
    }

    #[test]
    fn test_landing_scores_once_and_stops_fall() {
        let mut state = new_state(EggRiseSettings::default());
        still_platforms(&mut state);
        drop_onto_next(&mut state);

        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.current, 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.egg.vel.y, 0.0);
        assert!(state.egg.grounded && !state.egg.jumping);

        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_rising_egg_does_not_land() {
        let mut state = new_state(EggRiseSettings::default());
        still_platforms(&mut state);
        drop_onto_next(&mut state);
        state.egg.vel.y = -5.0;

        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.current, 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reaching_final_platform_wins_and_stops_scoring() {
        let mut state = new_state(EggRiseSettings {
            num_platforms: 2,
            ..Default::default()
        });
        still_platforms(&mut state);
        drop_onto_next(&mut state);

        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.score, 1);

        // Neither jumps nor the cheat do anything once won
        let input = TickInput {
            jump: true,
            teleport: true,
            ..Default::default()
        };
        for _ in 0..120 {
            tick(&mut state, &input).unwrap();
        }
        assert_eq!(state.score, 1);
        assert!(state.egg.grounded);
    }

    #[test]
    fn test_fall_costs_one_life_then_respawns() {
        let mut state = new_state(EggRiseSettings::default());
        state.egg.grounded = false;
        state.egg.pos.y = state.height() + 1.0;

        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.eggs_left, 2);
        assert!(state.is_respawning());
        assert_eq!(state.egg.pos.y, state.height() + state.egg.radius);

        for _ in 0..59 {
            tick(&mut state, &TickInput::default()).unwrap();
            assert_eq!(state.eggs_left, 2);
            assert!(state.is_respawning());
        }
        tick(&mut state, &TickInput::default()).unwrap();
        assert!(!state.is_respawning());
        assert!(state.egg.grounded);
        assert_eq!(state.current, 0);
        assert_eq!(state.eggs_left, 2);
    }

    #[test]
    fn test_last_life_lost_is_game_over_and_restart_resets() {
        let mut state = new_state(EggRiseSettings::default());
        state.eggs_left = 1;
        state.score = 4;
        state.egg.grounded = false;
        state.egg.pos.y = state.height() + 1.0;

        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.eggs_left, 0);

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.eggs_left, 3);
        assert_eq!(state.current, 0);
    }

    #[test]
    fn test_no_lives_is_game_over_anywhere() {
        let mut state = new_state(EggRiseSettings::default());
        state.eggs_left = 0;
        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.egg.grounded);
    }

    #[test]
    fn test_jump_zeroes_horizontal_speed() {
        let mut state = new_state(EggRiseSettings::default());
        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(state.egg.jumping);
        assert_eq!(state.egg.vel, Vec2::new(0.0, state.settings.jump_force()));
    }

    #[test]
    fn test_platform_sliding_away_drops_egg() {
        let mut state = new_state(EggRiseSettings::default());
        state.egg.pos.x = -50.0;
        state.egg.vel.x = 0.0;

        tick(&mut state, &TickInput::default()).unwrap();
        assert!(!state.egg.grounded);
    }

    #[test]
    fn test_teleport_has_cooldown() {
        let mut state = new_state(EggRiseSettings::default());
        let input = TickInput {
            teleport: true,
            ..Default::default()
        };

        tick(&mut state, &input).unwrap();
        assert_eq!(state.current, 1);
        assert_eq!(state.score, 1);

        for _ in 0..29 {
            tick(&mut state, &input).unwrap();
        }
        assert_eq!(state.current, 1);

        tick(&mut state, &input).unwrap();
        assert_eq!(state.current, 2);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_camera_scrolls_after_first_climb() {
        let mut state = new_state(EggRiseSettings::default());
        still_platforms(&mut state);
        tick(
            &mut state,
            &TickInput {
                teleport: true,
                ..Default::default()
            },
        )
        .unwrap();
        let platform_y = state.current_platform().unwrap().pos.y;
        assert!(platform_y < state.height() * 0.9);

        tick(&mut state, &TickInput::default()).unwrap();
        assert!(state.camera_moving);
        assert_eq!(state.current_platform().unwrap().pos.y, platform_y + 2.0);

        // Jumping is locked while the camera scrolls
        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(state.egg.grounded);
    }

    #[test]
    fn test_infinite_mode_recycles_window() {
        let mut state = new_state(EggRiseSettings {
            infinite: true,
            ..Default::default()
        });
        for _ in 0..2 {
            state.place_egg(state.current + 1).unwrap();
        }
        assert_eq!(state.current, 2);

        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.last_removed_index, 2);
        assert_eq!(state.platforms.len(), 10);
        assert_eq!(state.platforms.first().unwrap().index, 2);
        assert!(state.platforms.get(11).is_some());

        // Not again until another batch is climbed
        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.platforms.first().unwrap().index, 2);
    }

    #[test]
    fn test_moving_without_platforms_is_an_error() {
        let mut state = new_state(EggRiseSettings::default());
        state.platforms.remove(usize::MAX);
        assert!(matches!(move_platforms(&mut state), Err(GameError::NoPlatforms)));
    }

    #[test]
    fn test_weightless_jump_lookahead_terminates() {
        let mut state = new_state(EggRiseSettings::default());
        // Settings mutated after validation: the egg would hover forever
        state.settings.gravity = 0.0;
        assert!(!jump_would_land(&state));

        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        tick(&mut state, &input).unwrap();
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_autopilot_climbs() {
        let mut state = new_state(EggRiseSettings::default());
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut best = 0;
        for _ in 0..60 * 60 {
            tick(&mut state, &input).unwrap();
            best = best.max(state.score);
        }
        assert!(best > 0);
    }
}
