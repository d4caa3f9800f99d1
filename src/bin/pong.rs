//! Pong demo: both paddles play themselves on the headless host

use anyhow::Context;
use retro_arcade::Settings;
use retro_arcade::host::{HeadlessHost, Host};
use retro_arcade::pong::Pong;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::load().context("loading settings")?;
    let mut game = Pong::new(settings.pong, settings.seed);
    game.autopilot = true;

    let mut host = HeadlessHost::with_frame_limit(settings.demo_frames);
    host.run(&mut game).context("running Pong")?;

    log::info!(
        "Pong finished after {} frames, {} - {}",
        host.frames_run(),
        game.state.left_score,
        game.state.right_score
    );
    Ok(())
}
