//! Egg Rise demo: the egg climbs by itself on the headless host

use anyhow::Context;
use retro_arcade::Settings;
use retro_arcade::egg_rise::EggRise;
use retro_arcade::host::{HeadlessHost, Host};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::load().context("loading settings")?;
    let mut game = EggRise::new(settings.egg_rise, settings.seed).context("starting Egg Rise")?;
    game.autopilot = true;

    let mut host = HeadlessHost::with_frame_limit(settings.demo_frames);
    host.run(&mut game).context("running Egg Rise")?;

    let state = &game.state;
    log::info!(
        "Egg Rise finished after {} frames: {:?}, score {}, {} eggs left",
        host.frames_run(),
        state.phase,
        state.score,
        state.eggs_left
    );
    Ok(())
}
