//! Arkanoid demo: the paddle plays itself on the headless host

use anyhow::Context;
use retro_arcade::Settings;
use retro_arcade::arkanoid::Arkanoid;
use retro_arcade::host::{HeadlessHost, Host};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::load().context("loading settings")?;
    let mut game = Arkanoid::new(settings.arkanoid);
    game.autopilot = true;

    let mut host = HeadlessHost::with_frame_limit(settings.demo_frames);
    host.run(&mut game).context("running Arkanoid")?;

    log::info!(
        "Arkanoid finished after {} frames, score {}",
        host.frames_run(),
        game.state.score
    );
    Ok(())
}
