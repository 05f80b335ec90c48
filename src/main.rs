// What you SEE:
// • Live (mirrored) camera is the base image, with a big dark letter over it.
// • Hold Left Mouse and move over the letter: a red trail paints it in.
// • At 90% coverage a "Good job!" caption shows for 3 seconds, then the next letter.
// • After Z it starts again at A. Q or ESC quits.

mod alphabet;
mod app;
mod camera;
mod compose;
mod config;
mod coverage;
mod draw;
mod error;
mod gamma;
mod io;
mod raster;
mod sequencer;
mod session;
mod target;
mod trace;
mod types;

use camera::CameraCapture;
use clap::Parser;
use config::Config;
use draw::Drawer;
use error::Error;
use log::info;
use session::Session;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::parse();
    let settings = cfg.session_settings()?;

    /* --- Camera + window setup ---
       Visual: window opens with live camera feed. */
    let mut cam = CameraCapture::new(cfg.camera, cfg.width, cfg.height, !cfg.no_mirror)?;
    let (w, h) = cam.resolution();
    let mut drawer = Drawer::new("Letter Tracing", w as usize, h as usize)?;

    info!(
        "Stroke {} px, done at {:.0}%, caption for {:.1}s",
        settings.thickness,
        settings.threshold * 100.0,
        settings.dwell.as_secs_f32()
    );
    let mut session = Session::new(w as usize, h as usize, settings);

    app::run(&mut cam, &mut drawer, &mut session, cfg.max_missed_frames)?;
    Ok(())
}
