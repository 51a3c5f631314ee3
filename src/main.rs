//! PGSQR entry point
//!
//! Runs a headless session driven by the autopilot. Set `RUST_LOG=debug`
//! to follow pickups, spawns and HUD changes.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pgsqr::audio::LogAudio;
use pgsqr::platform::{Autopilot, FrameClock};
use pgsqr::renderer::HeadlessRenderer;
use pgsqr::{Session, Settings};

#[derive(Parser)]
#[command(name = "pgsqr")]
#[command(about = "Grab the coin, dodge the squares (headless demo)")]
struct Args {
    /// Settings file (JSON); defaults are used when omitted
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Frames to play before quitting
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// RNG seed, overrides the settings file
    #[arg(long)]
    seed: Option<u64>,

    /// Run as fast as possible instead of at the frame rate
    #[arg(long)]
    unthrottled: bool,

    /// Write every rendered frame as a JSON line
    #[arg(long)]
    dump_frames: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let renderer = match &args.dump_frames {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating frame dump {}", path.display()))?;
            HeadlessRenderer::with_dump(BufWriter::new(file))
        }
        None => HeadlessRenderer::new(),
    };
    let audio = LogAudio::new(settings.asset_dir.as_deref());

    log::info!("PGSQR starting...");
    let mut session = Session::new(&settings, audio, renderer).context("starting session")?;

    let mut pilot = Autopilot::with_frame_limit(args.frames);
    let mut clock = if args.unthrottled {
        FrameClock::unthrottled(settings.frame_duration())
    } else {
        FrameClock::new(settings.frame_duration())
    };
    session.run(&mut pilot, &mut clock);
    session.renderer_mut().flush();

    let state = session.state();
    println!(
        "seed {}: score {}, best {} ({} frames, {} cues)",
        state.seed,
        state.score,
        state.best,
        session.renderer().frames(),
        session.audio().sink().played()
    );
    Ok(())
}
