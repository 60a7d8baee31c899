//! Headless runner: builds the start menu, simulates a click on PLAY, and
//! steps the match until someone wins. Presentation is a frame logger; a
//! real windowed host would implement `Presenter` over its surface and feed
//! `InputEvent`s from its event loop instead.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::{info, trace, warn};

use rally_engine::{Color, DrawList, GameManager, InputEvent, Presenter};
use rally_pong::scenes;
use rally_pong::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "rally-pong", about = "Two-player pong, headless demo runner")]
struct Args {
    /// Path to a JSON settings file; defaults apply for missing fields.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// RNG seed; wall-clock nanoseconds when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many match frames even if nobody has won.
    #[arg(long, default_value_t = 5000)]
    max_frames: u32,
    /// Run as fast as possible instead of pacing to the target frame rate.
    #[arg(long)]
    no_throttle: bool,
}

/// Presenter that counts draw commands and traces them per frame.
#[derive(Default)]
struct FrameLogger {
    frames: u64,
}

impl Presenter for FrameLogger {
    fn present(&mut self, _background: Color, frame: &DrawList) {
        self.frames += 1;
        trace!("frame {}: {} draw commands", self.frames, frame.len());
    }
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    let seed = args.seed.unwrap_or_else(entropy_seed);
    info!("starting with seed {seed}");

    let mut manager = GameManager::new(settings.config(seed), scenes::start_menu(settings));
    let mut presenter = FrameLogger::default();

    // Click PLAY: press one frame, release the next.
    let center = settings.screen_size() / 2.0;
    manager.input.apply(InputEvent::PointerDown {
        x: center.x,
        y: center.y,
    });
    manager.frame(&mut presenter);
    manager.input.apply(InputEvent::PointerUp {
        x: center.x,
        y: center.y,
    });
    manager.frame(&mut presenter);

    for frame in 0..args.max_frames {
        manager.frame(&mut presenter);
        if !args.no_throttle {
            manager.throttle();
        }
        if manager.scene().find_by_tag("play-again").is_some() {
            info!("match over after {frame} frames");
            return ExitCode::SUCCESS;
        }
    }
    warn!("frame cap reached with no winner");
    ExitCode::SUCCESS
}
