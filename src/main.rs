//! Steelpush entry point
//!
//! Loads settings and a level, then drives the frame loop from an input
//! script (or the built-in demo tour) until it runs out or quits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use steelpush::session::FramePacer;
use steelpush::{FrameOutcome, InputScript, LevelDescription, Session, Settings};

#[derive(Debug, Parser)]
#[command(name = "steelpush", about = "Push and pull metal objects by mass", version)]
struct Cli {
    /// Level description (hero + interactive objects)
    #[arg(short, long, default_value = "demos/entities.json")]
    level: PathBuf,

    /// Settings file; defaults are used when omitted
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Input script to replay; a demo tour of the level when omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<usize>,

    /// Run as fast as possible instead of holding the frame rate
    #[arg(long)]
    no_pacing: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Steelpush starting...");

    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let level = LevelDescription::load(&cli.level)
        .with_context(|| format!("loading level from {}", cli.level.display()))?;
    let script = match &cli.script {
        Some(path) => InputScript::load(path)
            .with_context(|| format!("loading input script from {}", path.display()))?,
        None => InputScript::demo(&level, &settings),
    };

    let mut pacer = FramePacer::new(settings.fps);
    let mut session = Session::new(settings, level).context("building the world")?;
    let limit = cli.frames.unwrap_or(usize::MAX);

    for input in script.frames().take(limit) {
        let report = session.frame(&input)?;
        if let Some(interaction) = report.interaction {
            log::debug!(
                "Frame {}: {:?} -> {:?}",
                report.frame,
                interaction.action,
                interaction.mover
            );
        }
        match report.outcome {
            FrameOutcome::Quit => break,
            FrameOutcome::Restarted | FrameOutcome::Continue => {}
        }

        let draw_list = session.render();
        log::trace!("Frame {}: {} vertices", report.frame, draw_list.vertices.len());

        if !cli.no_pacing {
            pacer.wait();
        }
    }

    let world = session.world();
    for entity in world.all() {
        if let Some(pos) = world.position(entity.id()) {
            log::info!("{} at ({:.1}, {:.1})", entity.name(), pos.x, pos.y);
        }
    }
    log::info!("Steelpush finished after {} frames", session.frame_count());
    Ok(())
}
