//! Headless match runner: a scripted left paddle plays the AI until one side
//! wins, then the final score is printed.
//!
//! Usage:
//!   cargo run -p pong_sim -- --seed 7
//!   RUST_LOG=game_core=debug cargo run -p pong_sim -- --config sim/pong.toml

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use game_core::{Config, Direction, Match, Side};
use tracing::{info, warn};

/// The scripted paddle ignores gaps smaller than this
const CHASE_DEADZONE: f32 = 12.0;

#[derive(Parser, Debug)]
#[command(name = "pong-sim")]
#[command(about = "Play a headless Pong match against the AI paddle")]
struct Args {
    /// TOML file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for serves and AI error
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Give up after this many frames
    #[arg(long, default_value_t = 500_000)]
    max_frames: u64,

    #[arg(long)]
    reaction_delay: Option<f32>,

    #[arg(long)]
    error_margin: Option<f32>,

    #[arg(long)]
    track_smooth: Option<f32>,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    if args.dump_config {
        print!("{}", config.to_toml_string().context("failed to serialize config")?);
        return Ok(());
    }

    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be a positive number, got {}", args.fps);
    }
    let dt = 1.0 / args.fps;

    let mut game = Match::new(config, args.seed).context("failed to start match")?;
    info!(seed = args.seed, fps = args.fps, "match started");

    let mut frames = 0;
    let mut winner = None;
    while frames < args.max_frames {
        let input = chase(&game);
        frames += 1;
        if let Some(side) = game.frame(dt, input) {
            winner = Some(side);
            break;
        }
    }

    let score = game.score();
    let seconds = frames as f32 * dt;
    match winner {
        Some(side) => println!(
            "{} wins {}-{} after {} frames ({:.1}s)",
            side_name(side),
            score.left,
            score.right,
            frames,
            seconds
        ),
        None => {
            warn!(frames, "frame limit reached before a winner");
            println!(
                "no winner after {} frames ({:.1}s), score {}-{}",
                frames, seconds, score.left, score.right
            );
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Config::from_toml_str(&text)
                .with_context(|| format!("invalid config in {}", path.display()))?
        }
        None => Config::new(),
    };

    if let Some(delay) = args.reaction_delay {
        config.ai.reaction_delay = delay;
    }
    if let Some(margin) = args.error_margin {
        config.ai.error_margin = margin;
    }
    if let Some(smooth) = args.track_smooth {
        config.ai.track_smooth = smooth;
    }
    config.validate().context("invalid AI override")?;

    Ok(config)
}

/// Follow the ball centre with a small deadzone
fn chase(game: &Match) -> Direction {
    let (Some(ball), Some(paddle)) = (game.ball(), game.paddle(Side::Left)) else {
        return Direction::Idle;
    };

    let gap = ball.pos().y - paddle.center_y();
    if gap.abs() <= CHASE_DEADZONE {
        Direction::Idle
    } else if gap < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
    }
}
