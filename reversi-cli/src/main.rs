//! Reversi command-line driver
//!
//! Replays transcripts, restores oracle snapshots and runs random self-play
//! on top of reversi-core.

mod cli;
mod stats;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reversi_core::{Coord, GameConfig, GameSession, NotationError, PositionSnapshot, TurnResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::stats::SelfPlayStats;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            ref moves,
            ref snapshot,
            json,
        } => {
            let config = load_config(&cli.config, cli.dimension)?;
            run_play(&config, moves, snapshot.as_deref(), json)
        }
        Command::Simulate { games, seed } => {
            let config = load_config(&cli.config, cli.dimension)?;
            run_simulate(&config, games, seed)
        }
        Command::DefaultConfig => {
            print!("{}", GameConfig::default_toml()?);
            Ok(())
        }
    }
}

/// Load the config file (defaults when missing) and apply the dimension override.
fn load_config(path: &Path, dimension: Option<usize>) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(path)
        .with_context(|| format!("loading {}", path.display()))?;
    if let Some(dimension) = dimension {
        config.dimension = dimension;
        config.validate()?;
    }
    Ok(config)
}

// ============================================================================
// Transcript replay
// ============================================================================

/// Split a transcript like "D3 C5, f6" into coordinates.
fn parse_transcript(moves: &str) -> Result<Vec<Coord>, NotationError> {
    moves
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

fn describe(result: TurnResult) -> String {
    match result {
        TurnResult::Advanced(side) => format!("{} to move", side),
        TurnResult::Passed(side) => format!(
            "{} has no legal move and passes; {} moves again",
            side.opponent(),
            side
        ),
        TurnResult::GameOver(outcome) => {
            let score = outcome.score();
            match outcome.winner() {
                Some(side) => format!("game over: {} wins {}-{}", side, score.black, score.white),
                None => format!("game over: draw {}-{}", score.black, score.white),
            }
        }
    }
}

fn run_play(config: &GameConfig, moves: &str, snapshot: Option<&Path>, json: bool) -> Result<()> {
    let mut session = match snapshot {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            let snapshot: PositionSnapshot = serde_json::from_str(&text)
                .with_context(|| format!("parsing snapshot {}", path.display()))?;
            GameSession::from_snapshot(&snapshot, config)?
        }
        None => GameSession::with_config(config)?,
    };
    let transcript = parse_transcript(moves)?;

    println!("{}", session.render());
    print_status(&session);

    for (n, target) in transcript.into_iter().enumerate() {
        if target.row >= session.dimension() || target.col >= session.dimension() {
            bail!("move {} ({}) is off the {}x{} board", n + 1, target, session.dimension(), session.dimension());
        }
        let result = session
            .apply_move(target)
            .with_context(|| format!("move {} ({})", n + 1, target))?;

        if let Some(ply) = session.last_ply() {
            println!("{}. {} {} flips {}", n + 1, ply.side, ply.target, ply.flipped.len());
        }
        println!("{}", session.render());
        println!("{}", describe(result));
        print_status(&session);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(session.history())?);
    }
    Ok(())
}

fn print_status(session: &GameSession) {
    let score = session.scores();
    println!("Black {} - White {}", score.black, score.white);
    if let Some(side) = session.side_to_move() {
        let targets: Vec<String> = session
            .current_legal_moves()
            .targets()
            .map(|t| t.to_string())
            .collect();
        println!("{} to move: {}", side, targets.join(" "));
    }
    println!();
}

// ============================================================================
// Random self-play
// ============================================================================

fn play_random_game(config: &GameConfig, rng: &mut StdRng) -> Result<GameSession> {
    let mut session = GameSession::with_config(config)?;
    while !session.is_over() {
        let targets: Vec<Coord> = session.current_legal_moves().targets().collect();
        let target = targets[rng.random_range(0..targets.len())];
        session.apply_move(target)?;
    }
    Ok(session)
}

fn run_simulate(config: &GameConfig, games: u64, seed: Option<u64>) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        println!("\nInterrupt received, finishing current game...");
        r.store(false, Ordering::SeqCst);
    })
    .context("setting Ctrl-C handler")?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    info!(games, seed, dimension = config.dimension, "starting self-play");

    let start = Instant::now();
    let mut stats = SelfPlayStats::new();
    for _ in 0..games {
        if !running.load(Ordering::SeqCst) {
            break;
        }
        let session = play_random_game(config, &mut rng)?;
        stats.record(&session);
    }

    println!("==========================");
    println!("Self-play on {0}x{0} (seed {1})", config.dimension, seed);
    println!("==========================");
    stats.print_summary();
    println!("Time: {:.2}s", start.elapsed().as_secs_f64());
    if stats.games < games {
        println!("\nInterrupted after {} of {} games.", stats.games, games);
    }
    Ok(())
}
