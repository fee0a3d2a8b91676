//! Self-play statistics tracking.

use std::time::Instant;

use reversi_core::{GameSession, Outcome, TurnResult};

/// Statistics collected over a batch of random games.
#[derive(Debug, Default)]
pub struct SelfPlayStats {
    pub games: u64,

    /// Breakdown of outcomes
    pub black_wins: u64,
    pub white_wins: u64,
    pub draws: u64,

    /// Total plies over all games
    pub plies: u64,

    /// Forced passes over all games
    pub passes: u64,

    /// Games that ended with empty cells left
    pub early_finishes: u64,

    /// Largest winning margin seen
    pub max_margin: usize,

    start_time: Option<Instant>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record a finished game
    pub fn record(&mut self, session: &GameSession) {
        let Some(outcome) = session.outcome() else {
            return;
        };
        self.games += 1;
        match outcome {
            Outcome::BlackWins(_) => self.black_wins += 1,
            Outcome::WhiteWins(_) => self.white_wins += 1,
            Outcome::Draw(_) => self.draws += 1,
        }

        self.plies += session.history().len() as u64;
        self.passes += session
            .history()
            .iter()
            .filter(|ply| matches!(ply.result, TurnResult::Passed(_)))
            .count() as u64;
        if !session.board().is_full() {
            self.early_finishes += 1;
        }

        let score = outcome.score();
        self.max_margin = self.max_margin.max(score.black.abs_diff(score.white));
    }

    /// Get current games per second
    pub fn games_per_sec(&self) -> f64 {
        if let Some(start) = self.start_time {
            let elapsed = start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                return self.games as f64 / elapsed;
            }
        }
        0.0
    }

    /// Print final summary
    pub fn print_summary(&self) {
        let pct = |n: u64| {
            if self.games > 0 {
                100.0 * n as f64 / self.games as f64
            } else {
                0.0
            }
        };

        println!("Games played: {}", self.games);
        println!("  - Black wins: {} ({:.1}%)", self.black_wins, pct(self.black_wins));
        println!("  - White wins: {} ({:.1}%)", self.white_wins, pct(self.white_wins));
        println!("  - Draws: {} ({:.1}%)", self.draws, pct(self.draws));
        println!("Plies: {}", self.plies);
        println!("Forced passes: {}", self.passes);
        println!("Ended before board was full: {}", self.early_finishes);
        println!("Largest margin: {}", self.max_margin);
        println!("Average rate: {:.0} games/sec", self.games_per_sec());
    }
}
