//! The turn state machine.
//!
//! ```text
//!                  apply_move(target, side)
//!  AwaitingMove(side) ──────────────────────► place + flip
//!                                                 │
//!            opponent has moves? ── yes ──► AwaitingMove(opponent)   Advanced
//!                    │ no
//!            mover has moves?    ── yes ──► AwaitingMove(side)       Passed
//!                    │ no
//!                    └────────────────────► Over(outcome)            GameOver
//! ```
//!
//! Two consecutive empty legal move sets are the only way a game ends; the
//! board need not be full.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::CandidateScan;
use crate::error::EngineError;
use crate::validator::{all_legal_moves, LegalMoveSet};
use crate::{Board, Cell, Coord, Side};

/// Piece counts per side.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Count pieces on a board.
    pub fn of(board: &Board) -> Score {
        Score {
            black: board.count(Cell::Black),
            white: board.count(Cell::White),
        }
    }

    #[inline]
    pub fn get(&self, side: Side) -> usize {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.black + self.white
    }

    /// The side with more pieces, or None when level.
    pub fn leader(&self) -> Option<Side> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Apply one ply: mover gains the placed piece plus every flip, opponent loses the flips.
    fn credit(&mut self, side: Side, flipped: usize) {
        match side {
            Side::Black => {
                self.black += flipped + 1;
                self.white -= flipped;
            }
            Side::White => {
                self.white += flipped + 1;
                self.black -= flipped;
            }
        }
    }
}

/// Final result, carrying the final scores.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    BlackWins(Score),
    WhiteWins(Score),
    Draw(Score),
}

impl Outcome {
    /// Higher count wins; equal counts draw.
    pub fn from_score(score: Score) -> Outcome {
        match score.leader() {
            Some(Side::Black) => Outcome::BlackWins(score),
            Some(Side::White) => Outcome::WhiteWins(score),
            None => Outcome::Draw(score),
        }
    }

    pub fn score(&self) -> Score {
        match *self {
            Outcome::BlackWins(score) | Outcome::WhiteWins(score) | Outcome::Draw(score) => score,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::BlackWins(_) => Some(Side::Black),
            Outcome::WhiteWins(_) => Some(Side::White),
            Outcome::Draw(_) => None,
        }
    }
}

/// Engine state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    AwaitingMove(Side),
    Over(Outcome),
}

/// What a successful move led to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnResult {
    /// Turn passed normally to this side.
    Advanced(Side),
    /// The opponent had no legal move; this side (the mover) moves again.
    Passed(Side),
    /// Neither side can move.
    GameOver(Outcome),
}

/// Record of one applied ply.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Ply {
    pub side: Side,
    pub target: Coord,
    /// Flipped cells, grouped by direction in compass order.
    pub flipped: Vec<Coord>,
    pub result: TurnResult,
}

/// Owns the board and keeps the legal move set in step with it.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    board: Board,
    state: TurnState,
    score: Score,
    legal: LegalMoveSet,
    candidates: CandidateScan,
}

impl TurnEngine {
    /// Fresh game on an N×N board, Black to move.
    pub fn new(dimension: usize, candidates: CandidateScan) -> Result<TurnEngine, EngineError> {
        let board = Board::new(dimension)?;
        Ok(TurnEngine::from_position(board, Side::Black, candidates))
    }

    /// Resume from an arbitrary position.
    ///
    /// If `side` has no legal move the pass is resolved here: the opponent
    /// moves instead, or the game is already over.
    pub fn from_position(board: Board, side: Side, candidates: CandidateScan) -> TurnEngine {
        let score = Score::of(&board);
        let legal = all_legal_moves(&board, side, candidates);
        let mut engine = TurnEngine {
            board,
            state: TurnState::AwaitingMove(side),
            score,
            legal,
            candidates,
        };

        if engine.legal.is_empty() {
            let result = engine.advance(side.opponent());
            info!(?side, ?result, "side to move has no legal move on restore");
        }
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn candidates(&self) -> CandidateScan {
        self.candidates
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> &LegalMoveSet {
        &self.legal
    }

    pub fn side_to_move(&self) -> Option<Side> {
        match self.state {
            TurnState::AwaitingMove(side) => Some(side),
            TurnState::Over(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::AwaitingMove(_) => None,
            TurnState::Over(outcome) => Some(outcome),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::Over(_))
    }

    /// Play `side` at `target`.
    ///
    /// Every check happens before the first write, so an error leaves board,
    /// state and score untouched.
    pub fn apply_move(&mut self, target: Coord, side: Side) -> Result<Ply, EngineError> {
        let to_move = match self.state {
            TurnState::Over(_) => return Err(EngineError::GameAlreadyOver),
            TurnState::AwaitingMove(to_move) => to_move,
        };

        let captures = match self.legal.get(target) {
            Some(captures) if to_move == side => captures,
            _ => {
                warn!(%target, ?side, ?to_move, "rejected illegal move");
                return Err(EngineError::IllegalMove { target, side });
            }
        };
        let flipped: Vec<Coord> = captures.flipped().collect();

        let own = side.cell();
        self.board.put(target, own);
        for &coord in &flipped {
            self.board.put(coord, own);
        }
        self.score.credit(side, flipped.len());
        debug_assert_eq!(self.score, Score::of(&self.board));
        debug!(%target, ?side, flips = flipped.len(), score = ?self.score, "applied move");

        let result = self.advance(side.opponent());
        Ok(Ply {
            side,
            target,
            flipped,
            result,
        })
    }

    /// Hand the turn to `next`, falling back to its opponent, then to game over.
    fn advance(&mut self, next: Side) -> TurnResult {
        let legal = all_legal_moves(&self.board, next, self.candidates);
        if !legal.is_empty() {
            self.legal = legal;
            self.state = TurnState::AwaitingMove(next);
            return TurnResult::Advanced(next);
        }

        let again = next.opponent();
        let legal = all_legal_moves(&self.board, again, self.candidates);
        if !legal.is_empty() {
            info!(passed = ?next, to_move = ?again, "forced pass");
            self.legal = legal;
            self.state = TurnState::AwaitingMove(again);
            return TurnResult::Passed(again);
        }

        let outcome = Outcome::from_score(self.score);
        info!(?outcome, "game over");
        self.legal = LegalMoveSet::default();
        self.state = TurnState::Over(outcome);
        TurnResult::GameOver(outcome)
    }
}
