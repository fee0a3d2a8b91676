//! The public game API.
//!
//! A [`GameSession`] is the single owner of one game. UI code and move-oracle
//! replies go through the same [`GameSession::apply_move`] entry point; the
//! session does not care where a move came from, only whether it is legal.

use tracing::instrument;

use crate::config::GameConfig;
use crate::engine::{Outcome, Ply, Score, TurnEngine, TurnResult, TurnState};
use crate::error::{EngineError, SnapshotError};
use crate::snapshot::{OracleReply, PositionSnapshot};
use crate::validator::LegalMoveSet;
use crate::{Board, Coord, Side};

#[derive(Clone, Debug)]
pub struct GameSession {
    engine: TurnEngine,
    history: Vec<Ply>,
}

impl GameSession {
    /// New game on an N×N board with default settings. Black moves first.
    #[instrument]
    pub fn start(dimension: usize) -> Result<GameSession, EngineError> {
        GameSession::with_config(&GameConfig {
            dimension,
            ..GameConfig::default()
        })
    }

    #[instrument(skip_all, fields(dimension = config.dimension, candidates = ?config.candidates))]
    pub fn with_config(config: &GameConfig) -> Result<GameSession, EngineError> {
        Ok(GameSession {
            engine: TurnEngine::new(config.dimension, config.candidates)?,
            history: Vec::new(),
        })
    }

    /// Resume from a snapshot on a board of `config.dimension`.
    ///
    /// When the side named by the snapshot has no legal move, the pass is
    /// resolved immediately: the other side moves, or the session starts Over.
    #[instrument(skip_all, fields(dimension = config.dimension, turn = snapshot.turn))]
    pub fn from_snapshot(
        snapshot: &PositionSnapshot,
        config: &GameConfig,
    ) -> Result<GameSession, SnapshotError> {
        let side = snapshot.side()?;
        let board = snapshot.to_board(config.dimension)?;
        Ok(GameSession {
            engine: TurnEngine::from_position(board, side, config.candidates),
            history: Vec::new(),
        })
    }

    /// Legal moves for the side to move. Empty once the game is over.
    pub fn current_legal_moves(&self) -> &LegalMoveSet {
        self.engine.legal_moves()
    }

    /// Play `target` for the side to move.
    ///
    /// Off-board targets are reported as [`EngineError::IllegalMove`], as is
    /// any target not in [`GameSession::current_legal_moves`].
    #[instrument(level = "debug", skip(self), fields(side = ?self.side_to_move()))]
    pub fn apply_move(&mut self, target: Coord) -> Result<TurnResult, EngineError> {
        let side = self.side_to_move().ok_or(EngineError::GameAlreadyOver)?;
        let ply = self.engine.apply_move(target, side)?;
        let result = ply.result;
        self.history.push(ply);
        Ok(result)
    }

    /// Apply the target named by a move oracle.
    pub fn apply_reply(&mut self, reply: &OracleReply) -> Result<TurnResult, EngineError> {
        self.apply_move(reply.coord())
    }

    /// The position to send to a move oracle, or None once the game is over.
    pub fn oracle_request(&self) -> Option<PositionSnapshot> {
        let side = self.side_to_move()?;
        Some(PositionSnapshot::capture(self.engine.board(), side))
    }

    pub fn scores(&self) -> Score {
        self.engine.score()
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn dimension(&self) -> usize {
        self.engine.board().dimension()
    }

    pub fn state(&self) -> TurnState {
        self.engine.state()
    }

    pub fn side_to_move(&self) -> Option<Side> {
        self.engine.side_to_move()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.engine.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }

    /// Every successful ply, oldest first.
    pub fn history(&self) -> &[Ply] {
        &self.history
    }

    pub fn last_ply(&self) -> Option<&Ply> {
        self.history.last()
    }

    /// Board text with legal targets marked `*`.
    pub fn render(&self) -> String {
        let targets: Vec<Coord> = self.current_legal_moves().targets().collect();
        self.board().render_marked(&targets)
    }
}
