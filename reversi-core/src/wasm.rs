//! WASM bindings for reversi-core
//!
//! Provides a JavaScript-friendly API over [`GameSession`] for a browser UI.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{Coord, GameConfig, GameSession, PositionSnapshot, TurnResult};

/// WASM-friendly wrapper around GameSession
#[wasm_bindgen]
pub struct WasmSession {
    inner: GameSession,
}

#[wasm_bindgen]
impl WasmSession {
    /// Start a new game on an N×N board
    #[wasm_bindgen(constructor)]
    pub fn new(dimension: usize) -> Result<WasmSession, JsError> {
        Ok(WasmSession {
            inner: GameSession::start(dimension)?,
        })
    }

    /// Restore from a snapshot object: { blackFilled, whiteFilled, turn }
    #[wasm_bindgen(js_name = fromSnapshot)]
    pub fn from_snapshot(snapshot: JsValue, dimension: usize) -> Result<WasmSession, JsError> {
        let snapshot: PositionSnapshot =
            serde_wasm_bindgen::from_value(snapshot).map_err(|e| JsError::new(&e.to_string()))?;
        let config = GameConfig {
            dimension,
            ..GameConfig::default()
        };
        Ok(WasmSession {
            inner: GameSession::from_snapshot(&snapshot, &config)?,
        })
    }

    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    /// Cell value: 0 (empty), 1 (Black), -1 (White)
    pub fn cell(&self, row: usize, col: usize) -> Result<i8, JsError> {
        Ok(self.inner.board().get(row, col)?.value())
    }

    /// Get legal moves as JSON array
    /// Each move is { target: [row, col], flips: [[row, col], ...] }
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        let moves: Vec<WasmMove> = self
            .inner
            .current_legal_moves()
            .iter()
            .map(|(target, captures)| WasmMove {
                target: target.to_array(),
                flips: captures.flipped().map(Coord::to_array).collect(),
            })
            .collect();
        to_js(&moves)
    }

    /// Apply a move for the side to move.
    /// Returns { kind: "advanced" | "passed" | "gameOver", side, winner, black, white }
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<JsValue, JsError> {
        let result = self.inner.apply_move(Coord::new(row, col))?;
        to_js(&WasmTurn::from(result))
    }

    /// Current scores as [black, white]
    pub fn scores(&self) -> Vec<usize> {
        let score = self.inner.scores();
        vec![score.black, score.white]
    }

    /// Side to move: 1 (Black), -1 (White), 0 when the game is over
    #[wasm_bindgen(js_name = sideToMove)]
    pub fn side_to_move(&self) -> i8 {
        self.inner.side_to_move().map_or(0, |side| side.to_turn())
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_over()
    }

    /// Position for the move oracle, or null once the game is over
    #[wasm_bindgen(js_name = oracleRequest)]
    pub fn oracle_request(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.oracle_request())
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Serializable legal move for JavaScript
#[derive(Serialize)]
struct WasmMove {
    target: [usize; 2],
    flips: Vec<[usize; 2]>,
}

/// Serializable turn result for JavaScript
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WasmTurn {
    kind: &'static str,
    /// Side to move next, as a turn marker; 0 when the game is over
    side: i8,
    /// Winner on game over: 1, -1, or 0 for a draw
    winner: Option<i8>,
    black: Option<usize>,
    white: Option<usize>,
}

impl From<TurnResult> for WasmTurn {
    fn from(result: TurnResult) -> Self {
        match result {
            TurnResult::Advanced(side) => WasmTurn {
                kind: "advanced",
                side: side.to_turn(),
                winner: None,
                black: None,
                white: None,
            },
            TurnResult::Passed(side) => WasmTurn {
                kind: "passed",
                side: side.to_turn(),
                winner: None,
                black: None,
                white: None,
            },
            TurnResult::GameOver(outcome) => {
                let score = outcome.score();
                WasmTurn {
                    kind: "gameOver",
                    side: 0,
                    winner: Some(outcome.winner().map_or(0, |side| side.to_turn())),
                    black: Some(score.black),
                    white: Some(score.white),
                }
            }
        }
    }
}
