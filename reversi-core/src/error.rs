use std::path::PathBuf;

use crate::{Coord, Side};

/// Errors raised by the board, the turn engine and the session.
///
/// None of these are fatal: a failed move leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("coordinate ({row}, {col}) is outside a {dimension}x{dimension} board")]
    OutOfRange {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("{target} is not a legal move for {side}")]
    IllegalMove { target: Coord, side: Side },

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("board dimension {0} must be even and between 4 and 26")]
    InvalidDimension(usize),
}

/// Errors raised while restoring a position from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("turn marker {0} is neither 1 (Black) nor -1 (White)")]
    InvalidSide(i8),

    #[error("piece at ({row}, {col}) lies outside a {dimension}x{dimension} board")]
    OutOfRange {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("more than one piece listed at {0}")]
    OverlappingPiece(Coord),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors raised when parsing algebraic coordinates such as "D3".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("empty coordinate")]
    Empty,

    #[error("invalid column letter '{0}'")]
    InvalidColumn(char),

    #[error("invalid row number '{0}'")]
    InvalidRow(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::IllegalMove {
            target: Coord::new(0, 0),
            side: Side::Black,
        };
        assert_eq!(err.to_string(), "A1 is not a legal move for Black");

        let err = EngineError::OutOfRange {
            row: 8,
            col: 2,
            dimension: 8,
        };
        assert_eq!(err.to_string(), "coordinate (8, 2) is outside a 8x8 board");
    }

    #[test]
    fn test_snapshot_error_wraps_engine_error() {
        let err: SnapshotError = EngineError::InvalidDimension(5).into();
        assert_eq!(
            err.to_string(),
            "board dimension 5 must be even and between 4 and 26"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("dimension must be even".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: dimension must be even"
        );
    }
}
