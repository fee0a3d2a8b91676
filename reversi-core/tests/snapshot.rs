//! Snapshot exchange testing
//!
//! Restores sessions from the JSON position format used by move oracles and
//! checks that requests and replies flow through the same move entry point
//! as human input.

use reversi_core::{
    Board, Coord, GameConfig, GameSession, OracleReply, Outcome, PositionSnapshot, Score, Side,
    SnapshotError, TurnResult, TurnState,
};

#[test]
fn test_restore_starting_position_from_json() {
    let json = r#"{"blackFilled":[[3,4],[4,3]],"whiteFilled":[[3,3],[4,4]],"turn":1}"#;
    let snapshot: PositionSnapshot = serde_json::from_str(json).unwrap();
    let session = GameSession::from_snapshot(&snapshot, &GameConfig::default()).unwrap();

    assert_eq!(session.board(), &Board::new(8).unwrap());
    assert_eq!(session.side_to_move(), Some(Side::Black));
    assert_eq!(session.current_legal_moves().len(), 4);
}

#[test]
fn test_request_serializes_camel_case() {
    let session = GameSession::start(8).unwrap();
    let request = session.oracle_request().unwrap();
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "blackFilled": [[3, 4], [4, 3]],
            "whiteFilled": [[3, 3], [4, 4]],
            "turn": 1
        })
    );
}

#[test]
fn test_reply_with_extra_fields() {
    let json = r#"{"move":[2,3],"colour":1,"turn":-1,"blackScore":4,"whiteScore":1}"#;
    let reply: OracleReply = serde_json::from_str(json).unwrap();
    assert_eq!(reply.coord(), Coord::new(2, 3));

    let mut session = GameSession::start(8).unwrap();
    assert_eq!(
        session.apply_reply(&reply),
        Ok(TurnResult::Advanced(Side::White))
    );
    assert_eq!(session.scores(), Score { black: 4, white: 1 });
}

#[test]
fn test_request_restore_round_trip_mid_game() {
    let mut session = GameSession::start(8).unwrap();
    for notation in ["D3", "C5", "F6", "F5"] {
        let target: Coord = notation.parse().unwrap();
        session.apply_move(target).unwrap();
    }

    let json = serde_json::to_string(&session.oracle_request().unwrap()).unwrap();
    let snapshot: PositionSnapshot = serde_json::from_str(&json).unwrap();
    let restored = GameSession::from_snapshot(&snapshot, &GameConfig::default()).unwrap();

    assert_eq!(restored.board(), session.board());
    assert_eq!(restored.side_to_move(), session.side_to_move());
    assert_eq!(restored.scores(), session.scores());
    assert_eq!(restored.current_legal_moves(), session.current_legal_moves());
    assert!(restored.history().is_empty());
}

#[test]
fn test_restore_resolves_pass_for_side_without_moves() {
    // White to move, but White cannot capture anything; Black can.
    let json = r#"{"blackFilled":[[0,0],[7,7]],"whiteFilled":[[0,1],[7,6]],"turn":-1}"#;
    let snapshot: PositionSnapshot = serde_json::from_str(json).unwrap();
    let session = GameSession::from_snapshot(&snapshot, &GameConfig::default()).unwrap();
    assert_eq!(session.state(), TurnState::AwaitingMove(Side::Black));
}

#[test]
fn test_restore_terminal_position() {
    let json = r#"{"blackFilled":[[0,0]],"whiteFilled":[[5,5],[5,4]],"turn":1}"#;
    let snapshot: PositionSnapshot = serde_json::from_str(json).unwrap();
    let config = GameConfig {
        dimension: 6,
        ..GameConfig::default()
    };
    let session = GameSession::from_snapshot(&snapshot, &config).unwrap();

    let score = Score { black: 1, white: 2 };
    assert_eq!(session.outcome(), Some(Outcome::WhiteWins(score)));
    assert_eq!(session.oracle_request(), None);
}

#[test]
fn test_restore_rejects_bad_snapshots() {
    let config = GameConfig::default();

    let bad_turn: PositionSnapshot =
        serde_json::from_str(r#"{"blackFilled":[],"whiteFilled":[],"turn":0}"#).unwrap();
    assert_eq!(
        GameSession::from_snapshot(&bad_turn, &config).unwrap_err(),
        SnapshotError::InvalidSide(0)
    );

    let overlap: PositionSnapshot =
        serde_json::from_str(r#"{"blackFilled":[[3,3]],"whiteFilled":[[3,3]],"turn":1}"#).unwrap();
    assert_eq!(
        GameSession::from_snapshot(&overlap, &config).unwrap_err(),
        SnapshotError::OverlappingPiece(Coord::new(3, 3))
    );

    let off_board: PositionSnapshot =
        serde_json::from_str(r#"{"blackFilled":[[8,0]],"whiteFilled":[],"turn":1}"#).unwrap();
    assert!(matches!(
        GameSession::from_snapshot(&off_board, &config),
        Err(SnapshotError::OutOfRange { row: 8, col: 0, .. })
    ));

    let missing_field = serde_json::from_str::<PositionSnapshot>(r#"{"blackFilled":[],"turn":1}"#);
    assert!(missing_field.is_err());
}
