//! Territory game end-to-end tests.
//!
//! Each test seeds a `MemoryCellStore`, drives moves through the
//! `GameRules` interface, and checks what was committed.

use rust_grid::core::{Cell, ChunkCoord, Coord, GridRules, MoveError, PayloadValue, PlayerId, UNOWNED};
use rust_grid::grid::EDGE_MARGIN;
use rust_grid::games::territory::{GridMove, TerritoryConfig, TerritoryGame, CAPTURED_FROM};
use rust_grid::rules::{GameRules, WinCheck};
use rust_grid::store::{CellStore, MemoryCellStore};

const A: PlayerId = PlayerId::new(1);
const B: PlayerId = PlayerId::new(2);
const C: PlayerId = PlayerId::new(3);

/// Route engine logs to the test harness. Filter with `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn game_with(rules: GridRules, cells: Vec<Cell>) -> TerritoryGame<MemoryCellStore> {
    TerritoryGame::new(TerritoryConfig::new(rules), MemoryCellStore::with_cells(cells)).unwrap()
}

fn owned(cells: &[(i32, i32)], player: PlayerId) -> Vec<Cell> {
    cells.iter().map(|&(x, y)| Cell::owned(Coord::new(x, y), player)).collect()
}

fn owner_of(game: &TerritoryGame<MemoryCellStore>, x: i32, y: i32) -> Option<PlayerId> {
    game.store().get(Coord::new(x, y)).and_then(|c| c.owner)
}

/// First move on an empty board always succeeds.
#[test]
fn test_bootstrap_first_move() {
    let mut game = game_with(GridRules::infinite(), vec![]);

    let outcome = game.apply_move(A, &GridMove::first(0, 0)).unwrap();
    assert_eq!(outcome.changed_cells, vec![Cell::owned(Coord::new(0, 0), A)]);
    assert_eq!(outcome.affected_chunks, vec![ChunkCoord::new(0, 0)]);
    assert_eq!(owner_of(&game, 0, 0), Some(A));
}

/// Without the first-move flag an isolated placement is rejected.
#[test]
fn test_unconnected_move_rejected() {
    let mut game = game_with(GridRules::infinite(), vec![]);

    let report = game.apply_move_report(A, &GridMove::new(0, 0));
    assert!(!report.success);
    assert_eq!(
        report.error.as_deref(),
        Some("Invalid move: (0, 0) is not connected to your territory")
    );
    assert!(report.changed_cells.is_empty());
    assert!(game.store().is_empty());
}

/// Unowned (1,1) with three A neighbors converts once the cascade reaches it.
#[test]
fn test_cascade_converts_majority_cell() {
    init_tracing();
    let mut game = game_with(GridRules::infinite(), owned(&[(0, 1), (1, 0), (2, 1)], A));

    let outcome = game.apply_move(A, &GridMove::new(0, 2)).unwrap();
    assert_eq!(owner_of(&game, 1, 1), Some(A));

    let mut coords: Vec<_> = outcome.changed_cells.iter().map(|c| c.coord).collect();
    coords.sort();
    assert_eq!(coords, vec![Coord::new(0, 2), Coord::new(1, 1)]);
}

/// Flipping an opponent cell needs 5 of its 8 neighbors.
#[test]
fn test_flip_gate() {
    let mut cells = owned(&[(4, 5), (6, 5), (5, 4), (5, 6)], A);
    cells.push(Cell::owned(Coord::new(5, 5), B));
    let mut game = game_with(GridRules::infinite(), cells);

    let report = game.apply_move_report(A, &GridMove::new(5, 5));
    assert!(!report.success);
    assert_eq!(report.error.as_deref(), Some("Need 5+ neighbors to flip opponent cell"));
    assert_eq!(owner_of(&game, 5, 5), Some(B));
    assert_eq!(game.move_count(), 0);

    game.store_mut().save_cells(&owned(&[(4, 4)], A)).unwrap();
    let report = game.apply_move_report(A, &GridMove::new(5, 5));
    assert!(report.success, "{:?}", report.error);
    assert_eq!(owner_of(&game, 5, 5), Some(A));
}

/// Diagonal tunneling between two opponent corners.
#[test]
fn test_diagonal_tunneling() {
    let mut cells = owned(&[(2, 2)], A);
    cells.extend(owned(&[(3, 2), (2, 3)], B));
    let mut game = game_with(GridRules::infinite(), cells);

    let snapshot = game.load_snapshot(Coord::new(3, 3)).unwrap();
    assert!(game.can_place_at(&snapshot, Coord::new(3, 3), A, false));
    assert!(game.validate_move(A, &GridMove::new(3, 3)).is_valid);

    game.apply_move(A, &GridMove::new(3, 3)).unwrap();
    assert_eq!(owner_of(&game, 3, 3), Some(A));
    assert_eq!(owner_of(&game, 3, 2), Some(B));
}

/// A single opponent cell walled in by A is captured regardless of counts.
#[test]
fn test_enclosure_captures_opponent_cell() {
    init_tracing();
    let mut cells = owned(&[(4, 5), (6, 5), (5, 4), (5, 7)], A);
    cells.push(Cell::owned(Coord::new(5, 5), B));
    let mut game = game_with(GridRules::infinite().with_chunk_size(2), cells);

    let outcome = game.apply_move(A, &GridMove::new(5, 6)).unwrap();

    let captured = game.store().get(Coord::new(5, 5)).unwrap();
    assert_eq!(captured.owner, Some(A));
    assert_eq!(captured.payload_value(CAPTURED_FROM), Some(&PayloadValue::Int(2)));

    assert_eq!(outcome.changed_cells.len(), 2);
    assert_eq!(
        outcome.affected_chunks,
        vec![ChunkCoord::new(2, 2), ChunkCoord::new(2, 3)]
    );
}

/// A 2x2 empty pocket is below every cascade threshold but is captured
/// whole once closed, each cell marked as previously unowned.
#[test]
fn test_enclosure_captures_unowned_pocket() {
    let walls = [(-1, 0), (-1, 1), (2, 0), (2, 1), (0, -1), (1, -1), (0, 2)];
    let mut game = game_with(GridRules::infinite(), owned(&walls, A));

    let outcome = game.apply_move(A, &GridMove::new(1, 2)).unwrap();
    assert_eq!(outcome.changed_cells.len(), 5);

    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let captured = game.store().get(Coord::new(x, y)).unwrap();
        assert_eq!(captured.owner, Some(A));
        assert_eq!(
            captured.payload_value(CAPTURED_FROM),
            Some(&PayloadValue::Text(UNOWNED.to_string()))
        );
    }
}

/// Square ring of A cells with corners at `(-r, -r)` and `(r, r)`,
/// leaving `(r, 0)` open.
fn ring_with_gap(r: i32) -> Vec<Cell> {
    let mut coords = Vec::new();
    for i in -r..=r {
        coords.extend([(i, -r), (i, r), (-r, i), (r, i)]);
    }
    coords.sort();
    coords.dedup();
    coords.retain(|&c| c != (r, 0));
    owned(&coords, A)
}

/// Sealing a ring captures its interior only while the interior stays
/// under the region cap.
#[test]
fn test_enclosure_respects_region_cap() {
    let rules = GridRules::infinite().with_max_bounding_box(24);

    // 21 x 21 = 441 interior cells.
    let mut small = game_with(rules, ring_with_gap(11));
    let outcome = small.apply_move(A, &GridMove::new(11, 0)).unwrap();
    assert_eq!(outcome.changed_cells.len(), 442);
    assert_eq!(owner_of(&small, 0, 0), Some(A));
    assert_eq!(owner_of(&small, -10, 10), Some(A));

    // 23 x 23 = 529 interior cells: the fill hits the cap and is left alone.
    let mut large = game_with(rules, ring_with_gap(12));
    let outcome = large.apply_move(A, &GridMove::new(12, 0)).unwrap();
    assert_eq!(outcome.changed_cells, vec![Cell::owned(Coord::new(12, 0), A)]);
    for (x, y) in [(0, 0), (-11, -11), (11, 11), (11, 0)] {
        assert_eq!(owner_of(&large, x, y), None);
    }
}

/// Board edges are not walls: a corner pocket stays open.
#[test]
fn test_board_edge_does_not_enclose() {
    let mut game = game_with(GridRules::finite(10, 10), owned(&[(1, 0)], A));

    game.apply_move(A, &GridMove::new(1, 1)).unwrap();
    game.apply_move(A, &GridMove::new(0, 1)).unwrap();

    assert_eq!(owner_of(&game, 0, 0), None);
}

#[test]
fn test_already_owned() {
    let mut game = game_with(GridRules::infinite(), owned(&[(0, 0), (1, 0)], A));
    assert_eq!(game.apply_move(A, &GridMove::new(0, 0)), Err(MoveError::AlreadyOwned));
    assert_eq!(
        game.apply_move_report(A, &GridMove::new(0, 0)).error.as_deref(),
        Some("Cell already owned by you")
    );
}

#[test]
fn test_out_of_bounds() {
    let mut game = game_with(GridRules::finite(8, 8), vec![]);

    for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8)] {
        let err = game.apply_move(A, &GridMove::first(x, y)).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds { x, y });
    }
    assert_eq!(
        game.apply_move_report(A, &GridMove::first(8, 3)).error.as_deref(),
        Some("Invalid move: (8, 3) is out of bounds")
    );
    assert!(game.store().is_empty());
}

/// Moves at the ends of the coordinate range are rejected, not panics.
#[test]
fn test_coordinate_limits_rejected() {
    let mut game = game_with(GridRules::infinite(), vec![]);

    for (x, y) in [(i32::MAX, 0), (i32::MIN, 0), (0, i32::MAX), (i32::MIN, i32::MIN)] {
        let mv = GridMove::first(x, y);
        assert_eq!(game.validate_move(A, &mv).error, Some(MoveError::OutOfBounds { x, y }));

        let report = game.apply_move_report(A, &mv);
        assert!(!report.success);
        assert_eq!(
            report.error,
            Some(format!("Invalid move: ({}, {}) is out of bounds", x, y))
        );
    }
    assert!(game.store().is_empty());
}

/// The last playable coordinates still support full moves.
#[test]
fn test_moves_near_coordinate_limits() {
    let rules = GridRules::infinite();
    let edge = i32::MAX - rules.max_bounding_box as i32 - EDGE_MARGIN;
    let mut game = game_with(rules, vec![]);

    game.apply_move(A, &GridMove::first(edge, edge)).unwrap();
    game.apply_move(A, &GridMove::new(edge - 1, edge)).unwrap();
    assert_eq!(
        game.apply_move(A, &GridMove::new(edge + 1, edge)),
        Err(MoveError::OutOfBounds { x: edge + 1, y: edge })
    );

    game.apply_move(B, &GridMove::first(-edge, -edge)).unwrap();
    assert_eq!(game.calculate_score().unwrap().get(&A), Some(&2));
}

/// Validation agrees with application and never writes.
#[test]
fn test_validate_matches_apply() {
    let mut cells = owned(&[(0, 0)], A);
    cells.extend(owned(&[(5, 5)], B));
    let mut game = game_with(GridRules::finite(16, 16), cells);

    let moves = [
        (A, GridMove::new(1, 0)),
        (A, GridMove::new(0, 0)),
        (B, GridMove::new(9, 9)),
        (B, GridMove::new(5, 6)),
        (C, GridMove::first(12, 12)),
        (A, GridMove::new(20, 0)),
    ];

    for (player, mv) in moves {
        let before = game.store().load_all().unwrap();
        let validation = game.validate_move(player, &mv);
        assert_eq!(game.store().load_all().unwrap(), before);

        let result = game.apply_move(player, &mv);
        assert_eq!(validation.is_valid, result.is_ok(), "{:?} {:?}", player, mv);
        if let Err(err) = result {
            assert_eq!(validation.error, Some(err));
            assert_eq!(game.store().load_all().unwrap(), before);
        }
    }
}

/// Affected chunks cover exactly the changed cells, negatives included.
#[test]
fn test_affected_chunks_exact() {
    let mut game = game_with(GridRules::infinite().with_chunk_size(4), vec![]);

    let outcome = game.apply_move(A, &GridMove::first(-1, -1)).unwrap();
    assert_eq!(outcome.affected_chunks, vec![ChunkCoord::new(-1, -1)]);

    let outcome = game.apply_move(A, &GridMove::new(0, -1)).unwrap();
    assert_eq!(outcome.affected_chunks, vec![ChunkCoord::new(0, -1)]);
}

/// Three players share a board without interfering.
#[test]
fn test_three_players() {
    let mut game = game_with(GridRules::finite(30, 30), vec![]);

    game.apply_move(A, &GridMove::first(2, 2)).unwrap();
    game.apply_move(B, &GridMove::first(15, 15)).unwrap();
    game.apply_move(C, &GridMove::first(27, 27)).unwrap();
    game.apply_move(A, &GridMove::new(3, 2)).unwrap();
    game.apply_move(B, &GridMove::new(15, 16)).unwrap();

    let scores = game.calculate_score().unwrap();
    assert_eq!(scores.get(&A), Some(&2));
    assert_eq!(scores.get(&B), Some(&2));
    assert_eq!(scores.get(&C), Some(&1));

    let state = game.game_state().unwrap();
    assert_eq!(state.move_count, 5);
    assert_eq!(state.scores, scores);
    assert_eq!(game.check_win_condition().unwrap(), WinCheck::ongoing());
}

/// Reaching the configured cell count wins.
#[test]
fn test_win_cells() {
    let config = TerritoryConfig::new(GridRules::infinite()).with_win_cells(2);
    let mut game = TerritoryGame::new(config, MemoryCellStore::new()).unwrap();

    game.apply_move(A, &GridMove::first(0, 0)).unwrap();
    assert!(!game.check_win_condition().unwrap().has_winner);

    game.apply_move(A, &GridMove::new(0, 1)).unwrap();
    let result = game.check_win_condition().unwrap();
    assert!(result.has_winner);
    assert_eq!(result.winner, Some(A));
}

/// Move reports serialize with camelCase field names for clients.
#[test]
fn test_report_json() {
    let mut game = game_with(GridRules::infinite(), vec![]);
    let report = game.apply_move_report(A, &GridMove::first(3, -2));

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["changedCells"][0]["coord"]["x"], 3);
    assert_eq!(json["affectedChunks"][0]["y"], -1);
}
