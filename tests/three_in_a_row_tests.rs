//! Scenario tests for the three-in-a-row engine.

use gridplay::{Cell, CellMove, Engine, GameResult, Side, ThreeInARow};

fn mv(row: usize, col: usize) -> CellMove {
    CellMove { row, col }
}

#[test]
fn top_row_win_scenario() {
    // White: (0,0), (0,1), (0,2); Black: (1,1), (2,2).
    let mut game = ThreeInARow::new();

    assert!(game.apply(mv(0, 0)));
    assert!(game.apply(mv(1, 1)));
    assert!(game.apply(mv(0, 1)));
    assert!(game.apply(mv(2, 2)));
    assert!(game.apply(mv(0, 2)));

    assert_eq!(game.result(), Some(GameResult::Winner(Side::White)));

    let snap = game.snapshot();
    assert_eq!(snap.board[0], vec![Cell::White, Cell::White, Cell::White]);
    assert_eq!(snap.move_count, 5);
}

#[test]
fn full_game_via_engine_trait() {
    fn play<E: Engine>(engine: &mut E, moves: &[E::Move]) -> Option<GameResult>
    where
        E::Move: Copy,
    {
        for &mv in moves {
            engine.apply(mv);
        }
        engine.result()
    }

    let mut game = ThreeInARow::new();
    let result = play(
        &mut game,
        &[mv(1, 1), mv(0, 0), mv(0, 2), mv(2, 0), mv(1, 0), mv(1, 2), mv(2, 2)],
    );

    // Both diagonals through (1,1) are broken by Black, so the game
    // is still running after 7 moves.
    assert_eq!(result, None);
    assert_eq!(game.snapshot().move_count, 7);
}

#[test]
fn snapshot_is_json_friendly() {
    let mut game = ThreeInARow::new();
    game.apply(mv(1, 1));

    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["active_side"], "Black");
    assert_eq!(json["move_count"], 1);
    assert_eq!(json["board"][1][1], "White");
}
