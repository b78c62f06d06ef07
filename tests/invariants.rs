//! Property tests: random play against each engine's invariants.

use proptest::prelude::*;

use gridplay::{
    BlockAction, CellMove, Direction, Draughts, Engine, FallingBlock, Shape, ThreeInARow,
    TileMerge,
};

// === Reference model for tile merging ===

/// Merge one line toward index 0: compress, merge pairs once, compress.
fn merge_line_reference(values: &[u32; 4]) -> ([u32; 4], u32) {
    let compressed: Vec<u32> = values.iter().copied().filter(|&v| v != 0).collect();
    let mut out = [0u32; 4];
    let mut score = 0;
    let mut write = 0;
    let mut i = 0;
    while i < compressed.len() {
        if i + 1 < compressed.len() && compressed[i] == compressed[i + 1] {
            out[write] = compressed[i] * 2;
            score += compressed[i] * 2;
            i += 2;
        } else {
            out[write] = compressed[i];
            i += 1;
        }
        write += 1;
    }
    (out, score)
}

/// The board a move should produce before the spawn, plus the score it
/// should add.
fn merge_board_reference(board: &[Vec<u32>], direction: Direction) -> (Vec<Vec<u32>>, u32) {
    let mut result = board.to_vec();
    let mut score = 0;

    for index in 0..4 {
        let coords: Vec<(usize, usize)> = (0..4)
            .map(|i| match direction {
                Direction::Left => (index, i),
                Direction::Right => (index, 3 - i),
                Direction::Up => (i, index),
                Direction::Down => (3 - i, index),
            })
            .collect();

        let mut line = [0u32; 4];
        for (i, &(r, c)) in coords.iter().enumerate() {
            line[i] = board[r][c];
        }
        let (merged, line_score) = merge_line_reference(&line);
        score += line_score;
        for (i, &(r, c)) in coords.iter().enumerate() {
            result[r][c] = merged[i];
        }
    }
    (result, score)
}

proptest! {
    // === Draughts ===

    #[test]
    fn draughts_random_play_invariants(
        choices in prop::collection::vec(any::<prop::sample::Index>(), 1..150)
    ) {
        let mut game = Draughts::new();

        for choice in choices {
            let moves = game.legal_moves();

            // Move-or-winner: never both no moves and no outcome.
            if game.result().is_some() {
                prop_assert!(moves.is_empty());
                break;
            }
            prop_assert!(!moves.is_empty());

            // Mandatory capture: the legal set is all-capture or
            // all-simple, never mixed.
            let captures = moves.iter().filter(|m| m.captured.is_some()).count();
            prop_assert!(captures == 0 || captures == moves.len());

            let mv = moves[choice.index(moves.len())];
            let mover = game.active_side();
            let own_before = game.piece_count(mover);
            let theirs_before = game.piece_count(mover.opponent());

            prop_assert!(game.apply(mv));

            // Piece conservation: mover keeps all pieces; a capture
            // removes exactly one opposing piece.
            prop_assert_eq!(game.piece_count(mover), own_before);
            let expected = theirs_before - usize::from(mv.captured.is_some());
            prop_assert_eq!(game.piece_count(mover.opponent()), expected);
        }
    }

    // === TileMerge ===

    #[test]
    fn tile_merge_move_matches_reference_plus_one_spawn(
        seed in any::<u64>(),
        directions in prop::collection::vec(0usize..4, 1..80)
    ) {
        let mut game = TileMerge::new(seed);

        for d in directions {
            if game.game_over() {
                break;
            }
            let direction = Direction::all()[d];
            let before = game.snapshot();
            let (expected_board, expected_score) =
                merge_board_reference(&before.board, direction);

            let changed = game.apply(direction);
            let after = game.snapshot();

            if expected_board == before.board {
                // A move that changes nothing is a no-op: no spawn,
                // no score, no flags.
                prop_assert!(!changed);
                prop_assert_eq!(after, before);
            } else {
                prop_assert!(changed);
                prop_assert_eq!(after.score, before.score + expected_score);

                // Exactly one cell deviates from the reference merge:
                // the spawned tile, a 2 or 4 on a previously empty cell.
                let mut spawns = 0;
                for r in 0..4 {
                    for c in 0..4 {
                        if after.board[r][c] != expected_board[r][c] {
                            prop_assert_eq!(expected_board[r][c], 0);
                            prop_assert!(after.board[r][c] == 2 || after.board[r][c] == 4);
                            spawns += 1;
                        }
                    }
                }
                prop_assert_eq!(spawns, 1);
            }
        }
    }

    // === FallingBlock ===

    #[test]
    fn falling_block_stays_in_bounds(
        seed in any::<u64>(),
        actions in prop::collection::vec(0usize..5, 1..400)
    ) {
        let all = [
            BlockAction::Left,
            BlockAction::Right,
            BlockAction::Rotate,
            BlockAction::SoftDrop,
            BlockAction::Tick,
        ];
        let mut game = FallingBlock::new(seed);

        for a in actions {
            if game.game_over() {
                break;
            }
            game.apply(all[a]);

            if let Some(piece) = game.active_piece() {
                for (row, col) in piece.cells() {
                    prop_assert!((0..10).contains(&col));
                    prop_assert!(row < 20);
                }
            }
            let snap = game.snapshot();
            prop_assert!(snap.board.iter().flatten().all(|&c| (c as usize) <= Shape::ALL.len()));
            prop_assert_eq!(snap.level, snap.lines_cleared / 10 + 1);
        }
    }

    #[test]
    fn falling_block_snapshot_round_trips(
        seed in any::<u64>(),
        actions in prop::collection::vec(0usize..5, 1..300)
    ) {
        let all = [
            BlockAction::Left,
            BlockAction::Right,
            BlockAction::Rotate,
            BlockAction::SoftDrop,
            BlockAction::Tick,
        ];
        let mut game = FallingBlock::new(seed);
        for a in actions {
            game.apply(all[a]);
        }

        let snap = game.snapshot();
        let restored = FallingBlock::restore(&snap).expect("engine snapshots restore");
        let resumed = restored.snapshot();

        if snap.game_over && snap.score == 0 && snap.lines_cleared == 0 {
            // The documented defensive correction: a terminal flag with
            // no recorded progress is treated as stale and cleared, and
            // a fresh piece is spawned to make the game playable.
            prop_assert!(!resumed.game_over);
            prop_assert!(resumed.active.is_some());
            prop_assert_eq!(resumed.board, snap.board);
            prop_assert_eq!(resumed.score, snap.score);
            prop_assert_eq!(resumed.lines_cleared, snap.lines_cleared);
        } else {
            prop_assert_eq!(resumed, snap);
        }
    }

    // === ThreeInARow ===

    #[test]
    fn three_in_a_row_random_play_is_consistent(
        cells in prop::collection::vec((0usize..4, 0usize..4), 1..30)
    ) {
        let mut game = ThreeInARow::new();

        for (row, col) in cells {
            let before = game.snapshot();
            let accepted = game.apply(CellMove { row, col });
            let after = game.snapshot();

            if accepted {
                prop_assert!(before.result.is_none());
                prop_assert_eq!(after.move_count, before.move_count + 1);
            } else {
                prop_assert_eq!(&after, &before);
            }
            prop_assert!(after.move_count <= 9);
            if after.move_count == 9 {
                prop_assert!(after.result.is_some());
            }
        }
    }
}
