//! Legal-move generation for draughts.
//!
//! Capture moves are generated first and, when any exist, simple moves
//! are filtered out entirely (mandatory capture). During a multi-jump
//! chain only the chained piece's captures are legal.

use smallvec::SmallVec;

use super::{DraughtsMove, SquareState};
use crate::core::{Coord, Grid, Side};

/// Buffer sized for typical mid-game move counts.
pub type MoveList = SmallVec<[DraughtsMove; 16]>;

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All legal moves for `side`, honoring mandatory capture and a pending
/// capture chain.
#[must_use]
pub fn legal_moves(
    board: &Grid<SquareState, 8, 8>,
    side: Side,
    chain: Option<Coord>,
) -> MoveList {
    // Mid-chain, only the chained piece may move and only by capturing.
    if let Some(origin) = chain {
        return captures_from(board, origin);
    }

    let mut captures = MoveList::new();
    for at in board.coords() {
        if board.get(at).side() == Some(side) {
            captures.extend(captures_from(board, at));
        }
    }
    if !captures.is_empty() {
        return captures;
    }

    let mut simple = MoveList::new();
    for at in board.coords() {
        if board.get(at).side() == Some(side) {
            simple_moves_from(board, at, &mut simple);
        }
    }
    simple
}

/// Capture moves available to the piece standing on `from`.
#[must_use]
pub fn captures_from(board: &Grid<SquareState, 8, 8>, from: Coord) -> MoveList {
    let mut out = MoveList::new();
    let (side, is_king) = match board.get(from) {
        SquareState::Man(side) => (side, false),
        SquareState::King(side) => (side, true),
        SquareState::Empty => return out,
    };

    for &(dr, dc) in &DIAGONALS {
        if is_king {
            king_captures_along(board, from, side, dr, dc, &mut out);
        } else {
            // Men capture in all four diagonal directions: jump exactly
            // one enemy piece, landing on the square just past it.
            let Some(mid) = from.offset::<8, 8>(dr, dc) else {
                continue;
            };
            let Some(to) = mid.offset::<8, 8>(dr, dc) else {
                continue;
            };
            if board.get(mid).side() == Some(side.opponent())
                && board.get(to) == SquareState::Empty
            {
                out.push(DraughtsMove {
                    from,
                    to,
                    captured: Some(mid),
                });
            }
        }
    }
    out
}

/// King captures along one diagonal: slide over empty squares to the
/// first piece; if it is an enemy, every empty square beyond it up to
/// the next obstruction is a landing square.
fn king_captures_along(
    board: &Grid<SquareState, 8, 8>,
    from: Coord,
    side: Side,
    dr: i32,
    dc: i32,
    out: &mut MoveList,
) {
    let mut cursor = from;
    let captured = loop {
        let Some(next) = cursor.offset::<8, 8>(dr, dc) else {
            return;
        };
        cursor = next;
        match board.get(cursor) {
            SquareState::Empty => {}
            square if square.side() == Some(side.opponent()) => break cursor,
            _ => return,
        }
    };

    let mut landing = captured;
    while let Some(next) = landing.offset::<8, 8>(dr, dc) {
        if board.get(next) != SquareState::Empty {
            break;
        }
        landing = next;
        out.push(DraughtsMove {
            from,
            to: landing,
            captured: Some(captured),
        });
    }
}

/// Non-capturing moves for the piece standing on `from`.
///
/// Men step one square diagonally forward; kings slide any distance
/// along open diagonals.
fn simple_moves_from(board: &Grid<SquareState, 8, 8>, from: Coord, out: &mut MoveList) {
    match board.get(from) {
        SquareState::Man(side) => {
            let dr = forward_row_delta(side);
            for dc in [-1, 1] {
                if let Some(to) = from.offset::<8, 8>(dr, dc) {
                    if board.get(to) == SquareState::Empty {
                        out.push(DraughtsMove {
                            from,
                            to,
                            captured: None,
                        });
                    }
                }
            }
        }
        SquareState::King(_) => {
            for &(dr, dc) in &DIAGONALS {
                let mut cursor = from;
                while let Some(to) = cursor.offset::<8, 8>(dr, dc) {
                    if board.get(to) != SquareState::Empty {
                        break;
                    }
                    cursor = to;
                    out.push(DraughtsMove {
                        from,
                        to,
                        captured: None,
                    });
                }
            }
        }
        SquareState::Empty => {}
    }
}

/// Row direction a man of `side` advances in.
pub const fn forward_row_delta(side: Side) -> i32 {
    match side {
        Side::White => -1,
        Side::Black => 1,
    }
}

/// Row on which a man of `side` promotes.
pub const fn promotion_row(side: Side) -> usize {
    match side {
        Side::White => 0,
        Side::Black => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> Grid<SquareState, 8, 8> {
        Grid::new()
    }

    #[test]
    fn test_man_simple_moves_forward_only() {
        let mut board = empty_board();
        board.set(Coord::new(4, 3), SquareState::Man(Side::White));

        let moves = legal_moves(&board, Side::White, None);
        let targets: Vec<_> = moves.iter().map(|m| m.to).collect();

        assert_eq!(moves.len(), 2);
        assert!(targets.contains(&Coord::new(3, 2)));
        assert!(targets.contains(&Coord::new(3, 4)));
        assert!(moves.iter().all(|m| m.captured.is_none()));
    }

    #[test]
    fn test_man_captures_backward() {
        let mut board = empty_board();
        board.set(Coord::new(3, 3), SquareState::Man(Side::White));
        board.set(Coord::new(4, 4), SquareState::Man(Side::Black));

        // (4,4) is behind the white man; the capture is still legal.
        let moves = legal_moves(&board, Side::White, None);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Coord::new(5, 5));
        assert_eq!(moves[0].captured, Some(Coord::new(4, 4)));
    }

    #[test]
    fn test_mandatory_capture_filters_simple_moves() {
        let mut board = empty_board();
        board.set(Coord::new(5, 2), SquareState::Man(Side::White));
        board.set(Coord::new(5, 6), SquareState::Man(Side::White));
        board.set(Coord::new(4, 3), SquareState::Man(Side::Black));

        let moves = legal_moves(&board, Side::White, None);
        assert!(moves.iter().all(|m| m.captured.is_some()));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from, Coord::new(5, 2));
    }

    #[test]
    fn test_capture_blocked_by_occupied_landing() {
        let mut board = empty_board();
        board.set(Coord::new(5, 2), SquareState::Man(Side::White));
        board.set(Coord::new(4, 3), SquareState::Man(Side::Black));
        board.set(Coord::new(3, 4), SquareState::Man(Side::Black));

        let moves = legal_moves(&board, Side::White, None);
        assert!(moves.iter().all(|m| m.captured.is_none()));
    }

    #[test]
    fn test_king_slides_any_distance() {
        let mut board = empty_board();
        board.set(Coord::new(4, 4), SquareState::King(Side::White));

        let moves = legal_moves(&board, Side::White, None);
        // 4+3+3+3 open squares along the two diagonals through (4,4).
        assert_eq!(moves.len(), 13);
        assert!(moves.iter().any(|m| m.to == Coord::new(0, 0)));
        assert!(moves.iter().any(|m| m.to == Coord::new(7, 7)));
        assert!(moves.iter().any(|m| m.to == Coord::new(1, 7)));
        assert!(moves.iter().any(|m| m.to == Coord::new(7, 1)));
    }

    #[test]
    fn test_king_capture_flying_landing_choice() {
        let mut board = empty_board();
        board.set(Coord::new(7, 0), SquareState::King(Side::White));
        board.set(Coord::new(4, 3), SquareState::Man(Side::Black));

        let moves = legal_moves(&board, Side::White, None);
        let captures: Vec<_> = moves.iter().filter(|m| m.captured.is_some()).collect();

        // Landing anywhere past the captured man: (3,4), (2,5), (1,6), (0,7).
        assert_eq!(captures.len(), 4);
        assert!(captures
            .iter()
            .all(|m| m.captured == Some(Coord::new(4, 3))));
        assert!(captures.iter().any(|m| m.to == Coord::new(0, 7)));
    }

    #[test]
    fn test_king_cannot_jump_two_adjacent_pieces() {
        let mut board = empty_board();
        board.set(Coord::new(7, 0), SquareState::King(Side::White));
        board.set(Coord::new(4, 3), SquareState::Man(Side::Black));
        board.set(Coord::new(3, 4), SquareState::Man(Side::Black));

        let moves = legal_moves(&board, Side::White, None);
        assert!(moves.iter().all(|m| m.captured.is_none()));
    }

    #[test]
    fn test_king_blocked_by_own_piece_before_enemy() {
        let mut board = empty_board();
        board.set(Coord::new(7, 0), SquareState::King(Side::White));
        board.set(Coord::new(5, 2), SquareState::Man(Side::White));
        board.set(Coord::new(4, 3), SquareState::Man(Side::Black));

        let moves = legal_moves(&board, Side::White, None);
        assert!(moves.iter().all(|m| m.captured.is_none()));
    }

    #[test]
    fn test_chain_restricts_to_one_piece() {
        let mut board = empty_board();
        board.set(Coord::new(5, 2), SquareState::Man(Side::White));
        board.set(Coord::new(5, 6), SquareState::Man(Side::White));
        board.set(Coord::new(4, 3), SquareState::Man(Side::Black));
        board.set(Coord::new(4, 5), SquareState::Man(Side::Black));

        let moves = legal_moves(&board, Side::White, Some(Coord::new(5, 2)));
        assert!(moves.iter().all(|m| m.from == Coord::new(5, 2)));
        assert!(moves.iter().all(|m| m.captured.is_some()));
    }
}
