//! Double-free-three forbidden move rule
//!
//! A free three is a run of exactly three stones through the candidate cell
//! with at least one open end. A move creating two or more of them at once
//! is forbidden, for both colors.
//!
//! The candidate cell is treated as holding the mover's stone without writing
//! it: every scan starts one step away from it, so the board is never touched.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Whether a stone of `stone` at `pos` forms a free three along (dx, dy).
///
/// Scans forward then backward. A friendly stone extends the run, an empty
/// cell marks the line open and ends that side, an opponent stone rules the
/// direction out and the edge just ends the side. Scanning stops once the run
/// reaches four.
pub fn is_free_three(board: &Board, pos: Pos, stone: Stone, (dx, dy): (i32, i32)) -> bool {
    let mut count = 1;
    let mut open = false;

    for sign in [1, -1] {
        let mut step = 1;
        while count < 4 {
            let Some(next) = pos.offset(dx * sign, dy * sign, step) else {
                break;
            };
            match board.get(next) {
                s if s == stone => count += 1,
                Stone::Empty => {
                    open = true;
                    break;
                }
                _ => return false,
            }
            step += 1;
        }
    }

    count == 3 && open
}

/// Count the directions in which a stone at `pos` forms a free three
pub fn count_free_threes(board: &Board, pos: Pos, stone: Stone) -> usize {
    DIRECTIONS
        .iter()
        .filter(|&&dir| is_free_three(board, pos, stone, dir))
        .count()
}

/// Check whether placing `stone` at `pos` creates two or more free threes.
pub fn is_double_free_three(board: &Board, pos: Pos, stone: Stone) -> bool {
    count_free_threes(board, pos, stone) >= 2
}

/// Full legality check for `stone` at `pos`: on-board, empty and not forbidden
pub fn is_valid_move(board: &Board, pos: Pos, stone: Stone) -> bool {
    board.is_empty(pos) && !is_double_free_three(board, pos, stone)
}
