//! Win condition checking
//!
//! Win conditions:
//! 1. Five or more stones in a row through the stone just placed
//! 2. Capture 10 opponent stones (checked by the board before this)

use crate::board::{Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

/// Length of the contiguous run of `stone` through `pos` along (dx, dy).
///
/// Counts forward and backward from `pos`; the origin is counted once
/// regardless of what is actually stored there.
pub fn count_sequence(board: &Board, pos: Pos, (dx, dy): (i32, i32), stone: Stone) -> usize {
    let mut count = 1;

    for sign in [1, -1] {
        let mut step = 1;
        while let Some(next) = pos.offset(dx * sign, dy * sign, step) {
            if board.get(next) != stone {
                break;
            }
            count += 1;
            step += 1;
        }
    }

    count
}

/// Longest run of `stone` through `pos` over the four directions
pub fn longest_run_at(board: &Board, pos: Pos, stone: Stone) -> usize {
    DIRECTIONS
        .iter()
        .map(|&dir| count_sequence(board, pos, dir, stone))
        .max()
        .unwrap_or(1)
}

/// Whether the stone at `pos` completes five or more in a row.
#[inline]
pub fn has_winning_run(board: &Board, pos: Pos, stone: Stone) -> bool {
    longest_run_at(board, pos, stone) >= WIN_LENGTH
}

/// The full winning line through `pos`, ordered along its direction.
pub fn winning_line_at(board: &Board, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
    for &(dx, dy) in &DIRECTIONS {
        if count_sequence(board, pos, (dx, dy), stone) < WIN_LENGTH {
            continue;
        }

        // Walk back to the start of the run, then collect forward
        let mut start = pos;
        while let Some(prev) = start.offset(-dx, -dy, 1) {
            if board.get(prev) != stone {
                break;
            }
            start = prev;
        }

        let mut line = vec![start];
        let mut cur = start;
        while let Some(next) = cur.offset(dx, dy, 1) {
            if board.get(next) != stone {
                break;
            }
            line.push(next);
            cur = next;
        }
        return Some(line);
    }
    None
}
