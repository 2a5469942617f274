//! Static evaluation of board positions
//!
//! Scores a position from the point of view of the player to move on that
//! board. It considers:
//! - Capture difference
//! - Decided games
//! - Runs through every stone and closeness to the center

use crate::board::{Board, Pos, Stone, BOARD_SIZE, CENTER, DIRECTIONS};
use crate::rules::count_sequence;

/// Score of a won position
pub const WIN_SCORE: i64 = i64::MAX;

/// Score of a lost position. Kept symmetric with `WIN_SCORE` so it can be negated.
pub const LOSS_SCORE: i64 = -i64::MAX;

/// Weight of each captured stone
pub const CAPTURE_WEIGHT: i64 = 1000;

/// Weight per step of closeness to the center
const CENTER_WEIGHT: i64 = 2;

/// Evaluate the board for the player whose turn it is on `board`.
///
/// Returns a score where:
/// - Positive values favor the player to move
/// - `WIN_SCORE` / `LOSS_SCORE` mark a decided game
#[must_use]
pub fn calculate_score(board: &Board) -> i64 {
    let me = board.current_stone();
    let opponent = me.opponent();

    if let Some(winner) = board.state().winner() {
        return if winner == me { WIN_SCORE } else { LOSS_SCORE };
    }

    let mut score = (board.captures(me) as i64 - board.captures(opponent) as i64) * CAPTURE_WEIGHT;

    for (pos, stone) in board.occupied() {
        let value = stone_value(board, pos, stone);
        if stone == me {
            score = score.saturating_add(value);
        } else {
            score = score.saturating_sub(value);
        }
    }

    score
}

/// Value of a single stone: 10^run in each direction plus a center bonus
pub fn stone_value(board: &Board, pos: Pos, stone: Stone) -> i64 {
    let mut value = 0i64;

    for &dir in &DIRECTIONS {
        let run = count_sequence(board, pos, dir, stone) as u32;
        value = value.saturating_add(10i64.saturating_pow(run));
    }

    value.saturating_add(center_bonus(pos))
}

/// (19 - manhattan distance to center) * 2
#[inline]
pub fn center_bonus(pos: Pos) -> i64 {
    let distance = (pos.x as i32 - CENTER).abs() + (pos.y as i32 - CENTER).abs();
    (BOARD_SIZE as i64 - distance as i64) * CENTER_WEIGHT
}
