//! Pair capture rule
//!
//! Pattern: X-O-O-X along a line, where X is the stone just placed and the
//! stone three cells further on. Only exactly 2 stones can be captured.
//!
//! Each axis is walked in its forward sense only, so the placed stone must
//! be the low end of the pattern along (dx, dy).

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Find positions that would be captured by a stone of `stone` at `pos`.
///
/// # Returns
/// Captured positions, two per matching direction
pub fn get_captured_positions(board: &Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    let mut captured = Vec::new();
    let opponent = stone.opponent();

    for &(dx, dy) in &DIRECTIONS {
        // Farthest cell bounds-checks the whole pattern
        let Some(pos3) = pos.offset(dx, dy, 3) else {
            continue;
        };
        let (Some(pos1), Some(pos2)) = (pos.offset(dx, dy, 1), pos.offset(dx, dy, 2)) else {
            continue;
        };

        if board.get(pos1) == opponent && board.get(pos2) == opponent && board.get(pos3) == stone {
            captured.push(pos1);
            captured.push(pos2);
        }
    }

    captured
}

/// Remove the stones captured by the stone just placed at `pos`.
///
/// Adds 2 to the capturing color's counter per removed pair.
///
/// # Returns
/// Positions that were emptied
pub fn execute_captures(board: &mut Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    let captured = get_captured_positions(board, pos, stone);

    for &cap_pos in &captured {
        board.remove_stone(cap_pos);
    }
    board.add_captures(stone, captured.len() as u32);

    captured
}
