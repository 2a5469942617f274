//! Candidate move generation
//!
//! Only empty cells touching an existing stone are considered, which keeps
//! the frontier small. Larger frontiers are cut to a random subset.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, CENTER};

/// Empty neighbours of every stone, each listed once.
///
/// Stones are visited row by row and their neighbours row by row, so the
/// order is stable for a given board. An empty board yields the center.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::new(CENTER as u8, CENTER as u8)];
    }

    let mut moves = Vec::new();
    let mut considered = HashSet::new();

    for (pos, _) in board.occupied() {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(next) = pos.offset(dx, dy, 1) else {
                    continue;
                };
                if board.is_empty(next) && considered.insert(next) {
                    moves.push(next);
                }
            }
        }
    }

    moves
}

/// Shuffle and truncate `moves` when there are more than `limit`.
pub fn limit_branching<R: Rng + ?Sized>(moves: &mut Vec<Pos>, limit: usize, rng: &mut R) {
    if moves.len() > limit {
        moves.shuffle(rng);
        moves.truncate(limit);
    }
}

/// Candidate moves for `board`, at most `limit` of them.
pub fn generate_moves<R: Rng + ?Sized>(board: &Board, limit: usize, rng: &mut R) -> Vec<Pos> {
    let mut moves = candidate_moves(board);
    limit_branching(&mut moves, limit, rng);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_empty_board_gives_center() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(generate_moves(&Board::new(), 5, &mut rng), vec![Pos::new(9, 9)]);
    }

    #[test]
    fn test_neighbours_of_single_stone() {
        let mut board = Board::new();
        board.set(Pos::new(9, 9), Stone::Black);

        let moves = candidate_moves(&board);
        assert_eq!(
            moves,
            vec![
                Pos::new(8, 8),
                Pos::new(9, 8),
                Pos::new(10, 8),
                Pos::new(8, 9),
                Pos::new(10, 9),
                Pos::new(8, 10),
                Pos::new(9, 10),
                Pos::new(10, 10),
            ]
        );
    }

    #[test]
    fn test_shared_neighbours_deduplicated() {
        let mut board = Board::new();
        board.set(Pos::new(9, 9), Stone::Black);
        board.set(Pos::new(10, 9), Stone::White);

        let moves = candidate_moves(&board);
        // 3x4 block minus the two stones
        assert_eq!(moves.len(), 10);
        let unique: HashSet<_> = moves.iter().collect();
        assert_eq!(unique.len(), moves.len());
        assert!(moves.iter().all(|&p| board.is_empty(p)));
    }

    #[test]
    fn test_corner_neighbours_clipped() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Stone::Black);
        assert_eq!(
            candidate_moves(&board),
            vec![Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)]
        );
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new();
        for idx in 0..crate::board::TOTAL_CELLS {
            let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
            board.set(Pos::from_index(idx), stone);
        }
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(generate_moves(&board, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_truncation_is_seeded_subset() {
        let mut board = Board::new();
        board.set(Pos::new(9, 9), Stone::Black);
        let all = candidate_moves(&board);

        let a = generate_moves(&board, 3, &mut ChaCha20Rng::seed_from_u64(99));
        let b = generate_moves(&board, 3, &mut ChaCha20Rng::seed_from_u64(99));

        assert_eq!(a.len(), 3);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| all.contains(p)));
    }

    #[test]
    fn test_limit_not_reached_keeps_order() {
        let mut board = Board::new();
        board.set(Pos::new(9, 9), Stone::Black);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        assert_eq!(generate_moves(&board, 8, &mut rng), candidate_moves(&board));
    }
}
