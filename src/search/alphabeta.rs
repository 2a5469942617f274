//! Fixed-depth minimax with alpha-beta pruning
//!
//! Every simulated move is played on a fresh snapshot of its parent, so no
//! board is shared between branches and the caller's board is never touched.
//! Leaves are scored by [`calculate_score`] from the point of view of the side
//! to move at that leaf.
//!
//! # Example
//!
//! ```
//! use gomoku::board::Board;
//! use gomoku::search::Searcher;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut board = Board::new();
//! board.place_stone(9, 9);
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(3);
//! let result = Searcher::new(5, &mut rng).search(&board, 2);
//! assert!(result.best_move.is_some());
//! ```

use rand::Rng;

use crate::board::{Board, Pos};
use crate::eval::{calculate_score, LOSS_SCORE, WIN_SCORE};

use super::movegen::generate_moves;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best root move
    pub score: i64,
    /// Boards evaluated, root children included
    pub nodes: u64,
}

/// One search over one position.
///
/// Holds only the branching limit, the shuffling source and a node counter.
pub struct Searcher<'a, R: Rng + ?Sized> {
    branching_limit: usize,
    rng: &'a mut R,
    nodes: u64,
}

impl<'a, R: Rng + ?Sized> Searcher<'a, R> {
    pub fn new(branching_limit: usize, rng: &'a mut R) -> Self {
        Self {
            branching_limit,
            rng,
            nodes: 0,
        }
    }

    /// Pick a move for the side to move on `board`, looking `depth` plies ahead.
    ///
    /// Every root candidate is scored in full; alpha is raised between them
    /// but siblings at the root are never cut. Ties keep the first candidate.
    /// Candidates the rules refuse are skipped.
    pub fn search(&mut self, board: &Board, depth: u32) -> SearchResult {
        self.nodes = 0;
        let moves = generate_moves(board, self.branching_limit, &mut *self.rng);

        let mut best: Option<(Pos, i64)> = None;
        let mut alpha = LOSS_SCORE;
        let beta = WIN_SCORE;

        for mv in moves {
            let mut child = board.snapshot();
            if !child.place_stone(mv.x as i32, mv.y as i32) {
                continue;
            }
            self.nodes += 1;

            let score = self.evaluate_position(&child, depth.saturating_sub(1), alpha, beta, false);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(0, |(_, score)| score),
            nodes: self.nodes,
        }
    }

    /// Minimax value of `board` with `depth` plies left.
    fn evaluate_position(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> i64 {
        if depth == 0 || !board.state().is_playing() {
            return calculate_score(board);
        }

        let moves = generate_moves(board, self.branching_limit, &mut *self.rng);
        if moves.is_empty() {
            return 0;
        }

        if maximizing {
            let mut max_score = LOSS_SCORE;
            for mv in moves {
                let mut child = board.snapshot();
                if !child.place_stone(mv.x as i32, mv.y as i32) {
                    continue;
                }
                self.nodes += 1;

                let score = self.evaluate_position(&child, depth - 1, alpha, beta, false);
                max_score = max_score.max(score);
                alpha = alpha.max(max_score);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = WIN_SCORE;
            for mv in moves {
                let mut child = board.snapshot();
                if !child.place_stone(mv.x as i32, mv.y as i32) {
                    continue;
                }
                self.nodes += 1;

                let score = self.evaluate_position(&child, depth - 1, alpha, beta, true);
                min_score = min_score.min(score);
                beta = beta.min(min_score);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }
}
