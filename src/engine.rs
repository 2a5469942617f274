//! Computer player built on the minimax searcher
//!
//! The engine owns the search configuration and the random source used to
//! cut large candidate sets, and remembers how long its last search took.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, SearchConfig};
//!
//! let mut engine = AIEngine::with_config(SearchConfig::default().with_seed(7));
//! let mut board = Board::new();
//! board.place_stone(9, 9);
//!
//! if let Some(pos) = engine.find_best_move(&board) {
//!     board.place_stone(pos.x as i32, pos.y as i32);
//! }
//! println!("searched for {:.2}s", engine.last_search_duration_secs());
//! ```

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::board::{Board, Pos};
use crate::config::SearchConfig;
use crate::search::Searcher;

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, None when no candidate is playable
    pub best_move: Option<Pos>,
    /// Score of the position after the move
    pub score: i64,
    /// Boards evaluated
    pub nodes: u64,
    /// Wall-clock search time
    pub elapsed: Duration,
}

/// Computer opponent.
///
/// The random source only decides which candidates survive the branching
/// limit. Inject a seeded one with [`AIEngine::with_rng`] for reproducible play.
pub struct AIEngine<R = ChaCha20Rng> {
    config: SearchConfig,
    rng: R,
    last_duration: Duration,
}

impl AIEngine<ChaCha20Rng> {
    /// Engine with default settings (depth 4, branching limit 5), seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Engine for `config`, seeded from `config.seed` when set.
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for AIEngine<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    /// Engine for `config` using the given random source.
    pub fn with_rng(config: SearchConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            last_duration: Duration::ZERO,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for the side to move on `board`, or None when there is
    /// nothing to play. The board is only read.
    pub fn find_best_move(&mut self, board: &Board) -> Option<Pos> {
        self.find_best_move_with_stats(board).best_move
    }

    /// Like [`find_best_move`](Self::find_best_move), with score and node count.
    pub fn find_best_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        let result = Searcher::new(self.config.branching_limit, &mut self.rng)
            .search(board, self.config.depth);

        self.last_duration = start.elapsed();
        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            elapsed_ms = self.last_duration.as_millis() as u64,
            "search finished"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
            elapsed: self.last_duration,
        }
    }

    /// Wall-clock time of the last search
    pub fn last_search_duration(&self) -> Duration {
        self.last_duration
    }

    /// Wall-clock time of the last search in seconds
    pub fn last_search_duration_secs(&self) -> f64 {
        self.last_duration.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_empty_board_center() {
        let mut engine = AIEngine::with_config(SearchConfig::default().with_seed(1));
        assert_eq!(engine.find_best_move(&Board::new()), Some(Pos::new(9, 9)));
    }

    #[test]
    fn test_duration_recorded() {
        let mut engine = AIEngine::with_config(SearchConfig::default().with_seed(1));
        assert_eq!(engine.last_search_duration(), Duration::ZERO);

        let mut board = Board::new();
        board.place_stone(9, 9);
        let result = engine.find_best_move_with_stats(&board);

        assert!(result.best_move.is_some());
        assert_eq!(result.elapsed, engine.last_search_duration());
        assert!(engine.last_search_duration_secs() >= 0.0);
    }

    #[test]
    fn test_injected_rng() {
        let mut board = Board::new();
        board.place_stone(9, 9);

        let config = SearchConfig::default().with_depth(2);
        let mut a = AIEngine::with_rng(config, StepRng::new(0, 1));
        let mut b = AIEngine::with_rng(config, StepRng::new(0, 1));
        assert_eq!(a.find_best_move(&board), b.find_best_move(&board));
        assert_eq!(a.config().depth, 2);
    }

    #[test]
    fn test_move_is_legal() {
        let mut engine = AIEngine::with_config(SearchConfig::default().with_seed(9));
        let mut board = Board::new();
        for (x, y) in [(9, 9), (10, 9), (9, 10), (10, 10)] {
            assert!(board.place_stone(x, y));
        }

        let pos = engine.find_best_move(&board).unwrap();
        assert!(board.place_stone(pos.x as i32, pos.y as i32));
    }
}
