//! Capture Gomoku engine
//!
//! Five-in-a-row on a 19x19 board with two extra rules:
//! - Pair capture: X-O-O-X removes the O-O pair, 10 captured stones win
//! - Double free three: a move creating two open threes at once is forbidden
//!
//! # Architecture
//!
//! - [`board`]: Board state, move application and read-only queries
//! - [`rules`]: Capture, win and forbidden-move detection
//! - [`eval`]: Static position evaluation
//! - [`search`]: Candidate generation and minimax with alpha-beta pruning
//! - [`engine`]: Computer player wrapping the search
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, GameState, SearchConfig};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(SearchConfig::default().with_seed(1));
//!
//! // Human plays the center, computer answers
//! assert!(board.place_stone(9, 9));
//! if board.state() == GameState::Playing {
//!     if let Some(pos) = engine.find_best_move(&board) {
//!         board.place_stone(pos.x as i32, pos.y as i32);
//!     }
//! }
//! assert_eq!(board.history().len(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{
    Board, GameState, Move, Placement, Pos, Stone, BOARD_SIZE, CAPTURE_WIN, WIN_LENGTH,
};
pub use config::{SearchConfig, DEFAULT_BRANCHING_LIMIT, DEFAULT_SEARCH_DEPTH};
pub use engine::{AIEngine, MoveResult};
pub use error::MoveError;
