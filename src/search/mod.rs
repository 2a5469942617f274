//! Search module for the computer player
//!
//! Contains:
//! - Candidate generation around existing stones
//! - Fixed-depth minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher};
pub use movegen::{candidate_moves, generate_moves, limit_branching};
