//! Position evaluation for the minimax search

pub mod heuristic;

pub use heuristic::{calculate_score, center_bonus, stone_value, CAPTURE_WEIGHT, LOSS_SCORE, WIN_SCORE};
