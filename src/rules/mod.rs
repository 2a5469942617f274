//! Game rules for capture Gomoku
//!
//! This module implements the rule set:
//! - Capture rules (pair capture)
//! - Win conditions (5-in-a-row, capture win)
//! - Forbidden moves (double free three)

pub mod capture;
pub mod forbidden;
pub mod win;

// Re-exports for convenient access
pub use capture::{execute_captures, get_captured_positions};
pub use forbidden::{count_free_threes, is_double_free_three, is_free_three, is_valid_move};
pub use win::{count_sequence, has_winning_run, longest_run_at, winning_line_at};
