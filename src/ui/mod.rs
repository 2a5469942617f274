//! GUI module for the game
//!
//! A thin egui/eframe front end: it only places stones through the board
//! and asks the engine for the computer's move on a worker thread.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{AiReply, AiState, GameSession};
