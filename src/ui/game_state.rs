//! Game session driving the board and the computer player for the GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::rules::winning_line_at;
use crate::{AIEngine, Board, Pos, SearchConfig, Stone};

/// Answer sent back by the search thread
#[derive(Debug, Clone, Copy)]
pub struct AiReply {
    pub best_move: Option<Pos>,
    pub seconds: f64,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// One human-versus-computer game
pub struct GameSession {
    pub board: Board,
    pub human: Stone,
    /// Status line shown under the board
    pub status: String,
    pub winning_line: Option<Vec<Pos>>,
    pub last_ai_seconds: Option<f64>,
    ai_state: AiState,
    /// Set when the computer found nothing to play
    ai_stuck: bool,
    config: SearchConfig,
    searches: u64,
}

impl GameSession {
    pub fn new(human: Stone, config: SearchConfig) -> Self {
        Self {
            board: Board::new(),
            human,
            status: "Game Started".to_string(),
            winning_line: None,
            last_ai_seconds: None,
            ai_state: AiState::Idle,
            ai_stuck: false,
            config,
            searches: 0,
        }
    }

    /// Start over with the same players. A running search is abandoned.
    pub fn reset(&mut self) {
        let searches = self.searches;
        *self = Self::new(self.human, self.config);
        // Seed offset carries over between games
        self.searches = searches;
        info!(human = self.human.name(), "new game");
    }

    pub fn is_over(&self) -> bool {
        !self.board.state().is_playing()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.board.current_stone() == self.human
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.board.current_stone() != self.human
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("Computer is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let stone = self.board.current_stone();
        self.board
            .try_place_stone(pos.x as i32, pos.y as i32)
            .map_err(|e| e.to_string())?;
        self.after_move(pos, stone);
        Ok(())
    }

    /// Update status and winning line after a stone of `stone` landed on `pos`
    fn after_move(&mut self, pos: Pos, stone: Stone) {
        if let Some(winner) = self.board.state().winner() {
            self.winning_line = winning_line_at(&self.board, pos, stone);
            self.status = format!("{} wins!", winner.name());
            info!(winner = winner.name(), moves = self.board.history().len(), "game over");
        }
    }

    /// Launch the search for the computer's move on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.ai_stuck {
            return;
        }

        let board = self.board.snapshot();
        let mut config = self.config;
        // Vary a fixed seed per move so games stay reproducible without repeating shuffles
        config.seed = config.seed.map(|s| s.wrapping_add(self.searches));
        self.searches += 1;

        let (tx, rx) = channel();
        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let best_move = engine.find_best_move(&board);
            let _ = tx.send(AiReply {
                best_move,
                seconds: engine.last_search_duration_secs(),
            });
        });

        self.status = "Computer is thinking...".to_string();
        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the computer's move once the worker has answered
    pub fn check_ai_result(&mut self) {
        let polled = match &self.ai_state {
            AiState::Thinking { receiver, .. } => receiver.try_recv(),
            AiState::Idle => return,
        };
        let reply = match polled {
            Ok(reply) => reply,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.ai_state = AiState::Idle;
                self.status = "Computer player failed".to_string();
                warn!("search thread exited without a move");
                return;
            }
        };

        self.ai_state = AiState::Idle;
        self.last_ai_seconds = Some(reply.seconds);

        let Some(pos) = reply.best_move else {
            self.ai_stuck = true;
            self.status = "No moves left".to_string();
            info!("computer has no move");
            return;
        };

        let stone = self.board.current_stone();
        if !self.board.place_stone(pos.x as i32, pos.y as i32) {
            warn!(x = pos.x, y = pos.y, "computer move refused");
            self.status = "Computer move refused".to_string();
            return;
        }

        self.status = format!("Computer move took {:.2} seconds", reply.seconds);
        self.after_move(pos, stone);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back moves until it is the human's turn again
    pub fn undo(&mut self) {
        if self.board.history().is_empty() || self.is_ai_thinking() {
            return;
        }

        let mut moves: Vec<Pos> = self.board.history().iter().map(|m| m.pos).collect();
        loop {
            moves.pop();
            // Every prefix of an accepted game replays cleanly
            match Board::replay(moves.iter().copied()) {
                Ok(board) => self.board = board,
                Err(e) => {
                    warn!(error = %e, "undo replay failed");
                    return;
                }
            }
            if self.board.current_stone() == self.human || moves.is_empty() {
                break;
            }
        }

        self.winning_line = None;
        self.ai_stuck = false;
        self.status = format!("Undo, move {}", moves.len());
    }
}
