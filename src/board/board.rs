//! Board structure with capture tracking and move validation

use tracing::{debug, trace};

use super::{GameState, Move, Pos, Stone, BOARD_SIZE, CAPTURE_WIN, TOTAL_CELLS};
use crate::error::MoveError;
use crate::rules::{execute_captures, has_winning_run, is_double_free_three};

/// Game board with capture tracking
#[derive(Debug, Clone)]
pub struct Board {
    /// Row-major cells, index = y * 19 + x
    cells: [Stone; TOTAL_CELLS],
    /// Applied moves in order
    history: Vec<Move>,
    /// Captured stones per player (10 = win)
    captures: [u32; 2],
    current_player: usize,
    state: GameState,
}

/// Outcome of an accepted placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub stone: Stone,
    /// Opponent stones removed by this move (always pairs)
    pub captured: Vec<Pos>,
    /// Game state after the move
    pub state: GameState,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
            history: Vec::with_capacity(TOTAL_CELLS),
            captures: [0; 2],
            current_player: 0,
            state: GameState::Playing,
        }
    }

    /// Copy of grid, counters, player and state without the move history.
    /// Used for look-ahead where the history is never read.
    pub fn snapshot(&self) -> Self {
        Self {
            cells: self.cells,
            history: Vec::new(),
            captures: self.captures,
            current_player: self.current_player,
            state: self.state,
        }
    }

    /// Play the current player's stone at (x, y).
    ///
    /// Returns false and leaves the board untouched when the move is illegal.
    pub fn place_stone(&mut self, x: i32, y: i32) -> bool {
        self.try_place_stone(x, y).is_ok()
    }

    /// Play the current player's stone at (x, y), reporting why a move was refused.
    ///
    /// On success the stone is written, the move recorded, captures resolved and
    /// the win condition checked. The turn passes only if the game goes on.
    pub fn try_place_stone(&mut self, x: i32, y: i32) -> Result<Placement, MoveError> {
        if !self.state.is_playing() {
            return Err(MoveError::GameOver);
        }
        let pos = Pos::from_coords(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied { x: pos.x, y: pos.y });
        }

        let player = self.current_player;
        let stone = Stone::for_player(player);
        if is_double_free_three(self, pos, stone) {
            trace!(x, y, "double free three refused");
            return Err(MoveError::DoubleFreeThree { x: pos.x, y: pos.y });
        }

        self.set(pos, stone);
        self.history.push(Move { pos, player });

        let captured = execute_captures(self, pos, stone);
        if !captured.is_empty() {
            trace!(x, y, stones = captured.len(), total = self.captures[player], "capture");
        }

        if self.captures[player] >= CAPTURE_WIN {
            self.state = GameState::win_for(player);
            debug!(winner = stone.name(), captures = self.captures[player], "capture win");
        } else if has_winning_run(self, pos, stone) {
            self.state = GameState::win_for(player);
            debug!(winner = stone.name(), x, y, "five in a row");
        } else {
            self.current_player = 1 - player;
        }

        Ok(Placement {
            pos,
            stone,
            captured,
            state: self.state,
        })
    }

    /// Stone at (x, y). Panics when the coordinates are off the board.
    pub fn stone(&self, x: i32, y: i32) -> Stone {
        match self.stone_at(x, y) {
            Some(stone) => stone,
            None => panic!("({x}, {y}) is outside the {BOARD_SIZE}x{BOARD_SIZE} board"),
        }
    }

    /// Stone at (x, y), None when off the board
    #[inline]
    pub fn stone_at(&self, x: i32, y: i32) -> Option<Stone> {
        Pos::from_coords(x, y).map(|pos| self.get(pos))
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Index of the player to move: 0 for Black, 1 for White
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Stone color of the player to move
    #[inline]
    pub fn current_stone(&self) -> Stone {
        Stone::for_player(self.current_player)
    }

    /// Stones captured by the given player index
    #[inline]
    pub fn capture_count(&self, player: usize) -> u32 {
        self.captures[player]
    }

    /// Stones captured by a color
    #[inline]
    pub fn captures(&self, stone: Stone) -> u32 {
        stone.player().map_or(0, |p| self.captures[p])
    }

    /// Moves applied so far, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Occupied positions in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s != Stone::Empty)
            .map(|(idx, &s)| (Pos::from_index(idx), s))
    }

    /// Rebuild a board by replaying moves from an empty position.
    /// Stops at the first move that is refused.
    pub fn replay<I>(moves: I) -> Result<Self, MoveError>
    where
        I: IntoIterator<Item = Pos>,
    {
        let mut board = Board::new();
        for pos in moves {
            board.try_place_stone(pos.x as i32, pos.y as i32)?;
        }
        Ok(board)
    }

    /// Write a stone without any rule processing
    #[inline]
    pub(crate) fn set(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.to_index()] = stone;
    }

    /// Remove a stone
    #[inline]
    pub(crate) fn remove_stone(&mut self, pos: Pos) {
        self.set(pos, Stone::Empty);
    }

    #[inline]
    pub(crate) fn add_captures(&mut self, stone: Stone, count: u32) {
        if let Some(p) = stone.player() {
            self.captures[p] += count;
        }
    }

    /// Force the side to move, for positions built with `set`
    #[cfg(test)]
    pub(crate) fn set_current_player(&mut self, player: usize) {
        self.current_player = player;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
