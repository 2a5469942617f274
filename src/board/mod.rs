//! Board representation for capture Gomoku

pub mod board;


// Re-exports
pub use board::{Board, Placement};

/// Board size (19x19)
pub const BOARD_SIZE: usize = 19;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 361

/// Contiguous stones needed to win
pub const WIN_LENGTH: usize = 5;

/// Captured stones needed to win (5 pairs)
pub const CAPTURE_WIN: u32 = 10;

/// Center intersection, also the opening move on an empty board
pub const CENTER: i32 = (BOARD_SIZE / 2) as i32;

/// Line directions as (dx, dy). Each one covers a full line when scanned both ways.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Stone played by player index 0 (Black) or 1 (White)
    #[inline]
    pub fn for_player(player: usize) -> Stone {
        if player == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// Player index owning this color
    #[inline]
    pub fn player(self) -> Option<usize> {
        match self {
            Stone::Black => Some(0),
            Stone::White => Some(1),
            Stone::Empty => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

/// Overall game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    BlackWins,
    WhiteWins,
    /// Declared for completeness; no rule currently produces it
    Draw,
}

impl GameState {
    /// Terminal state for a win by the given player index
    #[inline]
    pub fn win_for(player: usize) -> GameState {
        if player == 0 {
            GameState::BlackWins
        } else {
            GameState::WhiteWins
        }
    }

    /// Winning color, if the game was decided
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameState::BlackWins => Some(Stone::Black),
            GameState::WhiteWins => Some(Stone::White),
            GameState::Playing | GameState::Draw => None,
        }
    }

    #[inline]
    pub fn is_playing(self) -> bool {
        self == GameState::Playing
    }
}

/// Intersection on the board, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Checked constructor from signed coordinates
    #[inline]
    pub fn from_coords(x: i32, y: i32) -> Option<Self> {
        if Self::is_valid(x, y) {
            Some(Self { x: x as u8, y: y as u8 })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Step `steps` cells along (dx, dy), None when leaving the board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, steps: i32) -> Option<Pos> {
        Pos::from_coords(self.x as i32 + dx * steps, self.y as i32 + dy * steps)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// A stone placed by a player, kept in the board's history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub player: usize,
}
