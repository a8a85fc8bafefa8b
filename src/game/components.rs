/// The type of tiles that can be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    /// Piece of the first player.
    Player1,
    /// Piece of the second player.
    Player2,
    /// No piece.
    Empty,
}

impl Default for TileType {
    fn default() -> Self {
        Self::Empty
    }
}

/// A `(row, col)` coordinate on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `dir`, if it does not underflow.
    pub(crate) fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of dropping a piece into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The piece settled at this position.
    Landed(Position),
    /// The column had no empty cell; nothing changed.
    ColumnFull,
}

/// One of the eight compass directions a line can be walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    DownRight,
    UpRight,
    DownLeft,
}

impl Direction {
    /// `(row, col)` delta of a single step.
    pub(crate) fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// The four lines through a cell, each as a pair of opposite directions.
pub(crate) const AXES: [(Direction, Direction); 4] = [
    (Direction::Up, Direction::Down),
    (Direction::Left, Direction::Right),
    (Direction::UpLeft, Direction::DownRight),
    (Direction::UpRight, Direction::DownLeft),
];

/// State of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Moves are still being accepted.
    InProgress,
    /// The given player connected four.
    Won(Player),
    /// The board filled up without a winner.
    Drawn,
}

impl GameState {
    /// Whether the match has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// A single player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Name shown in prompts and results.
    pub name: String,
    /// Tile this player drops.
    pub tile: TileType,
}

impl Player {
    /// Create a new player.
    pub fn new(name: impl Into<String>, tile: TileType) -> Self {
        Self {
            name: name.into(),
            tile,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The current and waiting player slots.
#[derive(Debug, Clone)]
pub(super) struct Players {
    pub current: Player,
    pub waiting: Player,
}

impl Players {
    /// Create new players, `first` moves first.
    pub(super) fn new(first: Player, second: Player) -> Self {
        Self {
            current: first,
            waiting: second,
        }
    }

    pub(super) fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.waiting);
    }
}
