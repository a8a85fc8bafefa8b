use super::{
    components::{Direction, Placement, Position, TileType, AXES},
    error::{Error, GameResult},
};

/// Number of connected tiles needed to win.
const CONNECT: usize = 4;

/// A `W` wide, `H` high grid of tiles. Row 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<const W: usize, const H: usize> {
    board: [[TileType; W]; H],
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// Create a new, empty Board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if either dimension is zero.
    pub fn new() -> GameResult<Self> {
        Self::from_grid([[TileType::default(); W]; H])
    }

    /// Create a Board from a pre-filled grid, indexed `[row][col]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if either dimension is zero.
    pub fn from_grid(board: [[TileType; W]; H]) -> GameResult<Self> {
        if W == 0 || H == 0 {
            return Err(Error::InvalidDim);
        }
        Ok(Self { board })
    }

    /// Board width.
    pub fn width(&self) -> usize {
        W
    }

    /// Board height.
    pub fn height(&self) -> usize {
        H
    }

    /// Drop a tile into the given zero indexed column. The tile settles in
    /// the lowest empty cell of that column.
    ///
    /// A full column is not an error: `Placement::ColumnFull` is returned and
    /// the board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` if the column is outside the board dimensions.
    ///
    /// Returns `Error::InvalidType` if the tile is of type `TileType::Empty`.
    pub fn drop_piece(&mut self, col: isize, tile: TileType) -> GameResult<Placement> {
        let col = match usize::try_from(col) {
            Ok(c) if c < W => c,
            _ => return Err(Error::InvalidColumn(col)),
        };
        if tile == TileType::Empty {
            return Err(Error::InvalidType);
        }

        // the last empty cell before a filled one or the bottom
        let row = self
            .board
            .iter()
            .take_while(|row| row[col] == TileType::Empty)
            .count();
        if row == 0 {
            log::trace!("column {col} is full");
            return Ok(Placement::ColumnFull);
        }

        let pos = Position::new(row - 1, col);
        self.board[pos.row][pos.col] = tile;
        log::trace!("{tile:?} landed at {pos}");
        Ok(Placement::Landed(pos))
    }

    /// Check if no cell on the board is empty. Scans the whole grid.
    pub fn is_full(&self) -> bool {
        self.board
            .iter()
            .flatten()
            .all(|&tile| tile != TileType::Empty)
    }

    /// Number of empty cells left in a column.
    pub fn empty_in_column(&self, col: usize) -> GameResult<usize> {
        if col >= W {
            return Err(Error::InvalidDim);
        }
        Ok(self
            .board
            .iter()
            .filter(|row| row[col] == TileType::Empty)
            .count())
    }

    /// Check if the tile at `last_move` is part of four or more connected
    /// tiles along any vertical, horizontal or diagonal line.
    ///
    /// Only lines through `last_move` are inspected; any earlier line would
    /// already have ended the game. Out of range or empty positions never win.
    pub fn has_winning_line_through(&self, last_move: Position) -> bool {
        let tile = match self.get(last_move.row, last_move.col) {
            Ok(TileType::Empty) | Err(_) => return false,
            Ok(tile) => tile,
        };

        AXES.iter().any(|&(a, b)| {
            let run = 1 + self.count_matches(last_move, a, tile)
                + self.count_matches(last_move, b, tile);
            run >= CONNECT
        })
    }

    /// Number of `tile`s directly following `from` in `dir`, excluding `from`.
    fn count_matches(&self, from: Position, dir: Direction, tile: TileType) -> usize {
        let mut count = 0;
        let mut pos = from;
        // a line can never be longer than the larger side
        for _ in 0..W.max(H) {
            match pos.step(dir) {
                Some(next) if self.get(next.row, next.col).ok() == Some(tile) => {
                    count += 1;
                    pos = next;
                }
                _ => break,
            }
        }
        count
    }

    /// Get the type of tile at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> GameResult<TileType> {
        if col >= W || row >= H {
            return Err(Error::InvalidDim);
        }

        Ok(self.board[row][col])
    }
}

impl<const W: usize, const H: usize> std::fmt::Display for Board<W, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#")?;
        for x in 1..=W {
            if x < 10 {
                write!(f, "-{x}-")?;
            } else if x < 100 {
                write!(f, "{x}-")?;
            } else {
                write!(f, "{x}")?;
            }
        }
        writeln!(f, "#")?;
        for row in &self.board {
            write!(f, "|")?;
            for tile in row {
                match tile {
                    TileType::Empty => write!(f, " . ")?,
                    TileType::Player1 => write!(f, " x ")?,
                    TileType::Player2 => write!(f, " o ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "#")?;
        for _ in 1..=W {
            write!(f, "---")?;
        }
        writeln!(f, "#")
    }
}
