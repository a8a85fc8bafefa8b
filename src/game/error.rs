/// All the possible recoverable errors produced by the game.
#[derive(Debug)]
pub enum Error {
    /// Column index outside the board.
    InvalidColumn(isize),
    /// Attempted to drop an empty tile.
    InvalidType,
    /// Board dimensions or coordinates out of range.
    InvalidDim,
    /// Input that could not be understood.
    InvalidInput(String),
    /// A move was requested after the match ended.
    GameOver,
    /// The player asked to stop.
    Quit,
    /// The move source has no more input.
    InputClosed,
    /// Reading or writing the terminal failed.
    Io(std::io::Error),
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidColumn(col) => write!(f, "column {col} does not exist"),
            Error::InvalidType => write!(f, "cannot place an empty tile"),
            Error::InvalidDim => write!(f, "dimensions out of range"),
            Error::InvalidInput(s) => write!(f, "invalid input: {s:?}"),
            Error::GameOver => write!(f, "the game is already over"),
            Error::Quit => write!(f, "player quit"),
            Error::InputClosed => write!(f, "input closed"),
            Error::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_column() {
        assert_eq!(
            Error::InvalidColumn(-2).to_string(),
            "column -2 does not exist"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "i/o error: boom");
    }
}
