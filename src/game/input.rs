use std::io::{BufRead, Write};

use super::{
    board::Board,
    components::Player,
    error::{Error, GameResult},
};

/// Something that picks columns for the players.
pub trait MoveSource {
    /// Ask for the zero indexed column `player` wants to drop into.
    ///
    /// The value is not validated; the board decides what is legal.
    fn next_column_choice(&mut self, player: &Player) -> GameResult<isize>;
}

/// Something that shows the match to the players.
pub trait DisplaySink<const W: usize, const H: usize> {
    /// Show the current board.
    fn render_board(&mut self, board: &Board<W, H>) -> GameResult<()>;

    /// Show a message.
    fn notify(&mut self, message: &str) -> GameResult<()>;
}

/// The different types of input a player can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InputValue {
    /// Zero indexed column.
    Col(isize),
    Quit,
    Help,
}

impl std::str::FromStr for InputValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "stop" | "exit" | "quit" | "s" | "e" | "q" => Ok(Self::Quit),
            "help" | "h" | "?" => Ok(Self::Help),
            // columns are typed the way the header shows them, starting at 1
            col => match col.parse::<isize>() {
                Ok(n) => Ok(Self::Col(n.saturating_sub(1))),
                Err(_) => Err(Error::InvalidInput(col.to_string())),
            },
        }
    }
}

/// Reads column choices line by line.
#[derive(Debug)]
pub struct TerminalInput<R, O> {
    reader: R,
    out: O,
}

impl TerminalInput<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Read from stdin and prompt on stdout.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, O: Write> TerminalInput<R, O> {
    /// Read from `reader`, write prompts to `out`.
    pub fn new(reader: R, out: O) -> Self {
        Self { reader, out }
    }

    fn read_value(&mut self) -> GameResult<InputValue> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        buf.parse()
    }
}

impl<R: BufRead, O: Write> MoveSource for TerminalInput<R, O> {
    fn next_column_choice(&mut self, player: &Player) -> GameResult<isize> {
        loop {
            writeln!(self.out, "{player}'s turn. Please choose a column:")?;
            self.out.flush()?;
            match self.read_value() {
                Ok(InputValue::Col(col)) => return Ok(col),
                Ok(InputValue::Quit) => return Err(Error::Quit),
                Ok(InputValue::Help) => {
                    writeln!(
                        self.out,
                        "Place a piece by typing the number shown above a column"
                    )?;
                    writeln!(self.out, "Type quit to stop the game")?;
                }
                Err(Error::InvalidInput(s)) => {
                    log::debug!("rejected input {s:?}");
                    writeln!(self.out, "Invalid input. Must be a column number\nprovided input: {s:?}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Prints the board and messages.
#[derive(Debug)]
pub struct TerminalDisplay<O> {
    out: O,
}

impl TerminalDisplay<std::io::Stdout> {
    /// Print to stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<O: Write> TerminalDisplay<O> {
    /// Print to `out`.
    pub fn new(out: O) -> Self {
        Self { out }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> O {
        self.out
    }
}

impl<O: Write, const W: usize, const H: usize> DisplaySink<W, H> for TerminalDisplay<O> {
    fn render_board(&mut self, board: &Board<W, H>) -> GameResult<()> {
        writeln!(self.out)?;
        write!(self.out, "{board}")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> GameResult<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }
}
