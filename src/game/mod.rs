pub(crate) mod board;
pub(crate) mod components;
pub(crate) mod error;
mod game;
mod input;

pub use board::Board;
pub use components::{GameState, Placement, Player, Position, TileType};
pub use error::{Error, GameResult};
pub use game::Game;
pub use input::{DisplaySink, MoveSource, TerminalDisplay, TerminalInput};
