// #![deny(warnings)]
#![warn(missing_docs)]
//! Connect 4 game crate
//!
//! Pieces are dropped into the columns of a [`Board`] and fall to the lowest
//! empty cell. A [`Game`] takes turns between two players until one of them
//! connects four tiles in a row, column or diagonal, or the board is full.
pub(crate) mod game;
pub use game::{
    Board, DisplaySink, Error, Game, GameResult, GameState, MoveSource, Placement, Player,
    Position, TerminalDisplay, TerminalInput, TileType,
};
