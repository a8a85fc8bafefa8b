use crate::game::{
    board::Board,
    components::{GameState, Placement, Player, Players, Position, TileType},
    error::{Error, GameResult},
    input::{DisplaySink, MoveSource},
};

/// Game manager struct. Owns the board and decides whose turn it is and
/// when the match is over.
#[derive(Debug, Clone)]
pub struct Game<const W: usize, const H: usize> {
    board: Board<W, H>,
    players: Players,
    state: GameState,
}

impl<const W: usize, const H: usize> Game<W, H> {
    /// Create a new game on `board`. Red (`TileType::Player1`) moves first.
    pub fn new(board: Board<W, H>) -> Self {
        Self::with_players(
            board,
            Player::new("red", TileType::Player1),
            Player::new("yellow", TileType::Player2),
        )
    }

    /// Create a new game where `first` moves before `second`.
    pub fn with_players(board: Board<W, H>, first: Player, second: Player) -> Self {
        Self {
            board,
            players: Players::new(first, second),
            state: GameState::InProgress,
        }
    }

    /// The board being played on.
    pub fn board(&self) -> &Board<W, H> {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.players.current
    }

    /// The player waiting for their turn.
    pub fn waiting(&self) -> &Player {
        &self.players.waiting
    }

    /// The state of the match.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Swap the current and waiting player.
    pub fn switch_current_player(&mut self) {
        self.players.swap();
    }

    /// Resolve the match state after the current player moved to `last_move`.
    ///
    /// A win takes priority over a full board.
    pub fn status_after(&self, last_move: Position) -> GameState {
        if self.board.has_winning_line_through(last_move) {
            GameState::Won(self.players.current.clone())
        } else if self.board.is_full() {
            GameState::Drawn
        } else {
            GameState::InProgress
        }
    }

    /// Ask `source` for columns until one accepts a piece of the current player.
    ///
    /// Full and non-existent columns are reported to `sink` and asked again.
    ///
    /// # Errors
    ///
    /// Returns `Error::GameOver` if the match already ended, and any error
    /// produced by `source` or `sink`.
    pub fn request_move<S, D>(&mut self, source: &mut S, sink: &mut D) -> GameResult<Position>
    where
        S: MoveSource + ?Sized,
        D: DisplaySink<W, H> + ?Sized,
    {
        if self.state.is_over() {
            return Err(Error::GameOver);
        }
        loop {
            let col = source.next_column_choice(&self.players.current)?;
            match self.board.drop_piece(col, self.players.current.tile) {
                Ok(Placement::Landed(pos)) => {
                    log::debug!("{} placed at {pos}", self.players.current);
                    return Ok(pos);
                }
                Ok(Placement::ColumnFull) => {
                    log::debug!("{} picked full column {col}", self.players.current);
                    sink.notify("That column is full")?;
                }
                Err(e @ Error::InvalidColumn(_)) => {
                    log::debug!("{} picked a bad column: {e}", self.players.current);
                    sink.notify(&format!("Column {} does not exist", col.saturating_add(1)))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Play turns until someone wins or the board is full.
    ///
    /// Returns the final state. Calling this on a finished match returns
    /// the final state right away.
    pub fn play<S, D>(&mut self, source: &mut S, sink: &mut D) -> GameResult<GameState>
    where
        S: MoveSource + ?Sized,
        D: DisplaySink<W, H> + ?Sized,
    {
        if self.state.is_over() {
            return Ok(self.state.clone());
        }
        sink.render_board(&self.board)?;

        loop {
            let last_move = self.request_move(source, sink)?;
            sink.render_board(&self.board)?;

            self.state = self.status_after(last_move);
            match &self.state {
                GameState::Won(player) => {
                    log::info!("{player} wins");
                    sink.notify(&format!("{player} wins!"))?;
                    break;
                }
                GameState::Drawn => {
                    log::info!("draw");
                    sink.notify("Tie game.")?;
                    break;
                }
                GameState::InProgress => {}
            }
            self.switch_current_player();
        }

        Ok(self.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    const E: TileType = TileType::Empty;
    const P: TileType = TileType::Player1;
    const Q: TileType = TileType::Player2;

    struct Scripted(VecDeque<isize>, usize);

    impl Scripted {
        fn new(cols: &[isize]) -> Self {
            Self(cols.iter().copied().collect(), 0)
        }
    }

    impl MoveSource for Scripted {
        fn next_column_choice(&mut self, _player: &Player) -> GameResult<isize> {
            self.1 += 1;
            self.0.pop_front().ok_or(Error::InputClosed)
        }
    }

    #[derive(Default)]
    struct Messages(Vec<String>, usize);

    impl<const W: usize, const H: usize> DisplaySink<W, H> for Messages {
        fn render_board(&mut self, _board: &Board<W, H>) -> GameResult<()> {
            self.1 += 1;
            Ok(())
        }

        fn notify(&mut self, message: &str) -> GameResult<()> {
            self.0.push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn red_starts() {
        let game = Game::new(Board::<7, 6>::new().unwrap());
        assert_eq!(game.current().tile, P);
        assert_eq!(game.waiting().tile, Q);
        assert_eq!(game.state(), &GameState::InProgress);
    }

    #[test]
    fn switch_current_player_is_its_own_inverse() {
        let mut game = Game::new(Board::<7, 6>::new().unwrap());
        game.switch_current_player();
        assert_eq!(game.current().name, "yellow");
        assert_eq!(game.waiting().name, "red");
        game.switch_current_player();
        assert_eq!(game.current().name, "red");
        assert_eq!(game.waiting().name, "yellow");
    }

    #[test]
    fn status_after_win() {
        let board = Board::<1, 6>::from_grid([[E], [E], [P], [P], [P], [P]]).unwrap();
        let game = Game::new(board);
        assert_eq!(
            game.status_after(Position::new(2, 0)),
            GameState::Won(game.current().clone())
        );
    }

    #[test]
    fn status_after_full_board_without_line() {
        let board = Board::<1, 6>::from_grid([[P], [Q], [P], [Q], [P], [Q]]).unwrap();
        let game = Game::new(board);
        assert_eq!(game.status_after(Position::new(0, 0)), GameState::Drawn);
    }

    #[test]
    fn win_beats_full_board() {
        let board = Board::<1, 6>::from_grid([[P], [P], [P], [P], [Q], [Q]]).unwrap();
        let game = Game::new(board);
        assert!(matches!(
            game.status_after(Position::new(0, 0)),
            GameState::Won(_)
        ));
    }

    #[test]
    fn status_after_open_board() {
        let board = Board::<1, 6>::from_grid([[E], [E], [Q], [P], [P], [P]]).unwrap();
        let game = Game::new(board);
        assert_eq!(game.status_after(Position::new(3, 0)), GameState::InProgress);
    }

    #[test]
    fn request_move_on_empty_column_asks_once() {
        let mut game = Game::new(Board::<7, 6>::new().unwrap());
        let mut source = Scripted::new(&[0]);
        let mut sink = Messages::default();
        let pos = game.request_move(&mut source, &mut sink).unwrap();
        assert_eq!(pos, Position::new(5, 0));
        assert_eq!(source.1, 1);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn request_move_retries_full_column() {
        let mut grid = [[E; 7]; 6];
        for row in grid.iter_mut() {
            row[1] = Q;
        }
        let mut game = Game::new(Board::from_grid(grid).unwrap());
        let mut source = Scripted::new(&[1, 0]);
        let mut sink = Messages::default();
        let pos = game.request_move(&mut source, &mut sink).unwrap();
        assert_eq!(pos, Position::new(5, 0));
        assert_eq!(source.1, 2);
        assert_eq!(sink.0, vec!["That column is full".to_string()]);
    }

    #[test]
    fn request_move_retries_missing_columns() {
        let mut game = Game::new(Board::<7, 6>::new().unwrap());
        let mut source = Scripted::new(&[-1, 7, isize::MAX, 3]);
        let mut sink = Messages::default();
        let pos = game.request_move(&mut source, &mut sink).unwrap();
        assert_eq!(pos, Position::new(5, 3));
        assert_eq!(source.1, 4);
        assert_eq!(sink.0.len(), 3);
        assert_eq!(sink.0[0], "Column 0 does not exist");
    }

    #[test]
    fn request_move_passes_source_errors_through() {
        let mut game = Game::new(Board::<7, 6>::new().unwrap());
        let mut source = Scripted::new(&[]);
        let mut sink = Messages::default();
        assert!(matches!(
            game.request_move(&mut source, &mut sink),
            Err(Error::InputClosed)
        ));
    }

    #[test]
    fn play_vertical_win_for_red() {
        let mut game = Game::new(Board::<7, 6>::new().unwrap());
        let mut source = Scripted::new(&[0, 1, 0, 1, 0, 1, 0]);
        let mut sink = Messages::default();
        let state = game.play(&mut source, &mut sink).unwrap();
        assert_eq!(state, GameState::Won(Player::new("red", P)));
        // initial render plus one per move
        assert_eq!(sink.1, 8);
        assert_eq!(sink.0.last().unwrap(), "red wins!");
        // winner stays current
        assert_eq!(game.current().tile, P);
    }

    #[test]
    fn finished_game_refuses_moves() {
        let mut game = Game::new(Board::<1, 6>::new().unwrap());
        let mut source = Scripted::new(&[0, 0, 0, 0, 0, 0]);
        let mut sink = Messages::default();
        assert_eq!(game.play(&mut source, &mut sink).unwrap(), GameState::Drawn);
        assert_eq!(game.play(&mut source, &mut sink).unwrap(), GameState::Drawn);
        assert!(matches!(
            game.request_move(&mut source, &mut sink),
            Err(Error::GameOver)
        ));
    }
}
