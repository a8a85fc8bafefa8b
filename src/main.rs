use connect_four::{Board, Error, Game, TerminalDisplay, TerminalInput};
const W: usize = 7;
const H: usize = 6;
fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut game = Game::new(Board::<W, H>::new()?);
    let mut input = TerminalInput::stdin();
    let mut display = TerminalDisplay::stdout();

    match game.play(&mut input, &mut display) {
        Ok(_) => Ok(()),
        Err(Error::Quit) | Err(Error::InputClosed) => {
            log::info!("game stopped before it was decided");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
