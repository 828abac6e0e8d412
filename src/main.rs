use clap::Parser;
use color_eyre::eyre::Result;
use tokio_util::sync::CancellationToken;

use wordlegame::celebration;
use wordlegame::config::Config;
use wordlegame::game::Game;
use wordlegame::logging;
use wordlegame::session::Status;

mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let config = Config::parse();
    logging::init(&config.log_file, &config.log_level)?;
    tracing::info!(?config, "starting");

    let token = CancellationToken::new();
    let game = Game::default();
    let events = game.subscribe();
    let mut app = tui::App::init(game, token.clone());
    let listener = celebration::spawn_listener(
        events,
        config.celebration(app.terminal_bell())?,
        config.cue(),
        token.clone(),
    );

    tui::initialize_panic_handler();
    let mut terminal = tui::init()?;
    let app_result = app.run(&mut terminal).await;
    tui::restore()?;

    token.cancel();
    let _ = listener.await;
    app_result?;

    print_summary(app.game());
    Ok(())
}

fn print_summary(game: &Game) {
    let session = game.session();
    for attempt in session.attempts().iter().filter(|a| !a.is_empty()) {
        println!("{attempt}");
    }
    match session.status() {
        Status::Won => println!("Solved in {}", game.clock()),
        Status::Lost => println!("The word was {} ({})", session.target(), game.clock()),
        Status::Playing => println!("Unfinished after {}", game.clock()),
    }
}
