use std::io::{self, stdout, Stdout, Write};
use std::sync::Arc;

use crossterm::{execute, terminal::*};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use wordlegame::celebration::{Celebration, TerminalBell};
use wordlegame::clock::{Ticker, TICK_PERIOD};
use wordlegame::game::Game;

use actions::Action;

mod actions;
mod events;
mod ui;

/// A type alias for the terminal type used in this application
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Initialize the terminal
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct App {
    exit: bool,
    bell: bool,
    game: Game,
    action_tx: mpsc::UnboundedSender<Option<Action>>,
    action_rx: mpsc::UnboundedReceiver<Option<Action>>,
    token: CancellationToken,
    ticker: Option<Ticker>,
}

impl App {
    pub fn init(game: Game, token: CancellationToken) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        App {
            exit: false,
            bell: false,
            game,
            action_tx,
            action_rx,
            token,
            ticker: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Bell rung by the main loop, see [`TerminalBell`]
    pub fn terminal_bell(&self) -> Arc<dyn Celebration> {
        Arc::new(TerminalBell::new(self.action_tx.clone(), || {
            Some(Action::Bell)
        }))
    }

    /// runs the application's main loop until the user quits
    pub async fn run(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let task = self.handle_events(self.action_tx.clone());
        self.start_ticker();

        while !self.exit {
            terminal.draw(|frame| self.render_frame(frame))?;

            match self.action_rx.recv().await {
                Some(action) => self.update(action),
                None => break,
            }
            if std::mem::take(&mut self.bell) {
                ring()?;
            }
        }
        self.token.cancel();
        self.ticker = None;
        let _ = task.await;
        Ok(())
    }

    /// (Re)start the elapsed time ticker, a running one is dropped and so
    /// cancelled
    fn start_ticker(&mut self) {
        self.ticker = Some(Ticker::spawn(
            &self.token,
            TICK_PERIOD,
            self.action_tx.clone(),
            || Some(Action::Tick),
        ));
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.size());
    }
}

/// Only called by the loop between two draws, each draw is flushed first
fn ring() -> io::Result<()> {
    let mut out = stdout();
    out.write_all(b"\x07")?;
    out.flush()
}
