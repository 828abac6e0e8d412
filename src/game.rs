//! A session together with its clock, publishing terminal transitions to
//! whoever subscribed.

use tokio::sync::broadcast;

use crate::clock::Clock;
use crate::session::{Session, Submission};
use crate::wordle::Word;

const EVENT_CAPACITY: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Won { attempts: usize, elapsed_secs: u64 },
    Lost { target: Word },
    Reset,
}

pub struct Game {
    session: Session,
    clock: Clock,
    events: broadcast::Sender<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Session::new())
    }
}

impl Game {
    pub fn new(session: Session) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Game {
            session,
            clock: Clock::new(),
            events,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    pub fn edit_input(&mut self, text: &str) -> bool {
        self.session.edit_input(text)
    }

    pub fn push_char(&mut self, c: char) -> bool {
        self.session.push_char(c)
    }

    pub fn pop_char(&mut self) -> bool {
        self.session.pop_char()
    }

    pub fn submit_guess(&mut self) -> Submission {
        let submission = self.session.submit_guess();
        match submission {
            Submission::Won { attempts } => {
                tracing::info!(attempts, elapsed = %self.clock, "game won");
                self.publish(GameEvent::Won {
                    attempts,
                    elapsed_secs: self.clock.seconds(),
                });
            }
            Submission::Lost => {
                tracing::info!(elapsed = %self.clock, "game lost");
                self.publish(GameEvent::Lost {
                    target: *self.session.target(),
                });
            }
            Submission::Ignored | Submission::Continue => {}
        }
        submission
    }

    /// Counts regardless of the game status
    pub fn tick(&mut self) {
        self.clock.tick();
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.clock.reset();
        tracing::info!("game reset");
        self.publish(GameEvent::Reset);
    }

    fn publish(&self, event: GameEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Status;
    use crate::wordle::TARGET;

    fn guess(game: &mut Game, word: &str) -> Submission {
        game.edit_input(word);
        game.submit_guess()
    }

    #[test]
    fn win_is_published() {
        let mut game = Game::default();
        let mut rx = game.subscribe();
        game.tick();
        game.tick();

        assert_eq!(guess(&mut game, "banana"), Submission::Continue);
        assert!(rx.try_recv().is_err());

        assert_eq!(guess(&mut game, "susana"), Submission::Won { attempts: 2 });
        assert_eq!(
            rx.try_recv().unwrap(),
            GameEvent::Won {
                attempts: 2,
                elapsed_secs: 2
            }
        );
    }

    #[test]
    fn loss_is_published_with_the_target() {
        let mut game = Game::default();
        let mut rx = game.subscribe();
        for _ in 0..6 {
            guess(&mut game, "banana");
        }
        assert_eq!(game.session().status(), Status::Lost);
        assert_eq!(rx.try_recv().unwrap(), GameEvent::Lost { target: TARGET });
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn ignored_submits_publish_nothing() {
        let mut game = Game::default();
        let mut rx = game.subscribe();
        guess(&mut game, "susana");
        assert!(rx.try_recv().is_ok());

        assert_eq!(game.submit_guess(), Submission::Ignored);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn clock_keeps_running_after_the_game_ends() {
        let mut game = Game::default();
        guess(&mut game, "susana");
        game.tick();
        game.tick();
        assert_eq!(game.clock().seconds(), 2);
    }

    #[test]
    fn reset_clears_session_and_clock() {
        let mut game = Game::default();
        let mut rx = game.subscribe();
        guess(&mut game, "banana");
        game.push_char('s');
        game.tick();

        game.reset();
        assert_eq!(game.session(), &Session::new());
        assert_eq!(game.clock().to_string(), "00:00");
        assert_eq!(rx.try_recv().unwrap(), GameEvent::Reset);
    }

    #[test]
    fn publishing_without_subscribers() {
        let mut game = Game::default();
        assert_eq!(guess(&mut game, "susana"), Submission::Won { attempts: 1 });
        game.reset();
        assert!(!game.pop_char());
    }
}
