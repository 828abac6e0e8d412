use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    Tick,
    EnterChar(char),
    DeleteChar,
    Submit,
    Reset,
    Bell,
}

impl App {
    pub fn update(&mut self, msg: Option<Action>) {
        if let Some(msg) = msg {
            match msg {
                Action::Exit => {
                    self.token.cancel();
                    self.exit = true;
                }
                Action::Tick => {
                    self.game.tick();
                }
                Action::EnterChar(x) => {
                    self.game.push_char(x);
                }
                Action::DeleteChar => {
                    self.game.pop_char();
                }
                Action::Submit => {
                    let submission = self.game.submit_guess();
                    tracing::debug!(?submission, "submit");
                }
                Action::Reset => {
                    self.reset();
                }
                Action::Bell => {
                    self.bell = true;
                }
            }
        }
    }

    fn reset(&mut self) {
        self.game.reset();
        if self.ticker.is_some() {
            self.start_ticker();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordlegame::celebration::Cue;
    use wordlegame::game::GameEvent;
    use wordlegame::session::Status;

    fn app() -> App {
        App::init(Game::default(), CancellationToken::new())
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.update(Some(Action::EnterChar(c)));
        }
    }

    #[test]
    fn typing_fills_the_input() {
        let mut app = app();
        type_word(&mut app, "su5san");
        assert_eq!(app.game().session().input(), "SUSAN");
        app.update(Some(Action::DeleteChar));
        assert_eq!(app.game().session().input(), "SUSA");
        app.update(None);
        assert_eq!(app.game().session().input(), "SUSA");
    }

    #[test]
    fn submit_then_reset() {
        let mut app = app();
        let mut events = app.game().subscribe();
        type_word(&mut app, "banana");
        app.update(Some(Action::Submit));
        assert_eq!(app.game().session().current_attempt(), 1);

        type_word(&mut app, "susana");
        app.update(Some(Action::Submit));
        assert_eq!(app.game().session().status(), Status::Won);
        assert!(matches!(
            events.try_recv(),
            Ok(GameEvent::Won { attempts: 2, .. })
        ));

        app.update(Some(Action::Tick));
        assert_eq!(app.game().clock().seconds(), 1);

        app.update(Some(Action::Reset));
        assert_eq!(app.game().session().status(), Status::Playing);
        assert_eq!(app.game().clock().seconds(), 0);
        assert!(matches!(events.try_recv(), Ok(GameEvent::Reset)));
    }

    #[test]
    fn enter_after_a_win_keeps_the_board() {
        let mut app = app();
        let mut events = app.game().subscribe();
        type_word(&mut app, "susana");
        app.update(Some(Action::Submit));
        assert!(matches!(events.try_recv(), Ok(GameEvent::Won { .. })));
        app.update(Some(Action::Tick));

        let won = app.game().session().clone();
        app.update(Some(Action::Submit));
        app.update(Some(Action::Submit));
        assert_eq!(app.game().session(), &won);
        assert_eq!(app.game().session().status(), Status::Won);
        assert_eq!(app.game().clock().seconds(), 1);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn bell_goes_through_the_loop() {
        let mut app = app();
        app.terminal_bell().play(&Cue::default()).unwrap();
        let action = app.action_rx.try_recv().unwrap();
        assert_eq!(action, Some(Action::Bell));

        assert!(!app.bell);
        app.update(action);
        assert!(app.bell);
    }

    #[tokio::test]
    async fn reset_restarts_a_running_ticker() {
        let mut app = app();
        app.start_ticker();
        app.update(Some(Action::Tick));
        app.update(Some(Action::Reset));
        assert_eq!(app.game().clock().seconds(), 0);
        assert!(app.ticker.as_ref().is_some_and(|t| !t.is_cancelled()));
    }

    #[test]
    fn exit_cancels_background_work() {
        let mut app = app();
        app.update(Some(Action::Exit));
        assert!(app.exit);
        assert!(app.token.is_cancelled());
    }
}
