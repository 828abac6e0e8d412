use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

use super::*;

impl App {
    /// Forward terminal events as actions. `None` only asks for a redraw.
    pub fn handle_events(
        &self,
        tx: mpsc::UnboundedSender<Option<Action>>,
    ) -> tokio::task::JoinHandle<()> {
        let token = self.token.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                let event = tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    event = reader.next() => event,
                };
                let action = match event {
                    Some(Ok(Event::Key(key))) => match handle_key_event(key) {
                        Some(action) => Some(action),
                        None => continue,
                    },
                    Some(Ok(Event::Resize(_, _))) => None,
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => {
                        tracing::error!(%err, "reading terminal events failed");
                        let _ = tx.send(Some(Action::Exit));
                        break;
                    }
                    None => break,
                };
                if tx.send(action).is_err() {
                    break;
                }
            }
        })
    }
}

fn handle_key_event(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    let action = match key.code {
        KeyCode::Esc => Action::Exit,
        KeyCode::Char('c') if ctrl => Action::Exit,
        KeyCode::Char('r') if ctrl => Action::Reset,

        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::DeleteChar,
        // Validation is up to the session
        KeyCode::Char(x) if !chord => Action::EnterChar(x),
        _ => return None,
    };
    Some(action)
}
