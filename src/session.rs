//! The attempt grid and the playing/won/lost state machine.

use crate::wordle::{evaluate, Attempt, Word, MAX_ATTEMPTS, TARGET, WORD_LENGTH};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

/// What a call to [`Session::submit_guess`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Input incomplete or the game is already over, nothing changed
    Ignored,
    /// Row evaluated, play moves to the next row
    Continue,
    Won { attempts: usize },
    Lost,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    target: Word,
    attempts: [Attempt; MAX_ATTEMPTS],
    current: usize,
    input: String,
    status: Status,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_target(TARGET)
    }

    pub fn with_target(target: Word) -> Self {
        Session {
            target,
            attempts: [Attempt::empty(); MAX_ATTEMPTS],
            current: 0,
            input: String::new(),
            status: Status::Playing,
        }
    }

    pub fn target(&self) -> &Word {
        &self.target
    }

    pub fn attempts(&self) -> &[Attempt; MAX_ATTEMPTS] {
        &self.attempts
    }

    /// Index of the row being filled
    pub fn current_attempt(&self) -> usize {
        self.current
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Playing
    }

    /// Replace the buffered input.
    ///
    /// The text is uppercased, then rejected if it is longer than a word or
    /// holds anything but `A-Z`. A rejected edit leaves the buffer as it was.
    pub fn edit_input(&mut self, text: &str) -> bool {
        if self.is_over() {
            return false;
        }
        let upper = text.to_uppercase();
        if upper.chars().count() > WORD_LENGTH || !upper.chars().all(|c| c.is_ascii_uppercase())
        {
            tracing::debug!(text, "input rejected");
            return false;
        }
        self.input = upper;
        true
    }

    pub fn push_char(&mut self, c: char) -> bool {
        let mut text = self.input.clone();
        text.push(c);
        self.edit_input(&text)
    }

    pub fn pop_char(&mut self) -> bool {
        let mut text = self.input.clone();
        text.pop().is_some() && self.edit_input(&text)
    }

    /// Evaluate the buffered input against the target and advance.
    pub fn submit_guess(&mut self) -> Submission {
        if self.is_over() || self.input.len() != WORD_LENGTH {
            return Submission::Ignored;
        }
        let Ok(guess) = Word::new(&self.input) else {
            return Submission::Ignored;
        };

        let attempt = evaluate(&guess, &self.target);
        self.attempts[self.current] = attempt;
        tracing::info!(row = self.current, %guess, "guess submitted");

        let submission = if guess == self.target {
            self.status = Status::Won;
            Submission::Won {
                attempts: self.current + 1,
            }
        } else if self.current == MAX_ATTEMPTS - 1 {
            self.status = Status::Lost;
            Submission::Lost
        } else {
            self.current += 1;
            Submission::Continue
        };

        self.input.clear();
        submission
    }

    /// Start over with an empty grid, allowed at any time.
    pub fn reset(&mut self) {
        *self = Session::with_target(self.target);
    }
}
