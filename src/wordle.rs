use std::fmt;
use std::str::FromStr;

use colored::Colorize;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Number of letters in the target word and in every guess.
pub const WORD_LENGTH: usize = 6;

/// Number of rows in the grid.
pub const MAX_ATTEMPTS: usize = 6;

/// The answer for every session.
pub const TARGET: Word = Word::literal(*b"SUSANA");

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// Cell of a row that has not been played
    #[default]
    Empty,
    Absent,
    Present,
    Correct,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Letter {
    pub char: Option<char>,
    pub state: LetterState,
}

/// One row of the grid, either evaluated or empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Attempt {
    pub letters: [Letter; WORD_LENGTH],
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Word {
    chars: [char; WORD_LENGTH],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected six letters, got {0}")]
    Length(usize),
    #[error("'{0}' is not a letter from A to Z")]
    Character(char),
}

impl Word {
    /// Build a word from user text. The text is uppercased before it is
    /// validated.
    ///
    /// # Example
    ///
    /// ```
    /// use wordlegame::wordle::Word;
    /// let word = Word::new("banana").unwrap();
    /// assert_eq!(word.to_string(), "BANANA");
    /// assert!(Word::new("bananas").is_err());
    /// assert!(Word::new("b4nana").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Word, WordError> {
        let upper = text.to_uppercase();
        let len = upper.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::Length(len));
        }
        let mut chars = [' '; WORD_LENGTH];
        for (slot, c) in chars.iter_mut().zip(upper.chars()) {
            if !c.is_ascii_uppercase() {
                return Err(WordError::Character(c));
            }
            *slot = c;
        }
        Ok(Word { chars })
    }

    /// Compile time constructor, the bytes must already be uppercase ASCII.
    pub const fn literal(bytes: [u8; WORD_LENGTH]) -> Word {
        let mut chars = [' '; WORD_LENGTH];
        let mut i = 0;
        while i < WORD_LENGTH {
            assert!(bytes[i].is_ascii_uppercase());
            chars[i] = bytes[i] as char;
            i += 1;
        }
        Word { chars }
    }

    pub fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Counts the occurrences of a char in a word
    ///
    /// # Example
    ///
    /// ```
    /// use wordlegame::wordle::TARGET;
    ///
    /// assert_eq!(TARGET.count_char('S'), 2);
    /// assert_eq!(TARGET.count_char('U'), 1);
    /// assert_eq!(TARGET.count_char('Z'), 0);
    /// ```
    pub fn count_char(&self, char: char) -> usize {
        self.chars.iter().filter(|&&c| c == char).count()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

/// Scores a guess against the target.
///
/// Exact positions are resolved first. Every target letter that was not
/// matched in place goes into a pool, and the remaining guess letters
/// take from that pool left to right, so a target letter is credited at
/// most once.
///
/// # Example
///
/// ```
/// use wordlegame::wordle::*;
/// use wordlegame::wordle::LetterState::*;
/// let guess = Word::new("plants").unwrap();
/// let states = evaluate(&guess, &TARGET).states();
/// assert_eq!(states, [Absent, Absent, Present, Present, Absent, Present]);
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Attempt {
    let mut letters = [Letter::default(); WORD_LENGTH];
    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();

    // Find all correct letters
    for (i, (&g, &t)) in guess.chars.iter().zip(target.chars.iter()).enumerate() {
        let state = if g == t {
            LetterState::Correct
        } else {
            *remaining.entry(t).or_insert(0) += 1;
            LetterState::Absent
        };
        letters[i] = Letter {
            char: Some(g),
            state,
        };
    }

    // Hand out the unmatched target letters
    for letter in letters
        .iter_mut()
        .filter(|l| l.state == LetterState::Absent)
    {
        if let Some(count) = letter.char.and_then(|c| remaining.get_mut(&c)) {
            if *count > 0 {
                *count -= 1;
                letter.state = LetterState::Present;
            }
        }
    }

    Attempt { letters }
}

impl Attempt {
    pub fn empty() -> Attempt {
        Attempt::default()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(|l| l.state == LetterState::Empty)
    }

    pub fn is_solved(&self) -> bool {
        self.letters.iter().all(|l| l.state == LetterState::Correct)
    }

    pub fn states(&self) -> [LetterState; WORD_LENGTH] {
        self.letters.map(|l| l.state)
    }

    /// Number of `Correct` or `Present` marks carried by `char`
    pub fn count_credited(&self, char: char) -> usize {
        self.letters
            .iter()
            .filter(|l| l.char == Some(char))
            .filter(|l| matches!(l.state, LetterState::Correct | LetterState::Present))
            .count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            let ch = match letter.char {
                Some(ch) => ch.to_string(),
                None => "_".to_string(),
            };
            match letter.state {
                LetterState::Empty => write!(f, "{ch}")?,
                LetterState::Absent => write!(f, "{}", ch.white().on_red())?,
                LetterState::Present => write!(f, "{}", ch.black().on_yellow())?,
                LetterState::Correct => write!(f, "{}", ch.white().on_green())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use LetterState::*;

    fn states(guess: &str, target: &str) -> [LetterState; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        evaluate(&guess, &target).states()
    }

    #[test]
    fn word_is_uppercased() {
        assert_eq!(Word::new("susana").unwrap(), TARGET);
        assert_eq!("SuSaNa".parse::<Word>().unwrap(), TARGET);
    }

    #[test]
    fn word_rejects_bad_input() {
        assert_eq!(Word::new("SUSAN"), Err(WordError::Length(5)));
        assert_eq!(Word::new(""), Err(WordError::Length(0)));
        assert_eq!(Word::new("SUSAN1"), Err(WordError::Character('1')));
        assert_eq!(Word::new("SUSAÑA"), Err(WordError::Character('Ñ')));
    }

    #[test]
    fn exact_match_is_all_correct() {
        let attempt = evaluate(&TARGET, &TARGET);
        assert_eq!(attempt.states(), [Correct; WORD_LENGTH]);
        assert!(attempt.is_solved());
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        assert_eq!(states("BOXFLY", "SUSANA"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn letters_are_kept_on_the_attempt() {
        let attempt = evaluate(&Word::new("banana").unwrap(), &TARGET);
        let chars: String = attempt.letters.iter().filter_map(|l| l.char).collect();
        assert_eq!(chars, "BANANA");
        assert!(!attempt.is_empty());
    }

    #[test]
    fn compare_words() {
        // Only the two in-place A's count, the pool holds S, U, S, N
        assert_eq!(
            states("AAAAAA", "SUSANA"),
            [Absent, Absent, Absent, Correct, Absent, Correct]
        );

        // The target's A's and N are all consumed in place
        assert_eq!(
            states("BANANA", "SUSANA"),
            [Absent, Absent, Absent, Correct, Correct, Correct]
        );

        assert_eq!(
            states("SSSSSS", "SUSANA"),
            [Correct, Absent, Correct, Absent, Absent, Absent]
        );

        assert_eq!(states("ASUSAN", "SUSANA"), [Present; WORD_LENGTH]);

        assert_eq!(
            states("NASSAU", "SUSANA"),
            [Present, Present, Correct, Present, Present, Present]
        );

        assert_eq!(
            states("TTTEEL", "LETTER"),
            [Present, Absent, Correct, Present, Correct, Present]
        );
    }

    #[test]
    fn target_letters_are_credited_at_most_once() {
        let alphabet = ['S', 'U', 'A', 'N'];
        let n = alphabet.len();
        for code in 0..n.pow(WORD_LENGTH as u32) {
            let mut text = String::new();
            let mut rest = code;
            for _ in 0..WORD_LENGTH {
                text.push(alphabet[rest % n]);
                rest /= n;
            }
            let guess = Word::new(&text).unwrap();
            let attempt = evaluate(&guess, &TARGET);
            for c in alphabet {
                let credited = attempt.count_credited(c);
                assert!(credited <= TARGET.count_char(c), "{text}: {c}");
                // Every copy of c in the guess up to the budget gets credit
                assert_eq!(
                    credited,
                    guess.count_char(c).min(TARGET.count_char(c)),
                    "{text}: {c}"
                );
            }
        }
    }

    #[test]
    fn empty_attempt() {
        let attempt = Attempt::empty();
        assert!(attempt.is_empty());
        assert!(!attempt.is_solved());
        assert_eq!(attempt.states(), [Empty; WORD_LENGTH]);
        assert_eq!(attempt.letters[0].char, None);
    }
}
