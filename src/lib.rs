//! Six letter word guessing game.
//!
//! [`wordle`] scores guesses, [`session`] drives the attempt grid and
//! [`game`] adds the clock and the win/loss notifications the terminal
//! front end and the [`celebration`] listener subscribe to.

pub mod celebration;
pub mod clock;
pub mod config;
pub mod game;
pub mod logging;
pub mod session;
pub mod wordle;
