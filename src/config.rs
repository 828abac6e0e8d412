use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use crate::celebration::{
    Celebration, CelebrationError, CommandPlayer, Cue, Silent, VICTORY_SOUND, VICTORY_VOLUME,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SoundMode {
    /// Ring the terminal bell
    Bell,
    /// Run the external player
    Command,
    Off,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlegame",
    about = "Guess the six letter word in six attempts",
    version
)]
pub struct Config {
    /// File receiving the log, the terminal belongs to the game
    #[arg(long, default_value = "wordlegame.log")]
    pub log_file: PathBuf,

    /// Log filter directives, RUST_LOG takes precedence when set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// How a win is celebrated
    #[arg(long, value_enum, default_value_t = SoundMode::Bell)]
    pub sound: SoundMode,

    /// Sound handed to the external player
    #[arg(long, default_value = VICTORY_SOUND)]
    pub sound_file: PathBuf,

    /// Player command line, `{file}` and `{volume}` are substituted
    #[arg(
        long,
        default_value = "ffplay -nodisp -autoexit -loglevel quiet -volume {volume} {file}"
    )]
    pub player: String,
}

impl Config {
    pub fn cue(&self) -> Cue {
        Cue {
            sound: self.sound_file.clone(),
            volume: VICTORY_VOLUME,
        }
    }

    /// Player for the selected mode, `bell` is used for [`SoundMode::Bell`]
    pub fn celebration(
        &self,
        bell: Arc<dyn Celebration>,
    ) -> Result<Arc<dyn Celebration>, CelebrationError> {
        Ok(match self.sound {
            SoundMode::Bell => bell,
            SoundMode::Command => Arc::new(CommandPlayer::from_template(&self.player)?),
            SoundMode::Off => Arc::new(Silent),
        })
    }
}
