//! Sound played when a game is won.
//!
//! Playback is fire-and-forget: the listener reacts to [`GameEvent::Won`],
//! plays the cue on a blocking task and only logs failures.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::game::GameEvent;

pub const VICTORY_SOUND: &str = "audio/victory-sound.mp3";
pub const VICTORY_VOLUME: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Cue {
    pub sound: PathBuf,
    /// Between 0.0 and 1.0
    pub volume: f32,
}

impl Default for Cue {
    fn default() -> Self {
        Cue {
            sound: PathBuf::from(VICTORY_SOUND),
            volume: VICTORY_VOLUME,
        }
    }
}

#[derive(Debug, Error)]
pub enum CelebrationError {
    #[error("no player command configured")]
    NoPlayer,
    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}")]
    Exited { program: String, status: String },
    #[error("the terminal is no longer listening")]
    Closed,
}

pub trait Celebration: Send + Sync {
    fn play(&self, cue: &Cue) -> Result<(), CelebrationError>;
}

/// Rings the terminal bell, the volume is up to the terminal.
///
/// The front end owns stdout, so the bell is only requested: `message` is
/// sent on `tx` and the receiver writes BEL between two draws.
pub struct TerminalBell<T, F> {
    tx: mpsc::UnboundedSender<T>,
    message: F,
}

impl<T, F> TerminalBell<T, F>
where
    F: Fn() -> T,
{
    pub fn new(tx: mpsc::UnboundedSender<T>, message: F) -> Self {
        TerminalBell { tx, message }
    }
}

impl<T, F> Celebration for TerminalBell<T, F>
where
    T: Send,
    F: Fn() -> T + Send + Sync,
{
    fn play(&self, _cue: &Cue) -> Result<(), CelebrationError> {
        self.tx
            .send((self.message)())
            .map_err(|_| CelebrationError::Closed)
    }
}

pub struct Silent;

impl Celebration for Silent {
    fn play(&self, _cue: &Cue) -> Result<(), CelebrationError> {
        Ok(())
    }
}

/// Runs an external audio player.
///
/// Every argument is a template: `{file}` becomes the sound path and
/// `{volume}` the volume in percent.
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandPlayer {
            program: program.into(),
            args,
        }
    }

    /// Split a whitespace separated command line
    pub fn from_template(template: &str) -> Result<Self, CelebrationError> {
        let mut parts = template.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(CelebrationError::NoPlayer)?;
        Ok(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn render_args(&self, cue: &Cue) -> Vec<String> {
        let file = cue.sound.display().to_string();
        let volume = ((cue.volume.clamp(0.0, 1.0) * 100.0).round() as u32).to_string();
        self.args
            .iter()
            .map(|arg| arg.replace("{file}", &file).replace("{volume}", &volume))
            .collect()
    }
}

impl Celebration for CommandPlayer {
    fn play(&self, cue: &Cue) -> Result<(), CelebrationError> {
        let status = Command::new(&self.program)
            .args(self.render_args(cue))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| CelebrationError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(CelebrationError::Exited {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}

/// Play `cue` once for every win received on `events`.
pub fn spawn_listener(
    mut events: broadcast::Receiver<GameEvent>,
    player: Arc<dyn Celebration>,
    cue: Cue,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let event = tokio::select! {
                biased;
                _ = token.cancelled() => break,
                event = events.recv() => event,
            };
            match event {
                Ok(GameEvent::Won { .. }) => {
                    let player = player.clone();
                    let cue = cue.clone();
                    tokio::task::spawn_blocking(move || {
                        if let Err(err) = player.play(&cue) {
                            tracing::warn!(%err, "could not play celebration");
                        }
                    });
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "celebration listener lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
        tracing::debug!("celebration listener stopped");
    })
}
