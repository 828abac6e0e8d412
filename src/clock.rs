//! Elapsed time counter and the periodic task that drives it.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Whole seconds since the session started.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    seconds: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn tick(&mut self) {
        self.seconds += 1;
    }

    pub fn reset(&mut self) {
        self.seconds = 0;
    }
}

/// `MM:SS`, minutes grow past two digits instead of wrapping.
impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

/// A background task sending a message every period until cancelled.
///
/// The task stops when [`Ticker::cancel`] is called, when the parent token is
/// cancelled, when the receiving side is dropped, or when the ticker itself
/// is dropped.
pub struct Ticker {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<T, F>(
        parent: &CancellationToken,
        period: Duration,
        tx: mpsc::UnboundedSender<T>,
        mut message: F,
    ) -> Self
    where
        T: Send + 'static,
        F: FnMut() -> T + Send + 'static,
    {
        let token = parent.child_token();
        let child = token.clone();
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = child.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(message()).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("ticker stopped");
        });
        Ticker {
            token,
            handle: Some(handle),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel and wait for the task to finish
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
