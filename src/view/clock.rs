use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use super::time::{elapsed_is_live, format_elapsed};

const TICK: Duration = Duration::from_secs(1);

/// A live `HH:MM:SS` display of the time since a player was last online.
///
/// While the timestamp is usable and in the past, a background task recomputes
/// the display once per second. The task is cancelled when the timestamp
/// changes and when the clock is dropped. Must be used inside a Tokio runtime.
#[derive(Debug)]
pub struct LastOnlineClock {
    last_online: Option<i64>,
    display: Arc<watch::Sender<String>>,
    ticker: Option<JoinHandle<()>>,
}

impl LastOnlineClock {
    pub fn start(last_online: Option<i64>) -> Self {
        Self::start_at(last_online, Utc::now())
    }

    /// Start counting from the wall-clock instant `now`.
    pub fn start_at(last_online: Option<i64>, now: DateTime<Utc>) -> Self {
        let (display, _) = watch::channel(format_elapsed(last_online, now));
        let mut clock = Self {
            last_online,
            display: Arc::new(display),
            ticker: None,
        };
        clock.restart(now);
        clock
    }

    /// The value currently displayed.
    pub fn current(&self) -> String {
        self.display.borrow().clone()
    }

    /// Receive every recomputed value. Survives timestamp changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.display.subscribe()
    }

    pub fn last_online(&self) -> Option<i64> {
        self.last_online
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }

    pub fn set_last_online(&mut self, last_online: Option<i64>) {
        self.set_last_online_at(last_online, Utc::now());
    }

    /// Switch to a new timestamp, cancelling the previous ticker first.
    /// Setting the same timestamp again is a no-op.
    pub fn set_last_online_at(&mut self, last_online: Option<i64>, now: DateTime<Utc>) {
        if last_online == self.last_online {
            return;
        }
        self.last_online = last_online;
        self.restart(now);
    }

    /// Cancel the ticker, freezing the display at its current value.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }

    fn restart(&mut self, now: DateTime<Utc>) {
        self.stop();
        self.display
            .send_replace(format_elapsed(self.last_online, now));

        let last_online = match self.last_online {
            Some(ts) if elapsed_is_live(Some(ts), now) => ts,
            other => {
                debug!(last_online = ?other, "elapsed clock is static");
                return;
            }
        };
        let display = Arc::clone(&self.display);
        let started = Instant::now();
        self.ticker = Some(tokio::spawn(tick(display, last_online, now, started)));
    }
}

impl Drop for LastOnlineClock {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn tick(
    display: Arc<watch::Sender<String>>,
    last_online: i64,
    origin: DateTime<Utc>,
    started: Instant,
) {
    let mut ticker = interval_at(started + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let elapsed = TimeDelta::from_std(started.elapsed()).unwrap_or(TimeDelta::zero());
        display.send_replace(format_elapsed(Some(last_online), origin + elapsed));
    }
}
