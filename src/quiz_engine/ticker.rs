//! The one-second countdown that drives timed and party turns.
//!
//! A [`Ticker`] owns at most one tokio task. Arming always aborts the previous
//! task first, and every task only ticks the countdown epoch it was armed for,
//! so two tasks can never decrement the same countdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::quiz_engine::{driver::SharedSession, session::TickOutcome};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking `shared` once per second for countdown `epoch`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, shared: Arc<SharedSession>, epoch: u64) {
        self.cancel();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let outcome = {
                    let mut session = shared.lock().await;
                    let outcome = session.tick_epoch(epoch);
                    if outcome != TickOutcome::Stale {
                        shared.publish(&session);
                    }
                    outcome
                };

                match outcome {
                    TickOutcome::Running { remaining } => trace!(epoch, remaining, "tick"),
                    TickOutcome::Expired => {
                        debug!(epoch, "countdown finished");
                        break;
                    }
                    TickOutcome::Stale => {
                        debug!(epoch, "countdown superseded");
                        break;
                    }
                }
            }
        });

        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
