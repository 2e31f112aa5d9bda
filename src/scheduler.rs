//! Delayed split: shows a tapped line briefly, then splits with it.
//!
//! DESIGN
//! ======
//! `schedule` captures the line at tap time and spawns a task that sleeps
//! for the configured delay before dispatching `SplitTablets` with that
//! captured line. It never re-reads the live split line, so clearing or
//! replacing the line in the meantime does not change what gets split.
//!
//! Each `schedule` call bumps a generation counter. When a task wakes and its
//! generation is no longer the latest, a newer tap has superseded it and the
//! task does nothing. Starting a new draw does not cancel a pending split.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::Config;
use crate::doc::SplitLine;
use crate::store::{Effect, SharedStore, Transition};

#[derive(Clone)]
pub struct SplitScheduler {
    store: SharedStore,
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl SplitScheduler {
    #[must_use]
    pub fn new(store: SharedStore, config: &Config) -> Self {
        Self::with_delay(store, config.split_delay)
    }

    #[must_use]
    pub fn with_delay(store: SharedStore, delay: Duration) -> Self {
        Self { store, delay, generation: Arc::new(AtomicU64::new(0)) }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Split with `line` after the delay unless a newer line is scheduled first.
    ///
    /// Must be called from within a tokio runtime. The handle resolves to the
    /// split's `Effect`, or `None` when the split was superseded.
    pub fn schedule(&self, line: SplitLine) -> JoinHandle<Option<Effect>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let store = self.store.clone();
        let delay = self.delay;
        debug!(?line, ticket, ?delay, "split scheduled");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) != ticket {
                debug!(?line, ticket, "split superseded");
                return None;
            }
            Some(store.dispatch(Transition::SplitTablets(line)))
        })
    }
}
