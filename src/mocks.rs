//! Mock implementations for deterministic unit testing.
//!
//! Enabled with the `test-support` feature:
//!
//! ```toml
//! [dev-dependencies]
//! flapcount = { path = "...", features = ["test-support"] }
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::DigitFrame;
use crate::traits::{FrameSink, WallClock};

// ── MockFrameSink ─────────────────────────────────────────────────────────────

/// Records every frame published during a test run.
#[derive(Clone, Default)]
pub struct MockFrameSink {
    records: Arc<Mutex<Vec<DigitFrame>>>,
}

impl MockFrameSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<DigitFrame> {
        self.records.lock().unwrap().clone()
    }

    pub fn frame_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl FrameSink for MockFrameSink {
    type Error = std::convert::Infallible;

    async fn publish_frame(&self, frame: DigitFrame) -> Result<(), Self::Error> {
        self.records.lock().unwrap().push(frame);
        Ok(())
    }
}

// ── MockClock ─────────────────────────────────────────────────────────────────

/// Settable wall clock for pinning "now" in scheduler tests.
///
/// Pairs with tokio's paused timer driver: the test advances tokio time to
/// fire the delays and moves this clock to control what the fired callback
/// observes as the wall-clock instant.
#[derive(Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap() = instant;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl WallClock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
