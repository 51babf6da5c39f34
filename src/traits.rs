use std::future::Future;

use chrono::{DateTime, Utc};

use crate::config::DigitFrame;

/// Publish one display frame to whatever renders the digits.
///
/// One trait, one operation — implement this to replace the publish step in tests.
pub trait FrameSink: Send + Sync + Clone + 'static {
    type Error: std::error::Error + Send + Sync;

    fn publish_frame(
        &self,
        frame: DigitFrame,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Read the live wall clock.
///
/// The display always reads the host time on demand (startup, each midnight
/// tick); nothing is simulated. The seam exists so tests can pin the wall
/// clock while tokio's paused timer driver controls the delays.
pub trait WallClock: Send + Sync + Clone + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Zero-sized type — delegates to `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_returns_current_instant() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
        assert!((b - a) < chrono::TimeDelta::seconds(1));
    }
}
