use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::days;
use crate::traits::WallClock;

/// Handle to the armed daily-refresh timers.
///
/// Owns whichever timer is currently outstanding — the one-shot midnight
/// alignment delay, or the recurring 24 h repeat after the first fire.
/// Dropping the handle cancels it; no callback fires after release.
pub struct ScheduleHandle {
    handle: JoinHandle<()>,
}

impl ScheduleHandle {
    /// Cancel the outstanding timer. No-op after natural or repeated cancellation.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for ScheduleHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Arm `on_tick` to fire at every UTC midnight from now on.
///
/// Two-phase: a one-shot delay aligns to the next midnight boundary (the
/// display can be mounted at any time of day, so a naive fixed-period repeat
/// started now would drift off the boundary), then a fixed 24 h period keeps
/// every subsequent tick on it. `on_tick` returns the refreshed day count,
/// which is logged per fire.
///
/// A host suspended across one or more boundaries gets a single catch-up fire
/// (missed ticks are skipped, not replayed); `on_tick` recomputes the count
/// fully from the wall clock, so the displayed value self-corrects no matter
/// how many boundaries were missed. The same recompute path covers a clock
/// stepped backward across a boundary.
pub fn arm_daily_refresh<C, F>(clock: C, mut on_tick: F) -> ScheduleHandle
where
    C: WallClock,
    F: FnMut() -> u64 + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let delay_ms = days::ms_until_next_utc_midnight(clock.now());
        tracing::info!(delay_ms, "Daily refresh armed for next UTC midnight");
        tokio::time::sleep(Duration::from_millis(delay_ms as u64)).await;

        let elapsed_days = on_tick();
        tracing::info!(elapsed_days, "Day rollover fired");

        let mut period = tokio::time::interval(Duration::from_millis(days::MS_PER_DAY as u64));
        period.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // An interval's first tick completes immediately; consume it so the
        // loop below fires exactly one day after the alignment tick.
        period.tick().await;

        loop {
            period.tick().await;
            let elapsed_days = on_tick();
            tracing::info!(elapsed_days, "Day rollover fired");
        }
    });

    ScheduleHandle { handle }
}
