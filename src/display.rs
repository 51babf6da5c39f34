use std::time::Duration;

use tokio::sync::watch;

use crate::animator::{run_entrance, AnimatorHandle};
use crate::config::{AnimationPhase, DigitFrame, DisplayConfig};
use crate::days;
use crate::error::FlapError;
use crate::midnight::{arm_daily_refresh, ScheduleHandle};
use crate::traits::{FrameSink, SystemClock, WallClock};

/// Publishes frames into the controller's watch channel.
#[derive(Clone)]
struct WatchSink {
    tx: watch::Sender<DigitFrame>,
}

impl FrameSink for WatchSink {
    type Error = std::convert::Infallible;

    async fn publish_frame(&self, frame: DigitFrame) -> Result<(), Self::Error> {
        // send_replace keeps publishing even if every observer is gone; the
        // display state record exists independently of who watches it.
        self.tx.send_replace(frame);
        Ok(())
    }
}

/// Owns the displayed state and the two timer machines behind it.
///
/// On start it computes the day count, runs the entrance animation toward it
/// (cosmetic), and arms the midnight refresh (correctness). Every change to
/// the displayed digits is republished on the watch channel — the sole
/// observable output. On a midnight tick the digits are replaced directly,
/// zero-padded to the possibly wider new width, with no re-entry into
/// scrambling: the entrance animation is a first-paint effect only.
pub struct DisplayController {
    frames: watch::Sender<DigitFrame>,
    animator: AnimatorHandle,
    schedule: ScheduleHandle,
}

impl DisplayController {
    /// Start the display against the live system clock.
    pub fn start(
        config: DisplayConfig,
    ) -> Result<(Self, watch::Receiver<DigitFrame>), FlapError> {
        Self::start_with_clock(config, SystemClock)
    }

    /// Start the display with an injected wall clock.
    pub fn start_with_clock<C: WallClock>(
        config: DisplayConfig,
        clock: C,
    ) -> Result<(Self, watch::Receiver<DigitFrame>), FlapError> {
        config.validate()?;
        let epoch = config.epoch_utc()?;

        let initial = days::elapsed_days(epoch, clock.now());
        let target = days::format_digits(initial, config.min_digit_width);
        tracing::info!(
            epoch = %config.epoch,
            elapsed_days = initial,
            width = target.len(),
            "Display starting"
        );

        let (tx, rx) = watch::channel(DigitFrame {
            digits: target.clone(),
            phase: AnimationPhase::Scrambling,
        });

        let animator = run_entrance(
            target,
            config.frame_count,
            Duration::from_millis(config.frame_interval_ms),
            WatchSink { tx: tx.clone() },
        );

        let min_width = config.min_digit_width;
        let tick_tx = tx.clone();
        let tick_clock = clock.clone();
        let schedule = arm_daily_refresh(clock, move || {
            let refreshed = days::elapsed_days(epoch, tick_clock.now());
            tick_tx.send_replace(DigitFrame {
                digits: days::format_digits(refreshed, min_width),
                phase: AnimationPhase::Settled,
            });
            refreshed
        });

        Ok((
            Self {
                frames: tx,
                animator,
                schedule,
            },
            rx,
        ))
    }

    /// The most recently published frame.
    pub fn current(&self) -> DigitFrame {
        self.frames.borrow().clone()
    }

    /// Attach another observer to the display output.
    pub fn subscribe(&self) -> watch::Receiver<DigitFrame> {
        self.frames.subscribe()
    }

    /// Cancel all outstanding timers. Idempotent; Drop does the same.
    pub fn shutdown(&self) {
        self.animator.cancel();
        self.schedule.cancel();
        tracing::info!("Display shut down, all timers cancelled");
    }
}

impl Drop for DisplayController {
    fn drop(&mut self) {
        self.animator.cancel();
        self.schedule.cancel();
    }
}
