use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;

use crate::config::{AnimationPhase, DigitFrame};
use crate::traits::FrameSink;

/// Handle to a running entrance animation.
///
/// Dropping the handle cancels any pending frame delay — callbacks must never
/// fire against a torn-down display.
pub struct AnimatorHandle {
    handle: JoinHandle<()>,
}

impl AnimatorHandle {
    /// Abort the pending frame delay immediately.
    ///
    /// Safe to call at any phase, including after the animation has settled
    /// naturally (no-op then).
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for AnimatorHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Run the one-shot entrance animation: `frame_count` random scramble frames
/// at `frame_interval` cadence, then `target_digits` exactly once as the
/// settle frame.
///
/// Each frame is scheduled from within the previous frame's completion
/// (chained single-shot delays, not a free-running periodic timer), so frames
/// are strictly sequential and a slow consumer cannot build a backlog. The
/// scramble width always derives from `target_digits`, so a fresh run at a
/// wider target scrambles at the new width. Settling is terminal; the
/// animator never restarts itself.
pub fn run_entrance<S: FrameSink>(
    target_digits: String,
    frame_count: u32,
    frame_interval: Duration,
    sink: S,
) -> AnimatorHandle {
    let handle = tokio::spawn(async move {
        let width = target_digits.len();
        for _ in 0..frame_count {
            let frame = DigitFrame {
                digits: random_digits(width),
                phase: AnimationPhase::Scrambling,
            };
            if let Err(e) = sink.publish_frame(frame).await {
                tracing::debug!(error = %e, "Frame sink gone, stopping entrance animation");
                return;
            }
            tokio::time::sleep(frame_interval).await;
        }

        let settle = DigitFrame {
            digits: target_digits.clone(),
            phase: AnimationPhase::Settled,
        };
        match sink.publish_frame(settle).await {
            Ok(()) => tracing::info!(digits = %target_digits, "Entrance animation settled"),
            Err(e) => tracing::debug!(error = %e, "Frame sink gone before settle"),
        }
    });

    AnimatorHandle { handle }
}

/// `width` digits, each independently uniform-random in 0–9. Purely cosmetic.
fn random_digits(width: usize) -> String {
    let mut rng = rand::rng();
    (0..width)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
