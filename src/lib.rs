//! # flapcount
//!
//! Split-flap day counter core: shows the number of whole days elapsed since
//! a fixed UTC epoch and keeps that count correct across day boundaries
//! without a restart.
//!
//! ## Features
//!
//! - Pure UTC day counting — normalized to calendar-date midnights, immune to
//!   the host's local timezone and DST, clamped to ≥ 0.
//! - One-shot entrance animation: random scramble frames via chained
//!   single-shot delays, settling exactly once on the true value.
//! - Midnight rollover scheduler: one-shot alignment delay to the next UTC
//!   midnight, then a drift-free fixed 24 h repeat.
//! - Self-correcting across host suspension: every fire recomputes the count
//!   fully from the wall clock.
//! - Display width grows automatically past power-of-ten thresholds and never
//!   shrinks below the configured minimum.
//! - Teardown cancels every outstanding timer; no callback fires after release.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use flapcount::{DisplayConfig, DisplayController};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (display, mut frames) =
//!         DisplayController::start(DisplayConfig::default()).unwrap();
//!     while frames.changed().await.is_ok() {
//!         let frame = frames.borrow_and_update().clone();
//!         println!("{}", frame.digits);
//!     }
//!     display.shutdown();
//! }
//! ```
//!
//! ## Config example (JSON)
//!
//! ```json
//! {
//!   "epoch": "2015-10-22T00:00:00Z",
//!   "frame_count": 30,
//!   "frame_interval_ms": 50,
//!   "min_digit_width": 4
//! }
//! ```

pub mod animator;
pub mod config;
pub mod days;
pub mod display;
pub mod error;
pub mod midnight;
#[cfg(feature = "test-support")]
pub mod mocks;
pub mod traits;

pub use animator::{run_entrance, AnimatorHandle};
pub use config::{AnimationPhase, DigitFrame, DisplayConfig};
pub use display::DisplayController;
pub use error::FlapError;
pub use midnight::{arm_daily_refresh, ScheduleHandle};
pub use traits::{FrameSink, SystemClock, WallClock};
