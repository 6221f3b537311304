//! Deterministic clock for tests and replays.

use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances by a fixed step on every reading.
///
/// Each call to [`Clock::utc`] returns a strictly later instant than the
/// previous one, which keeps `created_at` ordering unambiguous.
#[derive(Debug)]
pub struct SteppingClock {
    next_millis: AtomicI64,
    step_millis: i64,
}

impl SteppingClock {
    /// Creates a clock starting at `start` and advancing by `step`.
    #[must_use]
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next_millis: AtomicI64::new(start.timestamp_millis()),
            step_millis: step.num_milliseconds().max(1),
        }
    }

    /// Creates a clock at 2024-01-01T00:00:00Z advancing one second per read.
    #[must_use]
    pub fn starting_at_epoch_2024() -> Self {
        Self::new(
            DateTime::<Utc>::from_timestamp(1_704_067_200, 0).unwrap_or_default(),
            Duration::seconds(1),
        )
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at_epoch_2024()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let millis = self.next_millis.fetch_add(self.step_millis, Ordering::SeqCst);
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
    }
}
