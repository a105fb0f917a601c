//! Schedule of the simulated submission.
//!
//! Two independent sources are merged into one ordered list of events:
//!
//! ```text
//! t = 200   400   ...  2000        2500          4000
//!     P(10) P(20) ...  P(100)      Completed     Navigate
//!     └──── progress cadence ───┘  └ completion ┘└ redirect delay ┘
//! ```
//!
//! The cadence stops at 100 and never runs past the completion point.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timer settings for the simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionTiming {
    /// Progress cadence.
    #[serde(with = "millis")]
    pub tick_interval: Duration,
    /// Percentage points added per tick.
    pub progress_step: u8,
    /// Delay from submit until processing is declared complete.
    #[serde(with = "millis")]
    pub completion_delay: Duration,
    /// Delay from completion until the results view is shown.
    #[serde(with = "millis")]
    pub redirect_delay: Duration,
}

impl Default for SubmissionTiming {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
            progress_step: 10,
            completion_delay: Duration::from_millis(2500),
            redirect_delay: Duration::from_millis(1500),
        }
    }
}

impl SubmissionTiming {
    /// Total time from submit to navigation.
    pub fn total(&self) -> Duration {
        self.completion_delay + self.redirect_delay
    }
}

/// One step of a submission, in the order the timers fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionEvent {
    /// Progress bar reached the given percentage.
    Progress(u8),
    /// Processing is complete.
    Completed,
    /// Time to show the results view.
    Navigate,
}

/// Events with their offset from the moment of submission, sorted by time.
///
/// A zero `tick_interval` or `progress_step` yields no cadence events;
/// the completion and navigation points are always present.
pub fn timeline(timing: &SubmissionTiming) -> Vec<(Duration, SubmissionEvent)> {
    let mut events = Vec::new();

    if !timing.tick_interval.is_zero() && timing.progress_step > 0 {
        let mut at = timing.tick_interval;
        let mut progress: u8 = 0;
        while progress < 100 && at <= timing.completion_delay {
            progress = progress.saturating_add(timing.progress_step).min(100);
            events.push((at, SubmissionEvent::Progress(progress)));
            at += timing.tick_interval;
        }
    }

    events.push((timing.completion_delay, SubmissionEvent::Completed));
    events.push((timing.total(), SubmissionEvent::Navigate));
    events
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
