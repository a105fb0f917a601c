//! Simulated transfer: the submission timeline as a cancellable stream.
//!
//! The caller supplies the sleep primitive, so the same stream runs on
//! browser timers (`gloo_timers::future::sleep`) and on tokio.

use std::future::Future;
use std::time::Duration;

use futures::stream::{self, AbortHandle, Abortable, LocalBoxStream, StreamExt};

use super::timeline::{timeline, SubmissionEvent, SubmissionTiming};

/// Stream of submission events, ends after [`SubmissionEvent::Navigate`]
/// or when aborted.
pub type TransferStream = Abortable<LocalBoxStream<'static, SubmissionEvent>>;

/// Cancels the associated [`TransferStream`] when dropped.
#[derive(Debug)]
pub struct TransferHandle {
    abort: AbortHandle,
}

impl TransferHandle {
    /// Stop the stream; pending events are never delivered.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for TransferHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Start a simulated transfer.
///
/// `sleep` is called with the gap between consecutive events.
pub fn simulate<S, Fut>(timing: &SubmissionTiming, sleep: S) -> (TransferStream, TransferHandle)
where
    S: FnMut(Duration) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let schedule = timeline(timing);
    log::debug!("Simulated transfer with {} events", schedule.len());

    let events = stream::unfold(
        (schedule.into_iter(), Duration::ZERO, sleep),
        |(mut schedule, elapsed, mut sleep)| async move {
            let (at, event) = schedule.next()?;
            let gap = at.saturating_sub(elapsed);
            if !gap.is_zero() {
                sleep(gap).await;
            }
            Some((event, (schedule, at, sleep)))
        },
    )
    .boxed_local();

    let (stream, abort) = stream::abortable(events);
    (stream, TransferHandle { abort })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_events_arrive_on_schedule() {
        let start = Instant::now();
        let (mut events, _handle) = simulate(&SubmissionTiming::default(), tokio::time::sleep);

        let mut seen = Vec::new();
        while let Some(event) = events.next().await {
            seen.push((start.elapsed().as_millis(), event));
        }

        assert_eq!(seen.first(), Some(&(200, SubmissionEvent::Progress(10))));
        assert!(seen.contains(&(2000, SubmissionEvent::Progress(100))));
        assert!(seen.contains(&(2500, SubmissionEvent::Completed)));
        assert_eq!(seen.last(), Some(&(4000, SubmissionEvent::Navigate)));
        assert_eq!(seen.len(), 12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_delivery() {
        let (mut events, handle) = simulate(&SubmissionTiming::default(), tokio::time::sleep);

        assert_eq!(events.next().await, Some(SubmissionEvent::Progress(10)));
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(events.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels() {
        let (mut events, handle) = simulate(&SubmissionTiming::default(), tokio::time::sleep);
        drop(handle);
        assert_eq!(events.next().await, None);
    }
}
