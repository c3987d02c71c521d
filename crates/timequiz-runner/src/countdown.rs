//! Whole-session countdown.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Signals expiry once, after a fixed duration. No pause, no adjustment.
#[derive(Debug, Clone, Copy)]
pub struct CountdownTimer {
    duration: Duration,
}

impl CountdownTimer {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start counting down on the runtime.
    ///
    /// The receiver resolves when time is up. The send never blocks, so an
    /// abandoned receiver cannot stall the task.
    pub fn spawn(self) -> (JoinHandle<()>, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(self.duration).await;
            tracing::debug!("countdown of {:?} expired", self.duration);
            let _ = tx.send(());
        });
        (handle, rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fires_after_duration() {
        let start = Instant::now();
        let (_handle, rx) = CountdownTimer::new(Duration::from_secs(30)).spawn();
        rx.await.unwrap();
        assert_eq!(start.elapsed().as_secs(), 30);
    }

    #[tokio::test(start_paused = true)]
    async fn not_before_duration() {
        let (_handle, mut rx) = CountdownTimer::new(Duration::from_secs(10)).spawn();
        tokio::time::sleep(Duration::from_secs(9)).await;
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_receiver_does_not_block() {
        let (handle, rx) = CountdownTimer::new(Duration::from_secs(1)).spawn();
        drop(rx);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn abort_stops_countdown() {
        let (handle, rx) = CountdownTimer::new(Duration::from_secs(5)).spawn();
        handle.abort();
        assert!(rx.await.is_err());
    }
}
