use std::time::Duration;
use tokio::time::{sleep_until, Instant};

use crate::types::Frequency;

/// Keeps a loop at a fixed frequency.
///
/// Each call to [`Rate::sleep`] waits for the end of the current period. A cycle
/// that overran its period is not compensated: the schedule restarts from the
/// moment the overrun was noticed, so missed ticks are never caught up.
#[derive(Debug)]
pub struct Rate {
    period: Duration,
    start: Instant,
}

impl Rate {
    pub fn new(frequency: Frequency) -> Self {
        Rate {
            period: frequency.period(),
            start: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleep until the next tick boundary.
    /// Returns false if the cycle overran and no sleep happened.
    pub async fn sleep(&mut self) -> bool {
        let expected_end = self.start + self.period;
        let now = Instant::now();

        if now >= expected_end {
            self.start = now;
            return false;
        }

        sleep_until(expected_end).await;
        self.start = expected_end;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleeps_for_one_period() {
        let mut rate = Rate::new(Frequency::new(4).unwrap());
        let begin = Instant::now();

        assert!(rate.sleep().await);
        assert_eq!(begin.elapsed(), Duration::from_millis(250));

        assert!(rate.sleep().await);
        assert_eq!(begin.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_work_is_subtracted_from_sleep() {
        let mut rate = Rate::new(Frequency::new(10).unwrap());
        let begin = Instant::now();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(rate.sleep().await);
        assert_eq!(begin.elapsed(), Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overrun_does_not_catch_up() {
        let mut rate = Rate::new(Frequency::new(10).unwrap());
        let begin = Instant::now();

        // Work takes two and a half periods
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(!rate.sleep().await);
        assert_eq!(begin.elapsed(), Duration::from_millis(250));

        // Next period starts at the overrun, not at a missed boundary
        assert!(rate.sleep().await);
        assert_eq!(begin.elapsed(), Duration::from_millis(350));
    }
}
