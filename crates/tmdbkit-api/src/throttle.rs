//! Client-wide request pacing.

use std::time::{Duration, Instant};

/// Default spacing between requests (~40 req/s, TMDB's soft limit).
pub(crate) const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Keeps consecutive requests at least `min_interval` apart.
///
/// Shared behind a `tokio::sync::Mutex`, so waiters queue in order.
#[derive(Debug)]
pub(crate) struct Throttle {
    min_interval: Duration,
    next_slot: Option<Instant>,
}

impl Throttle {
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: None,
        }
    }

    /// Sleeps until the next slot opens, then books the one after it.
    pub(crate) async fn acquire(&mut self) {
        if let Some(slot) = self.next_slot {
            let now = Instant::now();
            if slot > now {
                tokio::time::sleep(slot.saturating_duration_since(now)).await;
            }
        }

        let granted = Instant::now();
        self.next_slot = granted.checked_add(self.min_interval);
    }

    #[cfg(test)]
    pub(crate) const fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_acquire_is_immediate() {
        // Arrange
        let mut throttle = Throttle::new(Duration::from_secs(5));

        // Act
        let start = Instant::now();
        throttle.acquire().await;

        // Assert
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_second_acquire_waits_for_interval() {
        // Arrange
        let mut throttle = Throttle::new(Duration::from_millis(60));

        // Act
        let start = Instant::now();
        throttle.acquire().await;
        throttle.acquire().await;

        // Assert
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn test_zero_interval_never_sleeps() {
        // Arrange
        let mut throttle = Throttle::new(Duration::ZERO);

        // Act
        let start = Instant::now();
        for _ in 0..10 {
            throttle.acquire().await;
        }

        // Assert
        assert!(start.elapsed() < Duration::from_millis(100));
        assert!(throttle.next_slot.is_some());
    }

    #[test]
    fn test_default_interval() {
        // Arrange & Act
        let throttle = Throttle::default();

        // Assert
        assert_eq!(throttle.min_interval(), Duration::from_millis(25));
    }
}
