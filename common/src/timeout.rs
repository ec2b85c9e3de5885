use std::time::{Duration, Instant};

/// The deadline of a [`Timeout`] has passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Elapsed;

pub struct Timeout {
    instant: Instant,
    duration: Duration,
}

impl Timeout {
    #[inline]
    pub fn new(duration: Duration) -> Self {
        Self {
            instant: Instant::now(),
            duration,
        }
    }

    #[inline]
    pub fn from_micros(micros: u64) -> Self {
        Self::new(Duration::from_micros(micros))
    }

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    #[inline]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.instant.elapsed())
    }

    /// Gives up the CPU once, or fails if the deadline has passed.
    #[inline]
    pub fn run(&self) -> Result<(), Elapsed> {
        if self.instant.elapsed() < self.duration {
            // Sleeps in Redox are only evaluated on PIT ticks (a few ms), which is not
            // short enough for a reasonably responsive timeout. However, the clock is
            // highly accurate. So, we yield instead of sleep to reduce latency.
            std::thread::yield_now();
            Ok(())
        } else {
            Err(Elapsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_expires_immediately() {
        let timeout = Timeout::from_micros(0);
        assert_eq!(timeout.run(), Err(Elapsed));
        assert_eq!(timeout.remaining(), Duration::ZERO);
    }

    #[test]
    fn long_timeout_keeps_running() {
        let timeout = Timeout::from_millis(60_000);
        assert_eq!(timeout.run(), Ok(()));
        assert!(timeout.remaining() > Duration::from_secs(1));
    }
}
