use std::time::Duration;

/// Runs a task after a fixed pause, simulating processing latency.
///
/// A zero delay runs the task without touching the timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delay(Duration);

impl Delay {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    #[must_use]
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        self.0
    }

    pub async fn run<T>(self, task: impl FnOnce() -> T) -> T {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
        task()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_delay_runs_immediately() {
        assert_eq!(Delay::none().run(|| 7).await, 7);
    }

    #[tokio::test]
    async fn delay_waits_before_running() {
        let delay = Delay::new(Duration::from_millis(20));
        let started = tokio::time::Instant::now();
        let value = delay.run(|| "done").await;
        assert_eq!(value, "done");
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
