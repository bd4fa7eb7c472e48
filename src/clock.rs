//! Frame timing.

use web_time::Instant;

/// Wall-clock time source for the demo loop.
///
/// Elapsed time is monotonic. The driver samples the clock exactly once per
/// frame, so every animator stepped in that frame sees the same timestamp.
pub struct FrameClock {
    start: Instant,
    last: f32,
}

impl FrameClock {
    /// Creates a clock whose elapsed time starts counting now.
    pub fn new() -> FrameClock {
        FrameClock {
            start: Instant::now(),
            last: 0.0,
        }
    }

    /// Seconds since the clock started.
    ///
    /// Reading this does not affect delta bookkeeping; use
    /// [`tick`](FrameClock::tick) to advance a frame.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Samples the clock for a new frame.
    ///
    /// # Returns
    /// `(elapsed, delta)`: seconds since the clock started, and seconds since
    /// the previous `tick`.
    pub fn tick(&mut self) -> (f32, f32) {
        let elapsed = self.elapsed();
        let delta = elapsed - self.last;
        self.last = elapsed;
        (elapsed, delta)
    }

    /// Restarts the clock from zero.
    pub fn restart(&mut self) {
        self.start = Instant::now();
        self.last = 0.0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn elapsed_time_is_monotonic() {
        let mut clock = FrameClock::new();
        let (first, first_delta) = clock.tick();
        thread::sleep(Duration::from_millis(5));
        let (second, second_delta) = clock.tick();

        assert!(first >= 0.0);
        assert!(first_delta >= 0.0);
        assert!(second > first);
        assert!(second_delta > 0.0);
    }

    #[test]
    fn deltas_are_measured_between_ticks() {
        let mut clock = FrameClock::new();
        clock.tick();
        thread::sleep(Duration::from_millis(5));
        let (elapsed, delta) = clock.tick();

        // The second delta covers the sleep, not the whole elapsed span.
        assert!(delta <= elapsed);
        assert!(delta >= 0.004);
    }

    #[test]
    fn restart_rewinds_the_clock() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(5));
        let before = clock.elapsed();
        clock.restart();
        assert!(clock.elapsed() < before);
    }
}
