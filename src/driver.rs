//! The demo loop: owned scheduling instead of free-running frame callbacks.
//!
//! A [`Driver`] owns the running flag and the clock. Scenes implement
//! [`Animate`] and are stepped once per frame with a single consistent
//! [`Frame`] sample; returning `false` from a step stops the loop.

use std::time::Duration;

use log::debug;
use web_time::Instant;

use crate::clock::FrameClock;

/// Timing sample handed to [`Animate::step`] once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Seconds since the driver's timeline began.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Index of this frame, starting at 0.
    pub index: u64,
}

/// A scene that advances once per frame.
pub trait Animate {
    /// Advances the scene by one frame.
    ///
    /// # Returns
    /// `true` if the loop should continue, `false` to stop the driver.
    fn step(&mut self, frame: &Frame) -> bool;
}

/// Any `FnMut(&Frame) -> bool` closure is a scene.
impl<F> Animate for F
where
    F: FnMut(&Frame) -> bool,
{
    fn step(&mut self, frame: &Frame) -> bool {
        self(frame)
    }
}

/// Configuration options for the driver loop.
#[derive(Clone, Debug, Default)]
pub struct DriverConfig {
    /// Stop once the driver has stepped this many frames in total.
    /// `None` runs until the scene asks to stop.
    pub max_frames: Option<u64>,
    /// Lower bound on the real duration of a frame. `None` means unpaced.
    pub min_frame_time: Option<Duration>,
}

impl DriverConfig {
    /// Creates a config with no frame cap and no pacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the loop after `frames` frames.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Caps the loop at `fps` frames per second. Cannot be 0.
    pub fn with_framerate_limit(mut self, fps: u64) -> Self {
        assert!(fps != 0);
        self.min_frame_time = Some(Duration::from_millis(1000 / fps));
        self
    }
}

/// Where frame timestamps come from.
enum Timeline {
    /// Wall-clock time.
    Realtime(FrameClock),
    /// Exactly `dt` seconds per frame, regardless of wall time.
    Fixed { dt: f32, elapsed: f32 },
}

impl Timeline {
    fn tick(&mut self) -> (f32, f32) {
        match self {
            Timeline::Realtime(clock) => clock.tick(),
            Timeline::Fixed { dt, elapsed } => {
                let sample = (*elapsed, *dt);
                *elapsed += *dt;
                sample
            }
        }
    }
}

/// Owns the frame loop.
///
/// The driver holds the single running flag, starts and stops explicitly,
/// and samples its timeline once per frame. Use [`run`](Driver::run) for the
/// whole loop, or [`start`](Driver::start) plus
/// [`step_once`](Driver::step_once) to drive frames from a loop you own.
///
/// # Example
/// ```
/// use wisp::driver::{Animate, Driver, DriverConfig, Frame};
///
/// struct Counter(u32);
///
/// impl Animate for Counter {
///     fn step(&mut self, _frame: &Frame) -> bool {
///         self.0 += 1;
///         true
///     }
/// }
///
/// let mut counter = Counter(0);
/// let mut driver = Driver::fixed_with_config(
///     1.0 / 60.0,
///     DriverConfig::new().with_max_frames(10),
/// );
/// driver.run(&mut counter);
/// assert_eq!(counter.0, 10);
/// ```
pub struct Driver {
    timeline: Timeline,
    config: DriverConfig,
    running: bool,
    frames: u64,
}

impl Driver {
    /// Creates a wall-clock driver with default configuration.
    pub fn new() -> Driver {
        Driver::with_config(DriverConfig::new())
    }

    /// Creates a wall-clock driver.
    pub fn with_config(config: DriverConfig) -> Driver {
        Driver {
            timeline: Timeline::Realtime(FrameClock::new()),
            config,
            running: false,
            frames: 0,
        }
    }

    /// Creates a driver that advances exactly `dt` seconds per frame, so
    /// frame `k` sees `elapsed == k * dt`. Useful for offline rendering and
    /// deterministic tests.
    ///
    /// # Panics
    /// Panics if `dt` is not strictly positive.
    pub fn fixed(dt: f32) -> Driver {
        Driver::fixed_with_config(dt, DriverConfig::new())
    }

    /// Creates a fixed-timestep driver with the given configuration.
    ///
    /// # Panics
    /// Panics if `dt` is not strictly positive.
    pub fn fixed_with_config(dt: f32, config: DriverConfig) -> Driver {
        assert!(dt > 0.0, "fixed timestep must be positive, got {}", dt);
        Driver {
            timeline: Timeline::Fixed { dt, elapsed: 0.0 },
            config,
            running: false,
            frames: 0,
        }
    }

    /// Returns `true` while the loop is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of frames stepped so far, across all runs.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Raises the running flag without stepping anything.
    #[inline]
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Clears the running flag. The loop exits before its next frame.
    #[inline]
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advances the scene by exactly one frame.
    ///
    /// # Returns
    /// `true` if the scene wants to continue, `false` if it asked to stop
    /// (which also clears the running flag).
    pub fn step_once(&mut self, scene: &mut dyn Animate) -> bool {
        let (elapsed, delta) = self.timeline.tick();
        let frame = Frame {
            elapsed,
            delta,
            index: self.frames,
        };
        self.frames += 1;

        let keep_going = scene.step(&frame);
        if !keep_going {
            self.stop();
        }
        keep_going
    }

    /// Runs the loop until the scene stops, [`stop`](Driver::stop) is called,
    /// or the configured frame cap is reached.
    ///
    /// Stopping does not reset anything: elapsed time and the frame counter
    /// continue monotonically if the driver is run again.
    pub fn run(&mut self, scene: &mut dyn Animate) {
        self.start();
        debug!("driver loop started at frame {}", self.frames);

        while self.running {
            if let Some(max_frames) = self.config.max_frames {
                if self.frames >= max_frames {
                    break;
                }
            }

            let frame_began = Instant::now();
            if !self.step_once(scene) {
                break;
            }

            if let Some(min_frame_time) = self.config.min_frame_time {
                let spent = frame_began.elapsed();
                if spent < min_frame_time {
                    std::thread::sleep(min_frame_time - spent);
                }
            }
        }

        self.running = false;
        debug!("driver loop stopped after {} frames", self.frames);
    }
}

impl Default for Driver {
    fn default() -> Self {
        Driver::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every frame it sees and stops itself after a limit.
    struct Recorder {
        seen: Vec<Frame>,
        stop_after: Option<usize>,
    }

    impl Recorder {
        fn new() -> Recorder {
            Recorder {
                seen: Vec::new(),
                stop_after: None,
            }
        }
    }

    impl Animate for Recorder {
        fn step(&mut self, frame: &Frame) -> bool {
            self.seen.push(*frame);
            match self.stop_after {
                Some(limit) => self.seen.len() < limit,
                None => true,
            }
        }
    }

    #[test]
    fn fixed_timeline_is_deterministic() {
        let mut scene = Recorder::new();
        let mut driver = Driver::fixed_with_config(0.25, DriverConfig::new().with_max_frames(3));
        driver.run(&mut scene);

        assert_eq!(scene.seen.len(), 3);
        assert_eq!(scene.seen[0].elapsed, 0.0);
        assert_eq!(scene.seen[1].elapsed, 0.25);
        assert_eq!(scene.seen[2].elapsed, 0.5);
        for (k, frame) in scene.seen.iter().enumerate() {
            assert_eq!(frame.delta, 0.25);
            assert_eq!(frame.index, k as u64);
        }
    }

    #[test]
    fn the_frame_cap_stops_the_loop() {
        let mut scene = Recorder::new();
        let mut driver = Driver::fixed_with_config(0.1, DriverConfig::new().with_max_frames(5));
        driver.run(&mut scene);

        assert_eq!(scene.seen.len(), 5);
        assert_eq!(driver.frames(), 5);
        assert!(!driver.is_running());

        // The cap counts total frames, so a second run steps nothing.
        driver.run(&mut scene);
        assert_eq!(scene.seen.len(), 5);
    }

    #[test]
    fn a_scene_can_stop_the_loop() {
        let mut scene = Recorder::new();
        scene.stop_after = Some(2);
        let mut driver = Driver::fixed(0.1);
        driver.run(&mut scene);

        assert_eq!(scene.seen.len(), 2);
        assert!(!driver.is_running());
    }

    #[test]
    fn manual_stepping_keeps_the_frame_counter() {
        let mut scene = Recorder::new();
        let mut driver = Driver::fixed(0.5);

        assert!(driver.step_once(&mut scene));
        assert!(driver.step_once(&mut scene));
        assert!(driver.step_once(&mut scene));

        assert_eq!(driver.frames(), 3);
        assert_eq!(scene.seen[2].index, 2);
        assert_eq!(scene.seen[2].elapsed, 1.0);
    }

    #[test]
    fn a_closure_is_a_scene() {
        let mut ticks = 0;
        let mut driver = Driver::fixed_with_config(0.1, DriverConfig::new().with_max_frames(4));
        driver.run(&mut |_frame: &Frame| {
            ticks += 1;
            true
        });

        assert_eq!(ticks, 4);
    }

    #[test]
    fn start_and_stop_toggle_the_running_flag() {
        let mut driver = Driver::fixed(0.1);
        assert!(!driver.is_running());
        driver.start();
        assert!(driver.is_running());
        driver.stop();
        assert!(!driver.is_running());
    }

    #[test]
    fn realtime_frames_are_monotonic() {
        let mut scene = Recorder::new();
        let mut driver = Driver::new();
        driver.step_once(&mut scene);
        driver.step_once(&mut scene);

        assert!(scene.seen[1].elapsed >= scene.seen[0].elapsed);
        assert!(scene.seen[0].delta >= 0.0);
        assert!(scene.seen[1].delta >= 0.0);
    }

    #[test]
    #[should_panic(expected = "fixed timestep must be positive")]
    fn a_zero_timestep_is_rejected() {
        let _ = Driver::fixed(0.0);
    }

    #[test]
    #[should_panic]
    fn a_zero_framerate_limit_is_rejected() {
        let _ = DriverConfig::new().with_framerate_limit(0);
    }
}
