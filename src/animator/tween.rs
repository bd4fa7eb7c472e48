//! One-shot eased transitions on the scene timeline.

/// Cubic ease-in-out over a normalized `[0, 1]` input.
///
/// Starts and ends at zero velocity, crossing the midpoint at `u = 0.5`.
pub fn ease_in_out_cubic(u: f32) -> f32 {
    if u < 0.5 {
        4.0 * u * u * u
    } else {
        let v = -2.0 * u + 2.0;
        1.0 - v * v * v / 2.0
    }
}

/// An eased transition between two values, pinned to the scene timeline.
///
/// Evaluation is a pure function of the frame timestamp: before
/// `start_time` the tween holds `from`, after `start_time + duration` it
/// holds `to`. Nothing is integrated, so evaluating out of order or twice is
/// harmless.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Value before the transition begins.
    pub from: f32,
    /// Value after the transition ends.
    pub to: f32,
    /// Timeline instant at which the transition begins.
    pub start_time: f32,
    /// Length of the transition in seconds.
    pub duration: f32,
}

impl Tween {
    /// Creates a transition from `from` to `to`, starting at `start_time`
    /// and lasting `duration` seconds.
    ///
    /// # Panics
    /// Panics if `duration` is not strictly positive.
    pub fn new(from: f32, to: f32, start_time: f32, duration: f32) -> Tween {
        assert!(
            duration > 0.0,
            "tween duration must be positive, got {}",
            duration
        );
        Tween {
            from,
            to,
            start_time,
            duration,
        }
    }

    /// The eased value at time `t`.
    pub fn value_at(&self, t: f32) -> f32 {
        let u = ((t - self.start_time) / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out_cubic(u)
    }

    /// Returns `true` once the transition has run its course at time `t`.
    #[inline]
    pub fn finished_at(&self, t: f32) -> bool {
        t >= self.start_time + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn the_easing_curve_hits_its_anchors() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_relative_eq!(ease_in_out_cubic(0.25), 0.0625, epsilon = 1e-6);
        assert_relative_eq!(ease_in_out_cubic(0.75), 0.9375, epsilon = 1e-6);
    }

    #[test]
    fn the_easing_curve_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..=100 {
            let value = ease_in_out_cubic(step as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn values_are_pinned_outside_the_window() {
        let tween = Tween::new(2.0, 8.0, 10.0, 1.5);
        assert_eq!(tween.value_at(0.0), 2.0);
        assert_eq!(tween.value_at(10.0), 2.0);
        assert_eq!(tween.value_at(11.5), 8.0);
        assert_eq!(tween.value_at(100.0), 8.0);
    }

    #[test]
    fn the_midpoint_splits_the_range() {
        let tween = Tween::new(2.0, 8.0, 10.0, 1.5);
        assert_relative_eq!(tween.value_at(10.75), 5.0, epsilon = 1e-5);
    }

    #[test]
    fn finished_at_tracks_the_window_end() {
        let tween = Tween::new(0.0, 6.0, 3.0, 1.5);
        assert!(!tween.finished_at(3.0));
        assert!(!tween.finished_at(4.4));
        assert!(tween.finished_at(4.5));
        assert!(tween.finished_at(9.0));
    }

    #[test]
    fn a_descending_tween_descends() {
        let tween = Tween::new(5.0, -5.0, 0.0, 2.0);
        assert!(tween.value_at(0.5) > tween.value_at(1.5));
        assert_eq!(tween.value_at(2.0), -5.0);
    }

    #[test]
    #[should_panic(expected = "duration must be positive")]
    fn a_zero_duration_is_rejected() {
        let _ = Tween::new(0.0, 1.0, 0.0, 0.0);
    }
}
