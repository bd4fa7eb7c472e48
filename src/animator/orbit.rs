//! Circular flight paths and vertical bobbing.

use nalgebra::Point3;

/// A horizontal circular path around the y axis.
///
/// The angle grows at `angular_velocity` radians per second, negative values
/// running the other way around. The radius may breathe around its base
/// value with a slow sine wobble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Angular speed in radians per second.
    pub angular_velocity: f32,
    /// Base distance from the axis.
    pub radius: f32,
    /// Angle at `t = 0`.
    pub phase: f32,
    /// Amplitude of the radius wobble. Zero disables it.
    pub wobble_amplitude: f32,
    /// Frequency of the radius wobble, radians per second.
    pub wobble_frequency: f32,
}

impl Orbit {
    /// Creates a steady circular orbit.
    pub fn new(angular_velocity: f32, radius: f32) -> Orbit {
        Orbit {
            angular_velocity,
            radius,
            phase: 0.0,
            wobble_amplitude: 0.0,
            wobble_frequency: 0.0,
        }
    }

    /// Sets the angle at `t = 0`.
    pub fn with_phase(mut self, phase: f32) -> Orbit {
        self.phase = phase;
        self
    }

    /// Makes the radius breathe by `amplitude` at `frequency` radians per
    /// second.
    pub fn with_wobble(mut self, amplitude: f32, frequency: f32) -> Orbit {
        self.wobble_amplitude = amplitude;
        self.wobble_frequency = frequency;
        self
    }

    /// The distance from the axis at time `t`, wobble included.
    #[inline]
    pub fn radius_at(&self, t: f32) -> f32 {
        self.radius + self.wobble_amplitude * (self.wobble_frequency * t).sin()
    }

    /// The position on the orbit at time `t`, at the given height.
    pub fn position_at(&self, t: f32, height: f32) -> Point3<f32> {
        let angle = self.angular_velocity * t + self.phase;
        let radius = self.radius_at(t);
        Point3::new(angle.cos() * radius, height, angle.sin() * radius)
    }
}

/// Vertical bobbing built from a sum of sine components.
///
/// # Example
/// ```
/// use wisp::animator::Bounce;
///
/// // A two-tone hover: sin(4t) + sin(2.5t).
/// let hover = Bounce::sine(4.0).plus(1.0, 2.5);
/// assert_eq!(hover.offset_at(0.0), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Bounce {
    /// `(amplitude, frequency)` sine components.
    components: Vec<(f32, f32)>,
    rectified: bool,
}

impl Bounce {
    /// A single unit-amplitude sine at `frequency` radians per second.
    pub fn sine(frequency: f32) -> Bounce {
        Bounce {
            components: vec![(1.0, frequency)],
            rectified: false,
        }
    }

    /// Layers another sine on top.
    pub fn plus(mut self, amplitude: f32, frequency: f32) -> Bounce {
        self.components.push((amplitude, frequency));
        self
    }

    /// Folds the wave to its absolute value, so the motion reads as bouncing
    /// off the ground instead of passing through it.
    pub fn rectified(mut self) -> Bounce {
        self.rectified = true;
        self
    }

    /// The height offset at time `t`.
    pub fn offset_at(&self, t: f32) -> f32 {
        let mut offset = 0.0;
        for &(amplitude, frequency) in &self.components {
            offset += amplitude * (frequency * t).sin();
        }
        if self.rectified {
            offset.abs()
        } else {
            offset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn the_orbit_starts_on_the_x_axis() {
        let orbit = Orbit::new(0.5, 4.0);
        let position = orbit.position_at(0.0, 2.0);
        assert_eq!(position, Point3::new(4.0, 2.0, 0.0));
    }

    #[test]
    fn a_quarter_turn_lands_on_the_z_axis() {
        let orbit = Orbit::new(1.0, 1.5);
        let position = orbit.position_at(FRAC_PI_2, 0.0);
        assert_relative_eq!(position.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(position.z, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn negative_velocity_runs_clockwise() {
        let forward = Orbit::new(0.5, 4.0).position_at(0.3, 0.0);
        let backward = Orbit::new(-0.5, 4.0).position_at(0.3, 0.0);
        assert_relative_eq!(forward.x, backward.x, epsilon = 1e-6);
        assert_relative_eq!(forward.z, -backward.z, epsilon = 1e-6);
    }

    #[test]
    fn the_phase_shifts_the_start_angle() {
        let orbit = Orbit::new(1.0, 2.0).with_phase(PI);
        let position = orbit.position_at(0.0, 0.0);
        assert_relative_eq!(position.x, -2.0, epsilon = 1e-6);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn the_wobble_breathes_the_radius() {
        let orbit = Orbit::new(-0.18, 7.0).with_wobble(1.0, 0.32);
        assert_eq!(orbit.radius_at(0.0), 7.0);

        // Peak of the wobble sine.
        let peak_time = FRAC_PI_2 / 0.32;
        assert_relative_eq!(orbit.radius_at(peak_time), 8.0, epsilon = 1e-4);

        // The position always sits at the wobbled radius.
        let position = orbit.position_at(1.7, 0.0);
        let distance = (position.x * position.x + position.z * position.z).sqrt();
        assert_relative_eq!(distance, orbit.radius_at(1.7), epsilon = 1e-5);
    }

    #[test]
    fn a_single_sine_bounce_tracks_its_wave() {
        let bounce = Bounce::sine(3.0);
        for &t in &[0.0f32, 0.4, 1.1, 2.9] {
            assert_relative_eq!(bounce.offset_at(t), (3.0 * t).sin(), epsilon = 1e-9);
        }
    }

    #[test]
    fn layered_sines_add_up() {
        let bounce = Bounce::sine(5.0).plus(1.0, 2.0);
        let t = 0.73;
        assert_relative_eq!(
            bounce.offset_at(t),
            (5.0 * t).sin() + (2.0 * t).sin(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn a_rectified_bounce_never_goes_below_ground() {
        let bounce = Bounce::sine(3.0).rectified();
        for step in 0..200 {
            let t = step as f32 * 0.05;
            let offset = bounce.offset_at(t);
            assert!(offset >= 0.0);
            assert_relative_eq!(offset, (3.0 * t).sin().abs(), epsilon = 1e-9);
        }
    }
}
