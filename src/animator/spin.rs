//! Slow constant-rate rotation for showcase objects.

use nalgebra::{UnitQuaternion, Vector3};

/// Rotates an object at fixed rates about the x and y axes.
///
/// Angles are an absolute function of elapsed time, not an accumulation, so
/// a scene stepped twice at the same timestamp shows the same pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    /// Rotation rate about the x axis, radians per second.
    pub x_rate: f32,
    /// Rotation rate about the y axis, radians per second.
    pub y_rate: f32,
}

impl Spin {
    /// Creates a spin with the given axis rates.
    pub fn new(x_rate: f32, y_rate: f32) -> Spin {
        Spin { x_rate, y_rate }
    }

    /// The `(x, y)` rotation angles at time `t`.
    #[inline]
    pub fn angles_at(&self, t: f32) -> (f32, f32) {
        (self.x_rate * t, self.y_rate * t)
    }

    /// The pose at time `t`, y rotation applied first.
    pub fn rotation_at(&self, t: f32) -> UnitQuaternion<f32> {
        let (x_angle, y_angle) = self.angles_at(t);
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), x_angle)
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), y_angle)
    }

    /// Advances accumulated `(x, y)` angles by one frame of `delta` seconds.
    ///
    /// For loops that keep their own running angles and add other
    /// contributions on top, rather than deriving the pose from elapsed time.
    #[inline]
    pub fn advance(&self, angles: (f32, f32), delta: f32) -> (f32, f32) {
        (
            angles.0 + self.x_rate * delta,
            angles.1 + self.y_rate * delta,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn angles_grow_linearly_with_time() {
        let spin = Spin::new(0.15, 0.1);
        assert_eq!(spin.angles_at(0.0), (0.0, 0.0));
        assert_eq!(spin.angles_at(10.0), (1.5, 1.0));
        assert_eq!(spin.angles_at(-10.0), (-1.5, -1.0));
    }

    #[test]
    fn the_pose_starts_at_identity() {
        let spin = Spin::new(0.15, 0.1);
        let pose = spin.rotation_at(0.0);
        assert_relative_eq!(pose.angle(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn a_single_axis_spin_is_an_axis_angle_rotation() {
        let spin = Spin::new(0.0, 0.25);
        let pose = spin.rotation_at(2.0);
        let expected = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.5);
        assert_relative_eq!(pose.angle_to(&expected), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn poses_at_equal_times_are_equal() {
        let spin = Spin::new(0.15, 0.1);
        assert_eq!(spin.rotation_at(3.7), spin.rotation_at(3.7));
    }

    #[test]
    fn accumulated_angles_track_the_rates() {
        let spin = Spin::new(0.1, 0.12);
        let mut angles = (0.0, 0.0);
        for _ in 0..10 {
            angles = spin.advance(angles, 0.5);
        }
        assert_relative_eq!(angles.0, 0.5, epsilon = 1e-6);
        assert_relative_eq!(angles.1, 0.6, epsilon = 1e-6);
    }
}
