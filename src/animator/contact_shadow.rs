//! Baked shadow blob that follows a body over flat ground.

use nalgebra::Point3;

/// Keeps a pre-rendered shadow texture under a moving body.
///
/// The blob stays on the ground plane, lifted a hair to avoid z-fighting
/// with it, and fades as the body rises: full `max_opacity` at height zero,
/// invisible one unit up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactShadow {
    /// Height of the ground plane.
    pub ground_y: f32,
    /// Offset above the ground plane.
    pub lift: f32,
    /// Opacity when the body is at height zero.
    pub max_opacity: f32,
}

impl Default for ContactShadow {
    fn default() -> Self {
        ContactShadow {
            ground_y: 0.0,
            lift: 0.01,
            max_opacity: 0.3,
        }
    }
}

impl ContactShadow {
    /// Creates a shadow over a ground plane at height zero.
    pub fn new() -> ContactShadow {
        ContactShadow::default()
    }

    /// Sets the ground plane height.
    pub fn with_ground(mut self, ground_y: f32) -> ContactShadow {
        self.ground_y = ground_y;
        self
    }

    /// Sets the opacity at height zero.
    pub fn with_max_opacity(mut self, max_opacity: f32) -> ContactShadow {
        self.max_opacity = max_opacity;
        self
    }

    /// Where the blob sits, and how opaque it is, for a body at `body`.
    ///
    /// The opacity is clamped to `[0, max_opacity]`, so a body far above the
    /// ground casts nothing and one below never over-darkens.
    pub fn follow(&self, body: &Point3<f32>) -> (Point3<f32>, f32) {
        let position = Point3::new(body.x, self.ground_y + self.lift, body.z);
        let opacity = ((1.0 - body.y) * self.max_opacity).clamp(0.0, self.max_opacity);
        (position, opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn the_blob_tracks_the_body_over_the_ground() {
        let shadow = ContactShadow::new().with_ground(-0.5);
        let (position, _) = shadow.follow(&Point3::new(1.2, 0.8, -0.4));
        assert_eq!(position.x, 1.2);
        assert_eq!(position.z, -0.4);
        assert_relative_eq!(position.y, -0.49, epsilon = 1e-6);
    }

    #[test]
    fn opacity_fades_with_height() {
        let shadow = ContactShadow::new();
        let at = |y: f32| shadow.follow(&Point3::new(0.0, y, 0.0)).1;

        assert_relative_eq!(at(0.0), 0.3, epsilon = 1e-6);
        assert_relative_eq!(at(0.5), 0.15, epsilon = 1e-6);
        assert_relative_eq!(at(1.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn opacity_is_clamped_at_both_ends() {
        let shadow = ContactShadow::new();
        let at = |y: f32| shadow.follow(&Point3::new(0.0, y, 0.0)).1;

        // High above the ground: fully faded, never negative.
        assert_eq!(at(3.0), 0.0);
        // Below height zero: capped at max_opacity, never darker.
        assert_eq!(at(-2.0), 0.3);
    }
}
