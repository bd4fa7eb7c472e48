use std::f32::consts::TAU;

use rand::Rng;

use crate::stage::Placement;

/// Shape of the annulus [`ring_scatter`] fills.
///
/// The defaults match a graveyard ring around a 4x4 house: placements land
/// between 3 and 9 units out, sit 0.3 units high, and lean by at most 0.2
/// radians in yaw and tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingScatter {
    /// Smallest distance from the origin a placement can land at.
    pub inner_radius: f32,
    /// Largest distance from the origin a placement can land at.
    pub outer_radius: f32,
    /// Height every placement sits at.
    pub height: f32,
    /// Largest lean, in radians, applied around the vertical and depth axes.
    pub tilt: f32,
}

impl Default for RingScatter {
    fn default() -> Self {
        RingScatter {
            inner_radius: 3.0,
            outer_radius: 9.0,
            height: 0.3,
            tilt: 0.2,
        }
    }
}

impl RingScatter {
    /// Creates the default ring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the radial band placements land in.
    ///
    /// # Panics
    /// Panics unless `0.0 <= inner <= outer`.
    pub fn with_radii(mut self, inner: f32, outer: f32) -> Self {
        assert!(
            0.0 <= inner && inner <= outer,
            "ring radii must satisfy 0 <= inner <= outer, got {}..{}",
            inner,
            outer
        );
        self.inner_radius = inner;
        self.outer_radius = outer;
        self
    }

    /// Sets the height placements sit at.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Sets the largest lean, in radians.
    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = tilt;
        self
    }
}

/// Scatters placements in a ring around the origin.
///
/// Each placement draws an angle anywhere on the circle and a distance inside
/// the configured band, then leans by a random yaw and tilt. Scale is left at
/// one.
///
/// # Example
/// ```
/// # use rand::SeedableRng;
/// # use wisp::procedural::{ring_scatter, RingScatter};
/// let mut rng = rand::rngs::StdRng::seed_from_u64(17);
/// let graves = ring_scatter(&mut rng, 50, &RingScatter::new());
/// assert_eq!(graves.len(), 50);
/// ```
pub fn ring_scatter<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    config: &RingScatter,
) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(count);
    for _ in 0..count {
        let angle = rng.gen_range(0.0..TAU);
        let radius = config.inner_radius
            + rng.gen::<f32>() * (config.outer_radius - config.inner_radius);
        let yaw = (rng.gen::<f32>() - 0.5) * 2.0 * config.tilt;
        let lean = (rng.gen::<f32>() - 0.5) * 2.0 * config.tilt;

        placements.push(
            Placement::at(angle.sin() * radius, config.height, angle.cos() * radius)
                .with_rotation(nalgebra::UnitQuaternion::from_euler_angles(0.0, yaw, lean)),
        );
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn placements_land_inside_the_ring() {
        let mut rng = StdRng::seed_from_u64(17);
        let config = RingScatter::new();
        let placements = ring_scatter(&mut rng, 200, &config);

        assert_eq!(placements.len(), 200);
        for placement in &placements {
            let t = placement.translation;
            let radius = (t.x * t.x + t.z * t.z).sqrt();
            assert!(radius >= config.inner_radius - 1.0e-4);
            assert!(radius <= config.outer_radius + 1.0e-4);
            assert_eq!(t.y, config.height);
        }
    }

    #[test]
    fn leans_stay_below_the_configured_tilt() {
        let mut rng = StdRng::seed_from_u64(17);
        let config = RingScatter::new().with_tilt(0.2);
        let placements = ring_scatter(&mut rng, 200, &config);

        // Yaw and lean are each at most 0.2 rad, so the combined rotation
        // angle cannot exceed their sum.
        for placement in &placements {
            assert!(placement.rotation.angle() <= 0.4 + 1.0e-4);
        }
    }

    #[test]
    fn a_zero_tilt_ring_stands_upright() {
        let mut rng = StdRng::seed_from_u64(17);
        let config = RingScatter::new().with_tilt(0.0);

        for placement in ring_scatter(&mut rng, 50, &config) {
            assert_eq!(placement.rotation.angle(), 0.0);
        }
    }

    #[test]
    #[should_panic(expected = "ring radii must satisfy")]
    fn an_inverted_band_is_rejected() {
        let _ = RingScatter::new().with_radii(9.0, 3.0);
    }
}
