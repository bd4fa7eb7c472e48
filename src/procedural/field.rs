use std::f32::consts::PI;

use rand::Rng;

use crate::stage::Placement;

/// Strews placements through a cube around the origin, tumbled and shrunk at
/// random.
///
/// Positions spread across `extent` on every axis, orientations tumble by up
/// to half a turn around the `x` and `y` axes, and each placement picks one
/// uniform scale in `[0.0, 1.0)`. Handy for filling empty space around a
/// centerpiece with debris.
///
/// # Example
/// ```
/// # use rand::SeedableRng;
/// # use wisp::procedural::strewn_field;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(13);
/// let donuts = strewn_field(&mut rng, 100, 10.0);
/// assert_eq!(donuts.len(), 100);
/// ```
pub fn strewn_field<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f32) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(count);
    for _ in 0..count {
        let x = (rng.gen::<f32>() - 0.5) * extent;
        let y = (rng.gen::<f32>() - 0.5) * extent;
        let z = (rng.gen::<f32>() - 0.5) * extent;
        let roll = rng.gen::<f32>() * PI;
        let pitch = rng.gen::<f32>() * PI;
        let scale = rng.gen::<f32>();

        placements.push(
            Placement::at(x, y, z)
                .with_rotation(nalgebra::UnitQuaternion::from_euler_angles(roll, pitch, 0.0))
                .with_scale(scale),
        );
    }
    placements
}
