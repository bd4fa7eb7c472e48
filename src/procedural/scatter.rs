use rand::Rng;

/// Scatters points uniformly inside a cube centered on the origin.
///
/// The returned buffer is flat: three consecutive values per point, ready to
/// be handed to [`PointCloud::from_positions`](crate::cloud::PointCloud::from_positions).
///
/// # Arguments
/// * `rng` - The random number generator to draw from
/// * `count` - Number of points to scatter
/// * `extent` - Full edge length of the cube
///
/// # Example
/// ```
/// # use rand::SeedableRng;
/// # use wisp::procedural::scatter_cube;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let positions = scatter_cube(&mut rng, 5000, 5.0);
/// assert_eq!(positions.len(), 15000);
/// ```
pub fn scatter_cube<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f32) -> Vec<f32> {
    let mut positions = Vec::with_capacity(count * 3);
    for _ in 0..count * 3 {
        positions.push((rng.gen::<f32>() - 0.5) * extent);
    }
    positions
}

/// Draws one random RGB triple per point, each channel in `[0.0, 1.0)`.
///
/// The layout mirrors [`scatter_cube`]: three consecutive values per point.
pub fn random_colors<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f32> {
    let mut colors = Vec::with_capacity(count * 3);
    for _ in 0..count * 3 {
        colors.push(rng.gen::<f32>());
    }
    colors
}

/// Scatters points behind a stack of vertically spaced sections.
///
/// `x` and `z` spread across `extent` like [`scatter_cube`], while `y` runs
/// from half a section above the first section down through the last one, so
/// the points stay in view however far the stack is scrolled.
///
/// # Arguments
/// * `rng` - The random number generator to draw from
/// * `count` - Number of points to scatter
/// * `extent` - Full horizontal spread of the cloud
/// * `section_spacing` - Vertical distance between consecutive sections
/// * `sections` - Number of sections the cloud spans
pub fn scatter_column<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    extent: f32,
    section_spacing: f32,
    sections: usize,
) -> Vec<f32> {
    let mut positions = Vec::with_capacity(count * 3);
    for _ in 0..count {
        positions.push((rng.gen::<f32>() - 0.5) * extent);
        positions.push(
            section_spacing * 0.5 - rng.gen::<f32>() * section_spacing * sections as f32,
        );
        positions.push((rng.gen::<f32>() - 0.5) * extent);
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn cube_scatters_stay_inside_the_cube() {
        let mut rng = StdRng::seed_from_u64(42);
        let positions = scatter_cube(&mut rng, 1000, 5.0);

        assert_eq!(positions.len(), 3000);
        assert!(positions.iter().all(|v| v.abs() <= 2.5));
    }

    #[test]
    fn an_empty_scatter_is_an_empty_buffer() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(scatter_cube(&mut rng, 0, 5.0).is_empty());
    }

    #[test]
    fn the_same_seed_scatters_the_same_points() {
        let mut first = StdRng::seed_from_u64(9);
        let mut second = StdRng::seed_from_u64(9);

        assert_eq!(
            scatter_cube(&mut first, 100, 5.0),
            scatter_cube(&mut second, 100, 5.0)
        );
    }

    #[test]
    fn random_colors_are_normalized_channels() {
        let mut rng = StdRng::seed_from_u64(42);
        let colors = random_colors(&mut rng, 500);

        assert_eq!(colors.len(), 1500);
        assert!(colors.iter().all(|c| (0.0..1.0).contains(c)));
    }

    #[test]
    fn column_scatters_span_every_section() {
        let mut rng = StdRng::seed_from_u64(42);
        let positions = scatter_column(&mut rng, 200, 10.0, 4.0, 3);

        assert_eq!(positions.len(), 600);
        for point in positions.chunks_exact(3) {
            assert!(point[0].abs() <= 5.0);
            assert!(point[2].abs() <= 5.0);
            assert!(point[1] <= 2.0 && point[1] > 2.0 - 12.0);
        }
    }
}
