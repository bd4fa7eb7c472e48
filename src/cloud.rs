//! CPU-side point position buffers with re-upload tracking.

use nalgebra::Point3;

use crate::sink::PositionSink;

/// A fixed-size set of points stored as a flat `[x, y, z, x, y, z, ...]`
/// buffer, the layout the engine uploads verbatim.
///
/// The cloud tracks whether its coordinates changed since the last
/// [`sync_to`](PointCloud::sync_to) call. Every mutating accessor marks it
/// dirty; syncing pushes the buffer to the sink and clears the flag, so an
/// unchanged cloud costs nothing per frame.
pub struct PointCloud {
    positions: Vec<f32>,
    dirty: bool,
}

impl PointCloud {
    /// Creates a cloud from a flat coordinate buffer.
    ///
    /// A non-empty cloud starts dirty so its first sync uploads the initial
    /// coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `positions.len()` is not a multiple of 3.
    pub fn from_positions(positions: Vec<f32>) -> PointCloud {
        assert!(
            positions.len() % 3 == 0,
            "position buffer length {} is not a multiple of 3",
            positions.len()
        );
        PointCloud {
            dirty: !positions.is_empty(),
            positions,
        }
    }

    /// Creates a cloud from typed points.
    pub fn from_points(points: &[Point3<f32>]) -> PointCloud {
        let mut positions = Vec::with_capacity(points.len() * 3);
        for point in points {
            positions.extend_from_slice(&[point.x, point.y, point.z]);
        }
        PointCloud::from_positions(positions)
    }

    /// The number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    /// Is this cloud empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if the coordinates changed since the last sync.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces a re-upload on the next sync.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The x coordinate of point `k`.
    #[inline]
    pub fn x(&self, k: usize) -> f32 {
        self.positions[k * 3]
    }

    /// The y coordinate of point `k`.
    #[inline]
    pub fn y(&self, k: usize) -> f32 {
        self.positions[k * 3 + 1]
    }

    /// The z coordinate of point `k`.
    #[inline]
    pub fn z(&self, k: usize) -> f32 {
        self.positions[k * 3 + 2]
    }

    /// Point `k` as a typed point.
    #[inline]
    pub fn point(&self, k: usize) -> Point3<f32> {
        Point3::new(self.x(k), self.y(k), self.z(k))
    }

    /// Sets the x coordinate of point `k`, marking the cloud dirty.
    #[inline]
    pub fn set_x(&mut self, k: usize, x: f32) {
        self.positions[k * 3] = x;
        self.dirty = true;
    }

    /// Sets the y coordinate of point `k`, marking the cloud dirty.
    #[inline]
    pub fn set_y(&mut self, k: usize, y: f32) {
        self.positions[k * 3 + 1] = y;
        self.dirty = true;
    }

    /// Sets the z coordinate of point `k`, marking the cloud dirty.
    #[inline]
    pub fn set_z(&mut self, k: usize, z: f32) {
        self.positions[k * 3 + 2] = z;
        self.dirty = true;
    }

    /// Overwrites point `k`, marking the cloud dirty.
    #[inline]
    pub fn set_point(&mut self, k: usize, point: Point3<f32>) {
        self.positions[k * 3] = point.x;
        self.positions[k * 3 + 1] = point.y;
        self.positions[k * 3 + 2] = point.z;
        self.dirty = true;
    }

    /// Immutably accesses the raw coordinate buffer.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Mutably accesses the raw coordinate buffer.
    ///
    /// This method marks the cloud as dirty.
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [f32] {
        self.dirty = true;
        &mut self.positions
    }

    /// Pushes the coordinate buffer to `sink` if it changed since the last
    /// call, then clears the dirty flag.
    ///
    /// Returns `true` if an upload happened.
    pub fn sync_to(&mut self, sink: &mut dyn PositionSink) -> bool {
        if !self.dirty {
            return false;
        }

        sink.upload_positions(bytemuck::cast_slice(&self.positions));
        self.dirty = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    #[test]
    fn a_new_cloud_is_dirty_until_synced() {
        let mut cloud = PointCloud::from_positions(vec![1.0, 2.0, 3.0]);
        assert!(cloud.is_dirty());

        let mut sink = RecordingSink::new();
        assert!(cloud.sync_to(&mut sink));
        assert!(!cloud.is_dirty());
        assert_eq!(sink.uploads(), 1);
        assert_eq!(sink.last_positions(), &[1.0, 2.0, 3.0]);

        // Nothing changed, so nothing is re-uploaded.
        assert!(!cloud.sync_to(&mut sink));
        assert_eq!(sink.uploads(), 1);
    }

    #[test]
    fn writes_mark_the_cloud_dirty_again() {
        let mut cloud = PointCloud::from_positions(vec![0.0; 9]);
        let mut sink = RecordingSink::new();
        cloud.sync_to(&mut sink);

        cloud.set_y(2, 7.5);
        assert!(cloud.is_dirty());
        assert!(cloud.sync_to(&mut sink));
        assert_eq!(sink.uploads(), 2);
        assert_eq!(sink.last_positions()[7], 7.5);
    }

    #[test]
    fn reads_do_not_mark_the_cloud_dirty() {
        let mut cloud = PointCloud::from_positions(vec![1.0, 2.0, 3.0]);
        let mut sink = RecordingSink::new();
        cloud.sync_to(&mut sink);

        let _ = cloud.x(0);
        let _ = cloud.point(0);
        let _ = cloud.positions();
        assert!(!cloud.is_dirty());
    }

    #[test]
    fn coordinate_accessors_address_the_flat_buffer() {
        let mut cloud = PointCloud::from_positions(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.x(1), 4.0);
        assert_eq!(cloud.y(1), 5.0);
        assert_eq!(cloud.z(1), 6.0);
        assert_eq!(cloud.point(0), Point3::new(1.0, 2.0, 3.0));

        cloud.set_x(0, -1.0);
        cloud.set_z(1, -6.0);
        assert_eq!(cloud.positions(), &[-1.0, 2.0, 3.0, 4.0, 5.0, -6.0]);
    }

    #[test]
    fn from_points_matches_the_flat_layout() {
        let points = [Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)];
        let cloud = PointCloud::from_points(&points);
        assert_eq!(cloud.positions(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn an_empty_cloud_has_nothing_to_upload() {
        let mut cloud = PointCloud::from_positions(Vec::new());
        assert!(cloud.is_empty());
        assert!(!cloud.is_dirty());

        let mut sink = RecordingSink::new();
        assert!(!cloud.sync_to(&mut sink));
        assert_eq!(sink.uploads(), 0);
    }

    #[test]
    #[should_panic(expected = "not a multiple of 3")]
    fn a_ragged_buffer_is_rejected() {
        let _ = PointCloud::from_positions(vec![1.0, 2.0, 3.0, 4.0]);
    }
}
