//! Seam between CPU-side buffers and the engine that draws them.
//!
//! wisp does not talk to a GPU itself. Whatever consumes a
//! [`PointCloud`](crate::cloud::PointCloud) implements [`PositionSink`] and
//! receives the raw bytes to re-upload whenever the cloud changed on the CPU
//! side.

/// Receiver for position buffers that changed on the CPU side.
pub trait PositionSink {
    /// Takes the full `[x, y, z]*` coordinate buffer, as bytes, after a
    /// CPU-side change.
    fn upload_positions(&mut self, bytes: &[u8]);
}

/// A sink that keeps what it received.
///
/// Stands in for a real engine in headless runs and tests: it counts uploads
/// and retains the latest buffer as f32 coordinates.
#[derive(Default)]
pub struct RecordingSink {
    uploads: usize,
    last: Vec<f32>,
}

impl RecordingSink {
    /// Creates a sink that has received nothing yet.
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }

    /// Number of uploads received so far.
    #[inline]
    pub fn uploads(&self) -> usize {
        self.uploads
    }

    /// The most recently uploaded buffer, as coordinates.
    #[inline]
    pub fn last_positions(&self) -> &[f32] {
        &self.last
    }
}

impl PositionSink for RecordingSink {
    fn upload_positions(&mut self, bytes: &[u8]) {
        self.uploads += 1;
        // The incoming view may not be f32-aligned, so copy instead of casting.
        self.last = bytemuck::pod_collect_to_vec(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_uploads_and_recovers_coordinates() {
        let mut sink = RecordingSink::new();
        assert_eq!(sink.uploads(), 0);

        let coords: [f32; 6] = [1.0, 2.0, 3.0, -1.0, -2.0, -3.0];
        sink.upload_positions(bytemuck::cast_slice(&coords));
        assert_eq!(sink.uploads(), 1);
        assert_eq!(sink.last_positions(), &coords[..]);
    }

    #[test]
    fn keeps_only_the_latest_buffer() {
        let mut sink = RecordingSink::new();
        sink.upload_positions(bytemuck::cast_slice(&[1.0f32, 2.0, 3.0]));
        sink.upload_positions(bytemuck::cast_slice(&[9.0f32, 8.0, 7.0]));
        assert_eq!(sink.uploads(), 2);
        assert_eq!(sink.last_positions(), &[9.0, 8.0, 7.0]);
    }

    #[test]
    fn accepts_byte_buffers_of_any_alignment() {
        let mut bytes = Vec::new();
        for v in &[0.5f32, -0.25, 4.0] {
            bytes.extend_from_slice(&v.to_ne_bytes());
        }

        let mut sink = RecordingSink::new();
        sink.upload_positions(&bytes);
        assert_eq!(sink.last_positions(), &[0.5, -0.25, 4.0]);
    }
}
