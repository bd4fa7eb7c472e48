//! Sine-wave animation over a point cloud.

use crate::cloud::PointCloud;

/// Animates a point cloud as a rolling sine carpet.
///
/// Each frame, every point's height becomes
/// `amplitude * sin(speed * t + frequency * x)`, where `t` is the frame's
/// elapsed time and `x` the point's own (never modified) x coordinate, so
/// points at different x ride different phases of the same wave. The x and z
/// coordinates are left untouched.
///
/// The default configuration is the plain `y = sin(t + x)` wave.
///
/// # Example
/// ```
/// use wisp::animator::Wave;
/// use wisp::cloud::PointCloud;
///
/// let mut cloud = PointCloud::from_positions(vec![0.0, 5.0, 2.0]);
/// Wave::new().step(&mut cloud, 0.0);
/// assert_eq!(cloud.y(0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    /// Peak height of the wave.
    pub amplitude: f32,
    /// Spatial frequency along the x axis.
    pub frequency: f32,
    /// How fast the wave rolls, in radians per second.
    pub speed: f32,
}

impl Default for Wave {
    fn default() -> Self {
        Wave {
            amplitude: 1.0,
            frequency: 1.0,
            speed: 1.0,
        }
    }
}

impl Wave {
    /// Creates the default `y = sin(t + x)` wave.
    pub fn new() -> Wave {
        Wave::default()
    }

    /// Sets the peak height.
    pub fn with_amplitude(mut self, amplitude: f32) -> Wave {
        self.amplitude = amplitude;
        self
    }

    /// Sets the spatial frequency along x.
    pub fn with_frequency(mut self, frequency: f32) -> Wave {
        self.frequency = frequency;
        self
    }

    /// Sets the rolling speed.
    pub fn with_speed(mut self, speed: f32) -> Wave {
        self.speed = speed;
        self
    }

    /// Rewrites every point's height for time `elapsed`, marking the cloud
    /// dirty so the next sync re-uploads it.
    ///
    /// An empty cloud is left untouched, dirty flag included. Stepping twice
    /// with the same `elapsed` yields identical heights.
    pub fn step(&self, cloud: &mut PointCloud, elapsed: f32) {
        if cloud.is_empty() {
            return;
        }

        for k in 0..cloud.len() {
            let x = cloud.x(k);
            let y = self.amplitude * (self.speed * elapsed + self.frequency * x).sin();
            cloud.set_y(k, y);
        }
    }
}
