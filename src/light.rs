//! Lighting configuration for 3D scenes.
//!
//! Lights are plain data for the rendering engine to interpret. A scene
//! carries a [`LightRig`] with a bounded number of lights; each light is a
//! kind, a color, an intensity, a position, and optionally a shadow
//! projection.

use nalgebra::Point3;

use crate::color::{self, Color};

/// Maximum number of lights supported in a scene.
pub const MAX_LIGHTS: usize = 8;

/// The type of light source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightKind {
    /// Uniform light from every direction. Position is ignored.
    Ambient,

    /// Parallel rays (like the sun), aimed from the light position toward
    /// the origin.
    Directional,

    /// Sky/ground gradient light. The light's color is the sky; the payload
    /// is the ground color. Position is ignored.
    Hemisphere {
        /// Color shining up from below the horizon.
        ground: Color,
    },

    /// Emits equally in all directions from a point.
    Point {
        /// Maximum distance the light affects. Zero means unlimited.
        range: f32,
        /// Falloff exponent over the range.
        decay: f32,
    },

    /// A flat rectangular emitter, aimed at the origin.
    RectArea {
        /// Emitter width.
        width: f32,
        /// Emitter height.
        height: f32,
    },

    /// A cone of light from the light position toward `target`.
    Spot {
        /// Half-angle of the cone, in radians.
        angle: f32,
        /// Fraction of the cone over which the edge fades, in `[0, 1]`.
        penumbra: f32,
        /// Maximum distance the light affects. Zero means unlimited.
        range: f32,
        /// Falloff exponent over the range.
        decay: f32,
        /// Point the cone is aimed at.
        target: Point3<f32>,
    },
}

impl Default for LightKind {
    fn default() -> Self {
        LightKind::Point {
            range: 0.0,
            decay: 2.0,
        }
    }
}

/// Shadow projection settings for a shadow-casting light.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// Shadow map resolution, in texels per side.
    pub map_size: u32,
    /// Near plane of the shadow projection.
    pub near: f32,
    /// Far plane of the shadow projection.
    pub far: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow {
            map_size: 512,
            near: 0.5,
            far: 500.0,
        }
    }
}

impl Shadow {
    /// Creates default shadow settings.
    pub fn new() -> Shadow {
        Shadow::default()
    }

    /// Sets the shadow map resolution.
    pub fn with_map_size(mut self, map_size: u32) -> Shadow {
        self.map_size = map_size;
        self
    }

    /// Tightens the shadow projection to the given depth range.
    ///
    /// # Panics
    /// Panics unless `0 < near < far`.
    pub fn with_range(mut self, near: f32, far: f32) -> Shadow {
        assert!(
            near > 0.0 && near < far,
            "shadow range must satisfy 0 < near < far, got {}..{}",
            near,
            far
        );
        self.near = near;
        self.far = far;
        self
    }
}

/// A light source in the scene.
///
/// # Examples
/// ```
/// use wisp::color;
/// use wisp::light::{Light, Shadow};
///
/// // The moon: a dim, cold directional light that casts shadows.
/// let moon = Light::directional()
///     .with_color(color::MOONLIGHT)
///     .with_intensity(0.12)
///     .with_position(4.0, 5.0, -2.0)
///     .with_shadow(Shadow::new().with_map_size(256).with_range(1.0, 7.0));
///
/// assert!(moon.shadow.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Light {
    /// The kind of light source.
    pub kind: LightKind,
    /// The color of the light (RGBA, each component 0.0-1.0).
    pub color: Color,
    /// The intensity multiplier for the light.
    pub intensity: f32,
    /// World position of the light. Ignored by ambient and hemisphere
    /// lights.
    pub position: Point3<f32>,
    /// Shadow projection, for lights that cast one.
    pub shadow: Option<Shadow>,
    /// Whether the light is enabled.
    pub enabled: bool,
}

impl Default for Light {
    fn default() -> Self {
        Light {
            kind: LightKind::default(),
            color: color::WHITE,
            intensity: 1.0,
            position: Point3::origin(),
            shadow: None,
            enabled: true,
        }
    }
}

impl Light {
    /// Creates an ambient light.
    pub fn ambient() -> Light {
        Light {
            kind: LightKind::Ambient,
            ..Default::default()
        }
    }

    /// Creates a directional light (like the sun).
    pub fn directional() -> Light {
        Light {
            kind: LightKind::Directional,
            ..Default::default()
        }
    }

    /// Creates a hemisphere light with the given ground color. The sky
    /// color is the light's color.
    pub fn hemisphere(ground: Color) -> Light {
        Light {
            kind: LightKind::Hemisphere { ground },
            ..Default::default()
        }
    }

    /// Creates a point light affecting everything within `range`.
    pub fn point(range: f32) -> Light {
        Light {
            kind: LightKind::Point { range, decay: 2.0 },
            ..Default::default()
        }
    }

    /// Creates a rectangular area light.
    pub fn rect_area(width: f32, height: f32) -> Light {
        Light {
            kind: LightKind::RectArea { width, height },
            ..Default::default()
        }
    }

    /// Creates a spot light aimed at the origin.
    ///
    /// # Arguments
    /// * `angle` - Half-angle of the cone in radians
    /// * `penumbra` - Edge softness fraction in `[0, 1]`
    /// * `range` - Maximum distance the light affects
    pub fn spot(angle: f32, penumbra: f32, range: f32) -> Light {
        Light {
            kind: LightKind::Spot {
                angle,
                penumbra,
                range,
                decay: 2.0,
                target: Point3::origin(),
            },
            ..Default::default()
        }
    }

    /// Sets the light color.
    pub fn with_color(mut self, color: Color) -> Light {
        self.color = color;
        self
    }

    /// Sets the light intensity.
    ///
    /// # Arguments
    /// * `intensity` - Intensity multiplier (default: 1.0)
    pub fn with_intensity(mut self, intensity: f32) -> Light {
        self.intensity = intensity;
        self
    }

    /// Places the light in the world.
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Light {
        self.position = Point3::new(x, y, z);
        self
    }

    /// Aims a spot light at a point.
    ///
    /// # Panics
    /// Panics if the light is not a spot light.
    pub fn with_target(mut self, x: f32, y: f32, z: f32) -> Light {
        match &mut self.kind {
            LightKind::Spot { target, .. } => *target = Point3::new(x, y, z),
            _ => panic!("only spot lights aim at a target"),
        }
        self
    }

    /// Makes the light cast shadows with the given projection settings.
    pub fn with_shadow(mut self, shadow: Shadow) -> Light {
        self.shadow = Some(shadow);
        self
    }

    /// Sets whether the light is enabled.
    pub fn with_enabled(mut self, enabled: bool) -> Light {
        self.enabled = enabled;
        self
    }
}

/// The set of lights illuminating a scene.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightRig {
    /// The lights, at most [`MAX_LIGHTS`] of them.
    pub lights: Vec<Light>,
}

impl LightRig {
    /// Creates a new empty light rig.
    pub fn new() -> LightRig {
        LightRig {
            lights: Vec::with_capacity(MAX_LIGHTS),
        }
    }

    /// Adds a light to the rig if there's room.
    ///
    /// Returns `true` if the light was added, `false` if the rig is full.
    pub fn add(&mut self, light: Light) -> bool {
        if self.lights.len() < MAX_LIGHTS {
            self.lights.push(light);
            true
        } else {
            log::warn!("light rig is full ({} lights), dropping one", MAX_LIGHTS);
            false
        }
    }

    /// Returns `true` if the rig has reached the maximum number of lights.
    pub fn is_full(&self) -> bool {
        self.lights.len() >= MAX_LIGHTS
    }

    /// Returns the number of lights in the rig.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Returns `true` if the rig holds no lights.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Removes all lights from the rig.
    pub fn clear(&mut self) {
        self.lights.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fill_in_the_fields() {
        let lantern = Light::point(7.0)
            .with_color(color::EMBER)
            .with_intensity(1.5)
            .with_position(0.0, 2.2, 2.7)
            .with_shadow(Shadow::new().with_map_size(256).with_range(1.0, 7.0));

        assert_eq!(
            lantern.kind,
            LightKind::Point {
                range: 7.0,
                decay: 2.0
            }
        );
        assert_eq!(lantern.color, color::EMBER);
        assert_eq!(lantern.intensity, 1.5);
        assert_eq!(lantern.position, Point3::new(0.0, 2.2, 2.7));
        let shadow = lantern.shadow.unwrap();
        assert_eq!(shadow.map_size, 256);
        assert_eq!(shadow.near, 1.0);
        assert_eq!(shadow.far, 7.0);
        assert!(lantern.enabled);
    }

    #[test]
    fn defaults_are_a_plain_white_light() {
        let light = Light::default();
        assert_eq!(light.color, color::WHITE);
        assert_eq!(light.intensity, 1.0);
        assert_eq!(light.position, Point3::origin());
        assert!(light.shadow.is_none());
        assert!(light.enabled);
    }

    #[test]
    fn every_kind_can_be_constructed() {
        assert_eq!(Light::ambient().kind, LightKind::Ambient);
        assert_eq!(Light::directional().kind, LightKind::Directional);
        assert_eq!(
            Light::hemisphere(color::BLUE).kind,
            LightKind::Hemisphere {
                ground: color::BLUE
            }
        );
        assert_eq!(
            Light::rect_area(1.0, 1.0).kind,
            LightKind::RectArea {
                width: 1.0,
                height: 1.0
            }
        );
        match Light::spot(0.3, 0.25, 10.0).kind {
            LightKind::Spot { angle, target, .. } => {
                assert_eq!(angle, 0.3);
                assert_eq!(target, Point3::origin());
            }
            other => panic!("expected a spot light, got {:?}", other),
        }
    }

    #[test]
    fn a_spot_light_can_be_aimed() {
        let spot = Light::spot(0.3, 0.25, 10.0).with_target(-0.75, 0.0, 0.0);
        match spot.kind {
            LightKind::Spot { target, .. } => {
                assert_eq!(target, Point3::new(-0.75, 0.0, 0.0));
            }
            other => panic!("expected a spot light, got {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "only spot lights")]
    fn aiming_a_point_light_is_rejected() {
        let _ = Light::point(3.0).with_target(1.0, 0.0, 0.0);
    }

    #[test]
    fn the_rig_is_bounded() {
        let mut rig = LightRig::new();
        assert!(rig.is_empty());

        for _ in 0..MAX_LIGHTS {
            assert!(rig.add(Light::default()));
        }
        assert!(rig.is_full());
        assert_eq!(rig.len(), MAX_LIGHTS);

        // One past the cap is refused.
        assert!(!rig.add(Light::default()));
        assert_eq!(rig.len(), MAX_LIGHTS);

        rig.clear();
        assert!(rig.is_empty());
    }

    #[test]
    #[should_panic(expected = "0 < near < far")]
    fn an_inverted_shadow_range_is_rejected() {
        let _ = Shadow::new().with_range(7.0, 1.0);
    }
}
