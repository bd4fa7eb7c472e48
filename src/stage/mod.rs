//! Static description of a demo scene: props, lights, fog, backdrop.
//!
//! A [`Stage`] is plain data. It does not draw anything; it is the input a
//! renderer (or a test) walks to decide what to draw. Animators reposition
//! props between frames by mutating their [`Placement`].

pub use self::house::{build_haunted_house, ghost_flights, HauntedHouseConfig};

use crate::color::{self, Color};
use crate::light::LightRig;
use nalgebra::{UnitQuaternion, Vector3};

mod house;

/// Geometry of a prop, described by its generating parameters.
///
/// Shapes are kept parametric so a stage can be rebuilt at any tessellation
/// level by whatever consumes it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Axis-aligned box with the given full extents.
    Cuboid { extents: Vector3<f32> },
    /// Sphere with the given radius.
    Sphere { radius: f32 },
    /// Cone with its base on the local `xz` plane, pointing up.
    ///
    /// `segments` is the number of sides around the base; four sides make a
    /// pyramid.
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    /// Flat rectangle in the local `xy` plane.
    Plane { width: f32, height: f32 },
    /// Torus in the local `xy` plane.
    Torus { radius: f32, tube_radius: f32 },
    /// Trefoil torus knot.
    TorusKnot { radius: f32, tube_radius: f32 },
    /// Extruded text, centered on the origin.
    Text {
        content: String,
        size: f32,
        depth: f32,
    },
}

/// Position, orientation, and scale of a prop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Translation from the stage origin.
    pub translation: Vector3<f32>,
    /// Orientation around the translated origin.
    pub rotation: UnitQuaternion<f32>,
    /// Per-axis scale applied before rotation.
    pub scale: Vector3<f32>,
}

impl Default for Placement {
    fn default() -> Self {
        Placement {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Placement {
    /// Creates a placement at the given position, unrotated and unscaled.
    ///
    /// # Example
    /// ```
    /// # use wisp::stage::Placement;
    /// let on_the_roof = Placement::at(0.0, 3.0, 0.0);
    /// assert_eq!(on_the_roof.translation.y, 3.0);
    /// ```
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Placement {
            translation: Vector3::new(x, y, z),
            ..Default::default()
        }
    }

    /// Sets the orientation.
    pub fn with_rotation(mut self, rotation: UnitQuaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets a uniform scale on all three axes.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vector3::new(scale, scale, scale);
        self
    }
}

/// Surface appearance of a prop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Base color, multiplied with the texture if one is set.
    pub color: Color,
    /// How metallic the surface is, in `[0.0, 1.0]`.
    pub metalness: f32,
    /// How rough the surface is, in `[0.0, 1.0]`.
    pub roughness: f32,
    /// Name of a texture set registered with the renderer, if any.
    pub texture: Option<String>,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            color: color::WHITE,
            metalness: 0.0,
            roughness: 1.0,
            texture: None,
        }
    }
}

impl Material {
    /// Creates an untextured material with the given base color.
    pub fn colored(color: Color) -> Self {
        Material {
            color,
            ..Default::default()
        }
    }

    /// Creates a white material sampling the named texture set.
    pub fn textured(name: &str) -> Self {
        Material {
            texture: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Sets the metalness factor, clamped to `[0.0, 1.0]`.
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    /// Sets the roughness factor, clamped to `[0.0, 1.0]`.
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }
}

/// A named object on the stage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prop {
    /// Name used to find the prop again, not required to be unique.
    pub name: String,
    /// The prop's geometry.
    pub shape: Shape,
    /// Where the prop sits.
    pub placement: Placement,
    /// How the prop looks.
    pub material: Material,
    /// Whether the prop casts shadows.
    pub casts_shadow: bool,
    /// Whether shadows are drawn onto the prop.
    pub receives_shadow: bool,
}

impl Prop {
    /// Creates a prop with a default placement and material, casting and
    /// receiving no shadows.
    pub fn new(name: &str, shape: Shape) -> Self {
        Prop {
            name: name.to_string(),
            shape,
            placement: Placement::default(),
            material: Material::default(),
            casts_shadow: false,
            receives_shadow: false,
        }
    }

    /// Sets where the prop sits.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets how the prop looks.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Sets whether the prop casts shadows.
    pub fn with_cast_shadow(mut self, casts: bool) -> Self {
        self.casts_shadow = casts;
        self
    }

    /// Sets whether shadows are drawn onto the prop.
    pub fn with_receive_shadow(mut self, receives: bool) -> Self {
        self.receives_shadow = receives;
        self
    }
}

/// Distance fog blended over the backdrop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fog {
    /// Color the scene fades towards.
    pub color: Color,
    /// Distance from the viewer at which the fog starts.
    pub near: f32,
    /// Distance from the viewer at which the fog is fully opaque.
    pub far: f32,
}

impl Fog {
    /// Creates a fog fading from `near` to `far`.
    ///
    /// # Panics
    /// Panics unless `0.0 <= near <= far`.
    pub fn new(color: Color, near: f32, far: f32) -> Self {
        assert!(
            0.0 <= near && near <= far,
            "fog range must satisfy 0 <= near <= far, got {}..{}",
            near,
            far
        );
        Fog { color, near, far }
    }
}

/// Everything a scene is made of, minus the camera.
///
/// # Example
/// ```
/// # use wisp::stage::{Material, Placement, Prop, Shape, Stage};
/// # use wisp::color::RED;
/// let mut stage = Stage::new();
/// stage.add(
///     Prop::new("ball", Shape::Sphere { radius: 0.5 })
///         .with_placement(Placement::at(0.0, 0.5, 0.0))
///         .with_material(Material::colored(RED)),
/// );
///
/// assert_eq!(stage.len(), 1);
/// assert!(stage.find("ball").is_some());
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stage {
    /// The props on the stage, in insertion order.
    pub props: Vec<Prop>,
    /// The lights illuminating the stage.
    pub lights: LightRig,
    /// Distance fog, if any.
    pub fog: Option<Fog>,
    /// Backdrop clear color, if any.
    pub background: Option<Color>,
}

impl Stage {
    /// Creates an empty, unlit stage.
    pub fn new() -> Self {
        Stage::default()
    }

    /// Adds a prop and returns a handle to it for further tweaking.
    pub fn add(&mut self, prop: Prop) -> &mut Prop {
        self.props.push(prop);
        let last = self.props.len() - 1;
        &mut self.props[last]
    }

    /// Returns the first prop with the given name.
    pub fn find(&self, name: &str) -> Option<&Prop> {
        self.props.iter().find(|p| p.name == name)
    }

    /// Returns the first prop with the given name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Prop> {
        self.props.iter_mut().find(|p| p.name == name)
    }

    /// Iterates over every prop whose name starts with `prefix`.
    ///
    /// Procedurally scattered props share a common name prefix, so this is
    /// how a whole batch is visited at once.
    pub fn props_named<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Prop> {
        self.props.iter().filter(move |p| p.name.starts_with(prefix))
    }

    /// Returns the number of props on the stage.
    #[inline]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Checks if the stage has no props.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RED, WHITE};

    #[test]
    fn the_default_placement_is_the_identity() {
        let placement = Placement::default();

        assert_eq!(placement.translation, Vector3::zeros());
        assert_eq!(placement.rotation, UnitQuaternion::identity());
        assert_eq!(placement.scale, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn placement_builders_compose() {
        let tilt = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.3);
        let placement = Placement::at(1.0, 2.0, 3.0)
            .with_rotation(tilt)
            .with_scale(0.5);

        assert_eq!(placement.translation, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(placement.rotation, tilt);
        assert_eq!(placement.scale, Vector3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn materials_clamp_their_factors() {
        let material = Material::colored(RED)
            .with_metalness(1.5)
            .with_roughness(-0.2);

        assert_eq!(material.metalness, 1.0);
        assert_eq!(material.roughness, 0.0);
    }

    #[test]
    fn a_textured_material_starts_white() {
        let material = Material::textured("bricks");

        assert_eq!(material.color, WHITE);
        assert_eq!(material.texture.as_deref(), Some("bricks"));
    }

    #[test]
    fn props_are_found_by_name() {
        let mut stage = Stage::new();
        stage.add(Prop::new("floor", Shape::Plane { width: 20.0, height: 20.0 }));
        stage.add(Prop::new("ball", Shape::Sphere { radius: 0.5 }));

        assert!(stage.find("floor").is_some());
        assert!(stage.find("lava").is_none());

        if let Some(ball) = stage.find_mut("ball") {
            ball.placement.translation.y = 2.0;
        }
        assert_eq!(stage.find("ball").map(|p| p.placement.translation.y), Some(2.0));
    }

    #[test]
    fn adding_returns_a_handle_to_the_new_prop() {
        let mut stage = Stage::new();
        let wall = stage.add(Prop::new("wall", Shape::Cuboid {
            extents: Vector3::new(4.0, 2.5, 4.0),
        }));
        wall.casts_shadow = true;

        assert!(stage.props[0].casts_shadow);
    }

    #[test]
    fn a_name_prefix_selects_a_batch_of_props() {
        let mut stage = Stage::new();
        for i in 0..3 {
            stage.add(Prop::new(
                &format!("grave.{}", i),
                Shape::Cuboid {
                    extents: Vector3::new(0.6, 0.8, 0.2),
                },
            ));
        }
        stage.add(Prop::new("floor", Shape::Plane { width: 20.0, height: 20.0 }));

        assert_eq!(stage.props_named("grave").count(), 3);
        assert_eq!(stage.props_named("floor").count(), 1);
        assert_eq!(stage.props_named("ghost").count(), 0);
    }

    #[test]
    #[should_panic(expected = "fog range must satisfy")]
    fn an_inverted_fog_range_is_rejected() {
        let _ = Fog::new(WHITE, 10.0, 1.0);
    }
}
