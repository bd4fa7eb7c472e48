//! A ready-made haunted house: a cottage in the fog, ringed by graves and
//! circled by three glowing ghosts.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use nalgebra::{UnitQuaternion, Vector3};
use rand::Rng;

use super::{Fog, Material, Placement, Prop, Shape, Stage};
use crate::animator::{Bounce, Orbit};
use crate::color::{
    CYAN, EMBER, LEAF_GREEN, MAGENTA, MOONLIGHT, NIGHT_SKY, STONE_GRAY, TERRACOTTA, YELLOW,
};
use crate::light::{Light, Shadow};
use crate::procedural::{ring_scatter, RingScatter};

/// Tuning knobs for [`build_haunted_house`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HauntedHouseConfig {
    /// Number of graves scattered around the house.
    pub grave_count: usize,
    /// Ring the graves land in.
    pub graveyard: RingScatter,
    /// Edge length of the square of grass everything stands on.
    pub ground_extent: f32,
}

impl Default for HauntedHouseConfig {
    fn default() -> Self {
        HauntedHouseConfig {
            grave_count: 50,
            graveyard: RingScatter::default(),
            ground_extent: 20.0,
        }
    }
}

impl HauntedHouseConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of graves.
    pub fn with_grave_count(mut self, count: usize) -> Self {
        self.grave_count = count;
        self
    }

    /// Sets the ring the graves land in.
    pub fn with_graveyard(mut self, graveyard: RingScatter) -> Self {
        self.graveyard = graveyard;
        self
    }

    /// Sets the edge length of the ground plane.
    pub fn with_ground_extent(mut self, extent: f32) -> Self {
        self.ground_extent = extent;
        self
    }
}

/// Builds the haunted house stage.
///
/// The cottage stands on a square of grass with a pyramid roof, a lit door,
/// four bushes, and a randomly scattered graveyard. Night fog closes in at
/// fifteen units and the backdrop matches it. Lights are added in a fixed
/// order: the ambient fill, the moon, the door lantern, then the three
/// ghosts.
///
/// Ghost lights start where their [`ghost_flights`] put them at time zero;
/// stepping the flights each frame keeps them moving.
///
/// # Example
/// ```
/// # use rand::SeedableRng;
/// # use wisp::stage::{build_haunted_house, HauntedHouseConfig};
/// let mut rng = rand::rngs::StdRng::seed_from_u64(31);
/// let stage = build_haunted_house(&mut rng, &HauntedHouseConfig::new());
///
/// assert_eq!(stage.props_named("grave").count(), 50);
/// assert!(stage.fog.is_some());
/// ```
pub fn build_haunted_house<R: Rng + ?Sized>(rng: &mut R, config: &HauntedHouseConfig) -> Stage {
    let mut stage = Stage::new();

    stage.add(
        Prop::new(
            "floor",
            Shape::Plane {
                width: config.ground_extent,
                height: config.ground_extent,
            },
        )
        .with_placement(Placement::default().with_rotation(
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2),
        ))
        .with_material(Material::textured("grass"))
        .with_receive_shadow(true),
    );

    stage.add(
        Prop::new(
            "walls",
            Shape::Cuboid {
                extents: Vector3::new(4.0, 2.5, 4.0),
            },
        )
        .with_placement(Placement::at(0.0, 2.5 / 2.0, 0.0))
        .with_material(Material::textured("bricks"))
        .with_cast_shadow(true),
    );

    // Four sides make a pyramid; an eighth of a turn lines its edges up with
    // the walls below.
    stage.add(
        Prop::new(
            "roof",
            Shape::Cone {
                radius: 3.5,
                height: 1.0,
                segments: 4,
            },
        )
        .with_placement(Placement::at(0.0, 2.5 + 0.5, 0.0).with_rotation(
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_4),
        ))
        .with_material(Material::colored(TERRACOTTA)),
    );

    // Nudged out of the wall plane to avoid z-fighting.
    stage.add(
        Prop::new(
            "door",
            Shape::Plane {
                width: 2.2,
                height: 2.2,
            },
        )
        .with_placement(Placement::at(0.0, 1.0, 2.0 + 0.01))
        .with_material(Material::textured("door")),
    );

    let bushes = [
        (0.5, Vector3::new(0.8, 0.2, 2.2)),
        (0.25, Vector3::new(1.4, 0.1, 2.1)),
        (0.4, Vector3::new(-0.8, 0.1, 2.2)),
        (0.15, Vector3::new(-1.0, 0.05, 2.6)),
    ];
    for (i, (scale, position)) in bushes.iter().enumerate() {
        stage.add(
            Prop::new(&format!("bush.{}", i), Shape::Sphere { radius: 1.0 })
                .with_placement(
                    Placement::at(position.x, position.y, position.z).with_scale(*scale),
                )
                .with_material(Material::colored(LEAF_GREEN))
                .with_cast_shadow(true),
        );
    }

    for (i, placement) in ring_scatter(rng, config.grave_count, &config.graveyard)
        .into_iter()
        .enumerate()
    {
        stage.add(
            Prop::new(
                &format!("grave.{}", i),
                Shape::Cuboid {
                    extents: Vector3::new(0.6, 0.8, 0.2),
                },
            )
            .with_placement(placement)
            .with_material(Material::colored(STONE_GRAY))
            .with_cast_shadow(true),
        );
    }

    stage
        .lights
        .add(Light::ambient().with_color(MOONLIGHT).with_intensity(0.12));
    stage.lights.add(
        Light::directional()
            .with_color(MOONLIGHT)
            .with_intensity(0.12)
            .with_position(4.0, 5.0, -2.0)
            .with_shadow(Shadow::new().with_map_size(256).with_range(0.5, 7.0)),
    );
    stage.lights.add(
        Light::point(7.0)
            .with_color(EMBER)
            .with_position(0.0, 2.2, 2.7)
            .with_shadow(Shadow::new().with_map_size(256).with_range(0.5, 7.0)),
    );

    for ((orbit, bounce), color) in ghost_flights().iter().zip([MAGENTA, CYAN, YELLOW]) {
        let start = orbit.position_at(0.0, bounce.offset_at(0.0));
        stage.lights.add(
            Light::point(3.0)
                .with_color(color)
                .with_intensity(2.0)
                .with_position(start.x, start.y, start.z)
                .with_shadow(Shadow::new().with_map_size(256).with_range(0.5, 7.0)),
        );
    }

    stage.fog = Some(Fog::new(NIGHT_SKY, 1.0, 15.0));
    stage.background = Some(NIGHT_SKY);

    stage
}

/// The flight plans of the three ghosts, in the same order their lights are
/// added to the stage.
///
/// The first ghost circles close and fast, the second counters it further
/// out with a jittery bounce, and the third drifts wide on a wobbling radius.
pub fn ghost_flights() -> [(Orbit, Bounce); 3] {
    [
        (Orbit::new(0.5, 4.0), Bounce::sine(3.0)),
        (Orbit::new(-0.32, 5.0), Bounce::sine(4.0).plus(1.0, 2.5)),
        (
            Orbit::new(-0.18, 7.0).with_wobble(1.0, 0.32),
            Bounce::sine(5.0).plus(1.0, 2.0),
        ),
    ]
}
