//! A bouncing ball shaded by a baked shadow blob instead of a shadow map.

use std::f32::consts::FRAC_PI_2;
use wisp::prelude::*;

fn main() {
    env_logger::init();

    let mut stage = Stage::new();
    let matte = Material::default().with_roughness(0.7);
    stage.add(
        Prop::new("ball", Shape::Sphere { radius: 0.5 })
            .with_material(matte.clone())
            .with_cast_shadow(true),
    );
    stage.add(
        Prop::new(
            "floor",
            Shape::Plane {
                width: 5.0,
                height: 5.0,
            },
        )
        .with_placement(
            Placement::at(0.0, -0.5, 0.0)
                .with_rotation(UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2)),
        )
        .with_material(matte)
        .with_receive_shadow(true),
    );
    // The blob: a small dark plane whose alpha does the shading.
    let mut smoke = Material::textured("simpleShadow");
    smoke.color = BLACK;
    stage.add(
        Prop::new(
            "blob",
            Shape::Plane {
                width: 1.5,
                height: 1.5,
            },
        )
        .with_placement(
            Placement::at(0.0, -0.49, 0.0)
                .with_rotation(UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2)),
        )
        .with_material(smoke),
    );
    stage.lights.add(Light::ambient().with_intensity(0.3));
    stage.lights.add(
        Light::directional()
            .with_intensity(0.3)
            .with_position(2.0, 2.0, -1.0)
            .with_shadow(Shadow::new().with_map_size(1024).with_range(1.0, 6.0)),
    );

    let orbit = Orbit::new(1.0, 1.5);
    let bounce = Bounce::sine(3.0).rectified();
    let shadow = ContactShadow::new().with_ground(-0.5);

    let mut touchdowns = 0u32;
    let mut prev_height = f32::MAX;
    let (mut faintest, mut darkest) = (f32::MAX, 0.0f32);

    let mut driver = Driver::fixed_with_config(
        1.0 / 60.0,
        DriverConfig::new().with_max_frames(600),
    );
    driver.run(&mut |frame: &Frame| {
        let height = bounce.offset_at(frame.elapsed);
        let ball = orbit.position_at(frame.elapsed, height);
        let (blob, opacity) = shadow.follow(&ball);

        stage.props[0].placement.translation = ball.coords;
        stage.props[2].placement.translation = blob.coords;
        stage.props[2].material.color.a = opacity;

        if height < 0.05 && prev_height >= 0.05 {
            touchdowns += 1;
        }
        prev_height = height;
        faintest = faintest.min(opacity);
        darkest = darkest.max(opacity);
        true
    });

    let blob = stage.find("blob").unwrap();
    println!(
        "{} touchdowns over {} frames; the blob ranged {:.3}..{:.3} and rests at alpha {:.3}",
        touchdowns,
        driver.frames(),
        faintest,
        darkest,
        blob.material.color.a
    );
}
