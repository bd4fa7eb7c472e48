//! Every light kind on one stage, with panel controls for the tunable ones.

use std::f32::consts::{FRAC_PI_2, PI};
use wisp::prelude::*;

fn main() {
    env_logger::init();

    let stage = Rc::new(RefCell::new(Stage::new()));
    {
        let mut stage = stage.borrow_mut();
        let matte = Material::default().with_roughness(0.4);
        stage.add(
            Prop::new("sphere", Shape::Sphere { radius: 0.5 })
                .with_placement(Placement::at(-1.5, 0.0, 0.0))
                .with_material(matte.clone()),
        );
        stage.add(
            Prop::new(
                "cube",
                Shape::Cuboid {
                    extents: Vector3::new(0.75, 0.75, 0.75),
                },
            )
            .with_material(matte.clone()),
        );
        stage.add(
            Prop::new(
                "torus",
                Shape::Torus {
                    radius: 0.3,
                    tube_radius: 0.2,
                },
            )
            .with_placement(Placement::at(1.5, 0.0, 0.0))
            .with_material(matte.clone()),
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
                Placement::at(0.0, -0.65, 0.0).with_rotation(
                    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2),
                ),
            )
            .with_material(matte),
        );

        let rig = &mut stage.lights;
        rig.add(Light::ambient().with_intensity(0.5));
        rig.add(
            Light::directional()
                .with_color(parse_hex("#00fffc").unwrap())
                .with_intensity(0.3)
                .with_position(1.0, 0.25, 0.0),
        );
        rig.add(Light::hemisphere(BLUE).with_color(RED).with_intensity(0.3));
        rig.add(
            Light::point(3.0)
                .with_color(parse_hex("#ff9000").unwrap())
                .with_position(1.0, -0.5, 1.0),
        );
        rig.add(
            Light::rect_area(3.0, 1.0)
                .with_color(parse_hex("#4e00ff").unwrap())
                .with_intensity(5.0)
                .with_position(1.0, -0.5, 1.0),
        );
        rig.add(
            Light::spot(PI * 0.05, 0.25, 6.0)
                .with_color(parse_hex("#78ff00").unwrap())
                .with_intensity(0.5)
                .with_position(0.0, 2.0, 3.0)
                .with_target(-0.75, 0.0, 0.0),
        );
        println!("rigged {} of {} light slots", rig.len(), MAX_LIGHTS);
    }

    let mut panel = Panel::new();
    let wash = Rc::clone(&stage);
    panel.slider("ambient intensity", 0.0, 1.0, 0.001, move |v| {
        wash.borrow_mut().lights.lights[0].intensity = v;
    });
    let beam = Rc::clone(&stage);
    panel.slider("directional intensity", 0.0, 1.0, 0.001, move |v| {
        beam.borrow_mut().lights.lights[1].intensity = v;
    });
    let cone = Rc::clone(&stage);
    panel.slider("spot angle", 0.0, 1.0, 0.001, move |v| {
        if let LightKind::Spot { angle, .. } = &mut cone.borrow_mut().lights.lights[5].kind {
            *angle = v;
        }
    });
    let aim = Rc::clone(&stage);
    panel.slider("spot target x", -10.0, 10.0, 0.25, move |v| {
        if let LightKind::Spot { target, .. } = &mut aim.borrow_mut().lights.lights[5].kind {
            target.x = v;
        }
    });

    // Out-of-range values clamp, unknown names report themselves.
    let applied = panel.set("directional intensity", 2.0).unwrap();
    println!("asked for 2.0, panel applied {}", applied);
    if let Err(oops) = panel.set("moon intensity", 0.5) {
        println!("{}", oops);
    }
    panel.set("spot angle", 0.3).unwrap();
    panel.set("spot target x", -2.5).unwrap();

    let spin = Spin::new(0.15, 0.1);
    let mut driver = Driver::fixed_with_config(
        1.0 / 60.0,
        DriverConfig::new().with_max_frames(300),
    );
    driver.run(&mut |frame: &Frame| {
        let rotation = spin.rotation_at(frame.elapsed);
        for prop in stage.borrow_mut().props.iter_mut().take(3) {
            prop.placement.rotation = rotation;
        }
        true
    });

    let stage = stage.borrow();
    for light in &stage.lights.lights {
        println!("{:>12} at {:.3}", kind_name(light), light.intensity);
    }
    if let LightKind::Spot { angle, target, .. } = &stage.lights.lights[5].kind {
        println!("the spot narrows to {:.2} rad, aimed at x = {:.2}", angle, target.x);
    }
}

fn kind_name(light: &Light) -> &'static str {
    match light.kind {
        LightKind::Ambient => "ambient",
        LightKind::Directional => "directional",
        LightKind::Hemisphere { .. } => "hemisphere",
        LightKind::Point { .. } => "point",
        LightKind::RectArea { .. } => "rect area",
        LightKind::Spot { .. } => "spot",
    }
}
