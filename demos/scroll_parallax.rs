//! Three scroll sections, a particle backdrop, and a cursor parallax rig.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wisp::prelude::*;

/// One-shot twirl fired when a section scrolls into view.
struct Twirl {
    x: Tween,
    y: Tween,
    z: Tween,
}

impl Twirl {
    fn begin(now: f32, from: (f32, f32, f32)) -> Twirl {
        Twirl {
            x: Tween::new(from.0, from.0 + 6.0, now, 1.5),
            y: Tween::new(from.1, from.1 + 3.0, now, 1.5),
            z: Tween::new(from.2, from.2 + 1.5, now, 1.5),
        }
    }

    fn angles_at(&self, t: f32) -> (f32, f32, f32) {
        (self.x.value_at(t), self.y.value_at(t), self.z.value_at(t))
    }
}

fn main() {
    env_logger::init();

    let mut parallax = Parallax::new(ParallaxConfig::new());
    let stage = Rc::new(RefCell::new(Stage::new()));
    {
        let mut stage = stage.borrow_mut();
        stage.background = Some(parse_hex("#1e1a20").unwrap());
        stage.add(
            Prop::new(
                "torus",
                Shape::Torus {
                    radius: 1.0,
                    tube_radius: 0.4,
                },
            )
            .with_placement(Placement::at(2.0, parallax.section_height(0), 0.0)),
        );
        stage.add(
            Prop::new(
                "cone",
                Shape::Cone {
                    radius: 1.0,
                    height: 2.0,
                    segments: 32,
                },
            )
            .with_placement(Placement::at(-2.0, parallax.section_height(1), 0.0)),
        );
        stage.add(
            Prop::new(
                "knot",
                Shape::TorusKnot {
                    radius: 0.8,
                    tube_radius: 0.35,
                },
            )
            .with_placement(Placement::at(2.0, parallax.section_height(2), 0.0)),
        );
        stage.lights.add(Light::directional().with_position(1.0, 1.0, 0.0));
    }

    // One shared tint for every section object.
    let mut panel = Panel::new();
    let tinted = Rc::clone(&stage);
    panel.color("material color", move |c| {
        for prop in &mut tinted.borrow_mut().props {
            prop.material.color = c;
        }
    });
    panel
        .set_color("material color", parse_hex("#ffeded").unwrap())
        .unwrap();
    println!(
        "tinted {} props to {:?}",
        stage.borrow().len(),
        stage.borrow().props[0].material.color
    );

    let mut backdrop = PointCloud::from_positions(scatter_column(
        &mut StdRng::seed_from_u64(20),
        200,
        10.0,
        4.0,
        3,
    ));
    let mut screen = RecordingSink::new();

    let spin = Spin::new(0.1, 0.12);
    let mut spun = (0.0f32, 0.0f32);
    let mut twirls: [Option<Twirl>; 3] = [None, None, None];

    let mut driver = Driver::fixed_with_config(
        1.0 / 60.0,
        DriverConfig::new().with_max_frames(600),
    );
    driver.run(&mut |frame: &Frame| {
        // Scripted reader: 500 px/s, pausing on the last section.
        let scroll = (frame.elapsed * 500.0).min(2000.0);
        if let Some(section) = parallax.set_scroll(scroll) {
            if section < twirls.len() {
                println!("section {} reached at t = {:.2}s", section, frame.elapsed);
                let from = twirls[section]
                    .as_ref()
                    .map_or((0.0, 0.0, 0.0), |twirl| twirl.angles_at(frame.elapsed));
                twirls[section] = Some(Twirl::begin(frame.elapsed, from));
            }
        }
        parallax.set_cursor(
            (frame.elapsed * 0.7).sin() * 0.3,
            (frame.elapsed * 0.9).cos() * 0.2,
        );
        parallax.update(frame.delta);

        // The idle spin accumulates; the twirl adds on top of it.
        spun = spin.advance(spun, frame.delta);
        for (prop, twirl) in stage.borrow_mut().props.iter_mut().zip(&twirls) {
            let (tx, ty, tz) = twirl
                .as_ref()
                .map_or((0.0, 0.0, 0.0), |twirl| twirl.angles_at(frame.elapsed));
            prop.placement.rotation =
                UnitQuaternion::from_euler_angles(spun.0 + tx, spun.1 + ty, tz);
        }

        backdrop.sync_to(&mut screen);
        true
    });

    let stage = stage.borrow();
    let (roll, pitch, yaw) = stage.props[2].placement.rotation.euler_angles();
    println!(
        "camera rests at y = {:.1} over section {}, group offset {:?}",
        parallax.camera_height(),
        parallax.section(),
        parallax.group_offset()
    );
    println!(
        "the knot came to rest rolled ({:.2}, {:.2}, {:.2})",
        roll, pitch, yaw
    );
    println!(
        "{} particles uploaded {} time(s) over {} frames",
        backdrop.len(),
        screen.uploads(),
        driver.frames()
    );
}
