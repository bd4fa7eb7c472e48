//! Three shapes sharing one material, tuned live from the panel.

use wisp::prelude::*;

fn main() {
    env_logger::init();

    let stage = Rc::new(RefCell::new(Stage::new()));
    {
        let mut stage = stage.borrow_mut();
        let chrome = Material::default().with_metalness(1.0).with_roughness(0.0);
        stage.add(
            Prop::new("sphere", Shape::Sphere { radius: 0.5 })
                .with_placement(Placement::at(-1.5, 0.0, 0.0))
                .with_material(chrome.clone()),
        );
        stage.add(
            Prop::new(
                "plane",
                Shape::Plane {
                    width: 1.0,
                    height: 1.0,
                },
            )
            .with_material(chrome.clone()),
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
            .with_material(chrome),
        );
        stage.lights.add(Light::ambient().with_intensity(0.5));
        stage
            .lights
            .add(Light::point(0.0).with_intensity(0.5).with_position(2.0, 3.0, 4.0));
    }

    // The point of a shared material: one slider moves every prop.
    let mut panel = Panel::new();
    let shiny = Rc::clone(&stage);
    panel.slider("metalness", 0.0, 1.0, 0.0001, move |v| {
        for prop in &mut shiny.borrow_mut().props {
            prop.material.metalness = v;
        }
    });
    let rough = Rc::clone(&stage);
    panel.slider("roughness", 0.0, 1.0, 0.0001, move |v| {
        for prop in &mut rough.borrow_mut().props {
            prop.material.roughness = v;
        }
    });

    let spin = Spin::new(0.15, 0.1);
    let mut driver = Driver::fixed_with_config(
        1.0 / 60.0,
        DriverConfig::new().with_max_frames(300),
    );
    driver.run(&mut |frame: &Frame| {
        // Halfway through, drag the roughness slider.
        if frame.index == 150 {
            panel.set("roughness", 0.4).unwrap();
            println!("roughened the material at t = {:.2}s", frame.elapsed);
        }
        let rotation = spin.rotation_at(frame.elapsed);
        for prop in &mut stage.borrow_mut().props {
            prop.placement.rotation = rotation;
        }
        true
    });

    let stage = stage.borrow();
    let surface = &stage.props[0].material;
    println!(
        "after {} frames: metalness {:.2}, roughness {:.2}",
        driver.frames(),
        surface.metalness,
        surface.roughness
    );
    let (roll, pitch, _) = stage.props[2].placement.rotation.euler_angles();
    println!("the torus leans ({:.2}, {:.2})", roll, pitch);
}
