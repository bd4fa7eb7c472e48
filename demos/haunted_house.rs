//! The haunted house, fully staged: fog, graves, and three circling ghosts.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wisp::prelude::*;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(17);
    let stage = Rc::new(RefCell::new(build_haunted_house(
        &mut rng,
        &HauntedHouseConfig::new(),
    )));
    println!(
        "staged {} props under {} lights",
        stage.borrow().len(),
        stage.borrow().lights.len()
    );

    // The tuning panel mutates the rig in place. Light 0 is the ambient
    // wash, light 1 the moon.
    let mut panel = Panel::new();
    let moon = Rc::clone(&stage);
    panel.slider("moon intensity", 0.0, 1.0, 0.001, move |v| {
        moon.borrow_mut().lights.lights[1].intensity = v;
    });
    let moon = Rc::clone(&stage);
    panel.slider("moon x", -5.0, 5.0, 0.001, move |v| {
        moon.borrow_mut().lights.lights[1].position.x = v;
    });
    let wash = Rc::clone(&stage);
    panel.slider("ambient intensity", 0.0, 1.0, 0.001, move |v| {
        wash.borrow_mut().lights.lights[0].intensity = v;
    });

    // A cloudier night than the default.
    panel.set("moon intensity", 0.08).unwrap();
    panel.set("moon x", 2.5).unwrap();

    let flights = ghost_flights();
    let mut driver = Driver::fixed_with_config(
        1.0 / 60.0,
        DriverConfig::new().with_max_frames(600),
    );
    driver.run(&mut |frame: &Frame| {
        let mut stage = stage.borrow_mut();
        for (i, (orbit, bounce)) in flights.iter().enumerate() {
            let height = bounce.offset_at(frame.elapsed);
            stage.lights.lights[3 + i].position = orbit.position_at(frame.elapsed, height);
        }
        true
    });

    let stage = stage.borrow();
    for (i, ghost) in stage.lights.lights[3..].iter().enumerate() {
        println!(
            "ghost {} settled at ({:.2}, {:.2}, {:.2})",
            i, ghost.position.x, ghost.position.y, ghost.position.z
        );
    }
    println!(
        "the moon shines at {:.3} from x = {:.1}",
        stage.lights.lights[1].intensity, stage.lights.lights[1].position.x
    );
}
