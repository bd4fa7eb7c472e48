//! Five thousand points rolling in a sine wave, tuned live from the panel.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wisp::prelude::*;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(18);
    let mut cloud = PointCloud::from_positions(scatter_cube(&mut rng, 5000, 5.0));
    let colors = random_colors(&mut rng, cloud.len());
    println!(
        "scattered {} points ({} color channels)",
        cloud.len(),
        colors.len()
    );

    let wave = Rc::new(RefCell::new(Wave::new()));
    let mut panel = Panel::new();
    {
        let wave = wave.clone();
        panel.slider("amplitude", 0.0, 3.0, 0.01, move |v| {
            wave.borrow_mut().amplitude = v;
        });
    }
    {
        let wave = wave.clone();
        panel.slider("frequency", 0.0, 4.0, 0.01, move |v| {
            wave.borrow_mut().frequency = v;
        });
    }
    {
        let wave = wave.clone();
        panel.slider("speed", 0.0, 4.0, 0.01, move |v| {
            wave.borrow_mut().speed = v;
        });
    }

    let mut screen = RecordingSink::new();

    // Ten seconds at sixty frames per second.
    let mut driver = Driver::fixed_with_config(
        1.0 / 60.0,
        DriverConfig::new().with_max_frames(600),
    );
    driver.run(&mut |frame: &Frame| {
        if frame.index == 300 {
            // Crank the swell halfway through the run.
            panel.set("amplitude", 2.0).unwrap();
            panel.set("frequency", 0.5).unwrap();
        }
        wave.borrow().step(&mut cloud, frame.elapsed);
        cloud.sync_to(&mut screen);
        true
    });

    let (mut lowest, mut highest) = (f32::MAX, f32::MIN);
    for k in 0..cloud.len() {
        lowest = lowest.min(cloud.y(k));
        highest = highest.max(cloud.y(k));
    }
    println!(
        "{} frames driven, {} uploads, final surface spans y = {:.3}..{:.3}",
        driver.frames(),
        screen.uploads(),
        lowest,
        highest
    );
}
