/*!
# wisp

Keep It Simple, Stupid animation plumbing for tiny 3D demo scenes.

This library grew out of copying the same hundred lines between demo
programs: a clock, a frame loop, a point cloud riding a sine wave, and a
pile of scene glue rewritten every time. None of it needs a GPU to be worth
testing, yet it always ended up welded to one.

**wisp** keeps the animation math and the scene bookkeeping, and leaves
drawing to whatever engine is already at hand. Everything runs headless:
animators are pure functions of time, position buffers know when they need
re-uploading, and a fixed-timestep driver replays a demo identically on
every run.

## Features
Most features are one-liners.

* scatter a point cloud and ride it on a rolling sine wave.
* orbits, bounces, spins, and eased tweens as plain time-to-value maps.
* a demo loop with an owned running flag, frame caps, and a framerate limit.
* a ready-made haunted house stage with a scattered graveyard and three
  ghost lights.
* scroll-driven section tracking with cursor parallax.
* named tuning parameters bound to typed setter closures.

As an example, waving a five-thousand-point cloud for two simulated seconds
and counting the uploads it would cost:

```
use rand::SeedableRng;
use wisp::prelude::*;

let mut rng = rand::rngs::StdRng::seed_from_u64(7);
let mut cloud = PointCloud::from_positions(scatter_cube(&mut rng, 5000, 5.0));
let wave = Wave::new();
let mut screen = RecordingSink::new();

let mut driver = Driver::fixed_with_config(
    1.0 / 60.0,
    DriverConfig::new().with_max_frames(120),
);
driver.run(&mut |frame: &Frame| {
    wave.step(&mut cloud, frame.elapsed);
    cloud.sync_to(&mut screen)
});

assert_eq!(screen.uploads(), 120);
```

No window was opened; the `RecordingSink` stands in for the GPU. Swap in a
real renderer's sink and the same code animates on screen.

## Compilation
Simply add the following to your `Cargo.toml` file:

```text
[dependencies]
wisp = "0.1"
```

## Contributions
Keep in mind that **wisp** is KISS. One-liner features (from the user point
of view) are preferred.
*/

pub use nalgebra;

pub mod animator;
pub mod clock;
pub mod cloud;
pub mod color;
pub mod driver;
pub mod light;
pub mod params;
pub mod procedural;
pub mod sink;
pub mod stage;

pub mod prelude {
    //! Glob-import everything a demo needs.
    pub use crate::animator::*;
    pub use crate::clock::*;
    pub use crate::cloud::*;
    pub use crate::color::*;
    pub use crate::driver::*;
    pub use crate::light::*;
    pub use crate::params::*;
    pub use crate::procedural::*;
    pub use crate::sink::*;
    pub use crate::stage::*;
    pub use nalgebra::{Point2, Point3, UnitQuaternion, Vector2, Vector3};
    pub use std::cell::RefCell;
    pub use std::rc::Rc;
}
