//! A word set in 3D type, adrift in a field of donuts.

use wisp::prelude::*;

fn main() {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let mut stage = Stage::new();

    stage.add(
        Prop::new(
            "title",
            Shape::Text {
                content: "wisp".to_owned(),
                size: 0.5,
                depth: 0.2,
            },
        )
        .with_material(Material::textured("matcap")),
    );

    // A fresh constellation of donuts on every run.
    for (i, placement) in strewn_field(&mut rng, 100, 10.0).into_iter().enumerate() {
        stage.add(
            Prop::new(
                &format!("donut.{}", i),
                Shape::Torus {
                    radius: 0.3,
                    tube_radius: 0.2,
                },
            )
            .with_placement(placement)
            .with_material(Material::textured("matcap")),
        );
    }

    let donuts = stage.props_named("donut.").count();
    let (mut smallest, mut farthest) = (f32::MAX, 0.0f32);
    for donut in stage.props_named("donut.") {
        smallest = smallest.min(donut.placement.scale.x);
        farthest = farthest.max(donut.placement.translation.norm());
    }
    println!(
        "{} donuts drift around the title; the smallest is scaled {:.2}, the farthest sits {:.1} units out",
        donuts, smallest, farthest
    );
}
