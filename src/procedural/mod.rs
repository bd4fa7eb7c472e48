//! Procedural placement: random scatters that dress a scene.
//!
//! Every function here draws from a caller-supplied [`rand::Rng`], so a
//! seeded generator reproduces the same layout on every run.

pub use self::field::strewn_field;
pub use self::ring::{ring_scatter, RingScatter};
pub use self::scatter::{random_colors, scatter_column, scatter_cube};

mod field;
mod ring;
mod scatter;
