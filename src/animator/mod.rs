//! Per-frame animators for the demo scenes.
//!
//! Animators are plain data evaluated against the frame timestamp. They do
//! not integrate hidden state frame to frame; stepping one twice with the
//! same time produces the same pose, so a paused scene stays still.

pub use self::contact_shadow::ContactShadow;
pub use self::orbit::{Bounce, Orbit};
pub use self::parallax::{Parallax, ParallaxConfig};
pub use self::spin::Spin;
pub use self::tween::{ease_in_out_cubic, Tween};
pub use self::wave::Wave;

mod contact_shadow;
mod orbit;
mod parallax;
mod spin;
mod tween;
mod wave;
