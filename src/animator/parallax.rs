//! Scroll-driven camera rig with cursor parallax.

use nalgebra::Vector2;

/// Configuration options for the scroll rig.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Vertical distance between sections, in world units.
    pub section_spacing: f32,
    /// Height of one scroll section, in the same units as the scroll input.
    pub viewport_height: f32,
    /// Easing rate toward the cursor target, per second.
    pub damping: f32,
    /// How far a cursor at the viewport edge shifts the camera group.
    pub cursor_influence: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        ParallaxConfig {
            section_spacing: 4.0,
            viewport_height: 1000.0,
            damping: 5.0,
            cursor_influence: 0.5,
        }
    }
}

impl ParallaxConfig {
    /// Creates the default rig configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance between sections, in world units.
    pub fn with_section_spacing(mut self, spacing: f32) -> Self {
        self.section_spacing = spacing;
        self
    }

    /// Sets the scroll height of one section.
    pub fn with_viewport_height(mut self, height: f32) -> Self {
        self.viewport_height = height;
        self
    }

    /// Sets the cursor easing rate.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the cursor shift at the viewport edge.
    pub fn with_cursor_influence(mut self, influence: f32) -> Self {
        self.cursor_influence = influence;
        self
    }
}

/// Maps scroll and cursor input to camera motion.
///
/// The camera height follows the scroll position directly. The cursor
/// contributes a small parallax offset on a separate camera group, eased
/// toward its target a fraction per frame. Crossing into a new section is
/// reported from [`set_scroll`](Parallax::set_scroll) so the scene can fire
/// a one-shot animation on the section's object.
pub struct Parallax {
    config: ParallaxConfig,
    scroll: f32,
    cursor: Vector2<f32>,
    offset: Vector2<f32>,
    section: usize,
}

impl Parallax {
    /// Creates a rig at scroll position zero with a centered cursor.
    ///
    /// # Panics
    /// Panics if the configured viewport height is not strictly positive.
    pub fn new(config: ParallaxConfig) -> Parallax {
        assert!(
            config.viewport_height > 0.0,
            "viewport height must be positive, got {}",
            config.viewport_height
        );
        Parallax {
            config,
            scroll: 0.0,
            cursor: Vector2::zeros(),
            offset: Vector2::zeros(),
            section: 0,
        }
    }

    /// Records a new scroll position.
    ///
    /// # Returns
    /// `Some(section)` when the scroll crossed into a different section,
    /// `None` otherwise. Scrolling above the top clamps to section 0.
    pub fn set_scroll(&mut self, scroll: f32) -> Option<usize> {
        self.scroll = scroll;
        let section = (scroll / self.config.viewport_height).round().max(0.0) as usize;
        if section != self.section {
            self.section = section;
            Some(section)
        } else {
            None
        }
    }

    /// Records the cursor position, normalized to `[-0.5, 0.5]` on both
    /// axes with `(0, 0)` at the viewport center.
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Vector2::new(x, y);
    }

    /// Eases the camera-group offset toward the cursor target.
    ///
    /// `delta` is the frame's delta time; the blend factor is capped at 1 so
    /// a long frame settles on the target instead of overshooting it.
    pub fn update(&mut self, delta: f32) {
        let target = Vector2::new(
            self.cursor.x * self.config.cursor_influence,
            -self.cursor.y * self.config.cursor_influence,
        );
        let blend = (self.config.damping * delta).min(1.0);
        self.offset += (target - self.offset) * blend;
    }

    /// Camera height for the current scroll position.
    #[inline]
    pub fn camera_height(&self) -> f32 {
        -self.scroll / self.config.viewport_height * self.config.section_spacing
    }

    /// The eased camera-group parallax offset.
    #[inline]
    pub fn group_offset(&self) -> Vector2<f32> {
        self.offset
    }

    /// The section the viewport is closest to.
    #[inline]
    pub fn section(&self) -> usize {
        self.section
    }

    /// World height at which section `index` sits.
    #[inline]
    pub fn section_height(&self, index: usize) -> f32 {
        -(index as f32) * self.config.section_spacing
    }
}
