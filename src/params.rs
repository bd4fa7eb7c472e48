//! Named tuning parameters bound to typed setter closures.
//!
//! A [`Panel`] is the headless half of a tweaking UI: demos register the
//! values they want adjustable, each with a closure that pushes changes back
//! into the scene, and whatever frontend exists (a GUI, a REPL, a test)
//! drives them by name. Parameters are typed at registration, so a slider
//! can never be fed a color by accident.

use thiserror::Error;

use crate::color::Color;

/// Failure modes of driving a [`Panel`] by name.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParamError {
    /// No parameter was registered under the given name.
    #[error("no parameter named `{0}`")]
    Unknown(String),
    /// The parameter exists but takes a different kind of value.
    #[error("parameter `{name}` takes {expected}, not {actual}")]
    Mismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

enum Binding {
    Slider {
        min: f32,
        max: f32,
        step: f32,
        apply: Box<dyn FnMut(f32)>,
    },
    Color {
        apply: Box<dyn FnMut(Color)>,
    },
}

struct Entry {
    name: String,
    binding: Binding,
}

/// A headless panel of named, typed tuning parameters.
///
/// Closures registered here usually capture an `Rc<RefCell<..>>` handle to
/// the value they drive.
///
/// # Example
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use wisp::params::Panel;
///
/// let intensity = Rc::new(RefCell::new(0.12_f32));
///
/// let mut panel = Panel::new();
/// let target = Rc::clone(&intensity);
/// panel.slider("moon intensity", 0.0, 1.0, 0.001, move |v| {
///     *target.borrow_mut() = v;
/// });
///
/// panel.set("moon intensity", 0.5)?;
/// assert_eq!(*intensity.borrow(), 0.5);
/// # Ok::<(), wisp::params::ParamError>(())
/// ```
#[derive(Default)]
pub struct Panel {
    entries: Vec<Entry>,
}

impl Panel {
    /// Creates an empty panel.
    pub fn new() -> Self {
        Panel::default()
    }

    /// Registers a numeric parameter.
    ///
    /// `step` is the granularity a frontend should offer; [`set`](Self::set)
    /// itself accepts any value inside the range.
    ///
    /// # Panics
    /// Panics if `min > max`, if `step` is negative, or if the name is
    /// already taken. All three are bugs at the registration site.
    pub fn slider(
        &mut self,
        name: &str,
        min: f32,
        max: f32,
        step: f32,
        apply: impl FnMut(f32) + 'static,
    ) {
        assert!(
            min <= max,
            "slider range must satisfy min <= max, got {}..{}",
            min,
            max
        );
        assert!(step >= 0.0, "slider step must not be negative, got {}", step);
        self.register(
            name,
            Binding::Slider {
                min,
                max,
                step,
                apply: Box::new(apply),
            },
        );
    }

    /// Registers a color parameter.
    ///
    /// # Panics
    /// Panics if the name is already taken.
    pub fn color(&mut self, name: &str, apply: impl FnMut(Color) + 'static) {
        self.register(
            name,
            Binding::Color {
                apply: Box::new(apply),
            },
        );
    }

    fn register(&mut self, name: &str, binding: Binding) {
        assert!(
            self.entries.iter().all(|e| e.name != name),
            "a parameter named `{}` is already registered",
            name
        );
        self.entries.push(Entry {
            name: name.to_string(),
            binding,
        });
    }

    /// Drives a numeric parameter, returning the value actually applied.
    ///
    /// Values outside the slider's range are clamped to it, with a warning
    /// in the log.
    pub fn set(&mut self, name: &str, value: f32) -> Result<f32, ParamError> {
        match self.entry_mut(name)? {
            Binding::Slider { min, max, apply, .. } => {
                let applied = value.clamp(*min, *max);
                if applied != value {
                    log::warn!(
                        "clamped `{}` from {} to {} ({}..{})",
                        name,
                        value,
                        applied,
                        min,
                        max
                    );
                }
                apply(applied);
                Ok(applied)
            }
            Binding::Color { .. } => Err(ParamError::Mismatch {
                name: name.to_string(),
                expected: "a color",
                actual: "a number",
            }),
        }
    }

    /// Drives a color parameter.
    pub fn set_color(&mut self, name: &str, value: Color) -> Result<(), ParamError> {
        match self.entry_mut(name)? {
            Binding::Color { apply } => {
                apply(value);
                Ok(())
            }
            Binding::Slider { .. } => Err(ParamError::Mismatch {
                name: name.to_string(),
                expected: "a number",
                actual: "a color",
            }),
        }
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut Binding, ParamError> {
        self.entries
            .iter_mut()
            .find(|e| e.name == name)
            .map(|e| &mut e.binding)
            .ok_or_else(|| ParamError::Unknown(name.to_string()))
    }

    /// Returns the `(min, max, step)` of a numeric parameter, so a frontend
    /// can build a real widget for it.
    ///
    /// Returns `None` for color parameters and unknown names.
    pub fn slider_range(&self, name: &str) -> Option<(f32, f32, f32)> {
        self.entries.iter().find(|e| e.name == name).and_then(|e| {
            match e.binding {
                Binding::Slider { min, max, step, .. } => Some((min, max, step)),
                Binding::Color { .. } => None,
            }
        })
    }

    /// Iterates over parameter names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Returns the number of registered parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if no parameters are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
