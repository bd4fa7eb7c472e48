//! Color type and the named palettes used by the demo scenes.
//!
//! Components are f32 RGBA in the range [0.0, 1.0]. Scene palettes that
//! come from 8-bit hex notation are expressed as `channel / 255.0` so they
//! match [`parse_hex`] exactly.
//!
//! # Example
//! ```
//! use wisp::color;
//!
//! let night = color::parse_hex("#262837").unwrap();
//! assert_eq!(night, color::NIGHT_SKY);
//! ```

use thiserror::Error;

pub use rgb::Rgba;

/// The color type used throughout wisp. RGBA with f32 components in [0.0, 1.0].
pub type Color = Rgba<f32>;

/// Failure to interpret a string as a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string does not have six hex digits after the optional `#`.
    #[error("expected a `#rrggbb` hex color, got {0} digits")]
    Length(usize),
    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit in color `{0}`")]
    Digit(String),
}

/// Parses a `#rrggbb` (or `rrggbb`) hex string into an opaque [`Color`].
///
/// # Example
/// ```
/// use wisp::color::parse_hex;
///
/// let ember = parse_hex("#ff7d46").unwrap();
/// assert_eq!(ember.a, 1.0);
/// assert!(parse_hex("#ff7d4").is_err());
/// ```
pub fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return Err(ParseColorError::Length(hex.len()));
    }

    let mut rgb: u32 = 0;
    for byte in hex.bytes() {
        let digit = (byte as char)
            .to_digit(16)
            .ok_or_else(|| ParseColorError::Digit(hex.to_owned()))?;
        rgb = (rgb << 4) | digit;
    }

    Ok(Color::new(
        f32::from((rgb >> 16) as u8) / 255.0,
        f32::from((rgb >> 8) as u8) / 255.0,
        f32::from(rgb as u8) / 255.0,
        1.0,
    ))
}

// ============================================================================
// Basic Colors
// ============================================================================

/// Black (0, 0, 0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// White (255, 255, 255)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Red (255, 0, 0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Lime (0, 255, 0) - pure green
pub const LIME: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Blue (0, 0, 255)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Yellow (255, 255, 0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Cyan (0, 255, 255)
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);

/// Magenta (255, 0, 255)
pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Gray (128, 128, 128)
pub const GRAY: Color = Color::new(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0, 1.0);

/// Transparent color (0, 0, 0, 0). Useful for clearing or as a default.
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

// ============================================================================
// Night Palette
// ============================================================================

/// Deep blue-gray of a foggy night sky, `#262837`.
pub const NIGHT_SKY: Color = Color::new(38.0 / 255.0, 40.0 / 255.0, 55.0 / 255.0, 1.0);

/// Fired-clay red for roof tiles, `#b35f45`.
pub const TERRACOTTA: Color = Color::new(179.0 / 255.0, 95.0 / 255.0, 69.0 / 255.0, 1.0);

/// Saturated shrub green, `#89c854`.
pub const LEAF_GREEN: Color = Color::new(137.0 / 255.0, 200.0 / 255.0, 84.0 / 255.0, 1.0);

/// Weathered headstone gray, `#b2b6b1`.
pub const STONE_GRAY: Color = Color::new(178.0 / 255.0, 182.0 / 255.0, 177.0 / 255.0, 1.0);

/// Cold blue-white of moonlight, `#b9d5ff`.
pub const MOONLIGHT: Color = Color::new(185.0 / 255.0, 213.0 / 255.0, 1.0, 1.0);

/// Warm lantern orange, `#ff7d46`.
pub const EMBER: Color = Color::new(1.0, 125.0 / 255.0, 70.0 / 255.0, 1.0);
