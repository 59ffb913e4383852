//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// stroke_color = "white"
///
/// # Custom RGB color (0-255 per component)
/// stroke_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped to predefined RGBA values using
    /// `util::name_to_color()`. Unknown color names default to white
    /// with a warning. RGB arrays are converted from 0-255 range to
    /// 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using white", name);
                WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_resolve() {
        assert_eq!(ColorSpec::Name("black".into()).to_color(), BLACK);
    }

    #[test]
    fn unknown_names_fall_back_to_white() {
        assert_eq!(ColorSpec::Name("mauve".into()).to_color(), WHITE);
    }

    #[test]
    fn rgb_arrays_scale_to_unit_range() {
        let color = ColorSpec::Rgb([255, 0, 51]).to_color();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 0.001);
        assert_eq!(color.a, 1.0);
    }
}
