//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Drawing defaults.
///
/// Controls the stroke appearance and the style selected when the
/// surface first opens. Fixed for the session once loaded.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Stroke style selected at startup (see the style selector for
    /// valid labels: line, arc, wobble, swirl, super-swirl)
    #[serde(default = "default_style")]
    pub default_style: String,

    /// Stroke color - either a named color (red, green, blue, yellow,
    /// white, black) or an RGB array like `[255, 255, 255]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_style: default_style(),
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// Drawing surface settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color the surface is initialized and cleared with
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_style() -> String {
    "line".to_string()
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_stroke_width() -> f64 {
    3.0
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    768
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}
