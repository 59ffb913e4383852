//! Stroke style selection and curve dispatch.

use super::curve::{self, CurveFn};
use thiserror::Error;

/// Lookup of a stroke style label that no built-in style carries.
///
/// Unreachable through a selector populated from [`StrokeStyle::ALL`];
/// surfaces only at the CLI and config string boundaries.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown stroke style '{0}'")]
pub struct UnknownStyle(pub String);

/// Decorative stroke style.
///
/// The active style determines which curve generator renders each
/// segment of a stroke. All styles share the two-point rendering
/// contract of [`CurveFn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Straight path between the two positions (default)
    Line,
    /// Semicircular arc bulging to one side of the chord
    Arc,
    /// Two half-chord arcs, the second flipped (S-curve)
    Wobble,
    /// Small backward loop before arcing to the end point
    Swirl,
    /// Swirl with a much larger backward loop
    SuperSwirl,
}

impl StrokeStyle {
    /// Every built-in style, in selector display order.
    pub const ALL: [StrokeStyle; 5] = [
        StrokeStyle::Line,
        StrokeStyle::Arc,
        StrokeStyle::Wobble,
        StrokeStyle::Swirl,
        StrokeStyle::SuperSwirl,
    ];

    /// Stable display label, also accepted by [`FromStr`](std::str::FromStr).
    pub fn label(self) -> &'static str {
        match self {
            StrokeStyle::Line => "line",
            StrokeStyle::Arc => "arc",
            StrokeStyle::Wobble => "wobble",
            StrokeStyle::Swirl => "swirl",
            StrokeStyle::SuperSwirl => "super-swirl",
        }
    }

    /// Resolves this style to its curve generator.
    pub fn curve(self) -> CurveFn {
        match self {
            StrokeStyle::Line => curve::line,
            StrokeStyle::Arc => curve::arc,
            StrokeStyle::Wobble => curve::wobble,
            StrokeStyle::Swirl => curve::swirl,
            StrokeStyle::SuperSwirl => curve::super_swirl,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::Line
    }
}

impl std::fmt::Display for StrokeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for StrokeStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "arc" => Ok(Self::Arc),
            "wobble" => Ok(Self::Wobble),
            "swirl" => Ok(Self::Swirl),
            "super-swirl" => Ok(Self::SuperSwirl),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}
