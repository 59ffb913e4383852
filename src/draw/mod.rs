//! Rendering primitives and curve generators (Cairo-based).
//!
//! This module defines the core drawing types of the stroke pipeline:
//! - [`Color`]: RGBA color representation with predefined constants
//! - [`DrawSurface`]: the path-drawing capability and its Cairo impl
//! - [`Segment`] and the curve generators that render it
//! - [`StrokeStyle`]: the registry of built-in decorative styles

pub mod color;
pub mod curve;
pub mod style;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use curve::{CurveFn, Segment};
pub use style::{StrokeStyle, UnknownStyle};
pub use surface::{CairoSurface, DrawSurface, SurfaceError};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, RED, WHITE, YELLOW};
