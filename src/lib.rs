//! Library exports for embedding the squiggler stroke pipeline.
//!
//! Exposes the curve generators, the style registry, the pointer
//! session machine, and the configuration layer so that frontends (and
//! the bundled CLI) can drive the drawing pipeline against their own
//! event sources and surfaces.

pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
