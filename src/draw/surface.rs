//! Drawing surface capability and its Cairo-backed implementation.
//!
//! The curve generators and the pointer session talk to the surface only
//! through the [`DrawSurface`] trait, so frontends can substitute their
//! own rasterizer. The shipped implementation renders into a Cairo image
//! surface and can export the pixels as PNG.

use super::color::Color;
use crate::util::Point;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while setting up or exporting a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Cairo could not allocate the image surface or its context.
    #[error("failed to set up drawing surface: {0}")]
    Setup(#[from] cairo::Error),

    /// PNG encoding of the surface pixels failed.
    #[error("failed to encode surface as PNG: {0}")]
    Encode(#[from] cairo::IoError),

    /// Writing the encoded image to disk failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A 2D path-drawing capability.
///
/// Coordinate system: origin at the surface's top-left, x right, y down,
/// angles in radians growing in the y-down (clockwise) direction.
pub trait DrawSurface {
    /// Surface width in pixels.
    fn width(&self) -> f64;

    /// Surface height in pixels.
    fn height(&self) -> f64;

    /// Starts a new path, discarding any unstroked path data.
    fn begin_path(&mut self);

    /// Moves the current point without drawing.
    fn move_to(&mut self, p: Point);

    /// Adds a straight line from the current point.
    fn line_to(&mut self, p: Point);

    /// Adds a circular arc around `center` from `start_angle` to
    /// `end_angle`. When `flip` is set the arc sweeps counterclockwise,
    /// mirroring the bulge across the chord.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, flip: bool);

    /// Renders the current path.
    fn stroke(&mut self);

    /// Restores a rectangular region to the surface background.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Erases the whole surface, leaving it as freshly initialized.
    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, w, h);
    }
}

/// Cairo image surface with a fixed background and stroke appearance.
///
/// Stroke color and width are applied on every [`DrawSurface::stroke`]
/// call, so clearing (which paints with the background color) never
/// leaks into stroke rendering.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    width: f64,
    height: f64,
    background: Color,
    stroke_color: Color,
    stroke_width: f64,
}

impl CairoSurface {
    /// Creates a surface of `width` x `height` pixels painted with
    /// `background`, stroking with `stroke_color` at `stroke_width`.
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        stroke_color: Color,
        stroke_width: f64,
    ) -> Result<Self, SurfaceError> {
        let w = width.min(i32::MAX as u32) as i32;
        let h = height.min(i32::MAX as u32) as i32;
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?;
        let ctx = cairo::Context::new(&surface)?;

        let mut this = Self {
            surface,
            ctx,
            width: w as f64,
            height: h as f64,
            background,
            stroke_color,
            stroke_width,
        };
        this.clear();
        Ok(this)
    }

    /// Encodes the current pixels as a PNG byte stream.
    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.flush();
        let mut bytes = Vec::new();
        self.surface.write_to_png(&mut bytes)?;
        Ok(bytes)
    }

    /// Encodes the surface and writes it to `path`.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, &bytes).map_err(|source| SurfaceError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "Wrote {}x{} PNG to {} ({} bytes)",
            self.width,
            self.height,
            path.display(),
            bytes.len()
        );
        Ok(())
    }
}

impl DrawSurface for CairoSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, flip: bool) {
        if flip {
            self.ctx
                .arc_negative(center.x, center.y, radius, start_angle, end_angle);
        } else {
            self.ctx.arc(center.x, center.y, radius, start_angle, end_angle);
        }
    }

    fn stroke(&mut self) {
        let c = self.stroke_color;
        self.ctx.set_source_rgba(c.r, c.g, c.b, c.a);
        self.ctx.set_line_width(self.stroke_width);
        self.ctx.set_line_cap(cairo::LineCap::Round);
        let _ = self.ctx.stroke();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let bg = self.background;
        self.ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
        self.ctx.rectangle(x, y, width, height);
        let _ = self.ctx.fill();
    }
}


#[cfg(test)]
mod tests {
    use super::recording::{DrawOp, RecordingSurface};
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    #[test]
    fn clear_covers_the_whole_surface() {
        let mut surface = RecordingSurface::new();
        surface.clear();
        assert_eq!(
            surface.ops,
            vec![DrawOp::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 640.0,
                height: 480.0,
            }]
        );
    }

    #[test]
    fn cleared_surface_matches_fresh_pixels() {
        let fresh = CairoSurface::new(64, 48, BLACK, WHITE, 3.0).expect("surface");

        let mut used = CairoSurface::new(64, 48, BLACK, WHITE, 3.0).expect("surface");
        used.begin_path();
        used.move_to(Point::new(5.0, 5.0));
        used.line_to(Point::new(40.0, 30.0));
        used.stroke();
        assert_ne!(
            used.encode_png().expect("png"),
            fresh.encode_png().expect("png"),
            "stroke should change pixels"
        );

        used.clear();
        assert_eq!(
            used.encode_png().expect("png"),
            fresh.encode_png().expect("png"),
            "clear should restore the initial pixels"
        );
    }
}
