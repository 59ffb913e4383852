//! Parametric curve generators.
//!
//! Each generator turns one [`Segment`] (two successive pointer
//! positions) into path primitives on a [`DrawSurface`]. Generators are
//! pure apart from the draw calls they issue; nothing is retained
//! between invocations.

use super::surface::DrawSurface;
use crate::util::Point;
use std::f64::consts::PI;

/// One visual unit of a stroke: the chord between the previous and the
/// latest pointer position. Created per movement event and consumed
/// immediately; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Creates a segment from its endpoints.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The chord vector `end - start`.
    pub fn delta(&self) -> Point {
        self.end - self.start
    }

    /// Chord length.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// The chord midpoint.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// A point extrapolated backward past `start` along the chord by
    /// `factor` times the chord length.
    pub fn overshoot(&self, factor: f64) -> Point {
        let d = self.delta();
        Point::new(self.start.x - d.x * factor, self.start.y - d.y * factor)
    }
}

/// Signature shared by all curve generators.
pub type CurveFn = fn(&mut dyn DrawSurface, Segment);

/// Draws a straight path from start to end.
pub fn line(surface: &mut dyn DrawSurface, segment: Segment) {
    surface.begin_path();
    surface.move_to(segment.start);
    surface.line_to(segment.end);
    surface.stroke();
}

/// Draws a semicircular arc whose diameter is the segment chord.
///
/// The arc is centered on the chord midpoint with radius half the chord
/// length, swept from `theta + PI` to `theta` where `theta` is derived
/// from the chord direction. `flip` reverses the sweep, mirroring the
/// bulge across the chord.
///
/// A degenerate chord (stationary pointer) issues no draw calls.
pub fn semicircle(surface: &mut dyn DrawSurface, segment: Segment, flip: bool) {
    let radius = segment.length() / 2.0;
    if radius == 0.0 {
        return;
    }

    let d = segment.delta();
    let theta = -(d.x.atan2(d.y) - PI / 2.0);

    surface.begin_path();
    surface.move_to(segment.start);
    surface.arc(segment.midpoint(), radius, theta + PI, theta, flip);
    surface.stroke();
}

/// Draws a single semicircular arc from start to end.
pub fn arc(surface: &mut dyn DrawSurface, segment: Segment) {
    semicircle(surface, segment, false);
}

/// Draws a semicircle to the chord midpoint, then a flipped semicircle
/// the rest of the way, producing an S-curve.
pub fn wobble(surface: &mut dyn DrawSurface, segment: Segment) {
    let half = segment.midpoint();
    semicircle(surface, Segment::new(segment.start, half), false);
    semicircle(surface, Segment::new(half, segment.end), true);
}

fn loop_back(surface: &mut dyn DrawSurface, segment: Segment, factor: f64) {
    let part = segment.overshoot(factor);
    semicircle(surface, Segment::new(segment.start, part), false);
    semicircle(surface, Segment::new(part, segment.end), false);
}

/// Draws a small arc backward, then a larger arc forward, creating a
/// loop-back swirl before proceeding toward the end point.
pub fn swirl(surface: &mut dyn DrawSurface, segment: Segment) {
    loop_back(surface, segment, 0.25);
}

/// Like [`swirl`], but the backward overshoot is twice the chord length.
pub fn super_swirl(surface: &mut dyn DrawSurface, segment: Segment) {
    loop_back(surface, segment, 2.0);
}
