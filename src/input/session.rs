//! Pointer session state machine.
//!
//! Tracks one continuous stroke from activation to release, converting
//! page coordinates into canvas-local positions and invoking the
//! selected curve generator once per movement event.

use crate::draw::{DrawSurface, Segment, StrokeStyle};
use crate::util::Point;

/// Current stroke session state machine.
///
/// Exactly one session is live at a time; it is created on pointer
/// activation and destroyed on release or when the pointer leaves the
/// tracked surface.
#[derive(Debug)]
pub enum SessionState {
    /// Not tracking an interaction - waiting for activation
    Idle,
    /// Tracking a continuous stroke
    Active {
        /// Previous canvas-local position, updated after each segment
        prev: Point,
    },
}

/// Owns the pointer interaction state for one drawing surface.
///
/// Handlers return `true` when the event was consumed by the session.
/// Out-of-sequence events (motion or release while idle, activation
/// while active) are no-ops, never errors.
pub struct PointerSession {
    /// Drawing mode state machine
    state: SessionState,
    /// Style used for the next segment (may change mid-stroke)
    style: StrokeStyle,
    /// On-screen offset of the drawing surface, subtracted from page
    /// coordinates to get canvas-local positions
    origin: Point,
}

impl PointerSession {
    /// Creates an idle session for a surface at `origin`.
    pub fn new(style: StrokeStyle, origin: Point) -> Self {
        Self {
            state: SessionState::Idle,
            style,
            origin,
        }
    }

    /// The style the next segment will be rendered with.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Selects the style for subsequent segments. Takes effect on the
    /// very next movement event, mid-stroke or between strokes.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Whether a stroke is currently being tracked.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    fn to_local(&self, page_x: f64, page_y: f64) -> Point {
        Point::new(page_x - self.origin.x, page_y - self.origin.y)
    }

    /// Processes a primary activation event at page coordinates.
    ///
    /// Records the canvas-local position as the stroke start. Ignored
    /// while a session is already active.
    pub fn on_press(&mut self, page_x: f64, page_y: f64) -> bool {
        match self.state {
            SessionState::Idle => {
                let start = self.to_local(page_x, page_y);
                log::debug!("stroke started at ({:.1}, {:.1})", start.x, start.y);
                self.state = SessionState::Active { prev: start };
                true
            }
            SessionState::Active { .. } => false,
        }
    }

    /// Processes a movement event at page coordinates.
    ///
    /// While active, renders one segment from the previous position to
    /// the new position with the currently selected style, then advances
    /// the previous position. Movement before activation is a no-op.
    pub fn on_motion(&mut self, surface: &mut dyn DrawSurface, page_x: f64, page_y: f64) -> bool {
        let next = self.to_local(page_x, page_y);
        let SessionState::Active { prev } = &mut self.state else {
            return false;
        };

        let segment = Segment::new(*prev, next);
        (self.style.curve())(surface, segment);
        *prev = next;
        true
    }

    /// Processes a release event, ending the session.
    pub fn on_release(&mut self) -> bool {
        self.disengage("released")
    }

    /// Processes the pointer leaving the tracked surface/window.
    ///
    /// Returns `true` while active so the frontend can stop the
    /// boundary-exit event from propagating to enclosing containers.
    pub fn on_leave(&mut self) -> bool {
        self.disengage("left surface")
    }

    fn disengage(&mut self, reason: &str) -> bool {
        match self.state {
            SessionState::Active { .. } => {
                log::debug!("stroke ended ({reason})");
                self.state = SessionState::Idle;
                true
            }
            SessionState::Idle => false,
        }
    }
}
