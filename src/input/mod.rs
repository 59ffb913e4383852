//! Input handling: modality selection and the stroke session machine.
//!
//! This module translates frontend pointer events into curve rendering.
//! It owns the two-state session machine (idle, active stroke) and the
//! probe that binds the host's native event names at startup.

pub mod events;
pub mod session;

// Re-export commonly used types at module level
pub use events::{EventNames, HostCapabilities, InputModality};
pub use session::{PointerSession, SessionState};
