//! Generic input event plumbing for cross-host compatibility.
//!
//! Embedding frontends report which input families the host supports;
//! the probe picks one modality for the lifetime of the page/session and
//! hands back the native event names to bind for it.

/// Input families the embedding host reports as available.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostCapabilities {
    /// Unified pointer events (mouse, pen, and touch in one family)
    pub pointer: bool,
    /// Touch events
    pub touch: bool,
    /// Plain mouse events
    pub mouse: bool,
}

/// The native event names bound for one modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventNames {
    /// Begins a stroke session
    pub activate: &'static str,
    /// Ends a stroke session
    pub release: &'static str,
    /// Extends the active stroke
    pub motion: &'static str,
    /// Pointer left the tracked surface/window
    pub exit: &'static str,
}

/// Selected input modality, fixed for the session lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputModality {
    /// Pointer events (preferred)
    Pointer,
    /// Touch events
    Touch,
    /// Mouse events (unconditional fallback)
    Mouse,
}

impl InputModality {
    /// Picks the first supported modality in priority order: pointer,
    /// then touch, then mouse. Mouse is the fallback even when the host
    /// reports no mouse support.
    pub fn probe(caps: HostCapabilities) -> Self {
        if caps.pointer {
            Self::Pointer
        } else if caps.touch {
            Self::Touch
        } else {
            Self::Mouse
        }
    }

    /// The native event names to bind for this modality.
    ///
    /// Touch hosts deliver no dedicated boundary-exit event, so `exit`
    /// reuses the touch-end name there.
    pub fn event_names(self) -> EventNames {
        match self {
            Self::Pointer => EventNames {
                activate: "pointerdown",
                release: "pointerup",
                motion: "pointermove",
                exit: "pointerout",
            },
            Self::Touch => EventNames {
                activate: "touchstart",
                release: "touchend",
                motion: "touchmove",
                exit: "touchend",
            },
            Self::Mouse => EventNames {
                activate: "mousedown",
                release: "mouseup",
                motion: "mousemove",
                exit: "mouseout",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_prefers_pointer_over_everything() {
        let caps = HostCapabilities {
            pointer: true,
            touch: true,
            mouse: true,
        };
        assert_eq!(InputModality::probe(caps), InputModality::Pointer);
    }

    #[test]
    fn probe_prefers_touch_over_mouse() {
        let caps = HostCapabilities {
            pointer: false,
            touch: true,
            mouse: true,
        };
        assert_eq!(InputModality::probe(caps), InputModality::Touch);
    }

    #[test]
    fn probe_falls_back_to_mouse() {
        assert_eq!(
            InputModality::probe(HostCapabilities::default()),
            InputModality::Mouse
        );
    }

    #[test]
    fn touch_exit_reuses_touch_end() {
        let names = InputModality::Touch.event_names();
        assert_eq!(names.exit, names.release);
    }

    #[test]
    fn pointer_binding_uses_pointer_event_names() {
        let names = InputModality::Pointer.event_names();
        assert_eq!(names.activate, "pointerdown");
        assert_eq!(names.motion, "pointermove");
        assert_eq!(names.exit, "pointerout");
    }
}
