//! Pointer swipe recognition.
//!
//! The gesture itself is a small MVI state machine; deciding what a finished
//! gesture means is done by [`Swipe::from_delta`] before the release intent
//! is dispatched.

mod intent;
mod reducer;
mod state;

pub use intent::GestureIntent;
pub use reducer::GestureReducer;
pub use state::GestureState;

/// Default horizontal travel needed before a drag counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    /// Contact without a button, e.g. a finger.
    None,
}

/// One pointer sample delivered by the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u64,
    pub kind: PointerKind,
    pub button: PointerButton,
    pub x: f64,
}

impl PointerEvent {
    pub fn mouse(pointer_id: u64, button: PointerButton, x: f64) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Mouse,
            button,
            x,
        }
    }

    pub fn touch(pointer_id: u64, x: f64) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Touch,
            button: PointerButton::None,
            x,
        }
    }

    /// Mice start a gesture only with the primary button; touch and pen
    /// contacts always do.
    pub fn starts_gesture(&self) -> bool {
        self.kind != PointerKind::Mouse || self.button == PointerButton::Primary
    }
}

/// What to do with a gesture the environment cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Drop the gesture without navigating.
    #[default]
    Discard,
    /// Treat the cancel like a release and evaluate the last delta.
    Evaluate,
}

/// Navigation produced by a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged right: show the previous slide.
    Prev,
    /// Dragged left: show the next slide.
    Next,
}

impl Swipe {
    /// Travel must strictly exceed `threshold` in either direction.
    pub fn from_delta(delta_x: f64, threshold: f64) -> Option<Self> {
        if delta_x > threshold {
            Some(Swipe::Prev)
        } else if delta_x < -threshold {
            Some(Swipe::Next)
        } else {
            None
        }
    }

    pub fn offset(self) -> isize {
        match self {
            Swipe::Prev => -1,
            Swipe::Next => 1,
        }
    }
}
