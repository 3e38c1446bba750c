//! Intents for the swipe gesture.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureIntent {
    /// Pointer went down on the viewport. Restarts tracking even when a
    /// gesture is already active.
    Press { pointer_id: u64, x: f64 },

    /// Pointer moved; ignored unless it is the tracked pointer.
    Move { pointer_id: u64, x: f64 },

    /// Tracked pointer lifted or was cancelled.
    Release { pointer_id: u64 },
}

impl Intent for GestureIntent {}
