//! State for the swipe gesture.

use crate::ui::mvi::UiState;

/// Idle between gestures; Active from pointer-down until its release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Active {
        pointer_id: u64,
        start_x: f64,
        delta_x: f64,
    },
}

impl UiState for GestureState {}

impl GestureState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Horizontal travel of the tracked pointer, if tracking.
    pub fn delta_x(&self) -> Option<f64> {
        match self {
            Self::Active { delta_x, .. } => Some(*delta_x),
            Self::Idle => None,
        }
    }

    /// Whether `pointer_id` is the pointer being tracked.
    pub fn tracks(&self, pointer_id: u64) -> bool {
        matches!(self, Self::Active { pointer_id: tracked, .. } if *tracked == pointer_id)
    }
}
