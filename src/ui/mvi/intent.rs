//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Pointer actions (press, drag, release)
/// - Key presses and control activations
/// - Timer ticks
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
