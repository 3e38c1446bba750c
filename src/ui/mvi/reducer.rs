//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: (State, Intent) -> State.
///
/// Side effects such as navigation or pointer capture belong to the caller,
/// which inspects the state before and after dispatch.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
