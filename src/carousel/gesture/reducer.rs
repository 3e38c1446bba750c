use crate::carousel::gesture::intent::GestureIntent;
use crate::carousel::gesture::state::GestureState;
use crate::ui::mvi::Reducer;

pub struct GestureReducer;

impl Reducer for GestureReducer {
    type State = GestureState;
    type Intent = GestureIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GestureIntent::Press { pointer_id, x } => GestureState::Active {
                pointer_id,
                start_x: x,
                delta_x: 0.0,
            },
            GestureIntent::Move { pointer_id, x } => match state {
                GestureState::Active {
                    pointer_id: tracked,
                    start_x,
                    ..
                } if tracked == pointer_id => GestureState::Active {
                    pointer_id,
                    start_x,
                    delta_x: x - start_x,
                },
                other => other,
            },
            GestureIntent::Release { pointer_id } => {
                if state.tracks(pointer_id) {
                    GestureState::Idle
                } else {
                    state
                }
            }
        }
    }
}
