use crate::mvi::Reducer;
use crate::todo::intent::TodoIntent;
use crate::todo::state::TodoList;

/// The to-do transition function.
///
/// All four transitions are total: they either apply a change or return
/// the list unchanged. Nothing here reorders the list.
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoList;
    type Intent = TodoIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TodoIntent::Create { item } => {
                // Uniqueness invariant: a duplicate id never enters the list.
                if state.contains(item.id) {
                    return state;
                }
                state.push(item);
                state
            }
            TodoIntent::Remove { id } => {
                state.remove(id);
                state
            }
            TodoIntent::Rename { id, text } => {
                if let Some(item) = state.get_mut(id) {
                    item.text = text;
                }
                state
            }
            TodoIntent::SetComplete { id, complete } => {
                if let Some(item) = state.get_mut(id) {
                    item.complete = complete;
                }
                state
            }
        }
    }
}
