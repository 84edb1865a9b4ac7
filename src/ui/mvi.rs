//! Model-View-Intent primitives the prompt's transitions are written in.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ frame
//! ```
//!
//! Reducers never touch the terminal, so every transition can be checked by
//! folding intents over a state.

/// An action handed to a reducer: a mapped key press, or a submit outcome
/// decided by the controller.
pub trait Intent: Send + 'static {}

/// Snapshot owned by a reducer between two events.
///
/// `Default` is only a placeholder while the reducer holds the value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// `(State, Intent) -> State`, with no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
