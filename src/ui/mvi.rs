//! Unidirectional state flow primitives for the UI layer.
//!
//! Every piece of UI state is owned by [`crate::ui::app::App`] and changes
//! only through a [`Reducer`]: user input and API completions become
//! intents, a pure function folds each intent into the next state, and
//! views render from the result.

/// Marker trait for UI state containers.
///
/// States are cloned to produce successors, compared to detect changes, and
/// `Default` is the initial value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and API completions.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
///
/// Reducers are the only place transitions happen. Side effects (network
/// requests, file reads) stay with the caller around the dispatch.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
