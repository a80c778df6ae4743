//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod state;
pub mod store;
pub mod todo;

pub use action::Action;
pub use effect::Effect;
pub use state::{AppState, FocusTarget, InputState, ListViewState, UiState};
pub use store::{DispatchResult, Store};
pub use todo::{Item, ItemKey, TodoList};
