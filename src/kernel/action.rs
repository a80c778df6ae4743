use crate::core::Command;

use super::state::FocusTarget;
use super::todo::ItemKey;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    /// Replaces the pending name outright; the cursor moves to its end.
    SetPendingName(String),
    InputInsert(char),
    InputPaste(String),
    AddItem,
    /// Deletes by the key captured when the row was rendered.
    DeleteItem {
        key: ItemKey,
    },
    SetFocus(FocusTarget),
    ListClickRow {
        index: usize,
    },
    ListScroll {
        delta: isize,
    },
    ListSetViewHeight {
        rows: usize,
    },
}
