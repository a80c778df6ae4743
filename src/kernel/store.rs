use tracing::{debug, trace};

use crate::core::Command;

use super::state::InputState;
use super::todo::ItemKey;
use super::{Action, AppState, Effect, FocusTarget};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    /// The caller redraws when this is set; nothing else triggers a render.
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn unchanged() -> Self {
        Self::changed(false)
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        trace!(?action, "dispatch");
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::SetPendingName(text) => {
                let changed = text != self.state.todo.pending_name();
                self.state.todo.set_pending_name(text);
                self.state
                    .ui
                    .input
                    .set_to_end(self.state.todo.pending_name());
                DispatchResult::changed(changed)
            }
            Action::InputInsert(ch) => {
                let focus_changed = self.set_focus(FocusTarget::Input);
                let mut buf = [0u8; 4];
                let inserted = ch.encode_utf8(&mut buf);
                let result = self.edit_input(|input, text| Some(input.insert(text, inserted)));
                DispatchResult::changed(result.state_changed || focus_changed)
            }
            Action::InputPaste(text) => {
                let text = sanitize_paste(&text);
                if text.is_empty() {
                    return DispatchResult::unchanged();
                }
                let focus_changed = self.set_focus(FocusTarget::Input);
                let result = self.edit_input(|input, pending| Some(input.insert(pending, &text)));
                DispatchResult::changed(result.state_changed || focus_changed)
            }
            Action::AddItem => DispatchResult::changed(self.add_item()),
            Action::DeleteItem { key } => DispatchResult::changed(self.delete_item(key)),
            Action::SetFocus(target) => DispatchResult::changed(self.set_focus(target)),
            Action::ListClickRow { index } => {
                let len = self.state.todo.len();
                if index >= len {
                    return DispatchResult::unchanged();
                }
                let focus_changed = self.set_focus(FocusTarget::List);
                let selection_changed = self.state.ui.list.select(index, len);
                DispatchResult::changed(focus_changed || selection_changed)
            }
            Action::ListScroll { delta } => {
                let len = self.state.todo.len();
                DispatchResult::changed(self.state.ui.list.scroll(delta, len))
            }
            Action::ListSetViewHeight { rows } => {
                let len = self.state.todo.len();
                DispatchResult::changed(self.state.ui.list.set_view_height(rows, len))
            }
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        let len = self.state.todo.len();
        match cmd {
            Command::Quit => DispatchResult {
                effects: vec![Effect::Quit],
                state_changed: false,
            },
            Command::AddItem => DispatchResult::changed(self.add_item()),
            Command::DeleteSelected => {
                let key = self
                    .state
                    .ui
                    .list
                    .selected()
                    .and_then(|index| self.state.todo.get(index))
                    .map(|item| item.key());
                match key {
                    Some(key) => DispatchResult::changed(self.delete_item(key)),
                    None => DispatchResult::unchanged(),
                }
            }
            Command::SelectPrev => {
                DispatchResult::changed(self.state.ui.list.move_selection(-1, len))
            }
            Command::SelectNext => {
                DispatchResult::changed(self.state.ui.list.move_selection(1, len))
            }
            Command::SelectFirst => DispatchResult::changed(self.state.ui.list.select(0, len)),
            Command::SelectLast => {
                DispatchResult::changed(self.state.ui.list.select(len.saturating_sub(1), len))
            }
            Command::FocusNext => {
                let target = self.state.ui.focus.next();
                DispatchResult::changed(self.set_focus(target))
            }
            Command::FocusPrev => {
                let target = self.state.ui.focus.prev();
                DispatchResult::changed(self.set_focus(target))
            }
            Command::FocusInput => DispatchResult::changed(self.set_focus(FocusTarget::Input)),
            Command::FocusList => DispatchResult::changed(self.set_focus(FocusTarget::List)),
            Command::CursorLeft => self.move_cursor(|input, text| input.move_left(text)),
            Command::CursorRight => self.move_cursor(|input, text| input.move_right(text)),
            Command::CursorLineStart => self.move_cursor(|input, _| input.move_home()),
            Command::CursorLineEnd => self.move_cursor(|input, text| input.move_end(text)),
            Command::DeleteBackward => self.edit_input(|input, text| input.delete_backward(text)),
            Command::DeleteForward => self.edit_input(|input, text| input.delete_forward(text)),
            Command::ClearInput => {
                if self.state.todo.pending_name().is_empty() {
                    return DispatchResult::unchanged();
                }
                self.state.todo.set_pending_name(String::new());
                self.state.ui.input.reset();
                DispatchResult::changed(true)
            }
        }
    }

    fn add_item(&mut self) -> bool {
        if self.state.todo.add_item().is_none() {
            return false;
        }

        self.state.ui.input.reset();
        let len = self.state.todo.len();
        self.state.ui.list.keep_row_visible(len - 1, len);
        true
    }

    fn delete_item(&mut self, key: ItemKey) -> bool {
        if !self.state.todo.delete_item(key) {
            debug!(key = key.raw(), "delete ignored: no such item");
            return false;
        }

        let len = self.state.todo.len();
        self.state.ui.list.sync_len(len);
        true
    }

    fn set_focus(&mut self, target: FocusTarget) -> bool {
        if self.state.ui.focus == target {
            return false;
        }
        self.state.ui.focus = target;

        if target == FocusTarget::List && self.state.ui.list.selected().is_none() {
            let len = self.state.todo.len();
            self.state.ui.list.select(0, len);
        }
        true
    }

    fn move_cursor(&mut self, f: impl FnOnce(&mut InputState, &str) -> bool) -> DispatchResult {
        let AppState { todo, ui } = &mut self.state;
        DispatchResult::changed(f(&mut ui.input, todo.pending_name()))
    }

    fn edit_input(
        &mut self,
        f: impl FnOnce(&mut InputState, &str) -> Option<String>,
    ) -> DispatchResult {
        let AppState { todo, ui } = &mut self.state;
        let Some(text) = f(&mut ui.input, todo.pending_name()) else {
            return DispatchResult::unchanged();
        };
        todo.set_pending_name(text);
        DispatchResult::changed(true)
    }
}

/// The input is single-line: line breaks and tabs become spaces, other
/// control characters are dropped.
fn sanitize_paste(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    text.chars()
        .filter_map(|ch| match ch {
            '\n' | '\r' | '\t' => Some(' '),
            ch if ch.is_control() => None,
            ch => Some(ch),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
