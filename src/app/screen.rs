//! 待办屏幕：统一管理输入分发与渲染
//!
//! 职责：
//! - 键盘事件 → 快捷键上下文 → Command → kernel Action
//! - 鼠标点击 → 上一帧记录的区域 → Action
//! - 渲染快照并记录可点击区域

use ratatui::layout::{Position, Rect};
use ratatui::Frame;
use tracing::debug;

use crate::core::event::{
    InputEvent, Key, KeyEvent, KeyEventKind, MouseAction, MouseButton, MouseEvent,
};
use crate::kernel::{Action, AppState, Effect, FocusTarget, Store};
use crate::services::{KeybindingContext, KeybindingService, Settings};
use crate::tui::view::{EventResult, View};

use super::render::{render_screen, HitRegions, ScreenLayout};
use super::theme::UiTheme;

pub struct TodoApp {
    store: Store,
    keybindings: KeybindingService,
    theme: UiTheme,
    hits: HitRegions,
    cursor: Option<(u16, u16)>,
}

impl TodoApp {
    pub fn new(keybindings: KeybindingService, theme: UiTheme) -> Self {
        Self {
            store: Store::new(AppState::new()),
            keybindings,
            theme,
            hits: HitRegions::default(),
            cursor: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            KeybindingService::from_rules(&settings.keybindings),
            UiTheme::from_settings(&settings.theme),
        )
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn hits(&self) -> &HitRegions {
        &self.hits
    }

    pub fn dispatch(&mut self, action: Action) -> EventResult {
        let result = self.store.dispatch(action);
        if result.effects.contains(&Effect::Quit) {
            return EventResult::Quit;
        }
        if result.state_changed {
            EventResult::Redraw
        } else {
            EventResult::Consumed
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        let key = Key::from(*event);
        let context = KeybindingContext::from(self.state().ui.focus);
        if let Some(command) = self.keybindings.resolve(context, &key) {
            debug!(command = command.name(), "key command");
            return self.dispatch(Action::RunCommand(command));
        }

        match Key::typed_char(event) {
            Some(ch) => self.dispatch(Action::InputInsert(ch)),
            None => EventResult::Ignored,
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let pos = Position::new(event.column, event.row);

        match MouseAction::from(event.kind) {
            MouseAction::Down(MouseButton::Left) => self.handle_click(pos),
            MouseAction::ScrollUp if self.hits.list.contains(pos) => {
                self.dispatch(Action::ListScroll { delta: -1 })
            }
            MouseAction::ScrollDown if self.hits.list.contains(pos) => {
                self.dispatch(Action::ListScroll { delta: 1 })
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_click(&mut self, pos: Position) -> EventResult {
        if let Some(row) = self.hits.row_at(pos).copied() {
            if row.delete.contains(pos) {
                return self.dispatch(Action::DeleteItem { key: row.key });
            }
            return self.dispatch(Action::ListClickRow { index: row.index });
        }

        if self.hits.button.contains(pos) {
            return self.dispatch(Action::AddItem);
        }
        if self.hits.input.contains(pos) {
            return self.dispatch(Action::SetFocus(FocusTarget::Input));
        }
        if self.hits.list.contains(pos) {
            return self.dispatch(Action::SetFocus(FocusTarget::List));
        }

        EventResult::Ignored
    }
}

impl View for TodoApp {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key_event) => self.handle_key(key_event),
            InputEvent::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            InputEvent::Paste(text) => self.dispatch(Action::InputPaste(text.clone())),
            InputEvent::Resize(_, _) => EventResult::Redraw,
            InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = ScreenLayout::compute(area);
        let _ = self.store.dispatch(Action::ListSetViewHeight {
            rows: layout.visible_rows(),
        });

        let rendered = render_screen(frame, &layout, self.store.state(), &self.theme);
        self.hits = rendered.hits;
        self.cursor = rendered.cursor;
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/screen.rs"]
mod tests;
