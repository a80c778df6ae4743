use crate::core::event::InputEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect);

    fn cursor_position(&self) -> Option<(u16, u16)> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; nothing visible changed.
    Consumed,
    Ignored,
    /// Handled and the screen must be redrawn.
    Redraw,
    Quit,
}

#[cfg(test)]
#[path = "../../tests/unit/tui/view.rs"]
mod tests;
