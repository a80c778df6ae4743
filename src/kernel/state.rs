use unicode_segmentation::UnicodeSegmentation;

use super::todo::TodoList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Input,
    List,
}

impl FocusTarget {
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Input => FocusTarget::List,
            FocusTarget::List => FocusTarget::Input,
        }
    }

    pub fn prev(self) -> Self {
        // Two targets: cycling either way lands on the other one.
        self.next()
    }
}

/// Selection and scroll of the item list. Measured in items, not terminal lines.
#[derive(Debug, Clone, Default)]
pub struct ListViewState {
    selected: Option<usize>,
    scroll_offset: usize,
    view_height: usize,
}

impl ListViewState {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn view_height(&self) -> usize {
        self.view_height
    }

    pub fn set_view_height(&mut self, height: usize, len: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;

        match self.selected {
            Some(index) => self.keep_row_visible(index, len),
            None => self.clamp_scroll(len),
        }

        true
    }

    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        let prev = (self.selected, self.scroll_offset);
        self.selected = Some(index);
        self.keep_row_visible(index, len);
        prev != (self.selected, self.scroll_offset)
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) -> bool {
        if len == 0 || delta == 0 {
            return false;
        }

        let Some(current) = self.selected else {
            let index = if delta < 0 { len - 1 } else { 0 };
            return self.select(index, len);
        };

        let index = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            (current + delta as usize).min(len - 1)
        };
        self.select(index, len)
    }

    pub fn scroll(&mut self, delta: isize, len: usize) -> bool {
        if len == 0 || delta == 0 {
            return false;
        }

        let max_scroll = len.saturating_sub(self.view_height.max(1));
        let prev = self.scroll_offset;

        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_scroll);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }

        self.scroll_offset != prev
    }

    /// Re-establishes the invariants after the list changed length.
    pub fn sync_len(&mut self, len: usize) {
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
        match self.selected {
            Some(index) => self.keep_row_visible(index, len),
            None => self.clamp_scroll(len),
        }
    }

    pub fn keep_row_visible(&mut self, row_index: usize, len: usize) {
        let view_height = self.view_height.max(1);

        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
        } else if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = row_index.saturating_sub(view_height - 1);
        }

        self.clamp_scroll(len);
    }

    fn clamp_scroll(&mut self, len: usize) {
        let max_scroll = len.saturating_sub(self.view_height.max(1));
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }
}

/// Cursor of the text field. The text itself lives in [`TodoList`] as the
/// pending name; every edit produces a new string that replaces it.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    cursor: usize,
}

impl InputState {
    /// Byte offset into the pending name, always on a grapheme boundary.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_left(&mut self, text: &str) -> bool {
        match prev_boundary(text, self.cursor) {
            Some(pos) => {
                self.cursor = pos;
                true
            }
            None => false,
        }
    }

    pub fn move_right(&mut self, text: &str) -> bool {
        match next_boundary(text, self.cursor) {
            Some(pos) => {
                self.cursor = pos;
                true
            }
            None => false,
        }
    }

    pub fn move_home(&mut self) -> bool {
        std::mem::replace(&mut self.cursor, 0) != 0
    }

    pub fn move_end(&mut self, text: &str) -> bool {
        std::mem::replace(&mut self.cursor, text.len()) != text.len()
    }

    pub fn insert(&mut self, text: &str, insert: &str) -> String {
        let cursor = self.cursor.min(text.len());
        let mut out = String::with_capacity(text.len() + insert.len());
        out.push_str(&text[..cursor]);
        out.push_str(insert);
        out.push_str(&text[cursor..]);
        self.cursor = cursor + insert.len();
        out
    }

    pub fn delete_backward(&mut self, text: &str) -> Option<String> {
        let start = prev_boundary(text, self.cursor)?;
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..start]);
        out.push_str(&text[self.cursor..]);
        self.cursor = start;
        Some(out)
    }

    pub fn delete_forward(&mut self, text: &str) -> Option<String> {
        let end = next_boundary(text, self.cursor)?;
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..self.cursor]);
        out.push_str(&text[end..]);
        Some(out)
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn set_to_end(&mut self, text: &str) {
        self.cursor = text.len();
    }
}

fn prev_boundary(text: &str, cursor: usize) -> Option<usize> {
    text.get(..cursor)?
        .grapheme_indices(true)
        .next_back()
        .map(|(index, _)| index)
}

fn next_boundary(text: &str, cursor: usize) -> Option<usize> {
    text.get(cursor..)?
        .graphemes(true)
        .next()
        .map(|g| cursor + g.len())
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: FocusTarget,
    pub list: ListViewState,
    pub input: InputState,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub todo: TodoList,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
