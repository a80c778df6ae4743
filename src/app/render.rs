//! 渲染：单屏布局（标题 / 列表 / 输入框 / 按钮 / 帮助行）
//!
//! Rendering is a pure function of the state. It returns the screen regions
//! the mouse handler needs, including the item key of every visible row, so a
//! click always refers to what was actually drawn.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::kernel::{AppState, FocusTarget, Item, ItemKey};

use super::theme::UiTheme;

pub const TITLE: &str = "ToDo List";
pub const INPUT_LABEL: &str = "Назва завдання";
pub const ADD_BUTTON_LABEL: &str = "Додати завдання";
pub const ID_LABEL: &str = "ID: ";
pub const NAME_LABEL: &str = "Завдання: ";
pub const DELETE_LABEL: &str = "[x] Видалити";
pub const EMPTY_HINT: &str = "Список порожній";
pub const HELP: &str = "Enter: додати · Tab: фокус · ↑/↓: вибір · d/Del: видалити · Esc: вихід";

/// Terminal lines per item.
pub const ROW_HEIGHT: u16 = 2;

const TITLE_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 1;
const HELP_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub title: Rect,
    pub list: Rect,
    pub list_inner: Rect,
    pub input: Rect,
    pub input_inner: Rect,
    pub button: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(HELP_HEIGHT),
            ])
            .split(area);

        let list = chunks[1];
        let input = chunks[2];
        Self {
            title: chunks[0],
            list,
            list_inner: Block::default().borders(Borders::ALL).inner(list),
            input,
            input_inner: Block::default().borders(Borders::ALL).inner(input),
            button: chunks[3],
            help: chunks[4],
        }
    }

    /// Number of whole items that fit in the list.
    pub fn visible_rows(&self) -> usize {
        (self.list_inner.height / ROW_HEIGHT) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    pub index: usize,
    pub key: ItemKey,
    pub area: Rect,
    pub delete: Rect,
}

#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    pub list: Rect,
    pub input: Rect,
    pub button: Rect,
    pub rows: Vec<RowHit>,
}

impl HitRegions {
    pub fn row_at(&self, pos: Position) -> Option<&RowHit> {
        self.rows.iter().find(|row| row.area.contains(pos))
    }
}

pub struct Rendered {
    pub hits: HitRegions,
    pub cursor: Option<(u16, u16)>,
}

pub fn render_screen(
    frame: &mut Frame,
    layout: &ScreenLayout,
    state: &AppState,
    theme: &UiTheme,
) -> Rendered {
    render_title(frame, layout.title, theme);
    let rows = render_list(frame, layout, state, theme);
    let cursor = render_input(frame, layout, state, theme);
    render_button(frame, layout.button, theme);
    render_help(frame, layout.help, theme);

    Rendered {
        hits: HitRegions {
            list: layout.list,
            input: layout.input,
            button: layout.button,
            rows,
        },
        cursor,
    }
}

fn render_title(frame: &mut Frame, area: Rect, theme: &UiTheme) {
    let title = Paragraph::new(Span::styled(
        TITLE,
        Style::default()
            .fg(theme.title_fg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);
}

fn border_style(focused: bool, theme: &UiTheme) -> Style {
    let color = if focused {
        theme.focus_border
    } else {
        theme.inactive_border
    };
    Style::default().fg(color)
}

fn render_list(
    frame: &mut Frame,
    layout: &ScreenLayout,
    state: &AppState,
    theme: &UiTheme,
) -> Vec<RowHit> {
    let focused = state.ui.focus == FocusTarget::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused, theme));
    frame.render_widget(block, layout.list);

    let inner = layout.list_inner;
    let items = state.todo.snapshot();
    if items.is_empty() {
        if inner.height > 0 {
            let hint = Paragraph::new(Span::styled(
                EMPTY_HINT,
                Style::default().fg(theme.muted_fg),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(hint, Rect { height: 1, ..inner });
        }
        return Vec::new();
    }

    let visible = layout.visible_rows();
    let scroll = state.ui.list.scroll_offset();
    let selected = state.ui.list.selected();
    let mut rows = Vec::with_capacity(visible);

    for (slot, (index, item)) in items.iter().enumerate().skip(scroll).take(visible).enumerate() {
        let area = Rect {
            x: inner.x,
            y: inner.y + slot as u16 * ROW_HEIGHT,
            width: inner.width,
            height: ROW_HEIGHT,
        };
        let highlighted = focused && selected == Some(index);
        let delete = render_row(frame, area, item, highlighted, theme);
        rows.push(RowHit {
            index,
            key: item.key(),
            area,
            delete,
        });
    }

    rows
}

/// Draws one item and returns the area of its delete affordance.
fn render_row(
    frame: &mut Frame,
    area: Rect,
    item: &Item,
    highlighted: bool,
    theme: &UiTheme,
) -> Rect {
    let base = if highlighted {
        Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("{ID_LABEL}{}", item.id()),
            base.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("{NAME_LABEL}{}", item.name()), base)),
    ];
    frame.render_widget(Paragraph::new(lines).style(base), area);

    let label_width = (DELETE_LABEL.width() as u16).min(area.width);
    let delete = Rect {
        x: area.right().saturating_sub(label_width),
        y: area.y,
        width: label_width,
        height: 1,
    };
    let label = Paragraph::new(Span::styled(
        DELETE_LABEL,
        base.fg(theme.delete_fg).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(label, delete);
    delete
}

fn render_input(
    frame: &mut Frame,
    layout: &ScreenLayout,
    state: &AppState,
    theme: &UiTheme,
) -> Option<(u16, u16)> {
    let focused = state.ui.focus == FocusTarget::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused, theme))
        .title(format!(" {INPUT_LABEL} "));

    let text = state.todo.pending_name();
    let cursor = state.ui.input.cursor().min(text.len());
    let cursor_col = text.get(..cursor).map(UnicodeWidthStr::width).unwrap_or(0);

    let inner = layout.input_inner;
    let h_scroll = cursor_col.saturating_sub(usize::from(inner.width.saturating_sub(1)));
    let (start, skipped) = skip_columns(text, h_scroll);
    // Offset within the field, always below inner.width.
    let visible_col = u16::try_from(cursor_col.saturating_sub(skipped)).unwrap_or(u16::MAX);

    let input = Paragraph::new(&text[start..]).block(block);
    frame.render_widget(input, layout.input);

    if !focused || inner.width == 0 || inner.height == 0 {
        return None;
    }
    Some((inner.x.saturating_add(visible_col), inner.y))
}

/// Byte offset and display width of the shortest prefix at least `columns` wide.
fn skip_columns(text: &str, columns: usize) -> (usize, usize) {
    let mut skipped = 0;
    for (idx, ch) in text.char_indices() {
        if skipped >= columns {
            return (idx, skipped);
        }
        skipped += UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    (text.len(), skipped)
}

fn render_button(frame: &mut Frame, area: Rect, theme: &UiTheme) {
    let button = Paragraph::new(Span::raw(ADD_BUTTON_LABEL))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(theme.button_bg)
                .fg(theme.button_fg)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(button, area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &UiTheme) {
    let help = Paragraph::new(Span::styled(HELP, Style::default().fg(theme.muted_fg)));
    frame.render_widget(help, area);
}
