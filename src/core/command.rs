//! 命令系统：语义命令定义
//!
//! Commands describe *what* the user wants, independent of the key that
//! triggered it. Key → command mapping lives in `services::keybinding`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 列表操作 ====================
    AddItem,
    DeleteSelected,
    SelectPrev,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ==================== 输入框编辑 ====================
    CursorLeft,
    CursorRight,
    CursorLineStart,
    CursorLineEnd,
    DeleteBackward,
    DeleteForward,
    ClearInput,

    // ==================== 焦点 ====================
    FocusNext,
    FocusPrev,
    FocusInput,
    FocusList,

    // ==================== 系统操作 ====================
    Quit,
}

impl Command {
    pub const ALL: &'static [Command] = &[
        Command::AddItem,
        Command::DeleteSelected,
        Command::SelectPrev,
        Command::SelectNext,
        Command::SelectFirst,
        Command::SelectLast,
        Command::CursorLeft,
        Command::CursorRight,
        Command::CursorLineStart,
        Command::CursorLineEnd,
        Command::DeleteBackward,
        Command::DeleteForward,
        Command::ClearInput,
        Command::FocusNext,
        Command::FocusPrev,
        Command::FocusInput,
        Command::FocusList,
        Command::Quit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddItem => "addItem",
            Command::DeleteSelected => "deleteSelected",
            Command::SelectPrev => "selectPrev",
            Command::SelectNext => "selectNext",
            Command::SelectFirst => "selectFirst",
            Command::SelectLast => "selectLast",
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::ClearInput => "clearInput",
            Command::FocusNext => "focusNext",
            Command::FocusPrev => "focusPrev",
            Command::FocusInput => "focusInput",
            Command::FocusList => "focusList",
            Command::Quit => "quit",
        }
    }

    /// Case-insensitive lookup by [`Command::name`].
    pub fn from_name(name: &str) -> Option<Command> {
        let name = name.trim();
        Command::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
    }
}
