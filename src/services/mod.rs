//! 服务层：快捷键、配置文件

pub mod keybinding;
pub mod settings;

pub use keybinding::{KeybindingContext, KeybindingService};
pub use settings::{KeybindingRule, Settings, ThemeSettings};
