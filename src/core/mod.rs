//! 核心定义：
//! - Event: 统一输入事件
//! - Command: 语义命令

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key, MouseAction};
