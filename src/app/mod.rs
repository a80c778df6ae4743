//! 应用层：待办屏幕（输入分发 + 渲染）

pub mod render;
pub mod screen;
pub mod theme;

pub use screen::TodoApp;
pub use theme::UiTheme;
