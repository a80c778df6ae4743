//! todolist - 终端待办清单
//!
//! 模块结构：
//! - core: 输入事件与语义命令
//! - kernel: 无界面核心（TodoList, AppState, Action, Store）
//! - services: 快捷键与配置文件
//! - app: 待办屏幕（输入分发 + 渲染）
//! - tui: 终端集成（raw mode 守卫, View trait）

pub mod app;
pub mod core;
pub mod kernel;
pub mod services;
pub mod tui;
