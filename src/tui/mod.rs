//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the list state has no terminal dependency.

pub mod terminal_guard;
pub mod view;
