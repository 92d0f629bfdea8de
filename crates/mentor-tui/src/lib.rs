//! mentor-tui - Terminal UI for Code Mentor
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! Engine from mentor-app and adds terminal rendering, event polling, and
//! widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
