//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! the handler layer and headless consumers never depend on crossterm.

/// Abstract input key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including shifted symbols
    Char(char),
    /// Character with Ctrl held (Ctrl+s, Ctrl+c, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing / focus
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Whether this key triggers a submission.
    pub fn is_submit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('s') | InputKey::F(5))
    }

    /// Whether this key quits regardless of focus.
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c') | InputKey::CharCtrl('q'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_keys() {
        assert!(InputKey::CharCtrl('s').is_submit());
        assert!(InputKey::F(5).is_submit());
        assert!(!InputKey::Char('s').is_submit());
        assert!(!InputKey::F(4).is_submit());
    }

    #[test]
    fn test_force_quit_keys() {
        assert!(InputKey::CharCtrl('c').is_force_quit());
        assert!(InputKey::CharCtrl('q').is_force_quit());
        assert!(!InputKey::Char('q').is_force_quit());
    }
}
