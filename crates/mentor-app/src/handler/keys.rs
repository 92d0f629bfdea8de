//! Key event handlers for the focused pane

use crate::editor::EditorAction;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use crate::viewer::ExplanationTab;

/// Indentation inserted for Tab in the editor
const INDENT: &str = "    ";

/// Convert key events to messages based on the focused pane
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    // The submit control is disabled while a request is running
    if key.is_submit() {
        if state.submission.is_loading {
            return None;
        }
        return Some(Message::Submit);
    }

    match state.focus {
        Focus::Editor => handle_key_editor(key),
        Focus::Viewer => handle_key_viewer(key),
    }
}

/// Handle key events while the code editor has focus
fn handle_key_editor(key: InputKey) -> Option<Message> {
    let action = match key {
        InputKey::Char(c) => EditorAction::Insert(c),
        InputKey::Enter => EditorAction::Newline,
        InputKey::Backspace => EditorAction::Backspace,
        InputKey::Delete => EditorAction::Delete,
        InputKey::Left => EditorAction::Left,
        InputKey::Right => EditorAction::Right,
        InputKey::Up => EditorAction::Up,
        InputKey::Down => EditorAction::Down,
        InputKey::Home => EditorAction::Home,
        InputKey::End => EditorAction::End,
        InputKey::CharCtrl('u') => EditorAction::Clear,

        InputKey::Tab => return Some(Message::Paste(INDENT.to_string())),
        InputKey::Esc => return Some(Message::FocusViewer),
        _ => return None,
    };

    Some(Message::Edit(action))
}

/// Handle key events while the result viewer has focus
fn handle_key_viewer(key: InputKey) -> Option<Message> {
    match key {
        // Tab selection by number
        InputKey::Char(c @ '1'..='5') => {
            let index = c.to_digit(10)? as usize - 1;
            ExplanationTab::from_index(index).map(Message::SelectTab)
        }

        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextTab),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::PreviousTab),

        // Scrolling
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Char('g') => Some(Message::ScrollToTop),

        // Back to editing
        InputKey::Char('i' | 'e') | InputKey::Enter => Some(Message::FocusEditor),

        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
