//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::ACCENT_ALT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - the active tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Submit button ---
pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::BUTTON_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette::TEXT_SECONDARY)
            .bg(palette::BUTTON_DISABLED_BG)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Glass block with a bold title that follows the focus color.
pub fn titled_block(title: &str, focused: bool) -> Block<'static> {
    let title_style = if focused {
        accent_bold()
    } else {
        text_secondary().add_modifier(Modifier::BOLD)
    };
    glass_block(focused).title(ratatui::text::Span::styled(
        format!(" {title} "),
        title_style,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_block_border_follows_focus() {
        let mut term = crate::test_utils::TestTerminal::with_size(10, 3);
        term.render_widget(glass_block(true), term.area());
        assert_eq!(term.buffer()[(0, 0)].fg, palette::BORDER_ACTIVE);

        term.render_widget(glass_block(false), term.area());
        assert_eq!(term.buffer()[(0, 0)].fg, palette::BORDER_DIM);
    }

    #[test]
    fn test_disabled_button_is_not_bold() {
        assert!(button(true).add_modifier.contains(Modifier::BOLD));
        assert!(!button(false).add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_focused_selected_uses_accent_background() {
        assert_eq!(focused_selected().bg, Some(palette::ACCENT));
        assert_eq!(focused_selected().fg, Some(palette::CONTRAST_FG));
    }
}
