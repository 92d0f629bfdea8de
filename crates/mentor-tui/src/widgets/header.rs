//! Header bar widget
//!
//! App title, model name, project link and the key hints for the focused
//! pane.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use mentor_app::Focus;

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Code Mentor AI";
pub const PROJECT_LINK: &str = "github.com/BeniCheni/code-mentor-ai";

/// Main header showing app title, model and keybindings
pub struct MainHeader<'a> {
    model: &'a str,
    focus: Focus,
}

impl<'a> MainHeader<'a> {
    pub fn new(model: &'a str, focus: Focus) -> Self {
        Self { model, focus }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Focus::Editor => &[
                ("Ctrl+S", "Explain"),
                ("Esc", "Results"),
                ("Ctrl+U", "Clear"),
                ("Ctrl+Q", "Quit"),
            ],
            Focus::Viewer => &[
                ("1-5", "Tabs"),
                ("j/k", "Scroll"),
                ("i", "Edit"),
                ("q", "Quit"),
            ],
        }
    }
}

fn hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        let label = if i + 1 == hints.len() {
            format!("] {label}")
        } else {
            format!("] {label}  ")
        };
        spans.push(Span::styled("[", styles::text_muted()));
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::styled(label, styles::text_muted()));
    }
    spans
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("◆", styles::accent()),
            Span::raw(" "),
            Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.model, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        let hints_line = Line::from(hint_spans(self.hints()));
        let hints_width = hints_line.width() as u16;

        let link_line = Line::from(vec![
            Span::styled(PROJECT_LINK, styles::text_muted()),
            Span::raw(" "),
        ]);
        let link_width = link_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        let hints_x = inner.x + left_width + 2;
        let hints_fit = left_width + hints_width + 2 <= inner.width;
        if hints_fit {
            buf.set_line(hints_x, inner.y, &hints_line, hints_width);
        }

        let used = if hints_fit {
            left_width + hints_width + 4
        } else {
            left_width + 2
        };
        if used + link_width <= inner.width {
            let link_x = inner.x + inner.width - link_width;
            buf.set_line(link_x, inner.y, &link_line, link_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title_and_model() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new("gemini-2.5-flash", Focus::Editor), term.area());

        assert!(term.buffer_contains(APP_TITLE));
        assert!(term.buffer_contains("gemini-2.5-flash"));
    }

    #[test]
    fn test_editor_hints() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(MainHeader::new("m", Focus::Editor), term.area());

        assert!(term.buffer_contains("[Ctrl+S] Explain"));
        assert!(term.buffer_contains("[Esc] Results"));
    }

    #[test]
    fn test_viewer_hints() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(MainHeader::new("m", Focus::Viewer), term.area());

        assert!(term.buffer_contains("[1-5] Tabs"));
        assert!(term.buffer_contains("[q] Quit"));
    }

    #[test]
    fn test_link_shown_on_wide_terminal() {
        let mut term = TestTerminal::with_size(160, 3);
        term.render_widget(MainHeader::new("gemini-2.5-flash", Focus::Editor), term.area());

        assert!(term.buffer_contains(PROJECT_LINK));
    }

    #[test]
    fn test_narrow_terminal_keeps_title() {
        let mut term = TestTerminal::compact();
        term.render_widget(MainHeader::new("gemini-2.5-flash", Focus::Editor), term.area());

        assert!(term.buffer_contains(APP_TITLE));
        assert!(!term.buffer_contains("[Ctrl+S]"));
    }
}
