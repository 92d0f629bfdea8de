//! Code input panel: line-numbered editor plus the submit control.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use mentor_app::CodeEditor;

use crate::theme::{palette, styles};

pub const TITLE: &str = "Enter Code Snippet";
pub const PLACEHOLDER: &str = "Paste your code here... (e.g., a function, an algorithm)";
pub const SUBMIT_LABEL: &str = "Explain Code & Ask \"Why?\"";
pub const LOADING_LABEL: &str = "Analyzing...";

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The editor and its submit button
pub struct CodeInput<'a> {
    editor: &'a CodeEditor,
    focused: bool,
    loading: bool,
    frame: usize,
}

/// What part of the buffer fits in the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Viewport {
    /// Area for the code itself, right of the gutter
    text: Rect,
    gutter_width: u16,
    top_row: usize,
    /// Display columns hidden on the left
    left_col: usize,
}

impl<'a> CodeInput<'a> {
    pub fn new(editor: &'a CodeEditor) -> Self {
        Self {
            editor,
            focused: false,
            loading: false,
            frame: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Render the submit control disabled, with a spinner at `frame`.
    pub fn loading(mut self, loading: bool, frame: usize) -> Self {
        self.loading = loading;
        self.frame = frame;
        self
    }

    /// Terminal cursor position for `area`, when the editor has focus.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let (editor_area, _) = split(styles::glass_block(true).inner(area));
        let viewport = self.viewport(editor_area);
        if viewport.text.width == 0 || viewport.text.height == 0 {
            return None;
        }

        let (row, _) = self.editor.cursor();
        let x = cursor_display_col(self.editor).saturating_sub(viewport.left_col);
        let y = row.saturating_sub(viewport.top_row);

        Some(Position::new(
            viewport.text.x + x as u16,
            viewport.text.y + y as u16,
        ))
    }

    fn viewport(&self, area: Rect) -> Viewport {
        let line_count = self.editor.lines().len();
        let gutter_width = if self.editor.is_empty() {
            0
        } else {
            (line_count.to_string().len().max(2) + 1) as u16
        };
        let gutter_width = gutter_width.min(area.width);
        let text = Rect {
            x: area.x + gutter_width,
            width: area.width - gutter_width,
            ..area
        };

        let (row, _) = self.editor.cursor();
        let visible_rows = text.height.max(1) as usize;
        let top_row = row.saturating_sub(visible_rows - 1);

        let visible_cols = text.width.max(1) as usize;
        let left_col = cursor_display_col(self.editor).saturating_sub(visible_cols - 1);

        Viewport {
            text,
            gutter_width,
            top_row,
            left_col,
        }
    }

    fn render_editor(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.editor.is_empty() {
            let placeholder = Line::from(Span::styled(PLACEHOLDER, styles::text_muted()));
            buf.set_line(area.x, area.y, &placeholder, area.width);
            return;
        }

        let viewport = self.viewport(area);
        let (cursor_row, _) = self.editor.cursor();
        let lines = self.editor.lines();

        for (i, line) in lines
            .iter()
            .enumerate()
            .skip(viewport.top_row)
            .take(viewport.text.height as usize)
        {
            let y = area.y + (i - viewport.top_row) as u16;

            if viewport.gutter_width > 0 {
                let gutter_style = if i == cursor_row && self.focused {
                    styles::accent()
                } else {
                    Style::default().fg(palette::GUTTER_FG)
                };
                let number = format!(
                    "{:>width$} ",
                    i + 1,
                    width = viewport.gutter_width as usize - 1
                );
                buf.set_stringn(area.x, y, number, viewport.gutter_width as usize, gutter_style);
            }

            let visible = clip_columns(line, viewport.left_col);
            buf.set_stringn(
                viewport.text.x,
                y,
                visible,
                viewport.text.width as usize,
                styles::text_primary(),
            );
        }
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label = if self.loading {
            format!("{} {}", SPINNER[self.frame % SPINNER.len()], LOADING_LABEL)
        } else {
            SUBMIT_LABEL.to_string()
        };
        let style = styles::button(!self.loading);

        buf.set_style(area, style);
        let label_width = Line::raw(label.as_str()).width() as u16;
        let x = area.x + area.width.saturating_sub(label_width) / 2;
        buf.set_stringn(x, area.y, &label, area.width as usize, style);
    }
}

/// Editor rows on top, a one-row button at the bottom.
fn split(inner: Rect) -> (Rect, Rect) {
    let [editor, _, button] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);
    (editor, button)
}

fn cursor_display_col(editor: &CodeEditor) -> usize {
    let (row, col) = editor.cursor();
    editor.lines()[row]
        .chars()
        .take(col)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Drop the first `skip` display columns of `line`.
fn clip_columns(line: &str, skip: usize) -> &str {
    if skip == 0 {
        return line;
    }
    let mut seen = 0;
    for (i, c) in line.char_indices() {
        if seen >= skip {
            return &line[i..];
        }
        seen += c.width().unwrap_or(0);
    }
    ""
}

impl Widget for CodeInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block(TITLE, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (editor_area, button_area) = split(inner);
        self.render_editor(editor_area, buf);
        self.render_button(button_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Modifier;

    #[test]
    fn test_empty_editor_shows_placeholder_and_title() {
        let editor = CodeEditor::new();
        let mut term = TestTerminal::new();
        term.render_widget(CodeInput::new(&editor), term.area());

        assert!(term.buffer_contains(TITLE));
        assert!(term.buffer_contains(PLACEHOLDER));
        assert!(term.buffer_contains(SUBMIT_LABEL));
    }

    #[test]
    fn test_code_is_shown_with_line_numbers() {
        let editor = CodeEditor::from_text("fn main() {\n    run();\n}");
        let mut term = TestTerminal::new();
        term.render_widget(CodeInput::new(&editor), term.area());

        assert!(term.buffer_contains(" 1 fn main() {"));
        assert!(term.buffer_contains(" 2     run();"));
        assert!(!term.buffer_contains(PLACEHOLDER));
    }

    #[test]
    fn test_loading_disables_button() {
        let editor = CodeEditor::from_text("x");
        let mut term = TestTerminal::new();
        term.render_widget(CodeInput::new(&editor).loading(true, 0), term.area());

        assert!(term.buffer_contains(LOADING_LABEL));
        assert!(!term.buffer_contains(SUBMIT_LABEL));

        let y = term.find_line(LOADING_LABEL).unwrap();
        let cell = &term.buffer()[(2, y)];
        assert_eq!(cell.bg, palette::BUTTON_DISABLED_BG);
        assert!(!cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_enabled_button_style() {
        let editor = CodeEditor::from_text("x");
        let mut term = TestTerminal::new();
        term.render_widget(CodeInput::new(&editor), term.area());

        let y = term.find_line(SUBMIT_LABEL).unwrap();
        assert_eq!(term.buffer()[(2, y)].bg, palette::BUTTON_BG);
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let text: Vec<String> = (1..=40).map(|n| format!("line {n}")).collect();
        let mut editor = CodeEditor::from_text(&text.join("\n"));
        for _ in 0..39 {
            editor.move_down();
        }

        let mut term = TestTerminal::with_size(40, 10);
        term.render_widget(CodeInput::new(&editor).focused(true), term.area());

        assert!(term.buffer_contains("line 40"));
        assert!(!term.buffer_contains("line 1 "));
    }

    #[test]
    fn test_cursor_position_only_when_focused() {
        let mut editor = CodeEditor::from_text("abc");
        editor.move_right();
        let area = Rect::new(0, 0, 40, 10);

        assert!(CodeInput::new(&editor).cursor_position(area).is_none());

        // border (1) + gutter "NN " (3) + one char
        let pos = CodeInput::new(&editor)
            .focused(true)
            .cursor_position(area)
            .unwrap();
        assert_eq!(pos, Position::new(5, 1));
    }

    #[test]
    fn test_horizontal_scroll_follows_cursor() {
        let long = "x".repeat(60) + "END";
        let mut editor = CodeEditor::from_text(&long);
        editor.apply(mentor_app::EditorAction::End);

        let mut term = TestTerminal::with_size(30, 8);
        term.render_widget(CodeInput::new(&editor).focused(true), term.area());

        assert!(term.buffer_contains("END"));
    }

    #[test]
    fn test_clip_columns() {
        assert_eq!(clip_columns("abcdef", 0), "abcdef");
        assert_eq!(clip_columns("abcdef", 2), "cdef");
        assert_eq!(clip_columns("ab", 5), "");
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let editor = CodeEditor::from_text("x");
        let mut term = TestTerminal::with_size(3, 2);
        term.render_widget(CodeInput::new(&editor), term.area());
    }
}
