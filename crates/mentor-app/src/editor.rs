//! Multi-line plain-text buffer backing the code input.
//!
//! Cursor columns count `char`s, not bytes, so multi-byte input never splits
//! a code point. Loaded text is returned byte-for-byte until the first edit;
//! after that, lines are joined with the line ending the text was loaded with.

/// Editing operations the key handler can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Clear,
}

/// Line buffer with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEditor {
    /// Line contents without their terminators
    lines: Vec<String>,
    row: usize,
    col: usize,
    line_ending: &'static str,
    /// Text as loaded; dropped on the first edit
    source: Option<String>,
}

impl Default for CodeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEditor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            line_ending: "\n",
            source: None,
        }
    }

    /// Buffer holding `text`, cursor at the very start.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        let line_ending = if text.contains("\r\n") { "\r\n" } else { "\n" };

        Self {
            lines,
            row: 0,
            col: 0,
            line_ending,
            source: Some(text.to_string()),
        }
    }

    /// Full contents: the loaded text verbatim while unedited.
    pub fn text(&self) -> String {
        match &self.source {
            Some(source) => source.clone(),
            None => self.lines.join(self.line_ending),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// True when the buffer holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    /// `(row, col)` with `col` in chars.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::Insert(c) => self.insert_char(c),
            EditorAction::Newline => self.newline(),
            EditorAction::Backspace => self.backspace(),
            EditorAction::Delete => self.delete(),
            EditorAction::Left => self.move_left(),
            EditorAction::Right => self.move_right(),
            EditorAction::Up => self.move_up(),
            EditorAction::Down => self.move_down(),
            EditorAction::Home => self.col = 0,
            EditorAction::End => self.col = self.line_len(self.row),
            EditorAction::Clear => self.clear(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.newline();
            return;
        }
        self.source = None;
        let at = self.byte_index(self.row, self.col);
        self.lines[self.row].insert(at, c);
        self.col += 1;
    }

    /// Insert pasted text at the cursor, honouring embedded newlines.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for c in normalized.chars() {
            self.insert_char(c);
        }
    }

    pub fn newline(&mut self) {
        self.source = None;
        let at = self.byte_index(self.row, self.col);
        let rest = self.lines[self.row].split_off(at);
        self.row += 1;
        self.lines.insert(self.row, rest);
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 || self.row > 0 {
            self.source = None;
        }
        if self.col > 0 {
            let at = self.byte_index(self.row, self.col - 1);
            self.lines[self.row].remove(at);
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&current);
        }
    }

    pub fn delete(&mut self) {
        if self.col < self.line_len(self.row) || self.row + 1 < self.lines.len() {
            self.source = None;
        }
        if self.col < self.line_len(self.row) {
            let at = self.byte_index(self.row, self.col);
            self.lines[self.row].remove(at);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_index(&self, row: usize, col: usize) -> usize {
        let line = &self.lines[row];
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }
}
