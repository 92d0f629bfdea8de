//! Rich-text rendering for the Trade-offs and System Design tabs.
//!
//! The backend returns these sections as HTML-like markup. [`trusted_markup`]
//! is the only place that markup is interpreted: inline tags become span
//! styles, block tags become line breaks, entities are decoded. Nothing is
//! stripped for safety; unknown tags are dropped and their text kept.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::palette;

/// Interpret trusted markup as styled terminal lines.
///
/// Input without any tag is treated as plain text, so its newlines are kept.
pub fn trusted_markup(markup: &str, base: Style) -> Vec<Line<'static>> {
    if !contains_tag(markup) {
        return decode_entities(markup)
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), base)))
            .collect();
    }

    let mut renderer = Renderer::new(base);
    let mut rest = markup;

    while let Some(start) = rest.find('<') {
        let (text, tail) = rest.split_at(start);
        renderer.text(&decode_entities(text));

        match tag_end(tail) {
            Some(end) => {
                renderer.tag(&tail[1..end]);
                rest = &tail[end + 1..];
            }
            None => {
                renderer.text("<");
                rest = &tail[1..];
            }
        }
    }
    renderer.text(&decode_entities(rest));

    renderer.finish()
}

fn contains_tag(markup: &str) -> bool {
    markup
        .match_indices('<')
        .any(|(i, _)| tag_end(&markup[i..]).is_some())
}

/// Index of the `>` closing the tag that starts `s`, if `s` starts a tag.
fn tag_end(s: &str) -> Option<usize> {
    let next = s[1..].chars().next()?;
    if !(next.is_ascii_alphabetic() || next == '/' || next == '!') {
        return None;
    }
    s.find('>')
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "mdash" => Some('—'),
        "ndash" => Some('–'),
        "hellip" => Some('…'),
        "rarr" => Some('→'),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Nesting counters for inline styles.
#[derive(Default)]
struct Inline {
    bold: usize,
    italic: usize,
    underline: usize,
    code: usize,
    heading: usize,
    pre: usize,
}

struct Renderer {
    base: Style,
    inline: Inline,
    /// `None` for `<ul>`, `Some(next number)` for `<ol>`
    lists: Vec<Option<usize>>,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    buffer: String,
    pending_space: bool,
}

impl Renderer {
    fn new(base: Style) -> Self {
        Self {
            base,
            inline: Inline::default(),
            lists: Vec::new(),
            lines: Vec::new(),
            spans: Vec::new(),
            buffer: String::new(),
            pending_space: false,
        }
    }

    fn style(&self) -> Style {
        let mut style = self.base;
        if self.inline.bold > 0 || self.inline.heading > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.inline.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.inline.underline > 0 {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if self.inline.code > 0 || self.inline.pre > 0 {
            style = style.fg(palette::ACCENT);
        }
        if self.inline.heading > 0 {
            style = style.fg(palette::ACCENT_ALT);
        }
        style
    }

    fn at_line_start(&self) -> bool {
        self.spans.is_empty() && self.buffer.is_empty()
    }

    fn text(&mut self, text: &str) {
        if self.inline.pre > 0 {
            for (i, part) in text.split('\n').enumerate() {
                if i > 0 {
                    self.hard_break();
                }
                self.buffer.push_str(part);
            }
            return;
        }

        for c in text.chars() {
            if c.is_whitespace() {
                self.pending_space = !self.at_line_start();
            } else {
                if self.pending_space {
                    self.buffer.push(' ');
                    self.pending_space = false;
                }
                self.buffer.push(c);
            }
        }
    }

    /// Push buffered text as a span in the current style.
    fn flush_text(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.spans.push(Span::styled(text, self.style()));
        }
    }

    fn hard_break(&mut self) {
        self.flush_text();
        self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        self.pending_space = false;
    }

    /// End the current line if it has content.
    fn block_break(&mut self) {
        if !self.at_line_start() {
            self.hard_break();
        }
        self.pending_space = false;
    }

    /// End the current line and leave one blank line after it.
    fn paragraph_break(&mut self) {
        self.block_break();
        if self.lines.last().is_some_and(|l| l.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn tag(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.starts_with('!') {
            return;
        }
        let closing = raw.starts_with('/');
        let name: String = raw
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        // Whitespace before an inline tag belongs to the preceding text
        if self.pending_space && !is_block(&name) {
            self.buffer.push(' ');
            self.pending_space = false;
        }
        self.flush_text();

        match (name.as_str(), closing) {
            ("b" | "strong", _) => adjust(&mut self.inline.bold, closing),
            ("i" | "em", _) => adjust(&mut self.inline.italic, closing),
            ("u", _) => adjust(&mut self.inline.underline, closing),
            ("code" | "kbd" | "samp", _) => adjust(&mut self.inline.code, closing),
            ("br", _) => self.hard_break(),
            ("p" | "div" | "section" | "blockquote", _) => self.paragraph_break(),
            ("pre", _) => {
                self.paragraph_break();
                adjust(&mut self.inline.pre, closing);
            }
            ("h1" | "h2" | "h3" | "h4" | "h5" | "h6", _) => {
                self.paragraph_break();
                adjust(&mut self.inline.heading, closing);
            }
            ("ul", false) => {
                self.block_break();
                self.lists.push(None);
            }
            ("ol", false) => {
                self.block_break();
                self.lists.push(Some(1));
            }
            ("ul" | "ol", true) => {
                self.block_break();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.paragraph_break();
                }
            }
            ("li", false) => {
                self.block_break();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.spans.push(Span::styled(
                    format!("{}{}", "  ".repeat(depth), marker),
                    Style::default().fg(palette::ACCENT),
                ));
            }
            ("li", true) => self.block_break(),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.block_break();
        while self.lines.last().is_some_and(|l| l.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "br" | "p"
            | "div"
            | "section"
            | "blockquote"
            | "pre"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "ul"
            | "ol"
            | "li"
    )
}

fn adjust(counter: &mut usize, closing: bool) {
    if closing {
        *counter = counter.saturating_sub(1);
    } else {
        *counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_plain_text_keeps_newlines() {
        let lines = trusted_markup("first\nsecond", Style::default());
        assert_eq!(plain(&lines), vec!["first", "second"]);
    }

    #[test]
    fn test_paragraphs_are_separated_by_a_blank_line() {
        let lines = trusted_markup("<p>One</p><p>Two</p>", Style::default());
        assert_eq!(plain(&lines), vec!["One", "", "Two"]);
    }

    #[test]
    fn test_strong_becomes_bold_span() {
        let lines = trusted_markup(
            "<p>A <strong>memoized</strong> recursion.</p>",
            Style::default(),
        );
        assert_eq!(plain(&lines), vec!["A memoized recursion."]);

        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "memoized")
            .expect("bold span");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        assert!(!lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_lists_get_markers() {
        let lines = trusted_markup(
            "<ul><li>Cache</li><li>Queue</li></ul><ol><li>a</li><li>b</li></ol>",
            Style::default(),
        );
        assert_eq!(plain(&lines), vec!["• Cache", "• Queue", "", "1. a", "2. b"]);
    }

    #[test]
    fn test_entities_are_decoded() {
        let lines = trusted_markup("<p>a &lt; b &amp;&amp; c&#39;s &#x41;</p>", Style::default());
        assert_eq!(plain(&lines), vec!["a < b && c's A"]);
    }

    #[test]
    fn test_unknown_entity_is_left_alone() {
        assert_eq!(decode_entities("R&D &bogus; x"), "R&D &bogus; x");
    }

    #[test]
    fn test_whitespace_collapses_between_tags() {
        let lines = trusted_markup("<p>\n  spread   over\n  lines\n</p>", Style::default());
        assert_eq!(plain(&lines), vec!["spread over lines"]);
    }

    #[test]
    fn test_less_than_without_tag_is_text() {
        let lines = trusted_markup("<p>if a < b</p>", Style::default());
        assert_eq!(plain(&lines), vec!["if a < b"]);
    }

    #[test]
    fn test_unknown_tags_keep_their_text() {
        let lines = trusted_markup("<span class=\"x\">kept</span>", Style::default());
        assert_eq!(plain(&lines), vec!["kept"]);
    }

    #[test]
    fn test_pre_preserves_lines() {
        let lines = trusted_markup("<pre>a\n  b</pre>", Style::default());
        assert_eq!(plain(&lines), vec!["a", "  b"]);
    }

    #[test]
    fn test_br_breaks_line() {
        let lines = trusted_markup("one<br/>two", Style::default());
        assert_eq!(plain(&lines), vec!["one", "two"]);
    }
}
