//! Result viewer widget
//!
//! Renders whichever [`ResultPanel`] is current: the loading spinner, the
//! error panel, the welcome text, or the opening question above the five
//! explanation tabs.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use mentor_app::{ExplanationTab, ResultPanel, ViewerState};
use mentor_core::CodeExplanation;

use super::markup::trusted_markup;
use crate::theme::{palette, styles};

pub const TITLE: &str = "Mentor's Explanation";
pub const OPENING_QUESTION_LABEL: &str = "Mentor's Opening Question:";
pub const THINKING: &str = "Your mentor is thinking...";
pub const THINKING_DETAIL: &str = "Analyzing complexity, context, and trade-offs.";
pub const ERROR_TITLE: &str = "An Error Occurred";
pub const WELCOME_TITLE: &str = "Welcome, Future Tech Lead!";
pub const BEHAVIORAL_INTRO: &str =
    "Use these questions to practice articulating your thought process:";

const WELCOME_INTRO: &str = "This is your AI-powered Code Mentor. Paste a code snippet, like a \
    LeetCode solution or a piece of your project, and I'll help you break it down, just like in \
    a pair programming interview.";
const WELCOME_OUTRO: &str = "We'll analyze complexity, discuss trade-offs, and even prep for \
    those tricky behavioral questions. Let's build something that gets you hired.";

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Most rows the opening question may take before the tab bar.
const MAX_QUESTION_ROWS: usize = 4;

pub struct ExplanationView<'a> {
    panel: ResultPanel<'a>,
    focused: bool,
    frame: usize,
}

impl<'a> ExplanationView<'a> {
    pub fn new(panel: ResultPanel<'a>) -> Self {
        Self {
            panel,
            focused: false,
            frame: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Spinner frame for the loading panel.
    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }
}

impl StatefulWidget for ExplanationView<'_> {
    type State = ViewerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ViewerState) {
        let block = styles::titled_block(TITLE, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.panel {
            ResultPanel::Loading => render_loading(inner, buf, self.frame),
            ResultPanel::Error(message) => render_error(inner, buf, message),
            ResultPanel::Welcome => render_welcome(inner, buf),
            ResultPanel::Tabs(explanation) => render_tabs(inner, buf, explanation, state),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Status panels
// ─────────────────────────────────────────────────────────────────────────────

/// Vertically centered box of `height` rows.
fn centered(area: Rect, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage(5),
        Constraint::Percentage(90),
        Constraint::Percentage(5),
    ])
    .areas(middle);
    center
}

fn render_loading(area: Rect, buf: &mut Buffer, frame: usize) {
    let spinner = SPINNER[frame % SPINNER.len()];
    let lines = vec![
        Line::from(Span::styled(spinner, styles::accent_bold())),
        Line::default(),
        Line::from(Span::styled(THINKING, styles::text_bright_bold())),
        Line::from(Span::styled(THINKING_DETAIL, styles::text_secondary())),
    ];
    let height = lines.len() as u16;
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(centered(area, height + 1), buf);
}

fn render_error(area: Rect, buf: &mut Buffer, message: &str) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("⚠ ", styles::status_red()),
            Span::styled(ERROR_TITLE, styles::status_red().add_modifier(Modifier::BOLD)),
        ]),
        Line::default(),
    ];
    lines.extend(
        message
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), styles::status_red()))),
    );

    let width = (area.width as usize * 9 / 10).max(1);
    let height = wrap_lines(lines.clone(), width).len() as u16;
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(centered(area, height), buf);
}

fn render_welcome(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled("💡", styles::accent())),
        Line::default(),
        Line::from(Span::styled(WELCOME_TITLE, styles::text_bright_bold())),
        Line::default(),
        Line::from(Span::styled(WELCOME_INTRO, styles::text_secondary())),
        Line::default(),
        Line::from(Span::styled(WELCOME_OUTRO, styles::text_secondary())),
    ];

    let width = (area.width as usize * 9 / 10).max(1);
    let height = wrap_lines(lines.clone(), width).len() as u16;
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(centered(area, height), buf);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tab interface
// ─────────────────────────────────────────────────────────────────────────────

fn render_tabs(area: Rect, buf: &mut Buffer, explanation: &CodeExplanation, state: &mut ViewerState) {
    let width = area.width as usize;

    let question = wrap_lines(
        vec![Line::from(Span::styled(
            format!("\"{}\"", explanation.initial_question),
            styles::accent().add_modifier(Modifier::ITALIC),
        ))],
        width,
    );
    let question_rows = question.len().clamp(1, MAX_QUESTION_ROWS) as u16;

    let [label_area, question_area, tab_bar_area, rule_area, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(question_rows),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    buf.set_stringn(
        label_area.x,
        label_area.y,
        OPENING_QUESTION_LABEL,
        width,
        styles::text_bright_bold(),
    );
    Paragraph::new(question).render(question_area, buf);

    render_tab_bar(tab_bar_area, buf, state.active_tab);

    let body = wrap_lines(tab_lines(explanation, state.active_tab), width);
    state.update_content_size(body.len(), body_area.height as usize);

    render_rule(rule_area, buf, state);

    Paragraph::new(body)
        .scroll((state.offset.min(u16::MAX as usize) as u16, 0))
        .render(body_area, buf);

    if state.is_entering() {
        buf.set_style(body_area, Style::default().add_modifier(Modifier::DIM));
    }
}

fn render_tab_bar(area: Rect, buf: &mut Buffer, active: ExplanationTab) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let full_width: usize = ExplanationTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| tab_label(i, *tab, true).width() + 1)
        .sum();
    let compact = full_width > area.width as usize;

    let mut x = area.x;
    for (i, tab) in ExplanationTab::ALL.iter().enumerate() {
        let is_active = *tab == active;
        let padded = tab_label(i, *tab, is_active || !compact);
        let needed_width = padded.width() as u16;

        if x + needed_width > area.right() {
            break;
        }

        let style = if is_active {
            styles::focused_selected()
        } else {
            styles::text_muted()
        };

        buf.set_string(x, area.y, &padded, style);
        x += needed_width + 1;
    }
}

fn tab_label(index: usize, tab: ExplanationTab, with_name: bool) -> String {
    if with_name {
        format!(" {} {} ", index + 1, tab.label())
    } else {
        format!(" {} ", index + 1)
    }
}

/// Horizontal rule under the tab bar, with a scroll position when needed.
fn render_rule(area: Rect, buf: &mut Buffer, state: &ViewerState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let rule = "─".repeat(area.width as usize);
    buf.set_string(area.x, area.y, rule, styles::border_inactive());

    if state.total_lines > state.visible_lines && state.visible_lines > 0 {
        let last = (state.offset + state.visible_lines).min(state.total_lines);
        let position = format!(" {}-{}/{} ", state.offset + 1, last, state.total_lines);
        let position_width = position.width() as u16;
        if position_width < area.width {
            buf.set_string(
                area.right() - position_width,
                area.y,
                position,
                styles::text_muted(),
            );
        }
    }
}

/// Body lines for `tab`, before wrapping.
pub(crate) fn tab_lines(explanation: &CodeExplanation, tab: ExplanationTab) -> Vec<Line<'static>> {
    match tab {
        ExplanationTab::LineByLine => line_by_line(explanation),
        ExplanationTab::BigO => big_o(explanation),
        ExplanationTab::TradeOffs => {
            trusted_markup(&explanation.tradeoffs_and_alternatives, styles::text_primary())
        }
        ExplanationTab::SystemDesign => {
            trusted_markup(&explanation.system_design_context, styles::text_primary())
        }
        ExplanationTab::Behavioral => behavioral(explanation),
    }
}

fn line_by_line(explanation: &CodeExplanation) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, item) in explanation.line_by_line_explanation.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("Line(s): {}", item.line),
            styles::accent_bold(),
        )));
        lines.extend(
            item.explanation
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), styles::text_primary()))),
        );
    }
    lines
}

fn big_o(explanation: &CodeExplanation) -> Vec<Line<'static>> {
    let analysis = &explanation.big_o_analysis;
    let mut lines = Vec::new();

    for (i, (title, breakdown)) in [
        ("Time Complexity", analysis.time()),
        ("Space Complexity", analysis.space()),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(palette::ACCENT_ALT)),
            Span::styled(title, styles::text_bright_bold()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(palette::ACCENT_ALT)),
            Span::styled(breakdown.notation, styles::accent_bold()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(palette::ACCENT_ALT)),
            Span::styled(breakdown.justification, styles::text_primary()),
        ]));
    }
    lines
}

fn behavioral(explanation: &CodeExplanation) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        BEHAVIORAL_INTRO,
        styles::text_secondary(),
    ))];
    for question in &explanation.behavioral_questions {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("• ", styles::accent()),
            Span::styled(question.clone(), styles::text_primary()),
        ]));
    }
    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// Wrapping
// ─────────────────────────────────────────────────────────────────────────────

/// Word-wrap styled lines to `width` columns.
///
/// Done here rather than by `Paragraph` so the scroll bounds know the real
/// row count.
pub(crate) fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        if line.width() <= width {
            out.push(line);
            continue;
        }

        let mut current: Vec<Span<'static>> = Vec::new();
        let mut current_width = 0;

        for span in line.spans {
            for token in tokens(&span.content) {
                let token_width = token.width();
                let is_space = token.chars().all(char::is_whitespace);

                if current_width + token_width > width && current_width > 0 {
                    out.push(Line::from(std::mem::take(&mut current)));
                    current_width = 0;
                    if is_space {
                        continue;
                    }
                }

                if token_width > width {
                    // A single word wider than the line is split hard
                    for chunk in hard_split(token, width) {
                        let chunk_width = chunk.width();
                        if current_width + chunk_width > width && current_width > 0 {
                            out.push(Line::from(std::mem::take(&mut current)));
                            current_width = 0;
                        }
                        current.push(Span::styled(chunk, span.style));
                        current_width += chunk_width;
                    }
                    continue;
                }

                current.push(Span::styled(token.to_string(), span.style));
                current_width += token_width;
            }
        }

        if !current.is_empty() {
            out.push(Line::from(current));
        }
    }

    out
}

/// Alternating runs of whitespace and non-whitespace.
fn tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

fn hard_split(token: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    for c in token.chars() {
        let candidate_width = chunk.width() + c.to_string().width();
        if candidate_width > width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
        }
        chunk.push(c);
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}
