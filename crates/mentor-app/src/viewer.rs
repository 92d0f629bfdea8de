//! Result viewer state - active tab, scroll position and reset tracking.
//!
//! The viewer watches the submission's `result_epoch`. A new epoch means a
//! new explanation arrived, so the tab returns to Line-by-Line, scrolling
//! restarts at the top and a short entrance animation plays.

use mentor_core::CodeExplanation;

use crate::submission::SubmissionState;

/// Ticks the entrance animation lasts.
pub const ENTRANCE_FRAMES: u8 = 6;

// ─────────────────────────────────────────────────────────────────────────────
// ExplanationTab
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplanationTab {
    #[default]
    LineByLine,
    BigO,
    TradeOffs,
    SystemDesign,
    Behavioral,
}

impl ExplanationTab {
    pub const ALL: [ExplanationTab; 5] = [
        ExplanationTab::LineByLine,
        ExplanationTab::BigO,
        ExplanationTab::TradeOffs,
        ExplanationTab::SystemDesign,
        ExplanationTab::Behavioral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExplanationTab::LineByLine => "Line-by-Line",
            ExplanationTab::BigO => "Big O",
            ExplanationTab::TradeOffs => "Trade-offs",
            ExplanationTab::SystemDesign => "System Design",
            ExplanationTab::Behavioral => "Behavioral",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Tab at zero-based `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewerState
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    pub active_tab: ExplanationTab,

    /// Bumped every time a new result is observed.
    pub render_epoch: u64,

    observed_epoch: u64,

    /// Vertical scroll offset of the tab body
    pub offset: usize,
    /// Total lines in the tab body (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,

    /// Remaining entrance animation ticks
    pub entrance_frames: u8,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare against the submission's epoch; reset if it moved.
    ///
    /// Returns true when a reset happened.
    pub fn observe(&mut self, result_epoch: u64) -> bool {
        if result_epoch == self.observed_epoch {
            return false;
        }

        self.observed_epoch = result_epoch;
        self.active_tab = ExplanationTab::LineByLine;
        self.render_epoch += 1;
        self.offset = 0;
        self.entrance_frames = ENTRANCE_FRAMES;
        true
    }

    pub fn select(&mut self, tab: ExplanationTab) {
        if self.active_tab != tab {
            self.offset = 0;
        }
        self.active_tab = tab;
    }

    pub fn select_next(&mut self) {
        self.select(self.active_tab.next());
    }

    pub fn select_previous(&mut self) {
        self.select(self.active_tab.previous());
    }

    /// Advance the entrance animation by one frame.
    pub fn tick(&mut self) {
        self.entrance_frames = self.entrance_frames.saturating_sub(1);
    }

    pub fn is_entering(&self) -> bool {
        self.entrance_frames > 0
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.total_lines.saturating_sub(self.visible_lines);
        self.offset = (self.offset + n).min(max_offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, clamping the offset if content shrank.
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;

        let max_offset = total.saturating_sub(visible);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display precedence
// ─────────────────────────────────────────────────────────────────────────────

/// Which panel the result area shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultPanel<'a> {
    Loading,
    Error(&'a str),
    Welcome,
    Tabs(&'a CodeExplanation),
}

/// Loading, then error, then welcome, then the tabs.
pub fn panel(submission: &SubmissionState) -> ResultPanel<'_> {
    if submission.is_loading {
        ResultPanel::Loading
    } else if let Some(error) = submission.error.as_deref() {
        ResultPanel::Error(error)
    } else if let Some(result) = submission.result.as_ref() {
        ResultPanel::Tabs(result)
    } else {
        ResultPanel::Welcome
    }
}
