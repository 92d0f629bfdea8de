//! Main render/view function (View in TEA pattern)


use mentor_app::state::{AppState, Focus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{CodeInput, ExplanationView, MainHeader};

/// Render the complete UI (View function in TEA)
///
/// Only the viewer's render-tracking fields (content size, scroll clamp) are
/// written back to `state`.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(MainHeader::new(state.model_name(), state.focus), areas.header);

    let loading = state.submission.is_loading;
    let input = CodeInput::new(&state.submission.editor)
        .focused(state.focus == Focus::Editor)
        .loading(loading, state.loading_frame);
    if let Some(position) = input.cursor_position(areas.input) {
        frame.set_cursor_position(position);
    }
    frame.render_widget(input, areas.input);

    let panel = mentor_app::viewer::panel(&state.submission);
    let output = ExplanationView::new(panel)
        .focused(state.focus == Focus::Viewer)
        .frame(state.loading_frame);
    frame.render_stateful_widget(output, areas.output, &mut state.viewer);
}
