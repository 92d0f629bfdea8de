//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};
use crate::submission::SubmitOutcome;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Lines moved per scroll step
const SCROLL_STEP: usize = 1;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => {
            state.focus = Focus::Editor;
            state.submission.editor.insert_str(&text);
            UpdateResult::none()
        }

        Message::Tick => {
            if state.submission.is_loading {
                state.loading_frame = state.loading_frame.wrapping_add(1);
            }
            state.viewer.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => match state.submission.submit() {
            SubmitOutcome::Rejected => UpdateResult::none(),
            SubmitOutcome::Started { request_id, code } => {
                info!(
                    "Submitting request {} ({} bytes)",
                    request_id,
                    code.len()
                );
                state.loading_frame = 0;
                UpdateResult::action(UpdateAction::RequestExplanation { request_id, code })
            }
        },

        Message::ExplanationReady {
            request_id,
            explanation,
        } => {
            if state.submission.resolve_success(request_id, *explanation) {
                info!("Request {} resolved with an explanation", request_id);
                state.sync_viewer();
                state.focus = Focus::Viewer;
            }
            UpdateResult::none()
        }

        Message::ExplanationFailed {
            request_id,
            message,
        } => {
            if state.submission.resolve_failure(request_id, &message) {
                warn!("Request {} failed: {}", request_id, message);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editor Messages
        // ─────────────────────────────────────────────────────────
        Message::Edit(action) => {
            state.submission.editor.apply(action);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Viewer Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            debug!("Selecting tab {}", tab.label());
            state.viewer.select(tab);
            UpdateResult::none()
        }
        Message::NextTab => {
            state.viewer.select_next();
            UpdateResult::none()
        }
        Message::PreviousTab => {
            state.viewer.select_previous();
            UpdateResult::none()
        }

        Message::ScrollUp => {
            state.viewer.scroll_up(SCROLL_STEP);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.viewer.scroll_down(SCROLL_STEP);
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.viewer.scroll_to_top();
            UpdateResult::none()
        }
        Message::PageUp => {
            state.viewer.page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.viewer.page_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusEditor => {
            state.focus = Focus::Editor;
            UpdateResult::none()
        }
        Message::FocusViewer => {
            state.focus = Focus::Viewer;
            UpdateResult::none()
        }
    }
}
