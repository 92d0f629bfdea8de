//! Submission controller state
//!
//! Owns the snippet being edited and the outcome of the latest request.
//! Every started request gets a fresh [`RequestId`]; resolutions for any
//! other id are stale and ignored, which is what makes a newer submission
//! supersede an older one.

use std::fmt;

use mentor_core::{CodeExplanation, UNKNOWN_FAILURE_MESSAGE, VALIDATION_MESSAGE};
use tracing::{debug, info};

use crate::editor::CodeEditor;

/// Identifier of one started submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What `submit` decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; the validation message is now set.
    Rejected,
    /// A request must be issued for `code`, verbatim.
    Started { request_id: RequestId, code: String },
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    pub editor: CodeEditor,
    pub result: Option<CodeExplanation>,
    pub is_loading: bool,
    pub error: Option<String>,

    /// Bumped on every successful resolution.
    pub result_epoch: u64,

    in_flight: Option<RequestId>,
    next_request: u64,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(code: &str) -> Self {
        Self {
            editor: CodeEditor::from_text(code),
            ..Self::default()
        }
    }

    pub fn code(&self) -> String {
        self.editor.text()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.editor.is_blank() {
            debug!("Rejecting blank submission");
            self.error = Some(VALIDATION_MESSAGE.to_string());
            return SubmitOutcome::Rejected;
        }

        self.next_request += 1;
        let request_id = RequestId(self.next_request);
        if let Some(previous) = self.in_flight.replace(request_id) {
            info!("Request {} superseded by {}", previous, request_id);
        }

        self.is_loading = true;
        self.error = None;
        self.result = None;

        SubmitOutcome::Started {
            request_id,
            code: self.editor.text(),
        }
    }

    /// Apply a successful resolution. Returns false for stale ids.
    pub fn resolve_success(&mut self, request_id: RequestId, explanation: CodeExplanation) -> bool {
        if !self.take_in_flight(request_id) {
            return false;
        }

        self.result = Some(explanation);
        self.error = None;
        self.is_loading = false;
        self.result_epoch += 1;
        true
    }

    /// Apply a failed resolution. Returns false for stale ids.
    pub fn resolve_failure(&mut self, request_id: RequestId, message: &str) -> bool {
        if !self.take_in_flight(request_id) {
            return false;
        }

        let message = if message.trim().is_empty() {
            UNKNOWN_FAILURE_MESSAGE
        } else {
            message
        };

        self.error = Some(message.to_string());
        self.result = None;
        self.is_loading = false;
        true
    }

    fn take_in_flight(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            debug!(
                "Ignoring stale resolution {} (in flight: {:?})",
                request_id, self.in_flight
            );
            return false;
        }
        self.in_flight = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_client::test_utils::sample_explanation;

    fn started(outcome: SubmitOutcome) -> (RequestId, String) {
        match outcome {
            SubmitOutcome::Started { request_id, code } => (request_id, code),
            SubmitOutcome::Rejected => panic!("expected a started submission"),
        }
    }

    #[test]
    fn test_blank_submit_sets_validation_error() {
        let mut state = SubmissionState::with_code("  \n\t ");

        assert_eq!(state.submit(), SubmitOutcome::Rejected);
        assert_eq!(state.error.as_deref(), Some(VALIDATION_MESSAGE));
        assert!(!state.is_loading);
        assert!(state.in_flight().is_none());
    }

    #[test]
    fn test_blank_submit_keeps_previous_result() {
        let mut state = SubmissionState::with_code("x");
        let (id, _) = started(state.submit());
        state.resolve_success(id, sample_explanation());

        state.editor.clear();
        state.submit();

        assert!(state.result.is_some());
        assert_eq!(state.error.as_deref(), Some(VALIDATION_MESSAGE));
    }

    #[test]
    fn test_submit_carries_untrimmed_code() {
        let code = "\n  const hello = \"world\";  \n";
        let mut state = SubmissionState::with_code(code);

        let (_, sent) = started(state.submit());

        assert_eq!(sent, code);
        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert!(state.result.is_none());
    }

    #[test]
    fn test_submit_keeps_crlf_line_endings() {
        let code = "let a = 1;\r\nlet b = 2;\r\n";
        let mut state = SubmissionState::with_code(code);

        let (_, sent) = started(state.submit());

        assert_eq!(sent, code);
    }

    #[test]
    fn test_submit_clears_previous_error_and_result() {
        let mut state = SubmissionState::with_code("x");
        let (id, _) = started(state.submit());
        state.resolve_failure(id, "boom");
        assert!(state.error.is_some());

        started(state.submit());
        assert!(state.error.is_none());
        assert!(state.result.is_none());
    }

    #[test]
    fn test_success_bumps_epoch() {
        let mut state = SubmissionState::with_code("x");
        let (id, _) = started(state.submit());

        assert!(state.resolve_success(id, sample_explanation()));
        assert_eq!(state.result_epoch, 1);
        assert!(!state.is_loading);
        assert!(state.error.is_none());

        let (id, _) = started(state.submit());
        state.resolve_success(id, sample_explanation());
        assert_eq!(state.result_epoch, 2);
    }

    #[test]
    fn test_failure_stores_message_verbatim() {
        let mut state = SubmissionState::with_code("x");
        let (id, _) = started(state.submit());

        assert!(state.resolve_failure(id, "API Error"));
        assert_eq!(state.error.as_deref(), Some("API Error"));
        assert!(state.result.is_none());
        assert!(!state.is_loading);
        assert_eq!(state.result_epoch, 0);
    }

    #[test]
    fn test_blank_failure_message_uses_fallback() {
        let mut state = SubmissionState::with_code("x");
        let (id, _) = started(state.submit());

        state.resolve_failure(id, "  ");
        assert_eq!(state.error.as_deref(), Some(UNKNOWN_FAILURE_MESSAGE));
    }

    #[test]
    fn test_failure_keeps_input_text() {
        let mut state = SubmissionState::with_code("let a = 1;");
        let (id, _) = started(state.submit());
        state.resolve_failure(id, "nope");
        assert_eq!(state.code(), "let a = 1;");
    }

    #[test]
    fn test_stale_resolution_is_ignored() {
        let mut state = SubmissionState::with_code("x");
        let (first, _) = started(state.submit());
        let (second, _) = started(state.submit());
        assert_ne!(first, second);

        assert!(!state.resolve_success(first, sample_explanation()));
        assert!(state.is_loading);
        assert!(state.result.is_none());
        assert_eq!(state.in_flight(), Some(second));

        assert!(!state.resolve_failure(first, "late"));
        assert!(state.error.is_none());

        assert!(state.resolve_success(second, sample_explanation()));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_double_resolution_is_ignored() {
        let mut state = SubmissionState::with_code("x");
        let (id, _) = started(state.submit());
        assert!(state.resolve_success(id, sample_explanation()));
        assert!(!state.resolve_failure(id, "again"));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_request_id_display() {
        assert_eq!(RequestId(7).to_string(), "#7");
    }
}
