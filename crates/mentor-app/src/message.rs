//! Message types for the application (TEA pattern)

use mentor_core::CodeExplanation;

use crate::editor::EditorAction;
use crate::input_key::InputKey;
use crate::submission::RequestId;
use crate::viewer::ExplanationTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal
    Paste(String),

    /// Tick event for periodic updates
    Tick,

    /// Quit (Ctrl+C, q in the viewer, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the editor contents for explanation
    Submit,

    /// A background request produced an explanation
    ExplanationReady {
        request_id: RequestId,
        explanation: Box<CodeExplanation>,
    },

    /// A background request failed; `message` is user-facing
    ExplanationFailed {
        request_id: RequestId,
        message: String,
    },

    // ─────────────────────────────────────────────────────────
    // Editor Messages
    // ─────────────────────────────────────────────────────────
    Edit(EditorAction),

    // ─────────────────────────────────────────────────────────
    // Viewer Messages
    // ─────────────────────────────────────────────────────────
    SelectTab(ExplanationTab),
    NextTab,
    PreviousTab,

    ScrollUp,
    ScrollDown,
    ScrollToTop,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    FocusEditor,
    FocusViewer,
}
