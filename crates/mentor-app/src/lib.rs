//! mentor-app - Application state and orchestration for Code Mentor
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! the submission controller, the result viewer state, the code editor buffer,
//! configuration loading and the Engine that runs explanation requests in the
//! background.

pub mod actions;
pub mod config;
pub mod editor;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod sample;
pub mod signals;
pub mod state;
pub mod submission;
pub mod viewer;

// Re-export primary types
pub use editor::{CodeEditor, EditorAction};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Focus};
pub use submission::{RequestId, SubmissionState, SubmitOutcome};
pub use viewer::{ExplanationTab, ResultPanel, ViewerState};
