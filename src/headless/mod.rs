//! Headless mode - NDJSON event output instead of the TUI
//!
//! Runs one submission and prints newline-delimited JSON events to stdout,
//! so scripts can consume explanations without parsing terminal output.
//!
//! # Example Output
//!
//! ```json
//! {"event":"submission_started","request_id":1,"chars":22,"timestamp":1704700001000}
//! {"event":"explanation_ready","request_id":1,"explanation":{"initialQuestion":"..."},"timestamp":1704700004000}
//! ```

pub mod runner;

use chrono::Utc;
use mentor_core::CodeExplanation;
use serde::Serialize;
use std::io::Write;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The snippet was accepted and a request is in flight
    SubmissionStarted {
        request_id: u64,
        chars: usize,
        timestamp: i64,
    },

    /// The backend produced a complete explanation
    ExplanationReady {
        request_id: u64,
        explanation: Box<CodeExplanation>,
        timestamp: i64,
    },

    /// Validation, transport or format failure; `message` is user-facing
    SubmissionFailed { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as one JSON line to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn submission_started(request_id: u64, chars: usize) -> Self {
        Self::SubmissionStarted {
            request_id,
            chars,
            timestamp: Self::now(),
        }
    }

    pub fn explanation_ready(request_id: u64, explanation: CodeExplanation) -> Self {
        Self::ExplanationReady {
            request_id,
            explanation: Box::new(explanation),
            timestamp: Self::now(),
        }
    }

    pub fn submission_failed(message: impl Into<String>) -> Self {
        Self::SubmissionFailed {
            message: message.into(),
            timestamp: Self::now(),
        }
    }
}
