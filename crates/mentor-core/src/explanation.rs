//! Structured explanation of a code snippet
//!
//! The wire shape is camelCase JSON and every field is required: a payload
//! missing any section fails to deserialize, so partial explanations never
//! exist.

use serde::{Deserialize, Serialize};

/// Notation shown when a complexity string is empty.
pub const NOT_AVAILABLE: &str = "N/A";

/// Justification shown when a complexity string is empty.
pub const NOT_PROVIDED: &str = "Not provided.";

/// Justification shown when a complexity string has no `" - "` separator.
pub const MISSING_JUSTIFICATION: &str = "No detailed justification provided.";

const COMPLEXITY_SEPARATOR: &str = " - ";

/// A mentor-style explanation of a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExplanation {
    /// Thought-provoking "Why?" question about the code.
    pub initial_question: String,

    /// Per line or block commentary, in presentation order.
    pub line_by_line_explanation: Vec<LineExplanation>,

    pub big_o_analysis: BigOAnalysis,

    /// Rich (HTML-bearing) text.
    pub tradeoffs_and_alternatives: String,

    /// Rich (HTML-bearing) text.
    pub system_design_context: String,

    pub behavioral_questions: Vec<String>,
}

/// Commentary for one line or block of the snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineExplanation {
    /// Line number(s) being explained, e.g. `"1-3"` or `"5"`.
    pub line: String,
    pub explanation: String,
}

/// Raw complexity strings, each optionally `"NOTATION - JUSTIFICATION"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigOAnalysis {
    pub time_complexity: String,
    pub space_complexity: String,
}

impl BigOAnalysis {
    pub fn time(&self) -> ComplexityBreakdown {
        ComplexityBreakdown::parse(&self.time_complexity)
    }

    pub fn space(&self) -> ComplexityBreakdown {
        ComplexityBreakdown::parse(&self.space_complexity)
    }
}

/// A complexity string split into notation and justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityBreakdown {
    pub notation: String,
    pub justification: String,
}

impl ComplexityBreakdown {
    /// Split on the first `" - "`.
    ///
    /// - `"O(n) - Linear time"` → `O(n)` / `Linear time` (both sides trimmed)
    /// - `"O(log n)"` → the whole string / [`MISSING_JUSTIFICATION`]
    /// - `""` → [`NOT_AVAILABLE`] / [`NOT_PROVIDED`]
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self {
                notation: NOT_AVAILABLE.to_string(),
                justification: NOT_PROVIDED.to_string(),
            };
        }

        match text.split_once(COMPLEXITY_SEPARATOR) {
            Some((notation, justification)) => Self {
                notation: notation.trim().to_string(),
                justification: justification.trim().to_string(),
            },
            None => Self {
                notation: text.to_string(),
                justification: MISSING_JUSTIFICATION.to_string(),
            },
        }
    }
}
