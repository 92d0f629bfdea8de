//! Test utilities for explanation client and application testing
//!
//! Available to dependent crates through the `test-helpers` feature.

use std::collections::VecDeque;
use std::sync::Mutex;

use mentor_core::{BigOAnalysis, CodeExplanation, ExplainError, LineExplanation};
use serde_json::Value;

use crate::backend::{Backend, BackendError};
use crate::client::Explainer;

/// A complete explanation with recognisable content in every section.
pub fn sample_explanation() -> CodeExplanation {
    CodeExplanation {
        initial_question: "Why did you choose dynamic programming here?".to_string(),
        line_by_line_explanation: vec![
            LineExplanation {
                line: "1".to_string(),
                explanation: "Declares the function signature.".to_string(),
            },
            LineExplanation {
                line: "2-4".to_string(),
                explanation: "Handles the empty and single-house cases.".to_string(),
            },
        ],
        big_o_analysis: BigOAnalysis {
            time_complexity: "O(n) - Single pass over the houses.".to_string(),
            space_complexity: "O(1)".to_string(),
        },
        tradeoffs_and_alternatives: "<p>A <strong>memoized</strong> recursion also works.</p>"
            .to_string(),
        system_design_context: "<p>Could back a route-planning service.</p>".to_string(),
        behavioral_questions: vec![
            "Tell me about a time you optimized an algorithm.".to_string(),
            "How do you decide between clarity and performance?".to_string(),
        ],
    }
}

/// [`sample_explanation`] as the JSON a backend would return.
pub fn sample_explanation_json() -> String {
    serde_json::to_string(&sample_explanation()).unwrap_or_default()
}

/// An explanation whose opening question names the snippet it was made for.
pub fn explanation_for(code: &str) -> CodeExplanation {
    CodeExplanation {
        initial_question: format!("Mock explanation for: {code}"),
        ..sample_explanation()
    }
}

/// Backend that replays queued responses and records the prompts it saw.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    responses: Mutex<VecDeque<Result<Option<String>, BackendError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.push(Ok(Some(text.into())))
    }

    pub fn with_empty(self) -> Self {
        self.push(Ok(None))
    }

    pub fn with_error(self, error: BackendError) -> Self {
        self.push(Err(error))
    }

    fn push(self, response: Result<Option<String>, BackendError>) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Backend for ScriptedBackend {
    async fn generate(&self, prompt: &str, _schema: &Value) -> Result<Option<String>, BackendError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front());

        next.unwrap_or_else(|| {
            Err(BackendError::Status {
                status: 503,
                body: "script exhausted".to_string(),
            })
        })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// One scripted outcome for [`ScriptedExplainer`].
#[derive(Debug)]
pub enum Step {
    Respond(Result<CodeExplanation, ExplainError>),
    /// Never resolves; models a request that is still in flight.
    Hang,
}

/// Explainer that follows a script, then falls back to [`explanation_for`].
#[derive(Debug, Default)]
pub struct ScriptedExplainer {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExplainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, explanation: CodeExplanation) -> Self {
        self.push(Step::Respond(Ok(explanation)))
    }

    pub fn then_err(self, error: ExplainError) -> Self {
        self.push(Step::Respond(Err(error)))
    }

    pub fn then_hang(self) -> Self {
        self.push(Step::Hang)
    }

    fn push(self, step: Step) -> Self {
        if let Ok(mut steps) = self.steps.lock() {
            steps.push_back(step);
        }
        self
    }

    /// Snippets received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Explainer for ScriptedExplainer {
    async fn explain(&self, code: &str) -> Result<CodeExplanation, ExplainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(code.to_string());
        }

        let step = self.steps.lock().ok().and_then(|mut steps| steps.pop_front());

        match step {
            Some(Step::Respond(outcome)) => outcome,
            Some(Step::Hang) => std::future::pending().await,
            None => Ok(explanation_for(code)),
        }
    }
}
