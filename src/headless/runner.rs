//! Headless mode runner - one submission, NDJSON on stdout

use std::io::{self, Write};

use tracing::{info, warn};

use mentor_app::{Engine, Message};
use mentor_client::Explainer;
use mentor_core::prelude::*;
use mentor_core::ExplainError;

use super::HeadlessEvent;

const INTERRUPTED_MESSAGE: &str = "Interrupted before the explanation arrived.";

/// Submit the engine's preloaded snippet and print the outcome as JSON events.
///
/// Fails when the snippet is blank, the request fails, or a signal arrives
/// first; the matching `submission_failed` event is printed either way.
pub async fn run_headless<E>(engine: Engine<E>) -> Result<()>
where
    E: Explainer + Sync + 'static,
{
    run_with_output(engine, &mut io::stdout()).await
}

async fn run_with_output<E, W>(mut engine: Engine<E>, out: &mut W) -> Result<()>
where
    E: Explainer + Sync + 'static,
    W: Write,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Code Mentor starting in HEADLESS mode");
    info!("Model: {}", engine.state.model_name());
    info!("═══════════════════════════════════════════════════════");

    engine.listen_for_signals();

    let result = explain_once(&mut engine, out).await;

    engine.shutdown();
    info!("Code Mentor headless mode exiting");
    result
}

async fn explain_once<E, W>(engine: &mut Engine<E>, out: &mut W) -> Result<()>
where
    E: Explainer + Sync + 'static,
    W: Write,
{
    let chars = engine.state.submission.code().chars().count();
    engine.process_message(Message::Submit);

    let Some(request_id) = engine.state.submission.in_flight() else {
        let message = engine
            .state
            .submission
            .error
            .clone()
            .unwrap_or_default();
        HeadlessEvent::submission_failed(message).write_to(out);
        return Err(Error::Validation);
    };
    HeadlessEvent::submission_started(request_id.0, chars).write_to(out);

    while engine.state.submission.is_loading && !engine.should_quit() {
        if !engine.process_next().await {
            break;
        }
    }

    let submission = &engine.state.submission;
    if submission.is_loading {
        warn!("Request {} interrupted", request_id);
        HeadlessEvent::submission_failed(INTERRUPTED_MESSAGE).write_to(out);
        return Err(ExplainError::other(INTERRUPTED_MESSAGE).into());
    }

    match (&submission.result, &submission.error) {
        (Some(explanation), _) => {
            HeadlessEvent::explanation_ready(request_id.0, explanation.clone()).write_to(out);
            Ok(())
        }
        (None, error) => {
            let message = error.clone().unwrap_or_default();
            HeadlessEvent::submission_failed(message.as_str()).write_to(out);
            Err(ExplainError::other(message).into())
        }
    }
}
