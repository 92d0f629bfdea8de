//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use mentor_client::Explainer;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::submission::RequestId;

/// The one explanation task allowed to run at a time.
#[derive(Debug, Default)]
pub struct RequestSlot {
    current: Option<(RequestId, JoinHandle<()>)>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `handle` as the running request, aborting whatever it replaces.
    pub fn replace(&mut self, request_id: RequestId, handle: JoinHandle<()>) {
        if let Some((previous, old)) = self.current.replace((request_id, handle)) {
            if !old.is_finished() {
                info!("Aborting superseded request {}", previous);
                old.abort();
            }
        }
    }

    /// Abort the running request, if any.
    pub fn abort(&mut self) {
        if let Some((request_id, handle)) = self.current.take() {
            if !handle.is_finished() {
                info!("Aborting request {}", request_id);
                handle.abort();
            }
        }
    }

    pub fn request_id(&self) -> Option<RequestId> {
        self.current.as_ref().map(|(id, _)| *id)
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<E>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    explainer: &Arc<E>,
    slot: &mut RequestSlot,
) where
    E: Explainer + Sync + 'static,
{
    match action {
        UpdateAction::RequestExplanation { request_id, code } => {
            let handle = spawn_explanation(request_id, code, explainer.clone(), msg_tx);
            slot.replace(request_id, handle);
        }
    }
}

/// Run one explanation request and report the outcome as a message.
pub fn spawn_explanation<E>(
    request_id: RequestId,
    code: String,
    explainer: Arc<E>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    E: Explainer + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match explainer.explain(&code).await {
            Ok(explanation) => Message::ExplanationReady {
                request_id,
                explanation: Box::new(explanation),
            },
            Err(e) => {
                error!("Request {} failed: {}", request_id, e.cause());
                Message::ExplanationFailed {
                    request_id,
                    message: e.to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before request {} resolved", request_id);
        }
    })
}
