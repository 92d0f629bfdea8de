//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use mentor_client::Explainer;
use tokio::sync::mpsc;

use crate::actions::{handle_action, RequestSlot};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<E>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    explainer: &Arc<E>,
    slot: &mut RequestSlot,
) where
    E: Explainer + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), explainer, slot);
        }

        msg = result.message;
    }
}
