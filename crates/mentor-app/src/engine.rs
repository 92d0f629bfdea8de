//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the explainer and the
//! handle of the explanation request currently in flight.

use std::sync::Arc;

use mentor_client::Explainer;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::actions::RequestSlot;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::submission::RequestId;

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Code Mentor.
pub struct Engine<E> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, request tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    explainer: Arc<E>,
    requests: RequestSlot,
    signal_task: Option<JoinHandle<()>>,
}

impl<E> Engine<E>
where
    E: Explainer + Sync + 'static,
{
    pub fn new(state: AppState, explainer: Arc<E>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            explainer,
            requests: RequestSlot::new(),
            signal_task: None,
        }
    }

    /// Route SIGINT/SIGTERM into the message channel as `Message::Quit`.
    pub fn listen_for_signals(&mut self) {
        if self.signal_task.is_none() {
            self.signal_task = Some(signals::spawn_signal_handler(self.msg_tx.clone()));
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.explainer,
            &mut self.requests,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns false once every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn explainer(&self) -> &Arc<E> {
        &self.explainer
    }

    /// Request currently tracked as running, if any.
    pub fn in_flight_request(&self) -> Option<RequestId> {
        self.requests.request_id()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Abort the in-flight request and the signal listener.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.requests.abort();
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
    }
}
