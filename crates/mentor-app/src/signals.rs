//! OS signal handling for graceful shutdown

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use mentor_core::prelude::*;

/// Spawn a task that turns SIGINT/SIGTERM (Ctrl+C on Windows) into
/// `Message::Quit`. The returned handle is aborted on shutdown.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("Received {}, shutting down", name);
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

    let name = tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}
