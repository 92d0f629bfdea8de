//! Main TUI runner - entry point and event loop

use std::time::Duration;

use mentor_app::Engine;
use mentor_client::Explainer;
use mentor_core::prelude::*;

use crate::{event, render, terminal};

/// Shortest poll interval accepted from settings.
const MIN_TICK_RATE_MS: u64 = 10;

/// Run the TUI until the user quits or a signal arrives.
pub async fn run<E>(mut engine: Engine<E>) -> Result<()>
where
    E: Explainer + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    engine.listen_for_signals();

    let tick_rate = Duration::from_millis(
        engine
            .state
            .settings
            .ui
            .tick_rate_ms
            .max(MIN_TICK_RATE_MS),
    );
    info!(
        "Code Mentor TUI starting (model: {}, tick: {:?})",
        engine.state.model_name(),
        tick_rate
    );

    let result = run_loop(&mut term, &mut engine, tick_rate);

    engine.shutdown();
    terminal::restore();

    result
}

/// Main event loop
fn run_loop<E>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<E>,
    tick_rate: Duration,
) -> Result<()>
where
    E: Explainer + Sync + 'static,
{
    while !engine.should_quit() {
        // Results from request tasks and signals
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
