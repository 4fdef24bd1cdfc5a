//! # Test-Session Engine
//!
//! The [`TestSession`] orchestrator owns one tokio task running an event
//! loop over three sources:
//!
//! - the command channel from the embedder ([`SessionCommand`])
//! - the autosave debounce deadline
//! - completions of spawned save tasks
//!
//! ```text
//! embedder ──SessionCommand──▶ ┌────────────────────────────┐
//!                              │ run_loop (tokio::select!)  │
//! embedder ◀──SessionEvent──── │  state: Arc<RwLock<...>>   │
//!                              └──────────┬─────────────────┘
//!                                         │ TestApi
//!                                         ▼
//!                                     backend
//! ```
//!
//! Saves triggered by the debounce timer are spawned so a slow backend never
//! blocks command handling; the save carries the question index captured at
//! fire time, so a save resolving after navigation still targets the right
//! question. Navigation and submission flush inline, because their ordering
//! guarantee ("flush, then move") is the point.

mod events;
mod handlers;
mod state;
mod tasks;

pub use events::{Navigation, SessionCommand, SessionEvent};
pub use state::{AttemptInfo, SecurityPhase, SessionPhase, SessionState};

use crate::core::config::ClientConfig;
use crate::core::service::TestApi;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::tests::StartTestResponse;
use std::sync::Arc;
use tokio::time::Instant;

/// Handle to a running test-session engine.
///
/// State is shared: the embedder reads it (briefly) for rendering while the
/// engine task writes it. Commands and events travel over unbounded
/// `async_channel`s, so neither side can stall the other.
pub struct TestSession {
    /// Thread-safe shared session state. Hold locks briefly.
    pub state: Arc<RwLock<SessionState>>,
    command_tx: Sender<SessionCommand>,
    event_rx: Receiver<SessionEvent>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestSession {
    /// Spawn the engine for an attempt the backend just started or resumed.
    pub fn start(
        api: Arc<dyn TestApi>,
        start: StartTestResponse,
        config: ClientConfig,
    ) -> Self {
        let state = Arc::new(RwLock::new(SessionState::new(start)));
        let (command_tx, command_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();

        let trace_id = state.read().trace_id;
        tracing::info!(%trace_id, "Test session engine starting");

        let handle = tokio::spawn(run_loop(
            api,
            Arc::clone(&state),
            command_rx,
            event_tx,
            config,
        ));

        Self {
            state,
            command_tx,
            event_rx,
            handle,
        }
    }

    /// Sender half for issuing commands (cloneable).
    pub fn commands(&self) -> Sender<SessionCommand> {
        self.command_tx.clone()
    }

    /// Receiver half for engine events (cloneable).
    pub fn events(&self) -> Receiver<SessionEvent> {
        self.event_rx.clone()
    }

    /// Stop the engine and wait for the task to finish.
    pub async fn shutdown(self) {
        let _ = self.command_tx.send(SessionCommand::Shutdown).await;
        let _ = self.handle.await;
    }
}

/// The engine's event loop.
async fn run_loop(
    api: Arc<dyn TestApi>,
    state: Arc<RwLock<SessionState>>,
    commands: Receiver<SessionCommand>,
    events: Sender<SessionEvent>,
    config: ClientConfig,
) {
    let (outcome_tx, outcome_rx) = unbounded::<tasks::TaskOutcome>();

    loop {
        // Snapshot the deadline outside select! so the lock is not held
        // across an await point
        let deadline = state.read().autosave.deadline;

        tokio::select! {
            cmd = commands.recv() => match cmd {
                Ok(SessionCommand::AnswerChanged(text)) => {
                    handlers::answer::handle_answer_changed(&state, text, config.autosave_delay);
                }
                Ok(SessionCommand::Navigate(nav)) => {
                    handlers::navigation::handle_navigate(&api, &state, &events, nav).await;
                }
                Ok(SessionCommand::Submit) => {
                    handlers::submit::handle_submit(&api, &state, &events).await;
                }
                Ok(SessionCommand::Incident(kind)) => {
                    handlers::security::handle_incident(&api, &state, &events, kind).await;
                }
                Ok(SessionCommand::Unlock { bypass_code }) => {
                    handlers::security::handle_unlock(&api, &state, &events, bypass_code).await;
                }
                Ok(SessionCommand::Shutdown) | Err(_) => break,
            },
            () = wait_for(deadline) => {
                tasks::autosave::fire(&api, &state, &outcome_tx, config.autosave_delay);
            }
            outcome = outcome_rx.recv() => {
                if let Ok(outcome) = outcome {
                    tasks::autosave::apply_outcome(&state, &events, outcome).await;
                }
            }
        }
    }

    tracing::debug!("Test session engine stopped");
}

/// Sleep until the autosave deadline, or forever when none is armed.
async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
