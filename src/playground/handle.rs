use crate::error::{playground_error, AppResult};
use super::actor::{PlaygroundActor, PlaygroundCommand};
use super::client::ParseClient;
use super::models::{PlaygroundState, SubmitOutcome};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Handle for interacting with a playground actor
#[derive(Clone)]
pub struct PlaygroundHandle {
    command_tx: mpsc::Sender<PlaygroundCommand>,
    state_rx: watch::Receiver<PlaygroundState>,
}

impl PlaygroundHandle {
    /// Create a new playground and spawn its actor
    pub fn spawn(client: Arc<dyn ParseClient>) -> Self {
        let (mut actor, command_tx, state_rx) = PlaygroundActor::new(client);

        tokio::spawn(async move {
            actor.run().await;
        });

        Self { command_tx, state_rx }
    }

    /// Replace the input text
    pub async fn set_text(&self, text: impl Into<String>) -> AppResult<()> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(PlaygroundCommand::SetText(text.into(), response_tx))
            .await
            .map_err(|e| playground_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| playground_error("Response channel closed"))
    }

    /// Ask the playground to parse its current text
    pub async fn submit(&self) -> AppResult<SubmitOutcome> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(PlaygroundCommand::Submit(response_tx))
            .await
            .map_err(|e| playground_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| playground_error("Response channel closed"))
    }

    /// The current state
    pub fn snapshot(&self) -> PlaygroundState {
        self.state_rx.borrow().clone()
    }

    /// Wait until no request is in flight and return the state at that point
    pub async fn wait_idle(&self) -> AppResult<PlaygroundState> {
        let mut state_rx = self.state_rx.clone();
        let state = state_rx
            .wait_for(|state| !state.loading)
            .await
            .map_err(|_| playground_error("Playground shut down while loading"))?;
        Ok(state.clone())
    }

    /// Whether the actor is still running
    pub fn is_alive(&self) -> bool {
        !self.command_tx.is_closed()
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(PlaygroundCommand::Shutdown).await;
        Ok(())
    }
}
