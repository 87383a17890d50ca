use crate::error::AppResult;
use super::client::ParseClient;
use super::models::{CalendarEvent, IgnoreReason, PlaygroundState, SubmitOutcome};
use chrono::Utc;
use rust_i18n::t;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info};

/// The playground actor that owns one visitor's input and results
pub struct PlaygroundActor {
    client: Arc<dyn ParseClient>,
    command_rx: mpsc::Receiver<PlaygroundCommand>,
    completion_tx: mpsc::WeakSender<PlaygroundCommand>,
    state_tx: watch::Sender<PlaygroundState>,
    next_token: u64,
    in_flight: Option<u64>,
}

/// Commands that can be sent to the playground actor
pub enum PlaygroundCommand {
    SetText(String, mpsc::Sender<()>),
    Submit(mpsc::Sender<SubmitOutcome>),
    Completed {
        token: u64,
        result: AppResult<Vec<CalendarEvent>>,
    },
    Shutdown,
}

impl PlaygroundActor {
    /// Create a new actor and return the channels its handle needs
    pub fn new(
        client: Arc<dyn ParseClient>,
    ) -> (Self, mpsc::Sender<PlaygroundCommand>, watch::Receiver<PlaygroundState>) {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (state_tx, state_rx) = watch::channel(PlaygroundState::default());

        let actor = Self {
            client,
            command_rx,
            completion_tx: command_tx.downgrade(),
            state_tx,
            next_token: 1,
            in_flight: None,
        };

        (actor, command_tx, state_rx)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        debug!("Playground actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                PlaygroundCommand::SetText(text, response_tx) => {
                    self.state_tx.send_modify(|state| state.text = text);
                    let _ = response_tx.send(()).await;
                }
                PlaygroundCommand::Submit(response_tx) => {
                    let outcome = self.submit();
                    let _ = response_tx.send(outcome).await;
                }
                PlaygroundCommand::Completed { token, result } => {
                    self.complete(token, result);
                }
                PlaygroundCommand::Shutdown => {
                    debug!("Playground actor shutting down");
                    break;
                }
            }
        }

        debug!("Playground actor shut down");
    }

    /// Start a parse request unless the text is blank or one is running
    fn submit(&mut self) -> SubmitOutcome {
        let text = {
            let state = self.state_tx.borrow();
            if state.loading {
                return SubmitOutcome::Ignored { reason: IgnoreReason::Busy };
            }
            if state.text.trim().is_empty() {
                return SubmitOutcome::Ignored { reason: IgnoreReason::Blank };
            }
            state.text.clone()
        };

        let token = self.next_token;
        self.next_token += 1;
        self.in_flight = Some(token);

        self.state_tx.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        info!("Submitting playground text (request {})", token);

        let client = Arc::clone(&self.client);
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let result = client.parse_events(&text).await;
            // The session may have ended while the request was running
            if let Some(tx) = completion_tx.upgrade() {
                let _ = tx.send(PlaygroundCommand::Completed { token, result }).await;
            }
        });

        SubmitOutcome::Started { token }
    }

    /// Apply the result of the request identified by `token`
    fn complete(&mut self, token: u64, result: AppResult<Vec<CalendarEvent>>) {
        if self.in_flight != Some(token) {
            debug!("Discarding stale response for request {}", token);
            return;
        }
        self.in_flight = None;

        match result {
            Ok(events) => {
                info!("Request {} returned {} event(s)", token, events.len());
                self.state_tx.send_modify(|state| {
                    state.loading = false;
                    state.events = events;
                    state.last_parsed_at = Some(Utc::now());
                });
            }
            Err(e) => {
                error!("Request {} failed: {}", token, e);
                let message = t!("playground_error").to_string();
                self.state_tx.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(message);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NeverCalled;

    #[async_trait]
    impl ParseClient for NeverCalled {
        async fn parse_events(&self, _text: &str) -> AppResult<Vec<CalendarEvent>> {
            panic!("no request expected");
        }
    }

    fn event(title: &str) -> CalendarEvent {
        CalendarEvent {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn completion_without_request_in_flight_is_discarded() {
        let (mut actor, _tx, state_rx) = PlaygroundActor::new(Arc::new(NeverCalled));

        actor.complete(7, Ok(vec![event("Ghost")]));

        assert!(state_rx.borrow().events.is_empty());
        assert!(!state_rx.borrow().loading);
    }

    #[test]
    fn only_latest_token_is_applied() {
        let (mut actor, _tx, state_rx) = PlaygroundActor::new(Arc::new(NeverCalled));
        actor.in_flight = Some(2);
        actor.state_tx.send_modify(|state| state.loading = true);

        actor.complete(1, Ok(vec![event("Old")]));
        assert!(state_rx.borrow().loading);
        assert!(state_rx.borrow().events.is_empty());

        actor.complete(2, Ok(vec![event("New")]));
        let state = state_rx.borrow();
        assert!(!state.loading);
        assert_eq!(state.events, vec![event("New")]);
        assert!(state.last_parsed_at.is_some());
    }

    #[test]
    fn failure_keeps_previous_events() {
        let (mut actor, _tx, state_rx) = PlaygroundActor::new(Arc::new(NeverCalled));
        actor.state_tx.send_modify(|state| {
            state.events = vec![event("Kept")];
            state.loading = true;
        });
        actor.in_flight = Some(1);

        actor.complete(1, Err(crate::error::playground_error("boom")));

        let state = state_rx.borrow();
        assert!(!state.loading);
        assert_eq!(state.events, vec![event("Kept")]);
        assert!(state.error.is_some());
    }

    #[test]
    fn blank_text_is_not_submitted() {
        let (mut actor, _tx, state_rx) = PlaygroundActor::new(Arc::new(NeverCalled));
        actor.state_tx.send_modify(|state| state.text = "   \n\t".to_string());

        let outcome = actor.submit();

        assert_eq!(outcome, SubmitOutcome::Ignored { reason: IgnoreReason::Blank });
        assert!(!state_rx.borrow().loading);
        assert_eq!(actor.in_flight, None);
    }
}
