use super::{Badge, Button, EventCard, NavigateTo};
use crate::playground::PlaygroundState;
use rust_i18n::t;

/// Input and output cards of the playground
#[derive(Debug, Clone)]
pub struct PlaygroundPanel {
    /// Element id the page's call-to-actions point at
    pub anchor: &'static str,
    pub input_badge: Badge,
    pub output_badge: Badge,
    pub text: String,
    pub placeholder: String,
    pub submit: Button,
    pub loading: bool,
    pub error: Option<String>,
    pub empty_label: String,
    pub cards: Vec<EventCard>,
    pub parsed_at: Option<String>,
}

impl PlaygroundPanel {
    pub fn new(navigate: &NavigateTo, state: &PlaygroundState) -> Self {
        let label = if state.loading {
            t!("playground_submit_loading")
        } else {
            t!("playground_submit")
        };

        Self {
            anchor: navigate.id(),
            input_badge: Badge::new(t!("playground_input_badge")),
            output_badge: Badge::new(t!("playground_output_badge")),
            text: state.text.clone(),
            placeholder: t!("playground_placeholder").to_string(),
            // The text box is only known to the server after a post, so only
            // an outstanding request disables the control
            submit: Button::submit(label, state.loading),
            loading: state.loading,
            error: state.error.clone(),
            empty_label: t!("playground_waiting").to_string(),
            cards: state.events.iter().map(EventCard::from).collect(),
            parsed_at: state
                .last_parsed_at
                .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        }
    }

    pub fn has_events(&self) -> bool {
        !self.cards.is_empty()
    }
}
