//! Presentational building blocks for the landing page.
//!
//! These are plain view-models: they hold exactly what the templates in
//! `templates/components.html` print, and compute display fallbacks. None of
//! them perform I/O.

pub mod event_card;
pub mod playground_panel;
pub mod sections;

pub use event_card::EventCard;
pub use playground_panel::PlaygroundPanel;
pub use sections::{Diagram, FeatureDeck, Footer, Header, Hero, ManualSteps, MetricsGrid, TrustStrip};

/// The "take me to the playground" capability.
///
/// Built once by the page shell and handed to every call-to-action that
/// should lead to the playground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateTo {
    anchor: &'static str,
}

impl NavigateTo {
    pub fn anchor(anchor: &'static str) -> Self {
        Self { anchor }
    }

    /// Element id of the target
    pub fn id(&self) -> &'static str {
        self.anchor
    }

    /// Link target for anchors
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Small pill label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// A button, rendered as a link when it navigates and as a form submit otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub primary: bool,
    pub href: Option<String>,
    pub disabled: bool,
}

impl Button {
    /// A button that takes the visitor to the playground
    pub fn to_playground(label: impl Into<String>, navigate: &NavigateTo, primary: bool) -> Self {
        Self::link(label, navigate.href(), primary)
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>, primary: bool) -> Self {
        Self {
            label: label.into(),
            primary,
            href: Some(href.into()),
            disabled: false,
        }
    }

    pub fn submit(label: impl Into<String>, disabled: bool) -> Self {
        Self {
            label: label.into(),
            primary: false,
            href: None,
            disabled,
        }
    }

    /// CSS class for the button's variant
    pub fn class(&self) -> &'static str {
        if self.primary {
            "btn btn-primary"
        } else {
            "btn btn-secondary"
        }
    }
}
