use super::{Badge, Button, NavigateTo};
use crate::content::{self, Feature, Link, ManualStep, Metric, TimelineItem, TrustLogo};
use chrono::{Datelike, Utc};

/// Top bar with brand, navigation and release tag
#[derive(Debug, Clone)]
pub struct Header {
    pub brand: &'static str,
    pub nav: &'static [Link],
    pub version: &'static str,
    pub cta: Button,
}

impl Header {
    pub fn new(navigate: &NavigateTo) -> Self {
        Self {
            brand: content::BRAND,
            nav: content::NAV_LINKS,
            version: content::VERSION_TAG,
            cta: Button::to_playground("Try it", navigate, false),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub badge: Badge,
    pub headline: &'static str,
    pub headline_muted: &'static str,
    pub lede: &'static str,
    pub primary: Button,
    pub secondary: Button,
}

impl Hero {
    pub fn new(navigate: &NavigateTo) -> Self {
        Self {
            badge: Badge::new(content::HERO_BADGE),
            headline: content::HERO_HEADLINE,
            headline_muted: content::HERO_HEADLINE_MUTED,
            lede: content::HERO_LEDE,
            primary: Button::to_playground("Try the playground", navigate, true),
            secondary: Button::link("Read the docs", content::DOCS_URL, false),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsGrid {
    pub metrics: &'static [Metric],
}

impl MetricsGrid {
    pub fn new() -> Self {
        Self { metrics: content::METRICS }
    }
}

impl Default for MetricsGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct FeatureDeck {
    pub badge: Badge,
    pub features: &'static [Feature],
}

impl FeatureDeck {
    pub fn new() -> Self {
        Self {
            badge: Badge::new("What it understands"),
            features: content::FEATURES,
        }
    }
}

impl Default for FeatureDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct TrustStrip {
    pub caption: &'static str,
    pub logos: &'static [TrustLogo],
}

impl TrustStrip {
    pub fn new() -> Self {
        Self {
            caption: "Trusted by teams who hate calendar forms",
            logos: content::TRUST_LOGOS,
        }
    }
}

impl Default for TrustStrip {
    fn default() -> Self {
        Self::new()
    }
}

/// The "sentence in, day out" illustration
#[derive(Debug, Clone)]
pub struct Diagram {
    pub badge: Badge,
    pub sentence: &'static str,
    pub items: &'static [TimelineItem],
}

impl Diagram {
    pub fn new() -> Self {
        Self {
            badge: Badge::new("How it works"),
            sentence: "Standup at 9, lunch with Sarah at 1 then gym for an hour, call mom at 7:30",
            items: content::TIMELINE,
        }
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

/// Explainer listing the clicks the product replaces
#[derive(Debug, Clone)]
pub struct ManualSteps {
    pub badge: Badge,
    pub steps: &'static [ManualStep],
}

impl ManualSteps {
    pub fn new() -> Self {
        Self {
            badge: Badge::new("The old way"),
            steps: content::MANUAL_STEPS,
        }
    }

    /// Seconds spent on all steps together
    pub fn total_seconds(&self) -> u32 {
        self.steps.iter().map(|step| step.seconds).sum()
    }
}

impl Default for ManualSteps {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Footer {
    pub copyright: String,
    pub links: &'static [Link],
    pub cta: Button,
}

impl Footer {
    pub fn new(navigate: &NavigateTo) -> Self {
        Self {
            copyright: format!("© {} {}", Utc::now().year(), content::COMPANY),
            links: content::FOOTER_LINKS,
            cta: Button::to_playground("Open the playground", navigate, false),
        }
    }
}
