//! Display copy for the landing page.
//!
//! Everything here is fixed at compile time and read directly by the
//! presentational components.

/// Product name shown in the header
pub const BRAND: &str = "Flowdate OS";

/// Release tag shown in the header
pub const VERSION_TAG: &str = "v1.0 Beta";

/// Company name used in the footer copyright line
pub const COMPANY: &str = "Flowdate Inc.";

/// A navigation or footer link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// A headline number with its caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    /// Fill of the progress bar, in percent
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub tag: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// One row of the example day shown in the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineItem {
    pub time: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustLogo {
    pub name: &'static str,
}

/// A step of the manual workflow the product replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualStep {
    pub title: &'static str,
    pub seconds: u32,
}

pub const NAV_LINKS: &[Link] = &[
    Link { label: "Product", href: "#features" },
    Link { label: "Manifesto", href: "#manifesto" },
    Link { label: "Pricing", href: "#pricing" },
];

pub const FOOTER_LINKS: &[Link] = &[
    Link { label: "Twitter", href: "https://twitter.com/flowdate" },
    Link { label: "GitHub", href: "https://github.com/flowdate" },
    Link { label: "Discord", href: "https://discord.gg/flowdate" },
];

pub const HERO_BADGE: &str = "Calendar Intelligence";
pub const HERO_HEADLINE: &str = "Plans made";
pub const HERO_HEADLINE_MUTED: &str = "effortless.";
pub const HERO_LEDE: &str =
    "Type naturally. We parse the chaos, finding time, places, and intent instantly.";
pub const DOCS_URL: &str = "https://docs.flowdate.app";

pub const METRICS: &[Metric] = &[
    Metric { value: "0.2s", label: "Average parse latency", progress: None },
    Metric { value: "98.5%", label: "Accuracy", progress: Some(85) },
    Metric { value: "40+", label: "Date and time phrasings understood", progress: None },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        tag: "Time",
        title: "Relative dates, resolved",
        body: "\"Tomorrow\", \"next Friday\" and \"in two weeks\" become real calendar dates.",
    },
    Feature {
        tag: "Place",
        title: "Locations picked out",
        body: "Cafés, offices and addresses are lifted out of the sentence and attached to the event.",
    },
    Feature {
        tag: "Intent",
        title: "One sentence, many events",
        body: "\"Lunch at 1, then gym for an hour\" produces two events in the right order.",
    },
    Feature {
        tag: "Reminders",
        title: "Nudges included",
        body: "Say \"remind me 15 minutes before\" and the reminder is set for you.",
    },
];

pub const TIMELINE: &[TimelineItem] = &[
    TimelineItem { time: "09:00", label: "Standup", detail: "Team room" },
    TimelineItem { time: "13:00", label: "Lunch with Sarah", detail: "Corner bistro" },
    TimelineItem { time: "14:00", label: "Gym", detail: "One hour" },
    TimelineItem { time: "19:30", label: "Call mom", detail: "Reminder 10 min before" },
];

pub const TRUST_LOGOS: &[TrustLogo] = &[
    TrustLogo { name: "Northwind" },
    TrustLogo { name: "Globex" },
    TrustLogo { name: "Initech" },
    TrustLogo { name: "Umbrella" },
    TrustLogo { name: "Hooli" },
];

pub const MANUAL_STEPS: &[ManualStep] = &[
    ManualStep { title: "Open your calendar app", seconds: 5 },
    ManualStep { title: "Create a new event", seconds: 3 },
    ManualStep { title: "Type the title", seconds: 6 },
    ManualStep { title: "Pick the date", seconds: 8 },
    ManualStep { title: "Pick start and end times", seconds: 10 },
    ManualStep { title: "Add the location", seconds: 9 },
    ManualStep { title: "Set a reminder", seconds: 6 },
];
