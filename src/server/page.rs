use crate::components::{
    Diagram, FeatureDeck, Footer, Header, Hero, ManualSteps, MetricsGrid, NavigateTo, PlaygroundPanel, TrustStrip,
};
use crate::error::AppResult;
use crate::playground::PlaygroundState;
use askama::Template;

/// Element id of the playground section
pub const PLAYGROUND_ANCHOR: &str = "playground";

/// Seconds before a page showing an outstanding request reloads itself
const LOADING_REFRESH_SECS: u32 = 1;

/// The whole landing page
#[derive(Template)]
#[template(path = "page.html")]
pub struct LandingPage {
    pub header: Header,
    pub hero: Hero,
    pub metrics: MetricsGrid,
    pub trust: TrustStrip,
    pub features: FeatureDeck,
    pub diagram: Diagram,
    pub manual: ManualSteps,
    pub playground: PlaygroundPanel,
    pub footer: Footer,
    pub refresh_secs: Option<u32>,
}

impl LandingPage {
    /// Lay out every section around the given playground state
    pub fn compose(state: &PlaygroundState) -> Self {
        let navigate = NavigateTo::anchor(PLAYGROUND_ANCHOR);

        Self {
            header: Header::new(&navigate),
            hero: Hero::new(&navigate),
            metrics: MetricsGrid::new(),
            trust: TrustStrip::new(),
            features: FeatureDeck::new(),
            diagram: Diagram::new(),
            manual: ManualSteps::new(),
            playground: PlaygroundPanel::new(&navigate, state),
            footer: Footer::new(&navigate),
            refresh_secs: state.loading.then_some(LOADING_REFRESH_SECS),
        }
    }

    pub fn to_html(&self) -> AppResult<String> {
        Ok(self.render()?)
    }
}
