use std::sync::Arc;

use services::{Location, Viewer, ViewerOptions};
use slides_core::model::Deck;

/// What the composition root (e.g. `crates/app`) hands to the UI.
pub trait UiApp: Send + Sync {
    fn deck(&self) -> Arc<Deck>;
    fn options(&self) -> ViewerOptions;

    /// A fresh location for a newly opened viewer.
    fn location(&self) -> Box<dyn Location>;
}

#[derive(Clone)]
pub struct AppContext {
    deck: Arc<Deck>,
    options: ViewerOptions,
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck: app.deck(),
            options: app.options(),
            app: Arc::clone(app),
        }
    }

    #[must_use]
    pub fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    /// Opens a viewer over the context's deck, reading the initial page from
    /// a new location.
    #[must_use]
    pub fn open_viewer(&self) -> Viewer {
        Viewer::open(self.deck(), self.options, self.app.location())
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
