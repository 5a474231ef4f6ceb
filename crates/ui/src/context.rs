use std::sync::Arc;

use tryunfo_core::model::Deck;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn initial_deck(&self) -> Deck;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    initial_deck: Deck,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            initial_deck: app.initial_deck(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Deck the page starts with. Empty unless the app seeded one.
    #[must_use]
    pub fn initial_deck(&self) -> Deck {
        self.initial_deck.clone()
    }
}

/// Build an `AppContext` from a UI-facing app implementation. The binary
/// provides it to the root component at launch.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
