//! One-shot wiring of the interaction controller
//!
//! The app calls [`Bootstrap::on_ready`] once the terminal is in raw mode.
//! Until then [`Bootstrap::controller`] is `None` and input is ignored.

use std::sync::{Arc, OnceLock};

use crate::api::{HttpTransport, JokeFetcher, QuoteFetcher};
use crate::config::ApiConfig;

use super::controller::InteractionController;
use super::view::View;

pub struct Bootstrap {
    view: View,
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
    controller: OnceLock<InteractionController>,
}

impl Bootstrap {
    pub fn new(view: View, config: ApiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            view,
            config,
            transport,
            controller: OnceLock::new(),
        }
    }

    /// Bind the controls. Only the first call does any work.
    pub fn on_ready(&self) -> &InteractionController {
        self.controller.get_or_init(|| {
            tracing::info!(
                joke_url = %self.config.joke.url,
                quote_url = %self.config.quote.url,
                quote_key_set = self.config.quote.usable_key().is_some(),
                "binding controls"
            );
            let jokes = JokeFetcher::new(
                self.transport.clone(),
                self.config.joke.clone(),
                self.view.clone(),
            );
            let quotes = QuoteFetcher::new(
                self.transport.clone(),
                self.config.quote.clone(),
                self.view.clone(),
            );
            InteractionController::new(self.view.clone(), jokes, quotes)
        })
    }

    pub fn controller(&self) -> Option<&InteractionController> {
        self.controller.get()
    }

    pub fn is_bound(&self) -> bool {
        self.controller.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;

    #[test]
    fn test_binds_exactly_once() {
        let bootstrap = Bootstrap::new(
            View::new(),
            ApiConfig::default(),
            Arc::new(ScriptedTransport::default()),
        );
        assert!(!bootstrap.is_bound());
        assert!(bootstrap.controller().is_none());

        let first = bootstrap.on_ready() as *const InteractionController;
        let second = bootstrap.on_ready() as *const InteractionController;
        assert_eq!(first, second);
        assert!(bootstrap.is_bound());
    }
}
