//! Random joke fetcher

use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;

use super::{FetchError, HttpTransport};
use crate::app::view::{Panel, View};
use crate::config::ApiCredential;

pub const JOKE_FAILURE_MESSAGE: &str = "Oops! Couldn't fetch a joke. Please try again.";

/// A setup / punchline pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

/// What a joke fetch left in the joke panel
pub type JokeResult = Panel<Joke>;

/// Fetches jokes into the joke panel of a [`View`]
#[derive(Clone)]
pub struct JokeFetcher {
    transport: Arc<dyn HttpTransport>,
    endpoint: ApiCredential,
    view: View,
}

impl JokeFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: ApiCredential, view: View) -> Self {
        Self {
            transport,
            endpoint,
            view,
        }
    }

    /// Start a fetch.
    ///
    /// The panel switches to `Loading` before this returns; the request runs
    /// when the returned future is polled. The future always resolves with
    /// the panel value it wrote, never with an error.
    pub fn fetch(&self) -> impl Future<Output = JokeResult> + Send + 'static {
        self.view.set_joke(Panel::Loading);
        let this = self.clone();
        async move { this.complete().await }
    }

    async fn complete(self) -> JokeResult {
        let panel = match self.request().await {
            Ok(joke) => {
                tracing::info!("joke fetched");
                Panel::Ready(joke)
            }
            Err(err) => {
                tracing::warn!(error = %err, url = %self.endpoint.url, "joke fetch failed");
                Panel::Message(JOKE_FAILURE_MESSAGE.to_string())
            }
        };
        // last completion wins, even if the joke screen is no longer shown
        self.view.set_joke(panel.clone());
        panel
    }

    async fn request(&self) -> Result<Joke, FetchError> {
        let response = self
            .transport
            .get(&self.endpoint.url, &[])
            .await?
            .error_for_status()?;

        serde_json::from_str(&response.body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
