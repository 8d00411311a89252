//! Random quote fetcher
//!
//! The quote service needs an API key. A missing or placeholder key is
//! reported on the quote screen without touching the network.

use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;

use super::{FetchError, HttpTransport};
use crate::app::view::{Panel, View};
use crate::config::ApiCredential;

pub const API_KEY_HEADER: &str = "X-Api-Key";

pub const QUOTE_MISSING_KEY_MESSAGE: &str =
    "No API key configured. Set [quote] api_key in quipdeck.toml to fetch quotes.";
pub const QUOTE_AUTH_MESSAGE: &str = "Authentication failed. Is your API key correct?";

/// A quotation and who said it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

/// What a quote fetch left in the quote panel
pub type QuoteResult = Panel<Quote>;

/// Text shown on the quote screen for a failed fetch
pub fn quote_failure_message(err: &FetchError) -> String {
    let detail = match err {
        FetchError::MissingCredential => return QUOTE_MISSING_KEY_MESSAGE.to_string(),
        e if e.is_auth_failure() => QUOTE_AUTH_MESSAGE.to_string(),
        FetchError::Status(code) => format!("HTTP error {}. Please try again later.", code),
        FetchError::Transport(_) => "Network error. Please check your connection.".to_string(),
        FetchError::Malformed(_) => "The quote service sent an unexpected response.".to_string(),
    };
    format!("Couldn't fetch a quote. {}", detail)
}

/// Fetches quotes into the quote panel of a [`View`]
#[derive(Clone)]
pub struct QuoteFetcher {
    transport: Arc<dyn HttpTransport>,
    endpoint: ApiCredential,
    view: View,
}

impl QuoteFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: ApiCredential, view: View) -> Self {
        Self {
            transport,
            endpoint,
            view,
        }
    }

    /// Start a fetch.
    ///
    /// Before this returns the panel shows either the missing-key message or
    /// `Loading`. In the missing-key case the returned future resolves
    /// without a request. The future never resolves with an error.
    pub fn fetch(&self) -> impl Future<Output = QuoteResult> + Send + 'static {
        let start = self.begin();
        let this = self.clone();
        async move {
            match start {
                Ok(key) => this.complete(key).await,
                Err(panel) => panel,
            }
        }
    }

    /// Synchronous prefix of a fetch: the key to send, or the panel already
    /// written when there is none.
    fn begin(&self) -> Result<String, QuoteResult> {
        match self.endpoint.usable_key() {
            Some(key) => {
                self.view.set_quote(Panel::Loading);
                Ok(key.to_string())
            }
            None => {
                tracing::warn!("quote API key missing or still the placeholder");
                let panel = Panel::Message(quote_failure_message(&FetchError::MissingCredential));
                self.view.set_quote(panel.clone());
                Err(panel)
            }
        }
    }

    async fn complete(self, key: String) -> QuoteResult {
        let panel = match self.request(key).await {
            Ok(quote) => {
                tracing::info!(author = %quote.author, "quote fetched");
                Panel::Ready(quote)
            }
            Err(err) => {
                tracing::warn!(error = %err, url = %self.endpoint.url, "quote fetch failed");
                Panel::Message(quote_failure_message(&err))
            }
        };
        // last completion wins, even if the quote screen is no longer shown
        self.view.set_quote(panel.clone());
        panel
    }

    async fn request(&self, key: String) -> Result<Quote, FetchError> {
        let response = self
            .transport
            .get(&self.endpoint.url, &[(API_KEY_HEADER, key)])
            .await?
            .error_for_status()?;

        // only the first record has to be a well-formed quote
        let records: Vec<serde_json::Value> = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        let first = records
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Malformed("empty quote list".to_string()))?;

        serde_json::from_value(first).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Reply, ScriptedTransport};
    use crate::QUOTE_KEY_PLACEHOLDER;

    const URL: &str = "http://quotes.test/v1/quotes";

    fn fetcher(key: &str, replies: Vec<Reply>) -> (QuoteFetcher, Arc<ScriptedTransport>, View) {
        let transport = Arc::new(ScriptedTransport::new(replies));
        let view = View::new();
        let fetcher = QuoteFetcher::new(
            transport.clone(),
            ApiCredential::keyed(URL, key),
            view.clone(),
        );
        (fetcher, transport, view)
    }

    fn quote(text: &str, author: &str) -> Quote {
        Quote {
            quote: text.to_string(),
            author: author.to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_takes_first_record() {
        let (fetcher, transport, view) = fetcher(
            "secret",
            vec![Reply::ok(
                200,
                r#"[{"quote":"Q","author":"A","category":"life"},{"quote":"Q2","author":"A2"}]"#,
            )],
        );

        let result = fetcher.fetch().await;

        assert_eq!(result, Panel::Ready(quote("Q", "A")));
        assert_eq!(view.quote(), Panel::Ready(quote("Q", "A")));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, URL);
        assert_eq!(requests[0].headers, vec![(API_KEY_HEADER, "secret".to_string())]);
    }

    #[tokio::test]
    async fn test_bad_trailing_record_is_ignored() {
        let (fetcher, _, view) = fetcher(
            "k",
            vec![Reply::ok(
                200,
                r#"[{"quote":"Q","author":"A"},{"quote":"second has no author"}]"#,
            )],
        );

        let result = fetcher.fetch().await;

        assert_eq!(result, Panel::Ready(quote("Q", "A")));
        assert_eq!(view.quote(), Panel::Ready(quote("Q", "A")));
    }

    #[tokio::test]
    async fn test_bad_first_record_is_malformed() {
        let (fetcher, _, view) = fetcher(
            "k",
            vec![Reply::ok(200, r#"[{"quote":"no author"},{"quote":"Q","author":"A"}]"#)],
        );

        fetcher.fetch().await;
        assert!(view.quote().message().unwrap().contains("unexpected response"));
    }

    #[tokio::test]
    async fn test_placeholder_key_makes_no_request() {
        let (fetcher, transport, view) = fetcher(QUOTE_KEY_PLACEHOLDER, vec![]);

        let pending = fetcher.fetch();
        assert_eq!(view.quote().message(), Some(QUOTE_MISSING_KEY_MESSAGE));

        let result = pending.await;
        assert_eq!(result, Panel::Message(QUOTE_MISSING_KEY_MESSAGE.to_string()));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_key_makes_no_request() {
        let (fetcher, transport, view) = fetcher("", vec![]);
        fetcher.fetch().await;
        assert_eq!(view.quote().message(), Some(QUOTE_MISSING_KEY_MESSAGE));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_loading_is_visible_before_first_poll() {
        let (fetcher, _, view) = fetcher("k", vec![Reply::ok(200, r#"[{"quote":"q","author":"a"}]"#)]);
        let pending = fetcher.fetch();
        assert!(view.quote().is_loading());
        pending.await;
        assert!(view.quote().ready().is_some());
    }

    #[tokio::test]
    async fn test_auth_and_generic_status_messages_differ() {
        let (fetcher, _, view) = fetcher(
            "bad",
            vec![Reply::ok(401, ""), Reply::ok(403, ""), Reply::ok(500, "")],
        );

        fetcher.fetch().await;
        let unauthorized = view.quote().message().unwrap().to_string();
        assert!(unauthorized.contains(QUOTE_AUTH_MESSAGE));

        fetcher.fetch().await;
        assert!(view.quote().message().unwrap().contains(QUOTE_AUTH_MESSAGE));

        fetcher.fetch().await;
        let server_error = view.quote().message().unwrap().to_string();
        assert!(server_error.contains("HTTP error 500"));
        assert!(!server_error.contains(QUOTE_AUTH_MESSAGE));
        assert_ne!(unauthorized, server_error);
    }

    #[tokio::test]
    async fn test_malformed_and_transport_failures() {
        let (fetcher, _, view) = fetcher(
            "k",
            vec![
                Reply::ok(200, "[]"),
                Reply::ok(200, r#"{"quote":"not a list","author":"x"}"#),
                Reply::transport_error("dns"),
            ],
        );

        fetcher.fetch().await;
        assert!(view.quote().message().unwrap().contains("unexpected response"));
        fetcher.fetch().await;
        assert!(view.quote().message().unwrap().contains("unexpected response"));
        fetcher.fetch().await;
        assert!(view.quote().message().unwrap().contains("Network error"));
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            quote_failure_message(&FetchError::MissingCredential),
            QUOTE_MISSING_KEY_MESSAGE
        );
        assert_eq!(
            quote_failure_message(&FetchError::Status(403)),
            format!("Couldn't fetch a quote. {}", QUOTE_AUTH_MESSAGE)
        );
        assert_eq!(
            quote_failure_message(&FetchError::Status(429)),
            "Couldn't fetch a quote. HTTP error 429. Please try again later."
        );
    }
}
