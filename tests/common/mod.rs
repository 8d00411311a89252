//! Shared fakes for integration tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use quipdeck::api::{FetchError, HttpResponse, HttpTransport};

/// Serves canned replies per URL and counts requests
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<String, Vec<(Duration, Result<HttpResponse, FetchError>)>>>,
    hits: Mutex<Vec<(String, Vec<(&'static str, String)>)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, url: &str, status: u16, body: &str) -> Self {
        self.reply_after(url, Duration::ZERO, status, body)
    }

    pub fn reply_after(self, url: &str, delay: Duration, status: u16, body: &str) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push((delay, Ok(HttpResponse::new(status, body))));
        self
    }

    pub fn hits(&self) -> Vec<(String, Vec<(&'static str, String)>)> {
        self.hits.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(
        &self,
        url: &str,
        headers: &[(&'static str, String)],
    ) -> Result<HttpResponse, FetchError> {
        self.hits
            .lock()
            .unwrap()
            .push((url.to_string(), headers.to_vec()));

        let next = {
            let mut routes = self.routes.lock().unwrap();
            match routes.get_mut(url) {
                Some(queue) if !queue.is_empty() => Some(queue.remove(0)),
                _ => None,
            }
        };

        match next {
            Some((delay, outcome)) => {
                tokio::time::sleep(delay).await;
                outcome
            }
            None => Err(FetchError::Transport(format!("no route for {}", url))),
        }
    }
}
