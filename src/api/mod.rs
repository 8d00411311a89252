//! HTTP plumbing shared by the joke and quote fetchers
//!
//! Fetchers talk to the network only through [`HttpTransport`], so the
//! reqwest client can be swapped for a scripted one in tests.

use std::fmt;

use async_trait::async_trait;

pub mod joke;
pub mod quote;

pub use joke::{Joke, JokeFetcher, JokeResult};
pub use quote::{Quote, QuoteFetcher, QuoteResult};

/// Why a fetch did not produce a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network unreachable, DNS, connection reset, transport timeout
    Transport(String),
    /// Response arrived with a non-2xx status
    Status(u16),
    /// Body did not parse or lacked the expected fields
    Malformed(String),
    /// Credential unset or still the placeholder
    MissingCredential,
}

impl FetchError {
    /// 401 and 403 mean the key is wrong, not that the service is down
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, FetchError::Status(401) | FetchError::Status(403))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport failure: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status {}", code),
            FetchError::Malformed(msg) => write!(f, "malformed response: {}", msg),
            FetchError::MissingCredential => write!(f, "API key not configured"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`FetchError::Status`]
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Status(self.status))
        }
    }
}

/// Minimal GET-only HTTP client
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue one GET request with the given extra headers.
    ///
    /// Only transport-level problems are errors; any status code is returned
    /// as a response.
    async fn get(
        &self,
        url: &str,
        headers: &[(&'static str, String)],
    ) -> Result<HttpResponse, FetchError>;
}

/// [`HttpTransport`] backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: &[(&'static str, String)],
    ) -> Result<HttpResponse, FetchError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("reading body of {} failed: {}", url, e)))?;

        tracing::debug!(url, status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_classification() {
        assert!(FetchError::Status(401).is_auth_failure());
        assert!(FetchError::Status(403).is_auth_failure());
        assert!(!FetchError::Status(404).is_auth_failure());
        assert!(!FetchError::Status(500).is_auth_failure());
        assert!(!FetchError::Transport("dns".into()).is_auth_failure());
    }

    #[test]
    fn test_error_for_status() {
        assert!(HttpResponse::new(200, "{}").error_for_status().is_ok());
        assert!(HttpResponse::new(204, "").is_success());
        assert_eq!(
            HttpResponse::new(302, "").error_for_status(),
            Err(FetchError::Status(302))
        );
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new().is_ok());
    }
}
