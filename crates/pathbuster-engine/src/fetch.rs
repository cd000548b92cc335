//! HTTP probe transport.
//!
//! The engine only ever needs a status code per URL, so the transport
//! seam is a single-method trait. Tests swap in a scripted fetcher;
//! production uses [`HttpFetcher`] backed by a blocking reqwest client.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::config::ScanConfig;

// === Transport Errors ===

/// Failure to complete a probe request at the transport level.
///
/// Error *status codes* are not errors here; they come back as a
/// normal status through [`Fetch::fetch`].
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Connection failed")]
    Connect,

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Issue a GET and report the response status.
pub trait Fetch {
    fn fetch(&self, url: &str, timeout: Duration) -> std::result::Result<u16, FetchError>;
}

// === HTTP Fetcher ===

/// Production transport over a shared blocking HTTP client.
///
/// Redirects are followed (reqwest's default), so the reported status
/// is the one at the end of the redirect chain.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScanConfig) -> pathbuster_core::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| pathbuster_core::Error::Http(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, timeout: Duration) -> std::result::Result<u16, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|e| classify(e, timeout))?;
        Ok(response.status().as_u16())
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(timeout.as_secs())
    } else if err.is_connect() {
        FetchError::Connect
    } else {
        FetchError::Transport(err.to_string())
    }
}
