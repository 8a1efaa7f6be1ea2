//! Document fetchers.
//!
//! `HttpFetcher` wraps reqwest with:
//! - Relative URL resolution against a site base URL
//! - Configurable timeouts
//! - User-agent management
//!
//! `StaticFetcher` serves documents from memory and is what the unit tests
//! and offline tooling plug into a `DataLoader`.

use crate::config::{AppConfig, NetworkConfig};
use crate::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Source of parsed JSON documents.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Fetch and parse the document at `url`.
    ///
    /// Non-success statuses and malformed bodies are errors.
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// HTTP fetcher for documents served next to the site.
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    /// Create a fetcher resolving relative URLs against `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, NetworkConfig::REQUEST_TIMEOUT)
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| SiteError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(AppConfig::USER_AGENT)
            .build()
            .map_err(|e| SiteError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: None,
            })?;

        Ok(Self { client, base_url })
    }

    /// Base URL that relative document paths are joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a document URL. Absolute URLs are used as-is.
    pub fn resolve(&self, url: &str) -> Result<Url> {
        self.base_url.join(url).map_err(|e| SiteError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let resolved = self.resolve(url)?;
        debug!("GET {}", resolved);

        let response = self.client.get(resolved.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::HttpStatus {
                url: resolved.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// In-memory fetcher keyed by the exact URL string.
///
/// Unknown URLs answer with a 404 status error. Every call is counted so
/// callers can observe whether the cache was consulted first.
#[derive(Default)]
pub struct StaticFetcher {
    documents: RwLock<HashMap<String, Value>>,
    requests: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style document registration.
    pub fn with_document(self, url: impl Into<String>, document: Value) -> Self {
        self.insert(url, document);
        self
    }

    /// Register or replace the document served for `url`.
    pub fn insert(&self, url: impl Into<String>, document: Value) {
        if let Ok(mut docs) = self.documents.write() {
            docs.insert(url.into(), document);
        }
    }

    /// Number of fetches issued so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JsonFetcher for StaticFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let docs = self
            .documents
            .read()
            .map_err(|e| SiteError::Other(format!("Fetcher lock poisoned: {}", e)))?;

        docs.get(url).cloned().ok_or_else(|| SiteError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })
    }
}
