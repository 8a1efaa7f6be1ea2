//! Memoizing JSON document loader.

use super::fetcher::JsonFetcher;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, error};

/// Loads JSON documents by URL and keeps every successful result.
///
/// Construct one per application and share it by `Arc`; the map and the
/// timeline read the same project document, so the second reader is served
/// from the cache. Entries live until `clear_cache` or `evict` is called.
pub struct DataLoader {
    fetcher: Arc<dyn JsonFetcher>,
    cache: RwLock<HashMap<String, Arc<Value>>>,
}

impl DataLoader {
    /// Create a loader with an empty cache.
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self {
            fetcher,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Load the document at `url`.
    ///
    /// Returns the cached document when one exists. Failures (transport,
    /// non-success status, malformed JSON) are logged and yield `None`;
    /// they never reach the caller as errors.
    pub async fn load_json(&self, url: &str) -> Option<Arc<Value>> {
        if let Some(cached) = self.cached(url) {
            debug!("Cache hit for {}", url);
            return Some(cached);
        }

        match self.fetcher.fetch_json(url).await {
            Ok(document) => {
                let document = Arc::new(document);
                if let Ok(mut cache) = self.cache.write() {
                    cache.insert(url.to_string(), Arc::clone(&document));
                }
                Some(document)
            }
            Err(e) => {
                error!("Error loading JSON from {}: {}", url, e);
                None
            }
        }
    }

    /// Drop every cached document.
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    /// Drop the cached document for a single URL.
    ///
    /// Returns whether an entry was removed.
    pub fn evict(&self, url: &str) -> bool {
        self.cache
            .write()
            .map(|mut cache| cache.remove(url).is_some())
            .unwrap_or(false)
    }

    pub fn is_cached(&self, url: &str) -> bool {
        self.cached(url).is_some()
    }

    /// Number of cached documents.
    pub fn cached_len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    fn cached(&self, url: &str) -> Option<Arc<Value>> {
        self.cache.read().ok()?.get(url).cloned()
    }
}
