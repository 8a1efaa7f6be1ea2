//! Builder for configuring SiteApi initialization.

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use crate::config::{AppConfig, DataConfig, NavigationConfig, NetworkConfig, SearchConfig};
use crate::error::{Result, SiteError};
use crate::index::IndexBuilder;
use crate::loader::{DataLoader, HttpFetcher, JsonFetcher};
use crate::navigation::{HeadlessScroller, NavigationBus, Navigator, Scroller};
use crate::presentation::{Debouncer, SearchController};
use crate::query::QueryEngine;
use crate::report::ErrorReporter;
use crate::widgets::{AchievementMap, Timeline};
use crate::SiteApi;

/// Builder for configuring SiteApi initialization.
///
/// # Example
///
/// ```rust,ignore
/// use sinai_core::SiteApi;
///
/// let api = SiteApi::builder()
///     .base_url("http://127.0.0.1:8080")
///     .settle_delay(Duration::from_millis(200))
///     .build()
///     .await?;
/// ```
pub struct SiteApiBuilder {
    base_url: String,
    data_url: String,
    fetcher: Option<Arc<dyn JsonFetcher>>,
    scroller: Option<Arc<dyn Scroller>>,
    settle_delay: Duration,
    debounce: Duration,
    request_timeout: Duration,
    load_on_build: bool,
}

impl SiteApiBuilder {
    pub fn new() -> Self {
        Self {
            base_url: AppConfig::DEFAULT_BASE_URL.to_string(),
            data_url: DataConfig::PROJECTS_URL.to_string(),
            fetcher: None,
            scroller: None,
            settle_delay: NavigationConfig::SCROLL_SETTLE_DELAY,
            debounce: SearchConfig::DEBOUNCE,
            request_timeout: NetworkConfig::REQUEST_TIMEOUT,
            load_on_build: true,
        }
    }

    /// Origin that relative document URLs resolve against.
    ///
    /// Ignored when a custom fetcher is supplied.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of the merged projects/achievements document.
    ///
    /// Default: `/data/projects.json`
    pub fn data_url(mut self, data_url: impl Into<String>) -> Self {
        self.data_url = data_url.into();
        self
    }

    /// Use a custom document source instead of HTTP.
    pub fn fetcher(mut self, fetcher: Arc<dyn JsonFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Use a custom scroller. Default: a `HeadlessScroller` that treats
    /// every section as present.
    pub fn scroller(mut self, scroller: Arc<dyn Scroller>) -> Self {
        self.scroller = Some(scroller);
        self
    }

    /// Wait between the scroll request and the selection signal.
    ///
    /// Default: 800 ms
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Quiet period before a typed query runs.
    ///
    /// Default: 300 ms
    pub fn debounce(mut self, wait: Duration) -> Self {
        self.debounce = wait;
        self
    }

    /// Timeout of the default HTTP fetcher.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load the data document and build the index during `build`.
    ///
    /// Default: `true`
    pub fn load_on_build(mut self, enable: bool) -> Self {
        self.load_on_build = enable;
        self
    }

    /// Build the SiteApi instance.
    pub async fn build(self) -> Result<SiteApi> {
        if self.data_url.trim().is_empty() {
            return Err(SiteError::Config {
                message: "Data URL must not be empty".to_string(),
            });
        }

        let fetcher: Arc<dyn JsonFetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpFetcher::with_timeout(&self.base_url, self.request_timeout)?),
        };
        let scroller: Arc<dyn Scroller> = match self.scroller {
            Some(scroller) => scroller,
            None => Arc::new(HeadlessScroller::new()),
        };

        let loader = Arc::new(DataLoader::new(fetcher));
        let engine = Arc::new(RwLock::new(QueryEngine::with_builder(IndexBuilder::with_url(
            self.data_url.clone(),
        ))));

        let bus = Arc::new(NavigationBus::new());
        let navigator = Navigator::new(Arc::clone(&bus), scroller).with_settle_delay(self.settle_delay);
        let controller = SearchController::new(Arc::clone(&engine), navigator.clone())
            .with_debouncer(Debouncer::new(self.debounce));

        let map = Arc::new(Mutex::new(AchievementMap::from_document(&serde_json::Value::Null)));
        let timeline = Arc::new(Mutex::new(Timeline::default()));
        AchievementMap::attach(Arc::clone(&map), &bus);
        Timeline::attach(Arc::clone(&timeline), &bus);

        let api = SiteApi {
            data_url: self.data_url,
            loader,
            engine,
            bus,
            navigator,
            controller,
            map,
            timeline,
            reporter: ErrorReporter::new(),
        };

        if self.load_on_build {
            api.initialize().await;
        }

        Ok(api)
    }
}

impl Default for SiteApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_data_url_is_rejected() {
        let result = SiteApiBuilder::new().data_url("  ").build().await;
        assert!(matches!(result, Err(SiteError::Config { .. })));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_rejected() {
        let result = SiteApiBuilder::new()
            .base_url("not a url")
            .load_on_build(false)
            .build()
            .await;
        assert!(matches!(result, Err(SiteError::InvalidUrl { .. })));
    }
}
