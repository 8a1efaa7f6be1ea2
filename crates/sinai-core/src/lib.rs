//! Sinai Core - Headless search and navigation for the Sinai Showcase site.
//!
//! This crate implements the presentation layer of a static site about
//! development projects and achievements: a memoizing data loader, a flat
//! search index with snippet and highlight rendering, and a typed navigation
//! protocol that routes a selected result to the map or the timeline. It can
//! be used programmatically without any HTTP/RPC layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use sinai_core::{EntryKind, SiteApi};
//!
//! #[tokio::main]
//! async fn main() -> sinai_core::Result<()> {
//!     let api = SiteApi::new("http://127.0.0.1:8080").await?;
//!
//!     for result in api.search("مياه") {
//!         println!("{} {}", result.entry.kind, result.entry.display_title);
//!     }
//!
//!     api.select_result("p1", EntryKind::Project).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod loader;
pub mod navigation;
pub mod presentation;
pub mod query;
pub mod report;
pub mod widgets;

mod api;

// Re-export commonly used types
pub use error::{Result, SiteError};
pub use index::{build_index, EntryKind, IndexBuilder, SearchableEntry};
pub use loader::{DataLoader, HttpFetcher, JsonFetcher, StaticFetcher};
pub use navigation::{
    HeadlessScroller, NavigationBus, NavigationOutcome, NavigationSignal, Navigator, Scroller,
    Section, SubscriptionId,
};
pub use presentation::{RenderedResults, SearchController, SearchOverlay};
pub use query::{create_snippet, escape_html, highlight_query, QueryEngine, QueryResult};
pub use report::{ErrorReporter, Toast, ToastPhase};
pub use widgets::{AchievementMap, MapMarker, Timeline};

// Re-export builder from api module
pub use api::SiteApiBuilder;

use std::sync::{Arc, Mutex, RwLock};

/// Main API struct for site operations.
///
/// Owns one instance of every component and wires them the way the page
/// does: the search controller publishes selections on the bus, and the map
/// and timeline are subscribed to it. All components share one `DataLoader`,
/// so the data document is fetched once.
pub struct SiteApi {
    data_url: String,
    loader: Arc<DataLoader>,
    engine: Arc<RwLock<QueryEngine>>,
    bus: Arc<NavigationBus>,
    navigator: Navigator,
    controller: SearchController,
    map: Arc<Mutex<AchievementMap>>,
    timeline: Arc<Mutex<Timeline>>,
    reporter: ErrorReporter,
}

impl SiteApi {
    /// Create a builder for SiteApi.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let api = SiteApi::builder()
    ///     .fetcher(Arc::new(StaticFetcher::new().with_document("/data/projects.json", doc)))
    ///     .build()
    ///     .await?;
    /// ```
    pub fn builder() -> SiteApiBuilder {
        SiteApiBuilder::new()
    }

    /// Create a SiteApi reading documents over HTTP from `base_url`, and
    /// load the data document.
    pub async fn new(base_url: impl Into<String>) -> Result<Self> {
        SiteApiBuilder::new().base_url(base_url).build().await
    }

    pub fn loader(&self) -> &Arc<DataLoader> {
        &self.loader
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}
