//! Search methods on SiteApi.

use tracing::{info, warn};

use crate::index::IndexBuilder;
use crate::presentation::{RenderedResults, SearchController};
use crate::query::QueryResult;
use crate::SiteApi;

impl SiteApi {
    // ========================================
    // Index
    // ========================================

    /// Reload the data document and replace the search index.
    ///
    /// A failed load leaves an empty index; search then returns nothing.
    pub async fn rebuild_index(&self) -> usize {
        let entries = IndexBuilder::with_url(self.data_url.as_str())
            .build(&self.loader)
            .await;

        match self.engine.write() {
            Ok(mut engine) => {
                let count = engine.replace_entries(entries);
                info!("Search index initialized with {} items", count);
                count
            }
            Err(e) => {
                warn!("Search index lock poisoned: {}", e);
                0
            }
        }
    }

    /// Number of entries in the current index.
    pub fn index_len(&self) -> usize {
        self.engine.read().map(|e| e.len()).unwrap_or(0)
    }

    // ========================================
    // Queries
    // ========================================

    /// Run a query against the index. Short queries return nothing.
    pub fn search(&self, query: &str) -> Vec<QueryResult> {
        match self.engine.read() {
            Ok(engine) => engine.search(query),
            Err(e) => {
                warn!("Search index lock poisoned: {}", e);
                Vec::new()
            }
        }
    }

    /// Run a query immediately and render it into the overlay.
    pub fn render_search(&self, query: &str) -> RenderedResults {
        self.controller.submit(query)
    }

    /// The overlay controller, for hosts that drive input events directly.
    pub fn controller(&self) -> &SearchController {
        &self.controller
    }
}
