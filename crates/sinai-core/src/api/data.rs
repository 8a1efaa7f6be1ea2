//! Data loading and widget initialization on SiteApi.

use tracing::{debug, warn};

use crate::report::ErrorReporter;
use crate::widgets::{AchievementMap, Timeline};
use crate::SiteApi;

impl SiteApi {
    /// Build the index and load both widgets from the data document.
    ///
    /// The document is fetched once; the widgets are served from the cache.
    /// Returns the number of indexed entries.
    pub async fn initialize(&self) -> usize {
        let count = self.rebuild_index().await;
        self.reload_widgets().await;
        count
    }

    /// Reload the map and the timeline. Existing signal subscriptions stay
    /// attached.
    ///
    /// When the document cannot be loaded the map is left empty, the
    /// timeline shows its error state and the user gets a retry toast.
    pub async fn reload_widgets(&self) -> bool {
        let document = self.loader.load_json(&self.data_url).await;

        let (map, timeline) = match document.as_deref() {
            Some(document) => (
                AchievementMap::from_document(document),
                Timeline::from_document(document),
            ),
            None => {
                let _toast = self
                    .reporter
                    .report_load_failure("Timeline", &format!("failed to load {}", self.data_url));
                (AchievementMap::from_document(&serde_json::Value::Null), Timeline::failed())
            }
        };

        debug!(
            "Loaded {} map markers and {} timeline entries",
            map.markers().len(),
            timeline.len()
        );

        match (self.map.lock(), self.timeline.lock()) {
            (Ok(mut current_map), Ok(mut current_timeline)) => {
                *current_map = map;
                *current_timeline = timeline;
            }
            _ => warn!("Widget state lock poisoned; keeping previous state"),
        }

        document.is_some()
    }

    // ========================================
    // Cache
    // ========================================

    /// Drop every cached document. The next load fetches again.
    pub fn clear_cache(&self) {
        self.loader.clear_cache();
    }

    /// Drop one cached document.
    pub fn evict_cache(&self, url: &str) -> bool {
        self.loader.evict(url)
    }

    pub fn cached_documents(&self) -> usize {
        self.loader.cached_len()
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }
}
