//! Search overlay controller.

use super::debounce::Debouncer;
use super::overlay::SearchOverlay;
use super::render::{render_results, RenderedResults};
use crate::config::SearchConfig;
use crate::index::EntryKind;
use crate::navigation::{NavigationOutcome, Navigator};
use crate::query::QueryEngine;
use std::sync::{Arc, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Connects user input on the overlay to the query engine and routes
/// result selections through the navigator.
///
/// Cheap to clone; clones share the engine, overlay and debounce state.
#[derive(Clone)]
pub struct SearchController {
    engine: Arc<RwLock<QueryEngine>>,
    overlay: Arc<Mutex<SearchOverlay>>,
    debouncer: Debouncer,
    navigator: Navigator,
}

impl SearchController {
    pub fn new(engine: Arc<RwLock<QueryEngine>>, navigator: Navigator) -> Self {
        Self {
            engine,
            overlay: Arc::new(Mutex::new(SearchOverlay::new())),
            debouncer: Debouncer::new(SearchConfig::DEBOUNCE),
            navigator,
        }
    }

    /// Replace the input debouncer, e.g. to change the quiet period.
    pub fn with_debouncer(mut self, debouncer: Debouncer) -> Self {
        self.debouncer = debouncer;
        self
    }

    /// Snapshot of the overlay state.
    pub fn overlay(&self) -> SearchOverlay {
        self.overlay.lock().map(|o| o.clone()).unwrap_or_default()
    }

    pub fn open(&self) {
        self.with_overlay(SearchOverlay::open);
    }

    /// Close the overlay. A pending debounced search is superseded so it
    /// cannot repopulate the cleared results.
    pub fn close(&self) {
        self.debouncer.cancel_pending();
        self.with_overlay(SearchOverlay::close);
    }

    pub fn handle_key(&self, key: &str) -> bool {
        let consumed = self.with_overlay(|o| o.handle_key(key)).unwrap_or(false);
        if consumed {
            self.debouncer.cancel_pending();
        }
        consumed
    }

    pub fn handle_background_click(&self, target_is_overlay: bool) -> bool {
        let consumed = self
            .with_overlay(|o| o.handle_background_click(target_is_overlay))
            .unwrap_or(false);
        if consumed {
            self.debouncer.cancel_pending();
        }
        consumed
    }

    /// Input event: record the value and search once typing pauses.
    pub fn on_input(&self, value: &str) -> JoinHandle<bool> {
        self.with_overlay(|o| o.set_input(value));

        let controller = self.clone();
        let query = value.to_string();
        self.debouncer.call(move || {
            controller.perform_search(&query);
        })
    }

    /// Form submission: search immediately.
    pub fn submit(&self, value: &str) -> RenderedResults {
        self.debouncer.cancel_pending();
        self.with_overlay(|o| o.set_input(value));
        self.perform_search(value)
    }

    /// Run `query` and render into the overlay's results container.
    pub fn perform_search(&self, query: &str) -> RenderedResults {
        let rendered = if query.chars().count() < SearchConfig::MIN_QUERY_LEN {
            RenderedResults::Cleared
        } else {
            let results = match self.engine.read() {
                Ok(engine) => engine.search(query),
                Err(e) => {
                    warn!("Search index lock poisoned: {}", e);
                    Vec::new()
                }
            };
            render_results(&results, query)
        };

        self.with_overlay(|o| o.show_results(&rendered));
        rendered
    }

    /// A result card was clicked: close the overlay, then navigate.
    pub fn select_result(&self, id: &str, kind: EntryKind) -> JoinHandle<NavigationOutcome> {
        debug!("Result selected: {} {}", kind, id);
        self.close();
        self.navigator.spawn_navigate(kind, id)
    }

    fn with_overlay<R>(&self, f: impl FnOnce(&mut SearchOverlay) -> R) -> Option<R> {
        match self.overlay.lock() {
            Ok(mut overlay) => Some(f(&mut overlay)),
            Err(e) => {
                warn!("Search overlay lock poisoned: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavigationConfig;
    use crate::index::build_index;
    use crate::navigation::{HeadlessScroller, NavigationBus, NavigationSignal, Section};
    use serde_json::json;
    use std::time::Duration;
    use tokio::time::Instant;

    struct Harness {
        controller: SearchController,
        scroller: Arc<HeadlessScroller>,
        signals: Arc<Mutex<Vec<(NavigationSignal, Vec<Section>)>>>,
    }

    fn harness() -> Harness {
        let doc = json!({
            "projects": [
                {"id": "p1", "name": "Water Plant", "description": "New plant in Sinai", "category": "infrastructure"}
            ],
            "achievements": [
                {"id": "a1", "title": "Harvest festival", "description": "Olive harvest", "date": "2023-10-01"}
            ]
        });
        let engine = Arc::new(RwLock::new(QueryEngine::with_entries(build_index(Some(&doc)))));
        let bus = Arc::new(NavigationBus::new());
        let scroller = Arc::new(HeadlessScroller::new());

        // Record each signal together with the scroll requests seen so far.
        let signals = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&signals);
        let seen = Arc::clone(&scroller);
        bus.subscribe(move |signal| {
            sink.lock().unwrap().push((signal.clone(), seen.requests()));
        });

        let navigator = Navigator::new(bus, scroller.clone());
        Harness {
            controller: SearchController::new(engine, navigator),
            scroller,
            signals,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_input_searches_last_value_only() {
        let h = harness();
        h.controller.open();

        let first = h.controller.on_input("wa");
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = h.controller.on_input("harv");

        assert!(!first.await.unwrap());
        assert!(second.await.unwrap());

        let overlay = h.controller.overlay();
        assert_eq!(overlay.input(), "harv");
        assert!(overlay.results_html().contains("data-result-id=\"a1\""));
        assert!(!overlay.results_html().contains("data-result-id=\"p1\""));
    }

    #[tokio::test]
    async fn test_short_query_clears_results() {
        let h = harness();
        h.controller.open();

        assert!(matches!(h.controller.submit("water"), RenderedResults::List(_)));
        assert_eq!(h.controller.submit("w"), RenderedResults::Cleared);
        assert_eq!(h.controller.overlay().results_html(), "");
    }

    #[tokio::test]
    async fn test_no_match_renders_empty_state() {
        let h = harness();
        h.controller.open();

        let rendered = h.controller.submit("xyz-nomatch");
        assert!(rendered.is_empty_state());
        assert!(h
            .controller
            .overlay()
            .results_html()
            .contains("search-results__empty"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_project_selection_closes_scrolls_then_signals() {
        let h = harness();
        h.controller.open();
        h.controller.submit("water");

        let started = Instant::now();
        let handle = h.controller.select_result("p1", EntryKind::Project);

        // Overlay closes synchronously, before any navigation.
        let overlay = h.controller.overlay();
        assert!(!overlay.is_open());
        assert_eq!(overlay.results_html(), "");

        let outcome = handle.await.unwrap();
        assert!(started.elapsed() >= NavigationConfig::SCROLL_SETTLE_DELAY);
        assert!(matches!(outcome, NavigationOutcome::Dispatched { reached: 1, .. }));

        let signals = h.signals.lock().unwrap();
        assert_eq!(signals.len(), 1);
        assert_eq!(
            signals[0].0,
            NavigationSignal::SelectProject {
                project_id: "p1".into()
            }
        );
        // The scroll to the map was requested before the signal fired.
        assert_eq!(signals[0].1, vec![Section::Map]);
        assert_eq!(h.scroller.requests(), vec![Section::Map]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_supersedes_pending_search() {
        let h = harness();
        h.controller.open();

        let pending = h.controller.on_input("water");
        assert!(h.controller.handle_key("Escape"));

        assert!(!pending.await.unwrap());
        assert_eq!(h.controller.overlay().results_html(), "");
    }
}
