//! Scroll-then-select sequencing for search result selection.

use super::bus::NavigationBus;
use super::signal::NavigationSignal;
use crate::config::NavigationConfig;
use crate::index::EntryKind;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Page section a selection scrolls to before the widget is signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Map,
    Timeline,
}

impl Section {
    /// Section hosting the widget that consumes `kind` selections.
    pub fn for_kind(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Project => Section::Map,
            EntryKind::Achievement => Section::Timeline,
        }
    }

    /// Element id of the section on the page.
    pub fn element_id(&self) -> &'static str {
        match self {
            Section::Map => NavigationConfig::MAP_SECTION_ID,
            Section::Timeline => NavigationConfig::TIMELINE_SECTION_ID,
        }
    }
}

/// Issues smooth-scroll requests.
pub trait Scroller: Send + Sync {
    /// Request a smooth scroll to `section`.
    ///
    /// Returns `false` when the section is not on the page; the request is
    /// not awaited beyond that.
    fn scroll_to(&self, section: Section) -> bool;
}

/// Scroller for hosts without a rendered page.
///
/// Records every request and treats all sections as present unless marked
/// missing.
#[derive(Debug, Default)]
pub struct HeadlessScroller {
    requests: Mutex<Vec<Section>>,
    missing: Mutex<HashSet<Section>>,
}

impl HeadlessScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `section` as absent from the page.
    pub fn without(self, section: Section) -> Self {
        if let Ok(mut missing) = self.missing.lock() {
            missing.insert(section);
        }
        self
    }

    /// Scroll requests received so far, oldest first.
    pub fn requests(&self) -> Vec<Section> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Scroller for HeadlessScroller {
    fn scroll_to(&self, section: Section) -> bool {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(section);
        }
        self.missing
            .lock()
            .map(|missing| !missing.contains(&section))
            .unwrap_or(true)
    }
}

/// What a navigation attempt did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// The signal was published to `reached` subscribers.
    Dispatched {
        signal: NavigationSignal,
        reached: usize,
    },
    /// The target section is not on the page; nothing was published.
    SectionMissing { section: Section },
}

/// Routes a selected entry to the widget that shows it.
///
/// The scroll request always precedes the signal. The wait in between is a
/// fixed delay, not an acknowledgment that scrolling finished.
#[derive(Clone)]
pub struct Navigator {
    bus: Arc<NavigationBus>,
    scroller: Arc<dyn Scroller>,
    settle_delay: Duration,
}

impl Navigator {
    pub fn new(bus: Arc<NavigationBus>, scroller: Arc<dyn Scroller>) -> Self {
        Self {
            bus,
            scroller,
            settle_delay: NavigationConfig::SCROLL_SETTLE_DELAY,
        }
    }

    /// Override the wait between scroll request and signal.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn bus(&self) -> &Arc<NavigationBus> {
        &self.bus
    }

    /// Scroll to the section for `kind`, wait, then publish the selection.
    pub async fn navigate(&self, kind: EntryKind, id: &str) -> NavigationOutcome {
        let section = Section::for_kind(kind);

        if !self.scroller.scroll_to(section) {
            warn!("Section #{} not found, skipping selection of {}", section.element_id(), id);
            return NavigationOutcome::SectionMissing { section };
        }

        tokio::time::sleep(self.settle_delay).await;

        let signal = NavigationSignal::select(kind, id);
        let reached = self.bus.publish(&signal);
        debug!("Navigated to {} {} ({} subscribers)", kind, id, reached);

        NavigationOutcome::Dispatched { signal, reached }
    }

    /// Run `navigate` on a detached task.
    pub fn spawn_navigate(&self, kind: EntryKind, id: impl Into<String>) -> JoinHandle<NavigationOutcome> {
        let navigator = self.clone();
        let id = id.into();
        tokio::spawn(async move { navigator.navigate(kind, &id).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    /// Scroller that appends to a shared event log.
    struct LoggingScroller(Arc<Mutex<Vec<String>>>);

    impl Scroller for LoggingScroller {
        fn scroll_to(&self, section: Section) -> bool {
            self.0
                .lock()
                .unwrap()
                .push(format!("scroll:{}", section.element_id()));
            true
        }
    }

    fn logging_navigator() -> (Navigator, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let bus = Arc::new(NavigationBus::new());

        let signal_log = Arc::clone(&log);
        bus.subscribe(move |signal| {
            signal_log
                .lock()
                .unwrap()
                .push(format!("{}:{}", signal.event_name(), signal.entity_id()));
        });

        let navigator = Navigator::new(bus, Arc::new(LoggingScroller(Arc::clone(&log))));
        (navigator, log)
    }

    #[tokio::test(start_paused = true)]
    async fn test_project_selection_scrolls_then_signals_after_delay() {
        let (navigator, log) = logging_navigator();
        let started = Instant::now();

        let outcome = navigator.navigate(EntryKind::Project, "p1").await;

        assert!(started.elapsed() >= NavigationConfig::SCROLL_SETTLE_DELAY);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["scroll:map-section", "search:selectProject:p1"]
        );
        assert_eq!(
            outcome,
            NavigationOutcome::Dispatched {
                signal: NavigationSignal::SelectProject {
                    project_id: "p1".into()
                },
                reached: 1
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_signal_not_published_before_delay() {
        let (navigator, log) = logging_navigator();

        let handle = navigator.spawn_navigate(EntryKind::Achievement, "a1");

        tokio::time::sleep(Duration::from_millis(799)).await;
        assert_eq!(*log.lock().unwrap(), vec!["scroll:timeline"]);

        handle.await.unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["scroll:timeline", "search:selectAchievement:a1"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_section_skips_signal() {
        let bus = Arc::new(NavigationBus::new());
        let hits = Arc::new(Mutex::new(0));
        let h = Arc::clone(&hits);
        bus.subscribe(move |_| *h.lock().unwrap() += 1);

        let scroller = Arc::new(HeadlessScroller::new().without(Section::Map));
        let navigator = Navigator::new(bus, scroller.clone());

        let outcome = navigator.navigate(EntryKind::Project, "p1").await;
        assert_eq!(outcome, NavigationOutcome::SectionMissing { section: Section::Map });
        assert_eq!(*hits.lock().unwrap(), 0);
        assert_eq!(scroller.requests(), vec![Section::Map]);

        // The timeline section is still present.
        let outcome = navigator.navigate(EntryKind::Achievement, "a1").await;
        assert!(matches!(outcome, NavigationOutcome::Dispatched { reached: 1, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_settle_delay() {
        let (navigator, _log) = logging_navigator();
        let navigator = navigator.with_settle_delay(Duration::from_millis(50));
        let started = Instant::now();

        navigator.navigate(EntryKind::Project, "p1").await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < NavigationConfig::SCROLL_SETTLE_DELAY);
    }
}
