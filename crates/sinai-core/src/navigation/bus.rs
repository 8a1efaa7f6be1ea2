//! Publish/subscribe mediator for navigation signals.

use super::signal::NavigationSignal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::debug;

type SignalHandler = Arc<dyn Fn(&NavigationSignal) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Typed signal mediator.
///
/// Handlers run synchronously on the publishing task, in subscription order.
#[derive(Default)]
pub struct NavigationBus {
    handlers: RwLock<Vec<(SubscriptionId, SignalHandler)>>,
    next_id: AtomicU64,
}

impl NavigationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every signal.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&NavigationSignal) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.push((id, Arc::new(handler)));
        }
        id
    }

    /// Register a handler receiving only `SelectProject` ids.
    pub fn on_select_project<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.subscribe(move |signal| {
            if let NavigationSignal::SelectProject { project_id } = signal {
                handler(project_id);
            }
        })
    }

    /// Register a handler receiving only `SelectAchievement` ids.
    pub fn on_select_achievement<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.subscribe(move |signal| {
            if let NavigationSignal::SelectAchievement { achievement_id } = signal {
                handler(achievement_id);
            }
        })
    }

    /// Remove a handler. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        match self.handlers.write() {
            Ok(mut handlers) => {
                let before = handlers.len();
                handlers.retain(|(existing, _)| *existing != id);
                handlers.len() != before
            }
            Err(_) => false,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    /// Deliver `signal` to every handler.
    ///
    /// Returns how many handlers were invoked; this is diagnostic only and
    /// says nothing about whether any of them acted on the id.
    pub fn publish(&self, signal: &NavigationSignal) -> usize {
        // Snapshot so handlers may subscribe or unsubscribe re-entrantly.
        let handlers: Vec<SignalHandler> = match self.handlers.read() {
            Ok(handlers) => handlers.iter().map(|(_, h)| Arc::clone(h)).collect(),
            Err(_) => return 0,
        };

        debug!(
            "Publishing {} for {} to {} subscribers",
            signal.event_name(),
            signal.entity_id(),
            handlers.len()
        );

        for handler in &handlers {
            handler(signal);
        }
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_typed_handlers_receive_only_their_variant() {
        let bus = NavigationBus::new();
        let projects = Arc::new(Mutex::new(Vec::new()));
        let achievements = Arc::new(Mutex::new(Vec::new()));

        let p = Arc::clone(&projects);
        bus.on_select_project(move |id| p.lock().unwrap().push(id.to_string()));
        let a = Arc::clone(&achievements);
        bus.on_select_achievement(move |id| a.lock().unwrap().push(id.to_string()));

        bus.publish(&NavigationSignal::SelectProject {
            project_id: "p1".into(),
        });
        bus.publish(&NavigationSignal::SelectAchievement {
            achievement_id: "a1".into(),
        });

        assert_eq!(*projects.lock().unwrap(), vec!["p1"]);
        assert_eq!(*achievements.lock().unwrap(), vec!["a1"]);
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus = NavigationBus::new();
        let reached = bus.publish(&NavigationSignal::SelectProject {
            project_id: "p1".into(),
        });
        assert_eq!(reached, 0);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = NavigationBus::new();
        let hits = Arc::new(Mutex::new(0));

        let h = Arc::clone(&hits);
        let id = bus.subscribe(move |_| *h.lock().unwrap() += 1);
        assert_eq!(bus.subscriber_count(), 1);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));

        bus.publish(&NavigationSignal::SelectProject {
            project_id: "p1".into(),
        });
        assert_eq!(*hits.lock().unwrap(), 0);
    }

    #[test]
    fn test_handler_may_subscribe_while_publishing() {
        let bus = Arc::new(NavigationBus::new());
        let inner = Arc::clone(&bus);
        bus.subscribe(move |_| {
            inner.subscribe(|_| {});
        });

        assert_eq!(
            bus.publish(&NavigationSignal::SelectProject {
                project_id: "p1".into()
            }),
            1
        );
        assert_eq!(bus.subscriber_count(), 2);
    }
}
