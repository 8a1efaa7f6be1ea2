//! Trailing-edge debouncing on tokio timers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Coalesces rapid calls so only the last one within `wait` runs.
///
/// Each call supersedes the pending one; the superseded task still wakes
/// up but finds a newer generation and does nothing. Clones share state.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedule `action` to run after the quiet period.
    ///
    /// The handle resolves to `true` if the action ran and `false` if a
    /// later call superseded it.
    pub fn call<F>(&self, action: F) -> JoinHandle<bool>
    where
        F: FnOnce() + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current = Arc::clone(&self.generation);
        let wait = self.wait;

        tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            if current.load(Ordering::SeqCst) != generation {
                return false;
            }
            action();
            true
        })
    }

    /// Supersede any pending call without scheduling a new one.
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_call_in_window_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let ran = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for value in ["w", "wa", "wat"] {
            let ran = Arc::clone(&ran);
            handles.push(debouncer.call(move || ran.lock().unwrap().push(value)));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        let mut outcomes = Vec::new();
        for handle in handles {
            outcomes.push(handle.await.unwrap());
        }

        assert_eq!(outcomes, vec![false, false, true]);
        assert_eq!(*ran.lock().unwrap(), vec!["wat"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_separated_by_quiet_period_both_run() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let count = Arc::new(Mutex::new(0));

        let c = Arc::clone(&count);
        assert!(debouncer.call(move || *c.lock().unwrap() += 1).await.unwrap());
        let c = Arc::clone(&count);
        assert!(debouncer.call(move || *c.lock().unwrap() += 1).await.unwrap());

        assert_eq!(*count.lock().unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let handle = debouncer.call(|| panic!("superseded call must not run"));
        debouncer.cancel_pending();
        assert!(!handle.await.unwrap());
    }
}
