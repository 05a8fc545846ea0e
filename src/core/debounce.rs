//! Keyed debouncing on top of tokio tasks
//!
//! Scheduling a task for a key aborts whatever task is still waiting for the
//! same key, so a burst of edits collapses into one run after the quiet period.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

pub struct Debouncer<K> {
    quiet_period: Duration,
    pending: HashMap<K, JoinHandle<()>>,
}

impl<K> Debouncer<K>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
{
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: HashMap::new(),
        }
    }

    /// Run `task` once `key` has been quiet for the configured period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, key: K, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(stale) = self.pending.remove(&key) {
            if !stale.is_finished() {
                trace!("Superseding pending task for {:?}", key);
            }
            stale.abort();
        }

        let quiet_period = self.quiet_period;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            task.await;
        });
        self.pending.insert(key, handle);
    }

    #[cfg(test)]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.get(key).map(|h| !h.is_finished()).unwrap_or(false)
    }
}

impl<K> Drop for Debouncer<K> {
    fn drop(&mut self) {
        for handle in self.pending.values() {
            handle.abort();
        }
    }
}
