//! Document stores holding the single persisted `State`.
//!
//! All writes go through `DocumentStore::mutate`. Readers get snapshots and
//! can subscribe to be told about new ones.

mod file;
mod memory;

use std::sync::{Arc, Mutex, Weak};

use crate::error::CountResult;
use crate::state::State;

pub use file::FileStore;
pub use memory::MemoryStore;

pub type Callback = Box<dyn Fn(&State) + Send + Sync>;

pub trait DocumentStore {
    /// Current snapshot of the document.
    fn get(&self) -> CountResult<State>;

    /// Apply `f` to the document, persist it, notify subscribers, and return
    /// the new snapshot.
    fn mutate(&self, f: &mut dyn FnMut(&mut State)) -> CountResult<State>;

    /// Call `callback` with every new snapshot until the returned
    /// `Subscription` is dropped.
    fn subscribe(&self, callback: Callback) -> Subscription;
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: Vec<(u64, Arc<dyn Fn(&State) + Send + Sync>)>,
}

/// Subscriber list shared by the store implementations.
#[derive(Default)]
pub(crate) struct Subscribers {
    registry: Arc<Mutex<Registry>>,
}

impl Subscribers {
    pub(crate) fn add(&self, callback: Callback) -> Subscription {
        let mut registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        let id = registry.next_id;
        registry.next_id += 1;
        registry.callbacks.push((id, Arc::from(callback)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub(crate) fn notify(&self, state: &State) {
        // Callbacks run outside the lock so they may read the store or
        // drop their own subscription.
        let callbacks: Vec<_> = {
            let registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
            registry.callbacks.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };

        for callback in callbacks {
            callback(state);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.registry.lock().unwrap_or_else(|e| e.into_inner()).callbacks.len()
    }
}

/// Handle returned by `DocumentStore::subscribe`. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(|e| e.into_inner());
            registry.callbacks.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notify_reaches_live_subscribers_only() {
        let subscribers = Subscribers::default();
        let hits = Arc::new(AtomicUsize::new(0));

        let first = {
            let hits = Arc::clone(&hits);
            subscribers.add(Box::new(move |_: &State| {
                hits.fetch_add(1, Ordering::SeqCst);
            }))
        };
        let second = {
            let hits = Arc::clone(&hits);
            subscribers.add(Box::new(move |_: &State| {
                hits.fetch_add(10, Ordering::SeqCst);
            }))
        };

        subscribers.notify(&State::default());
        assert_eq!(hits.load(Ordering::SeqCst), 11);

        first.unsubscribe();
        assert_eq!(subscribers.len(), 1);

        subscribers.notify(&State::default());
        assert_eq!(hits.load(Ordering::SeqCst), 21);

        drop(second);
        assert_eq!(subscribers.len(), 0);
    }

    #[test]
    fn subscription_outliving_store_drops_cleanly() {
        let subscribers = Subscribers::default();
        let subscription = subscribers.add(Box::new(|_: &State| {}));
        drop(subscribers);
        drop(subscription);
    }
}
