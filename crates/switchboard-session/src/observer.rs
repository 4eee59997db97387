//! Change observers
//!
//! Consumers register a callback and receive the post-mutation snapshot
//! synchronously, once per state-changing mutation.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::session::SessionSnapshot;

pub(crate) type Observer = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct ObserverList {
    observers: RwLock<Vec<(SubscriptionId, Observer)>>,
    next_id: AtomicU64,
}

impl ObserverList {
    pub fn add(&self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, observer));
        id
    }

    pub fn remove(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    /// Call every observer in subscription order.
    ///
    /// The list is copied first so callbacks may subscribe, unsubscribe or
    /// mutate the store without deadlocking.
    pub fn notify(&self, snapshot: &SessionSnapshot) {
        let observers: Vec<Observer> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        tracing::trace!(observers = observers.len(), "Notifying session observers");

        for observer in observers {
            observer(snapshot);
        }
    }
}
