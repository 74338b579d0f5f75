use parking_lot::Mutex;
use tracing::debug;

use super::subscribe::{Subscription, Unsubscribeable};

#[derive(Default)]
struct Inner {
    subscriptions: Vec<Subscription>,
    disposed: bool,
}

/// A group of subscriptions that are unsubscribed together.
///
/// Disposal is idempotent. Once disposed, the composite stays disposed and every
/// subscription added afterwards is unsubscribed on the spot.
#[derive(Default)]
pub struct CompositeSubscription {
    inner: Mutex<Inner>,
}

impl CompositeSubscription {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscription to the group.
    ///
    /// Returns `false` if the composite was already disposed, in which case the
    /// subscription has been unsubscribed instead of stored.
    pub fn add(&self, subscription: Subscription) -> bool {
        let mut inner = self.inner.lock();
        if inner.disposed {
            drop(inner);
            subscription.unsubscribe();
            return false;
        }
        inner.subscriptions.push(subscription);
        true
    }

    /// Number of subscriptions currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }

    /// Unsubscribes every held subscription but keeps the composite usable.
    pub fn clear(&self) {
        let drained = std::mem::take(&mut self.inner.lock().subscriptions);
        for s in drained {
            s.unsubscribe();
        }
    }

    /// Unsubscribes every held subscription and marks the composite disposed.
    /// Calling it again does nothing.
    pub fn dispose(&self) {
        let drained = {
            let mut inner = self.inner.lock();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            std::mem::take(&mut inner.subscriptions)
        };

        debug!(count = drained.len(), "disposing subscriptions");
        // Unsubscribe outside the lock, unsubscribe logic may call back into us.
        for s in drained {
            s.unsubscribe();
        }
    }
}

impl Unsubscribeable for CompositeSubscription {
    fn unsubscribe(self) {
        self.dispose();
    }
}
