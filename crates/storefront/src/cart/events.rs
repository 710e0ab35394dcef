//! Cart change notifications.
//!
//! A single broadcast channel (`cartUpdated`) with no payload. Any component
//! that shows cart-dependent state subscribes here and re-reads the store when
//! notified; the component that performed the mutation does not need to know
//! who is listening.

use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Name of the change event, used in log output.
pub const CART_UPDATED: &str = "cartUpdated";

type Handler = Arc<dyn Fn() + Send + Sync>;

thread_local! {
    // Registries with a publish in progress on this thread.
    static PUBLISHING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.handlers.iter().any(|(handler_id, _)| *handler_id == id)
    }
}

/// Process-wide publish/subscribe channel for cart changes.
///
/// Cheaply cloneable; clones share the same subscriber list.
#[derive(Clone, Default)]
pub struct CartEvents {
    registry: Arc<Mutex<Registry>>,
}

impl CartEvents {
    /// Create a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` to run on every future publish.
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped. Handlers must only read; calling a mutating
    /// cart operation from a handler is refused at publish time.
    #[must_use = "dropping the subscription unsubscribes the handler"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));
        drop(registry);

        tracing::trace!(subscription_id = id, "subscribed to {CART_UPDATED}");
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Invoke every registered handler, in registration order, before returning.
    ///
    /// Handlers removed by an earlier handler in the same round are skipped;
    /// handlers added during the round first run on the next publish. A
    /// publish on this channel issued from inside one of its own handlers is
    /// dropped; publishing a different channel from a handler is allowed.
    ///
    /// Returns the number of handlers invoked.
    pub fn publish(&self) -> usize {
        let Some(_guard) = PublishGuard::enter(Arc::as_ptr(&self.registry).addr()) else {
            tracing::warn!("nested {CART_UPDATED} publish from a handler ignored");
            return 0;
        };

        let snapshot: Vec<(u64, Handler)> = self.lock().handlers.clone();

        let mut delivered = 0;
        for (id, handler) in &snapshot {
            if !self.lock().contains(*id) {
                continue;
            }
            handler();
            delivered += 1;
        }

        tracing::debug!(delivered, "published {CART_UPDATED}");
        delivered
    }

    /// Number of currently registered handlers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().handlers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CartEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartEvents")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Marks one registry as publishing on the current thread; cleared on drop,
/// including unwinds.
struct PublishGuard {
    registry: usize,
}

impl PublishGuard {
    /// Returns `None` if `registry` is already publishing on this thread.
    fn enter(registry: usize) -> Option<Self> {
        PUBLISHING.with(|publishing| {
            let mut publishing = publishing.borrow_mut();
            if publishing.contains(&registry) {
                return None;
            }
            publishing.push(registry);
            Some(Self { registry })
        })
    }
}

impl Drop for PublishGuard {
    fn drop(&mut self) {
        PUBLISHING.with(|publishing| {
            publishing
                .borrow_mut()
                .retain(|registry| *registry != self.registry);
        });
    }
}

/// Handle for one registered handler.
///
/// Deregisters exactly that handler when unsubscribed or dropped.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Deregister the handler.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Whether the handler is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(self.id)
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // The handler is dropped after the lock is released, in case it owns
        // subscriptions of its own.
        let removed = {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry
                .handlers
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| registry.handlers.remove(index))
        };
        if removed.is_some() {
            tracing::trace!(subscription_id = self.id, "unsubscribed from {CART_UPDATED}");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_publish_with_no_subscribers() {
        let events = CartEvents::new();
        assert_eq!(events.publish(), 0);
    }

    #[test]
    fn test_each_subscriber_called_once() {
        let events = CartEvents::new();
        let (first, first_handler) = counter();
        let (second, second_handler) = counter();
        let _a = events.subscribe(first_handler);
        let _b = events.subscribe(second_handler);

        assert_eq!(events.publish(), 2);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let events = CartEvents::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let subscriptions: Vec<Subscription> = (0..3)
            .map(|n| {
                let order = Arc::clone(&order);
                events.subscribe(move || order.lock().unwrap().push(n))
            })
            .collect();

        events.publish();
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
        drop(subscriptions);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_handler() {
        let events = CartEvents::new();
        let (kept, kept_handler) = counter();
        let (removed, removed_handler) = counter();
        let _kept = events.subscribe(kept_handler);
        let removed_sub = events.subscribe(removed_handler);

        removed_sub.unsubscribe();
        events.publish();

        assert_eq!(kept.load(Ordering::SeqCst), 1);
        assert_eq!(removed.load(Ordering::SeqCst), 0);
        assert_eq!(events.subscriber_count(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let events = CartEvents::new();
        let (count, handler) = counter();
        {
            let subscription = events.subscribe(handler);
            assert!(subscription.is_active());
        }
        events.publish();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(events.subscriber_count(), 0);
    }

    #[test]
    fn test_clones_share_subscribers() {
        let events = CartEvents::new();
        let (count, handler) = counter();
        let _sub = events.subscribe(handler);

        events.clone().publish();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_nested_publish_is_ignored() {
        let events = CartEvents::new();
        let (count, handler) = counter();
        let inner = events.clone();
        let nested_result = Arc::new(AtomicUsize::new(usize::MAX));
        let nested_seen = Arc::clone(&nested_result);

        let _reentrant = events.subscribe(move || {
            nested_seen.store(inner.publish(), Ordering::SeqCst);
        });
        let _counter = events.subscribe(handler);

        assert_eq!(events.publish(), 2);
        assert_eq!(nested_result.load(Ordering::SeqCst), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // The guard is released once the outer publish returns.
        assert_eq!(events.publish(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_handler_may_publish_another_channel() {
        let cart = CartEvents::new();
        let wishlist = CartEvents::new();
        let (count, handler) = counter();
        let _wishlist_sub = wishlist.subscribe(handler);

        let forwarded = Arc::new(AtomicUsize::new(0));
        let forwarded_seen = Arc::clone(&forwarded);
        let target = wishlist.clone();
        let _cart_sub = cart.subscribe(move || {
            forwarded_seen.store(target.publish(), Ordering::SeqCst);
        });

        assert_eq!(cart.publish(), 1);
        assert_eq!(forwarded.load(Ordering::SeqCst), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_nested_publish_back_to_origin_is_ignored() {
        let cart = CartEvents::new();
        let wishlist = CartEvents::new();
        let (count, handler) = counter();
        let _cart_counter = cart.subscribe(handler);

        let back = cart.clone();
        let _wishlist_sub = wishlist.subscribe(move || {
            back.publish();
        });
        let forward = wishlist.clone();
        let _cart_sub = cart.subscribe(move || {
            forward.publish();
        });

        assert_eq!(cart.publish(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
