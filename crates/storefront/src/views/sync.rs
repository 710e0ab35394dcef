//! Generic cart-derived view state.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::cart::{CartReader, CartStore, Subscription};

type Derive<T> = Arc<dyn Fn(&CartReader) -> T + Send + Sync>;

/// Local view state kept in line with the persisted cart.
///
/// On [`mount`](Self::mount) the state is derived from a fresh read and a
/// handler is registered that re-derives it on every cart change. The handler
/// is deregistered by [`unmount`](Self::unmount) or when the view is dropped;
/// it only holds a weak reference to the state, so a view that has gone away
/// is never written to.
pub struct ViewSync<T> {
    state: Arc<RwLock<T>>,
    reader: CartReader,
    derive: Derive<T>,
    subscription: Option<Subscription>,
}

impl<T> ViewSync<T>
where
    T: Send + Sync + 'static,
{
    /// Derive the initial state from `store` and subscribe to its changes.
    pub fn mount<F>(store: &CartStore, derive: F) -> Self
    where
        F: Fn(&CartReader) -> T + Send + Sync + 'static,
    {
        let reader = store.reader().clone();
        let derive: Derive<T> = Arc::new(derive);
        let state = Arc::new(RwLock::new(derive(&reader)));

        let subscription = {
            let state = Arc::downgrade(&state);
            let reader = reader.clone();
            let derive = Arc::clone(&derive);
            store.events().subscribe(move || {
                let Some(state) = state.upgrade() else {
                    return;
                };
                let next = derive(&reader);
                *state.write().unwrap_or_else(PoisonError::into_inner) = next;
            })
        };

        Self {
            state,
            reader,
            derive,
            subscription: Some(subscription),
        }
    }

    /// Run `f` against the current state.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read())
    }

    /// Replace the state ahead of the change notification.
    ///
    /// The next notification overwrites it with whatever the store holds.
    pub fn set_optimistic(&self, value: T) {
        *self.write() = value;
    }

    /// Re-derive the state from the store now.
    pub fn refresh(&self) {
        let next = (self.derive)(&self.reader);
        *self.write() = next;
    }

    /// Whether the view still receives change notifications.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop receiving change notifications. The last state is kept.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, T> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> ViewSync<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Copy of the current state.
    #[must_use]
    pub fn get(&self) -> T {
        self.read().clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for ViewSync<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ViewSync")
            .field("state", &*state)
            .field("mounted", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}
