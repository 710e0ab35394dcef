//! Cart page: line items, order summary, and checkout.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gamestore_core::{CartLineItem, CurrencyCode, GameId};
use tracing::{Instrument, instrument};

use super::sync::ViewSync;
use crate::cart::{CartReader, CartStore, OrderSummary};
use crate::checkout::{CheckoutSettings, CheckoutState, OrderReceipt, simulate_checkout};
use crate::error::{Result, StorefrontError};

/// The cart page.
///
/// Item list and totals follow the store. Removing items is refused while a
/// checkout is being processed.
#[derive(Debug)]
pub struct CartPage {
    store: CartStore,
    settings: CheckoutSettings,
    items: ViewSync<Vec<CartLineItem>>,
    checkout: Arc<Mutex<CheckoutState>>,
}

impl CartPage {
    #[must_use]
    pub fn mount(store: &CartStore, settings: CheckoutSettings) -> Self {
        Self {
            store: store.clone(),
            settings,
            items: ViewSync::mount(store, CartReader::list),
            checkout: Arc::new(Mutex::new(CheckoutState::Idle)),
        }
    }

    /// Line items currently shown.
    #[must_use]
    pub fn items(&self) -> Vec<CartLineItem> {
        self.items.get()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.with(Vec::is_empty)
    }

    /// Heading such as "2 items in your cart".
    #[must_use]
    pub fn item_count_label(&self) -> String {
        let count = self.items.with(Vec::len);
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} item{plural} in your cart")
    }

    /// Subtotal, tax, and total of the shown items.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        self.items
            .with(|items| OrderSummary::from_items(items, self.settings.tax_rate))
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.settings.currency
    }

    /// Remove one line item.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::CheckoutInProgress` while a payment is processing.
    pub fn remove(&self, id: GameId) -> Result<()> {
        self.ensure_idle()?;
        self.store.remove(id);
        Ok(())
    }

    /// Remove every line item.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::CheckoutInProgress` while a payment is processing.
    pub fn clear(&self) -> Result<()> {
        self.ensure_idle()?;
        self.store.clear();
        Ok(())
    }

    /// Run the simulated checkout.
    ///
    /// Once started the checkout always completes and always empties the
    /// cart. The payment runs on its own task, so dropping the returned
    /// future does not abandon it: the page still reaches `Completed`.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::EmptyCart` if there is nothing to buy,
    /// `StorefrontError::CheckoutInProgress` if a checkout is already running,
    /// or `StorefrontError::CheckoutAborted` if the payment task panicked.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<OrderReceipt> {
        self.begin_checkout()?;

        let processing = ProcessingGuard {
            state: Arc::clone(&self.checkout),
            done: false,
        };
        let store = self.store.clone();
        let settings = self.settings;
        let payment = tokio::spawn(
            async move {
                let mut processing = processing;
                let receipt = simulate_checkout(&store, &settings).await;
                processing.complete(receipt.clone());
                receipt
            }
            .instrument(tracing::Span::current()),
        );

        Ok(payment.await?)
    }

    #[must_use]
    pub fn checkout_state(&self) -> CheckoutState {
        self.lock_checkout().clone()
    }

    /// Hide the order confirmation.
    pub fn dismiss_confirmation(&self) {
        let mut state = self.lock_checkout();
        if matches!(*state, CheckoutState::Completed(_)) {
            *state = CheckoutState::Idle;
        }
    }

    pub fn unmount(&mut self) {
        self.items.unmount();
    }

    fn begin_checkout(&self) -> Result<()> {
        let mut state = self.lock_checkout();
        if state.is_processing() {
            return Err(StorefrontError::CheckoutInProgress);
        }
        if self.store.reader().is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        *state = CheckoutState::Processing;
        Ok(())
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.lock_checkout().is_processing() {
            return Err(StorefrontError::CheckoutInProgress);
        }
        Ok(())
    }

    fn lock_checkout(&self) -> MutexGuard<'_, CheckoutState> {
        lock_state(&self.checkout)
    }
}

fn lock_state(state: &Mutex<CheckoutState>) -> MutexGuard<'_, CheckoutState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the `Processing` state of one payment. Falls back to `Idle` if the
/// payment ends without a receipt, so the page never stays locked.
struct ProcessingGuard {
    state: Arc<Mutex<CheckoutState>>,
    done: bool,
}

impl ProcessingGuard {
    fn complete(&mut self, receipt: OrderReceipt) {
        *lock_state(&self.state) = CheckoutState::Completed(receipt);
        self.done = true;
    }
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        if !self.done {
            tracing::warn!("checkout ended without a receipt");
            *lock_state(&self.state) = CheckoutState::Idle;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use gamestore_core::Price;

    use super::*;

    fn settings() -> CheckoutSettings {
        CheckoutSettings {
            delay: Duration::from_millis(20),
            ..CheckoutSettings::default()
        }
    }

    fn item(id: i32, price: f64) -> CartLineItem {
        CartLineItem::new(GameId::new(id), "Game", Price::new(price).unwrap(), "x").unwrap()
    }

    #[test]
    fn test_page_follows_store() {
        let store = CartStore::in_memory();
        let page = CartPage::mount(&store, settings());
        assert!(page.is_empty());
        assert_eq!(page.item_count_label(), "0 items in your cart");

        store.add(item(4, 69.99));
        assert_eq!(page.item_count_label(), "1 item in your cart");

        store.add(item(5, 42.5));
        let summary = page.summary();
        assert_eq!(summary.total_label(page.currency()), "€123.74");

        page.remove(GameId::new(4)).unwrap();
        assert_eq!(page.items(), vec![item(5, 42.5)]);

        page.clear().unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_rejected() {
        let store = CartStore::in_memory();
        let page = CartPage::mount(&store, settings());

        let result = page.checkout().await;
        assert!(matches!(result, Err(StorefrontError::EmptyCart)));
        assert_eq!(page.checkout_state(), CheckoutState::Idle);
    }

    #[tokio::test]
    async fn test_checkout_completes_and_empties_page() {
        let store = CartStore::in_memory();
        let page = CartPage::mount(&store, settings());
        store.add(item(1, 10.0));

        let receipt = page.checkout().await.unwrap();

        assert!(page.is_empty());
        assert_eq!(receipt.items, vec![item(1, 10.0)]);
        assert_eq!(page.checkout_state(), CheckoutState::Completed(receipt));

        page.dismiss_confirmation();
        assert_eq!(page.checkout_state(), CheckoutState::Idle);
    }

    #[tokio::test]
    async fn test_actions_refused_while_processing() {
        let store = CartStore::in_memory();
        let page = CartPage::mount(&store, settings());
        store.add(item(1, 10.0));

        let (first, second, removal) = tokio::join!(
            page.checkout(),
            async {
                tokio::task::yield_now().await;
                page.checkout().await
            },
            async {
                tokio::task::yield_now().await;
                page.remove(GameId::new(1))
            }
        );

        assert!(first.is_ok());
        assert!(matches!(second, Err(StorefrontError::CheckoutInProgress)));
        assert!(matches!(removal, Err(StorefrontError::CheckoutInProgress)));
        assert!(store.list().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_finishes_after_caller_gives_up() {
        let store = CartStore::in_memory();
        let page = CartPage::mount(
            &store,
            CheckoutSettings {
                delay: Duration::from_millis(50),
                ..CheckoutSettings::default()
            },
        );
        store.add(item(1, 10.0));

        let abandoned = tokio::time::timeout(Duration::from_millis(10), page.checkout()).await;
        assert!(abandoned.is_err());
        assert!(page.checkout_state().is_processing());

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(matches!(page.checkout_state(), CheckoutState::Completed(_)));
        assert!(store.list().is_empty());
        assert!(page.is_empty());
        page.remove(GameId::new(1)).unwrap();
        assert!(matches!(
            page.checkout().await,
            Err(StorefrontError::EmptyCart)
        ));
    }

    #[test]
    fn test_unfinished_payment_releases_page() {
        let state = Arc::new(Mutex::new(CheckoutState::Processing));
        drop(ProcessingGuard {
            state: Arc::clone(&state),
            done: false,
        });
        assert_eq!(*lock_state(&state), CheckoutState::Idle);
    }
}
