use crate::domain::cart::{Cart, CartLine};
use crate::domain::menu::MenuItem;
use crate::domain::order::{OrderId, OrderSubmission};
use crate::domain::ports::OrderSinkBox;
use crate::error::{OrderingError, Result, ValidationError};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Session-scoped cart state machine and order submitter.
///
/// The engine owns the cart for one customer session. Callers mutate it
/// through `&self` methods and finalize with [`submit`](CartEngine::submit);
/// at most one submission is in flight at a time, and the cart is only
/// cleared once the sink has confirmed the write.
pub struct CartEngine {
    sink: OrderSinkBox,
    cart: Mutex<Cart>,
    in_flight: AtomicBool,
}

/// Releases the single-flight slot when a submission resolves or its
/// future is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CartEngine {
    pub fn new(sink: OrderSinkBox) -> Self {
        Self {
            sink,
            cart: Mutex::new(Cart::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    fn cart(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds one unit of `item`, merging into an existing line.
    pub fn add_item(&self, item: &MenuItem) {
        self.cart().add(item);
    }

    /// Adjusts the quantity of the line for `id` by `delta`; a resulting
    /// quantity of zero or below removes the line. Unknown ids are ignored.
    pub fn change_quantity(&self, id: &str, delta: i32) {
        self.cart().change_quantity(id, delta);
    }

    /// Drops the line for `id` if present.
    pub fn remove_item(&self, id: &str) {
        self.cart().remove(id);
    }

    /// Exact cart total; zero when the cart is empty.
    pub fn total(&self) -> Decimal {
        self.cart().total()
    }

    /// Current lines in display order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.cart().lines().to_vec()
    }

    /// Total units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.cart().unit_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart().is_empty()
    }

    /// Empties the cart without submitting anything.
    pub fn reset(&self) {
        self.cart().clear();
    }

    /// Finalizes the cart as an order for `customer_name`.
    ///
    /// Validation failures and sink failures leave the cart exactly as it
    /// was; only a confirmed sink write clears it. A second call while a
    /// submission is pending fails with
    /// [`SubmissionInProgress`](OrderingError::SubmissionInProgress) rather
    /// than double-submitting; once the pending call resolves either way,
    /// the next submit is accepted.
    pub async fn submit(&self, customer_name: &str) -> Result<OrderId> {
        if customer_name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(OrderingError::SubmissionInProgress);
        }
        let _guard = InFlightGuard(&self.in_flight);

        // Snapshot under the lock, then release it before the sink call.
        let submission = {
            let cart = self.cart();
            if cart.is_empty() {
                return Err(ValidationError::EmptyCart.into());
            }
            OrderSubmission::from_cart(customer_name, &cart)
        };

        match self.sink.insert(submission).await {
            Ok(id) => {
                self.cart().clear();
                tracing::info!(order = %id, customer = customer_name, "order placed");
                Ok(id)
            }
            Err(cause) => {
                tracing::warn!(error = %cause, "order submission failed, cart kept");
                Err(OrderingError::Submission(Box::new(cause)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::{Category, Price};
    use crate::domain::order::{OrderEvent, OrderRecord, OrderStatus};
    use crate::domain::ports::OrderSink;
    use crate::infrastructure::in_memory::InMemoryOrderSink;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tokio::sync::{Semaphore, broadcast, mpsc};

    fn dish(id: &str, price: Decimal) -> MenuItem {
        MenuItem {
            id: id.to_owned(),
            name: id.to_uppercase(),
            description: String::new(),
            price: Price::new(price).unwrap(),
            category: Category::MainCourse,
        }
    }

    /// Sink that always fails, for exercising the failure path.
    struct FailingSink;

    #[async_trait]
    impl OrderSink for FailingSink {
        async fn insert(&self, _submission: OrderSubmission) -> Result<OrderId> {
            Err(OrderingError::Storage(Box::new(std::io::Error::other(
                "sink offline",
            ))))
        }

        async fn list(&self) -> Result<Vec<OrderRecord>> {
            Ok(Vec::new())
        }

        async fn update_status(&self, id: &OrderId, _status: OrderStatus) -> Result<()> {
            Err(OrderingError::NotFound(id.to_string()))
        }

        fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
            broadcast::channel(1).1
        }
    }

    /// Sink whose `insert` blocks until a permit is released, and reports
    /// on `entered` once the call is underway.
    struct GatedSink {
        entered: mpsc::UnboundedSender<()>,
        gate: Arc<Semaphore>,
        inner: InMemoryOrderSink,
    }

    #[async_trait]
    impl OrderSink for GatedSink {
        async fn insert(&self, submission: OrderSubmission) -> Result<OrderId> {
            let _ = self.entered.send(());
            let _permit = self.gate.acquire().await.expect("gate closed");
            self.inner.insert(submission).await
        }

        async fn list(&self) -> Result<Vec<OrderRecord>> {
            self.inner.list().await
        }

        async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<()> {
            self.inner.update_status(id, status).await
        }

        fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
            self.inner.subscribe()
        }
    }

    #[tokio::test]
    async fn test_submit_snapshot_and_clear() {
        let sink = InMemoryOrderSink::new();
        let engine = CartEngine::new(Box::new(sink.clone()));

        engine.add_item(&dish("a", dec!(120.00)));
        engine.add_item(&dish("b", dec!(85.00)));
        engine.add_item(&dish("b", dec!(85.00)));
        assert_eq!(engine.total(), dec!(290.00));

        let id = engine.submit("Ravi").await.unwrap();

        assert!(engine.is_empty());
        assert_eq!(engine.total(), Decimal::ZERO);

        let orders = sink.list().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, id);
        assert_eq!(orders[0].total, dec!(290.00));
        assert_eq!(orders[0].lines.len(), 2);
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_submit_empty_name_keeps_cart() {
        let engine = CartEngine::new(Box::new(InMemoryOrderSink::new()));
        engine.add_item(&dish("a", dec!(10.0)));
        let before = engine.lines();

        let err = engine.submit("").await.unwrap_err();
        assert!(matches!(
            err,
            OrderingError::Validation(ValidationError::EmptyName)
        ));
        assert_eq!(engine.lines(), before);
    }

    #[tokio::test]
    async fn test_submit_empty_cart() {
        let engine = CartEngine::new(Box::new(InMemoryOrderSink::new()));

        let err = engine.submit("Alice").await.unwrap_err();
        assert!(matches!(
            err,
            OrderingError::Validation(ValidationError::EmptyCart)
        ));
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_cart_and_allows_retry() {
        let engine = CartEngine::new(Box::new(FailingSink));
        engine.add_item(&dish("a", dec!(120.00)));
        engine.add_item(&dish("b", dec!(85.00)));
        let before = engine.lines();

        let err = engine.submit("Ravi").await.unwrap_err();
        assert!(matches!(err, OrderingError::Submission(_)));
        assert_eq!(engine.lines(), before);
        assert_eq!(engine.total(), dec!(205.00));

        // The failed attempt released the single-flight slot.
        let err = engine.submit("Ravi").await.unwrap_err();
        assert!(matches!(err, OrderingError::Submission(_)));
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_rejected() {
        let (entered, mut entered_rx) = mpsc::unbounded_channel();
        let gate = Arc::new(Semaphore::new(0));
        let sink = GatedSink {
            entered,
            gate: Arc::clone(&gate),
            inner: InMemoryOrderSink::new(),
        };
        let engine = Arc::new(CartEngine::new(Box::new(sink)));
        engine.add_item(&dish("a", dec!(10.0)));

        let first = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.submit("Ravi").await })
        };
        // Wait until the first submission is inside the sink call.
        entered_rx.recv().await.unwrap();

        let err = engine.submit("Ravi").await.unwrap_err();
        assert!(matches!(err, OrderingError::SubmissionInProgress));

        gate.add_permits(1);
        let id = first.await.unwrap().unwrap();
        assert!(!id.0.is_empty());
        assert!(engine.is_empty());

        // A new submission is accepted after the first resolved.
        engine.add_item(&dish("b", dec!(5.0)));
        gate.add_permits(1);
        engine.submit("Ravi").await.unwrap();
    }
}
