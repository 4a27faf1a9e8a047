use crate::domain::booking::{BookingId, BookingRecord, BookingRequest, BookingStatus};
use crate::domain::menu::MenuItem;
use crate::domain::order::{OrderEvent, OrderId, OrderRecord, OrderStatus, OrderSubmission};
use crate::domain::ports::{BookingSink, Catalog, MenuStore, OrderSink};
use crate::error::{OrderingError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, broadcast};

/// Event channel capacity; slow subscribers lag and drop oldest events.
const EVENT_CAPACITY: usize = 64;

/// In-memory menu backing both the customer catalog and the admin store.
///
/// `Clone` shares the underlying items, so the browsing side and the admin
/// side can hold separate boxes over the same menu.
#[derive(Default, Clone)]
pub struct InMemoryMenu {
    items: Arc<RwLock<Vec<MenuItem>>>,
}

impl InMemoryMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a menu from a batch of items, e.g. a parsed seed file.
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl Catalog for InMemoryMenu {
    async fn list(&self) -> Result<Vec<MenuItem>> {
        let items = self.items.read().await;
        let mut listed = items.clone();
        // Stable sort: insertion order survives within a category.
        listed.sort_by_key(|item| item.category);
        Ok(listed)
    }
}

#[async_trait]
impl MenuStore for InMemoryMenu {
    async fn insert(&self, item: MenuItem) -> Result<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(OrderingError::InvalidMenuItem(format!(
                "duplicate id {}",
                item.id
            )));
        }
        items.push(item);
        Ok(())
    }

    async fn update(&self, item: MenuItem) -> Result<()> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                *existing = item;
                Ok(())
            }
            None => Err(OrderingError::NotFound(item.id)),
        }
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.items.write().await.retain(|item| item.id != id);
        Ok(())
    }
}

/// In-memory order sink with a broadcast feed of order activity.
///
/// Ids are minted from a shared counter; `Clone` shares both the stored
/// orders and the event channel.
#[derive(Clone)]
pub struct InMemoryOrderSink {
    orders: Arc<RwLock<Vec<OrderRecord>>>,
    next_id: Arc<AtomicU64>,
    events: broadcast::Sender<OrderEvent>,
}

impl Default for InMemoryOrderSink {
    fn default() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            events,
        }
    }
}

impl InMemoryOrderSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderSink for InMemoryOrderSink {
    async fn insert(&self, submission: OrderSubmission) -> Result<OrderId> {
        let id = OrderId(format!(
            "order-{}",
            self.next_id.fetch_add(1, Ordering::Relaxed)
        ));
        let record = OrderRecord {
            id: id.clone(),
            customer_name: submission.customer_name,
            lines: submission.lines,
            total: submission.total,
            placed_at: Utc::now(),
            status: submission.status,
        };
        self.orders.write().await.push(record.clone());
        // Nobody subscribed is fine.
        let _ = self.events.send(OrderEvent::Placed(record));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<OrderRecord>> {
        let orders = self.orders.read().await;
        // Insertion order is chronological; newest first for dashboards.
        Ok(orders.iter().rev().cloned().collect())
    }

    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<()> {
        let mut orders = self.orders.write().await;
        let record = orders
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| OrderingError::NotFound(id.to_string()))?;
        record.status = status;
        let _ = self.events.send(OrderEvent::StatusChanged {
            id: id.clone(),
            status,
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.events.subscribe()
    }
}

/// In-memory booking sink. Bookings are stored confirmed, matching the
/// reservation flow.
#[derive(Clone)]
pub struct InMemoryBookingSink {
    bookings: Arc<RwLock<Vec<BookingRecord>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for InMemoryBookingSink {
    fn default() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl InMemoryBookingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingSink for InMemoryBookingSink {
    async fn insert(&self, request: BookingRequest) -> Result<BookingId> {
        let id = BookingId(format!(
            "booking-{}",
            self.next_id.fetch_add(1, Ordering::Relaxed)
        ));
        let record = BookingRecord {
            id: id.clone(),
            customer_name: request.customer_name,
            table_no: request.table_no,
            date: request.date,
            time: request.time,
            contact: request.contact,
            status: BookingStatus::Confirmed,
        };
        self.bookings.write().await.push(record);
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<BookingRecord>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().rev().cloned().collect())
    }

    async fn update_status(&self, id: &BookingId, status: BookingStatus) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        let record = bookings
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| OrderingError::NotFound(id.to_string()))?;
        record.status = status;
        Ok(())
    }
}
