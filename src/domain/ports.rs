use crate::domain::booking::{BookingId, BookingRecord, BookingRequest, BookingStatus};
use crate::domain::menu::MenuItem;
use crate::domain::order::{OrderEvent, OrderId, OrderRecord, OrderStatus, OrderSubmission};
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Read side of the menu: what customers browse and carts are built from.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Every item, ordered by category (course order). Secondary order is
    /// unspecified but stable.
    async fn list(&self) -> Result<Vec<MenuItem>>;
}

/// Write side of the menu, used by the admin surface.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Adds a new dish. Ids must be unique.
    async fn insert(&self, item: MenuItem) -> Result<()>;
    /// Replaces the dish with the same id; unknown ids are an error.
    async fn update(&self, item: MenuItem) -> Result<()>;
    /// Deletes the dish if present; unknown ids are a no-op.
    async fn remove(&self, id: &str) -> Result<()>;
}

/// Durable destination for finalized orders.
///
/// Idempotency of `insert` is the sink's responsibility: callers invoke it
/// at most once per submission and never re-drive ambiguous outcomes.
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn insert(&self, submission: OrderSubmission) -> Result<OrderId>;
    /// All stored orders, newest first.
    async fn list(&self) -> Result<Vec<OrderRecord>>;
    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<()>;
    /// Push channel for order activity, so dashboards subscribe instead of
    /// polling on a timer.
    fn subscribe(&self) -> broadcast::Receiver<OrderEvent>;
}

/// Durable destination for confirmed reservations.
#[async_trait]
pub trait BookingSink: Send + Sync {
    async fn insert(&self, request: BookingRequest) -> Result<BookingId>;
    /// All stored bookings, newest first.
    async fn list(&self) -> Result<Vec<BookingRecord>>;
    async fn update_status(&self, id: &BookingId, status: BookingStatus) -> Result<()>;
}

pub type CatalogBox = Box<dyn Catalog>;
pub type MenuStoreBox = Box<dyn MenuStore>;
pub type OrderSinkBox = Box<dyn OrderSink>;
pub type BookingSinkBox = Box<dyn BookingSink>;
