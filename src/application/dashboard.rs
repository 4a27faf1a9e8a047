use crate::domain::booking::{BookingId, BookingRecord, BookingStatus};
use crate::domain::menu::MenuItem;
use crate::domain::order::{OrderId, OrderRecord, OrderStatus};
use crate::domain::ports::{BookingSinkBox, MenuStoreBox, OrderSinkBox};
use crate::domain::session::Session;
use crate::error::{OrderingError, Result};
use rust_decimal::Decimal;

/// Admin operations over orders, bookings, and the menu.
///
/// Every operation takes the caller's [`Session`]; non-admin sessions are
/// rejected before any port is touched. Live updates come from the order
/// sink's subscription channel, not from this service.
pub struct Dashboard {
    orders: OrderSinkBox,
    bookings: BookingSinkBox,
    menu: MenuStoreBox,
}

impl Dashboard {
    pub fn new(orders: OrderSinkBox, bookings: BookingSinkBox, menu: MenuStoreBox) -> Self {
        Self {
            orders,
            bookings,
            menu,
        }
    }

    fn authorize(session: &Session) -> Result<()> {
        if session.is_admin() {
            Ok(())
        } else {
            Err(OrderingError::Unauthorized)
        }
    }

    /// All orders, newest first.
    pub async fn orders(&self, session: &Session) -> Result<Vec<OrderRecord>> {
        Self::authorize(session)?;
        self.orders.list().await
    }

    /// All bookings, newest first.
    pub async fn bookings(&self, session: &Session) -> Result<Vec<BookingRecord>> {
        Self::authorize(session)?;
        self.bookings.list().await
    }

    /// Exact sum of every stored order's total, regardless of status.
    pub async fn total_revenue(&self, session: &Session) -> Result<Decimal> {
        Self::authorize(session)?;
        let orders = self.orders.list().await?;
        Ok(orders.iter().map(|order| order.total).sum())
    }

    pub async fn set_order_status(
        &self,
        session: &Session,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<()> {
        Self::authorize(session)?;
        self.orders.update_status(id, status).await?;
        tracing::debug!(order = %id, ?status, "order status updated");
        Ok(())
    }

    pub async fn set_booking_status(
        &self,
        session: &Session,
        id: &BookingId,
        status: BookingStatus,
    ) -> Result<()> {
        Self::authorize(session)?;
        self.bookings.update_status(id, status).await?;
        tracing::debug!(booking = %id, ?status, "booking status updated");
        Ok(())
    }

    pub async fn add_dish(&self, session: &Session, item: MenuItem) -> Result<()> {
        Self::authorize(session)?;
        self.menu.insert(item).await
    }

    pub async fn update_dish(&self, session: &Session, item: MenuItem) -> Result<()> {
        Self::authorize(session)?;
        self.menu.update(item).await
    }

    pub async fn remove_dish(&self, session: &Session, id: &str) -> Result<()> {
        Self::authorize(session)?;
        self.menu.remove(id).await
    }
}
