use crate::domain::booking::{BookingForm, BookingId};
use crate::domain::ports::BookingSinkBox;
use crate::error::Result;

/// Front desk for table reservations: validates the raw form and hands the
/// typed request to the booking sink.
pub struct ReservationDesk {
    sink: BookingSinkBox,
}

impl ReservationDesk {
    pub fn new(sink: BookingSinkBox) -> Self {
        Self { sink }
    }

    /// Validates `form` and stores the reservation.
    ///
    /// Invalid fields are reported without touching the sink.
    pub async fn reserve(&self, form: BookingForm) -> Result<BookingId> {
        let request = form.validate()?;
        let id = self.sink.insert(request).await?;
        tracing::info!(booking = %id, "reservation confirmed");
        Ok(id)
    }
}
