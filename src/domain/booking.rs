use crate::error::BookingError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier minted by the booking sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub String);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A reservation form exactly as entered, before any validation.
///
/// Every field is a raw string; [`validate`](BookingForm::validate) is the
/// only way to turn it into something the booking sink accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub customer_name: String,
    pub table_no: String,
    pub date: String,
    pub time: String,
    pub contact: String,
}

impl BookingForm {
    /// Checks every field and produces a typed reservation request.
    ///
    /// Dates are `YYYY-MM-DD` and times `HH:MM`, matching what the
    /// reservation page's date and time inputs produce.
    pub fn validate(self) -> Result<BookingRequest, BookingError> {
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(BookingError::EmptyName);
        }
        let contact = self.contact.trim();
        if contact.is_empty() {
            return Err(BookingError::EmptyContact);
        }
        let table_no: u32 = self
            .table_no
            .trim()
            .parse()
            .map_err(|_| BookingError::InvalidTable)?;
        if table_no == 0 {
            return Err(BookingError::InvalidTable);
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate)?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| BookingError::InvalidTime)?;

        Ok(BookingRequest {
            customer_name: customer_name.to_owned(),
            table_no,
            date,
            time,
            contact: contact.to_owned(),
        })
    }
}

/// A validated reservation ready for the booking sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub table_no: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub contact: String,
}

/// A reservation as the sink stores it. Bookings enter confirmed and can
/// later be cancelled from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    pub customer_name: String,
    pub table_no: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub contact: String,
    pub status: BookingStatus,
}
