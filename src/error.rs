use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrderingError>;

/// Checks that gate order submission. Local and recoverable: the caller
/// corrects the input and submits again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("customer name must not be empty")]
    EmptyName,
    #[error("cannot submit an empty cart")]
    EmptyCart,
}

/// Per-field reservation form failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("contact number must not be empty")]
    EmptyContact,
    #[error("table number must be a positive integer")]
    InvalidTable,
    #[error("booking date must be YYYY-MM-DD")]
    InvalidDate,
    #[error("booking time must be HH:MM")]
    InvalidTime,
}

#[derive(Error, Debug)]
pub enum OrderingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a submission for this cart is already in flight")]
    SubmissionInProgress,
    /// The sink rejected or failed a submission. The cart is left intact
    /// so the caller can retry once the cause is resolved.
    #[error("order submission failed: {0}")]
    Submission(#[source] Box<OrderingError>),
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error("operation requires an admin session")]
    Unauthorized,
    #[error("no such record: {0}")]
    NotFound(String),
    #[error("invalid menu item: {0}")]
    InvalidMenuItem(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
