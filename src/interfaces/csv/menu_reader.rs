use crate::domain::menu::MenuItem;
use crate::error::{OrderingError, Result};
use std::io::Read;

/// Reads menu items from a CSV source with the columns
/// `id,name,description,price,category`.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<MenuItem>`. It handles whitespace trimming and flexible record
/// lengths automatically; prices are validated (non-negative) as part of
/// deserialization.
pub struct MenuReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MenuReader<R> {
    /// Creates a new `MenuReader` from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes menu items,
    /// so large seed files never need to be fully buffered.
    pub fn items(self) -> impl Iterator<Item = Result<MenuItem>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderingError::from))
    }
}
