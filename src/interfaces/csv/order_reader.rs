use crate::domain::order::Order;
use crate::error::{InterfaceError, Result};
use std::io::Read;

/// Reads orders from a CSV source with an `id, amount` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Order>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes orders.
    ///
    /// A malformed row yields an error for that row only; the rows after it
    /// are still read.
    pub fn orders(self) -> impl Iterator<Item = Result<Order, InterfaceError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(InterfaceError::from))
    }
}
