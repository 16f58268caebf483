use crate::domain::order::Order;
use crate::error::InterfaceError;
use std::io::Write;

/// Writes orders as CSV with an `id,amount` header.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the orders sorted by id and flushes the sink.
    pub fn write_orders(&mut self, mut orders: Vec<Order>) -> Result<(), InterfaceError> {
        orders.sort_by(|a, b| a.id().cmp(b.id()));
        for order in &orders {
            self.writer.serialize(order)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_orders_sorted() {
        let mut buf = Vec::new();
        {
            let mut writer = OrderWriter::new(&mut buf);
            writer
                .write_orders(vec![Order::new("o-2", 20), Order::new("o-1", 100)])
                .unwrap();
        }

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "id,amount\no-1,100\no-2,20\n");
    }

    #[test]
    fn test_write_no_orders() {
        let mut buf = Vec::new();
        OrderWriter::new(&mut buf).write_orders(Vec::new()).unwrap();

        // The header comes from the first serialized record.
        assert!(buf.is_empty());
    }
}
