use crate::domain::order::Order;
use crate::domain::ports::OrderStore;
use crate::error::PersistenceError;
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing orders.
pub const CF_ORDERS: &str = "orders";

impl From<rocksdb::Error> for PersistenceError {
    fn from(err: rocksdb::Error) -> Self {
        PersistenceError::Backend(Box::new(err))
    }
}

/// A persistent order store backed by RocksDB.
///
/// Orders are keyed by the UTF-8 bytes of their id and stored as JSON in the
/// `orders` column family.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbOrderStore {
    db: Arc<DB>,
}

impl RocksDbOrderStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the `orders` column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_orders = ColumnFamilyDescriptor::new(CF_ORDERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_orders])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn orders_cf(&self) -> Result<&ColumnFamily, PersistenceError> {
        self.db
            .cf_handle(CF_ORDERS)
            .ok_or_else(|| PersistenceError::Internal("Orders column family not found".to_string()))
    }
}

#[async_trait]
impl OrderStore for RocksDbOrderStore {
    async fn save(&self, order: Order) -> Result<(), PersistenceError> {
        let cf = self.orders_cf()?;
        let value = serde_json::to_vec(&order)?;
        self.db.put_cf(cf, order.id().as_bytes(), value)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, PersistenceError> {
        let cf = self.orders_cf()?;
        match self.db.get_cf(cf, id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn all_orders(&self) -> Result<Vec<Order>, PersistenceError> {
        let cf = self.orders_cf()?;
        let mut orders = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            orders.push(serde_json::from_slice(&value)?);
        }
        Ok(orders)
    }
}
