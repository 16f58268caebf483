use crate::domain::order::Order;
use crate::domain::ports::OrderStore;
use crate::error::PersistenceError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory order store keyed by order id.
///
/// Clones share the same map, so a caller can keep a handle to the store it
/// hands to a `CheckoutService` and read orders back afterwards.
/// Entries live as long as the last clone.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: Order) -> Result<(), PersistenceError> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id().to_string(), order);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, PersistenceError> {
        let orders = self.orders.read().await;
        Ok(orders.get(id).cloned())
    }

    async fn all_orders(&self) -> Result<Vec<Order>, PersistenceError> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_order_store() {
        let store = InMemoryOrderStore::new();
        let order = Order::new("o-1", 100);

        store.save(order.clone()).await.unwrap();
        let retrieved = store.find_by_id("o-1").await.unwrap().unwrap();
        assert_eq!(retrieved, order);

        assert!(store.find_by_id("o-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_same_id() {
        let store = InMemoryOrderStore::new();
        store.save(Order::new("o-1", 100)).await.unwrap();
        store.save(Order::new("o-1", 250)).await.unwrap();

        let retrieved = store.find_by_id("o-1").await.unwrap().unwrap();
        assert_eq!(retrieved.amount(), 250);
        assert_eq!(store.all_orders().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = InMemoryOrderStore::new();
        let handle = store.clone();

        store.save(Order::new("o-1", 100)).await.unwrap();

        assert!(handle.find_by_id("o-1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_all_orders() {
        let store = InMemoryOrderStore::new();
        assert!(store.all_orders().await.unwrap().is_empty());

        store.save(Order::new("a", 1)).await.unwrap();
        store.save(Order::new("b", 2)).await.unwrap();

        let mut all = store.all_orders().await.unwrap();
        all.sort_by(|x, y| x.id().cmp(y.id()));
        assert_eq!(all, vec![Order::new("a", 1), Order::new("b", 2)]);
    }
}
