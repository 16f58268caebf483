use super::order::{ChargeAmount, Order};
use crate::error::{PaymentError, PersistenceError};
use async_trait::async_trait;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Stores the order, replacing any order with the same id.
    async fn save(&self, order: Order) -> Result<(), PersistenceError>;
    /// Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, PersistenceError>;
    async fn all_orders(&self) -> Result<Vec<Order>, PersistenceError>;
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, amount: ChargeAmount) -> Result<(), PaymentError>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
