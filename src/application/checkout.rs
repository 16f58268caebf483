use crate::domain::order::Order;
use crate::domain::ports::{OrderStoreBox, PaymentGatewayBox};
use crate::error::{CheckoutError, PersistenceError, Result};
use tracing::{debug, info};

/// The application service behind the checkout operation.
///
/// `CheckoutService` owns one order store and one payment gateway and runs
/// each checkout through three sequential stages: validate, charge, persist.
/// The first failing stage ends the checkout and its error is returned to the
/// caller unchanged; nothing is retried or rolled back.
pub struct CheckoutService {
    order_store: OrderStoreBox,
    payment_gateway: PaymentGatewayBox,
}

impl CheckoutService {
    /// Creates a new `CheckoutService` instance.
    ///
    /// # Arguments
    ///
    /// * `order_store` - Where checked-out orders are persisted.
    /// * `payment_gateway` - The gateway charged for each order.
    pub fn new(order_store: OrderStoreBox, payment_gateway: PaymentGatewayBox) -> Self {
        Self {
            order_store,
            payment_gateway,
        }
    }

    /// Checks out an order.
    ///
    /// Fails with `InvalidAmount` before touching any port when the amount is
    /// not positive, with `PaymentFailed` when the charge is rejected (the
    /// order is then not saved), and with `PersistFailed` when saving fails.
    /// In the last case the payment has already been taken.
    #[tracing::instrument(
        skip(self, order),
        fields(order_id = %order.id(), amount = order.amount())
    )]
    pub async fn checkout(&self, order: Order) -> Result<()> {
        let amount = order.charge_amount()?;

        debug!("charging payment");
        self.payment_gateway
            .charge(amount)
            .await
            .map_err(CheckoutError::PaymentFailed)?;

        debug!("persisting order");
        self.order_store
            .save(order)
            .await
            .map_err(CheckoutError::PersistFailed)?;

        info!("order checked out");
        Ok(())
    }

    /// Looks up a stored order by id.
    pub async fn find_order(&self, id: &str) -> Result<Option<Order>, PersistenceError> {
        self.order_store.find_by_id(id).await
    }

    /// Returns every stored order.
    pub async fn orders(&self) -> Result<Vec<Order>, PersistenceError> {
        self.order_store.all_orders().await
    }
}
