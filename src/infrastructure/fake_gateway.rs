use crate::domain::order::ChargeAmount;
use crate::domain::ports::PaymentGateway;
use crate::error::PaymentError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A payment gateway that never talks to a payment provider.
///
/// Whether it fails is fixed at construction. Accepted charges are recorded
/// and shared between clones.
#[derive(Default, Clone)]
pub struct FakePaymentGateway {
    should_fail: bool,
    charges: Arc<RwLock<Vec<ChargeAmount>>>,
}

impl FakePaymentGateway {
    /// Creates a gateway that accepts every charge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway that rejects every charge.
    pub fn failing() -> Self {
        Self::with_failure(true)
    }

    pub fn with_failure(should_fail: bool) -> Self {
        Self {
            should_fail,
            ..Self::default()
        }
    }

    /// Returns the charges accepted so far, oldest first.
    pub async fn charges(&self) -> Vec<ChargeAmount> {
        self.charges.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for FakePaymentGateway {
    async fn charge(&self, amount: ChargeAmount) -> Result<(), PaymentError> {
        if self.should_fail {
            return Err(PaymentError::GatewayUnavailable);
        }
        self.charges.write().await.push(amount);
        Ok(())
    }
}
