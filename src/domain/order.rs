use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// A strictly positive amount that may be sent to a payment gateway.
///
/// Building one is the checkout's validation step: an order whose amount
/// cannot be turned into a `ChargeAmount` is never charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChargeAmount(u64);

impl ChargeAmount {
    pub fn new(value: i64) -> Result<Self, CheckoutError> {
        if value > 0 {
            Ok(Self(value.unsigned_abs()))
        } else {
            Err(CheckoutError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for ChargeAmount {
    type Error = CheckoutError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChargeAmount> for u64 {
    fn from(amount: ChargeAmount) -> Self {
        amount.0
    }
}

/// An order submitted for checkout.
///
/// Orders are immutable once built. The amount is not checked here; a
/// non-positive amount is only rejected when the order is checked out.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Order {
    /// Caller-assigned identifier, used as the store key.
    id: String,
    /// Amount to charge, in minor currency units.
    amount: i64,
}

impl Order {
    pub fn new(id: impl Into<String>, amount: i64) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the amount to charge for this order.
    pub fn charge_amount(&self) -> Result<ChargeAmount, CheckoutError> {
        ChargeAmount::new(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_amount_validation() {
        assert_eq!(ChargeAmount::new(1).unwrap().value(), 1);
        assert!(matches!(
            ChargeAmount::new(0),
            Err(CheckoutError::InvalidAmount(0))
        ));
        assert!(matches!(
            ChargeAmount::new(-1),
            Err(CheckoutError::InvalidAmount(-1))
        ));
        assert_eq!(ChargeAmount::new(i64::MAX).unwrap().value(), i64::MAX as u64);
    }

    #[test]
    fn test_order_allows_non_positive_amount_at_construction() {
        let order = Order::new("o-2", 0);
        assert_eq!(order.id(), "o-2");
        assert_eq!(order.amount(), 0);
        assert!(order.charge_amount().is_err());
    }

    #[test]
    fn test_order_json_roundtrip() {
        let order = Order::new("o-1", 100);
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"id":"o-1","amount":100}"#);

        let parsed: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }
}
