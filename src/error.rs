use thiserror::Error;

/// Failures raised by an [`OrderStore`](crate::domain::ports::OrderStore) adapter.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures raised by a [`PaymentGateway`](crate::domain::ports::PaymentGateway) adapter.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaymentError {
    #[error("gateway unavailable")]
    GatewayUnavailable,
}

/// The stage of a checkout at which it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    Validating,
    Charging,
    Persisting,
}

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
    #[error("payment failed: {0}")]
    PaymentFailed(#[source] PaymentError),
    /// The charge already went through when this is returned.
    #[error("persist failed: {0}")]
    PersistFailed(#[source] PersistenceError),
}

impl CheckoutError {
    pub fn stage(&self) -> CheckoutStage {
        match self {
            CheckoutError::InvalidAmount(_) => CheckoutStage::Validating,
            CheckoutError::PaymentFailed(_) => CheckoutStage::Charging,
            CheckoutError::PersistFailed(_) => CheckoutStage::Persisting,
        }
    }
}

/// Failures of the CSV input/output layer.
#[derive(Error, Debug)]
pub enum InterfaceError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CheckoutError> = std::result::Result<T, E>;
