//! Application layer containing the checkout orchestration.
//!
//! This module defines the `CheckoutService`, which composes the order store
//! and payment gateway ports into the single checkout operation.

pub mod checkout;
