//! Error types.

use crate::checkout::FieldError;
use crate::ids::ProductId;
use thiserror::Error;

/// Errors raised by the checkout session.
///
/// Every variant is recoverable: control returns to the step where the error
/// occurred and the user corrects or retries.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// The cart has no items, so checkout cannot leave the cart step.
    #[error("Cart is empty")]
    EmptyCart,

    /// One or more form fields failed validation.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The requested step change is not part of the flow.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// A submission is already in flight for this session.
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// The checkout surface has been dismissed.
    #[error("Checkout session is closed")]
    SessionClosed,

    /// The order backend rejected or failed the submission.
    #[error("Order submission failed: {0}")]
    Gateway(#[from] GatewayError),
}

impl CheckoutError {
    /// The field errors carried by a validation failure, if any.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CheckoutError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

/// Errors returned by the order submission backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend refused the order.
    #[error("Order was declined: {0}")]
    Declined(String),

    /// No response within the configured submission deadline.
    #[error("Order submission timed out")]
    TimedOut,

    /// The backend could not be reached.
    #[error("Order backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by the product catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product with the given id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A create/update payload failed validation.
    #[error("Invalid product draft: {0}")]
    InvalidDraft(String),

    /// A search query failed validation.
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}
