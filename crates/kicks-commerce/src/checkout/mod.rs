//! Checkout module.
//!
//! The multi-step checkout session, form field validation, order totals,
//! and the order submission boundary.

mod form;
mod gateway;
mod session;
mod totals;
pub mod validate;

pub use form::CheckoutForm;
pub use gateway::{MockGateway, OrderGateway, OrderReceipt, OrderRequest};
pub use session::{CheckoutSession, CheckoutStep, SubmitOutcome, SubmitTicket};
pub use totals::OrderTotals;
pub use validate::{Field, FieldError};
