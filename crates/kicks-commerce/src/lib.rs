//! Storefront cart and checkout domain logic for the Kicks shop.
//!
//! This crate provides the behavioral core of a small storefront:
//!
//! - **Catalog**: products, categories, and the product read interface
//! - **Cart**: a reducer-driven cart store with subscriptions and derived totals
//! - **Checkout**: the multi-step checkout session, field validation, order totals
//! - **Submission**: the asynchronous order gateway boundary
//!
//! Rendering, routing, and the hosted backend stay outside; the crate talks to
//! them through the [`catalog::ProductSource`], [`checkout::OrderGateway`], and
//! [`notify::Notifier`] traits.
//!
//! # Example
//!
//! ```rust,ignore
//! use kicks_commerce::prelude::*;
//! use std::sync::Arc;
//!
//! let mut store = CartStore::new(Arc::new(NullNotifier));
//! store.add_item(&product);
//!
//! let mut session = CheckoutSession::new(CheckoutConfig::default(), Arc::new(NullNotifier));
//! session.advance(store.state())?;            // cart -> contact
//! session.form_mut().email = "jo@example.com".into();
//! // ... fill the remaining fields, advance to payment, then:
//! let order_id = session.submit(store.state(), &gateway).await?;
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub use config::CheckoutConfig;
pub use error::{CatalogError, CheckoutError, GatewayError};
pub use ids::{OrderId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CheckoutConfig;
    pub use crate::error::{CatalogError, CheckoutError, GatewayError};
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::Money;
    pub use crate::notify::{MemoryNotifier, NoticeKind, Notifier, NullNotifier};

    // Catalog
    pub use crate::catalog::{
        MemoryCatalog, Product, ProductCategory, ProductDraft, ProductPage, ProductSource,
    };

    // Cart
    pub use crate::cart::{reduce, CartAction, CartItem, CartState, CartStore, SubscriptionId};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, CheckoutSession, CheckoutStep, Field, FieldError, MockGateway, OrderGateway,
        OrderReceipt, OrderRequest, OrderTotals, SubmitOutcome, SubmitTicket,
    };
}
