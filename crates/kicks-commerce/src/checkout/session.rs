//! Checkout session state machine.
//!
//! Steps run cart -> contact -> payment -> confirmation. Forward transitions
//! are gated: contact entry needs a non-empty cart, payment entry needs valid
//! contact fields, and confirmation is only reached through a successful
//! order submission. Backward transitions are unconditional.

use crate::cart::{CartAction, CartState, CartStore};
use crate::checkout::validate::{validate_contact, validate_payment};
use crate::checkout::{CheckoutForm, OrderGateway, OrderReceipt, OrderRequest, OrderTotals};
use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, GatewayError};
use crate::ids::OrderId;
use crate::notify::{NoticeKind, Notifier};
use std::sync::Arc;

/// Steps of the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CheckoutStep {
    /// Cart review.
    Cart,
    /// Contact and shipping information.
    Contact,
    /// Payment details.
    Payment,
    /// Order confirmed; terminal for the session.
    Confirmation,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "cart",
            CheckoutStep::Contact => "contact",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Cart",
            CheckoutStep::Contact => "Contact",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Confirmation => "Confirmation",
        }
    }

    /// 1-indexed position in the flow.
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Contact => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Confirmation => 4,
        }
    }
}

/// Proof that a submission was armed, carrying the request to send.
///
/// Produced by [`CheckoutSession::begin_submit`] and consumed by
/// [`CheckoutSession::resolve_submit`]; the caller owns the await in
/// between, so the session never blocks the event loop.
#[derive(Debug)]
pub struct SubmitTicket {
    epoch: u64,
    request: OrderRequest,
}

impl SubmitTicket {
    /// The request to hand to the order gateway.
    pub fn request(&self) -> &OrderRequest {
        &self.request
    }
}

/// How a submission resolved against the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Order accepted; the session moved to confirmation.
    Confirmed(OrderId),
    /// Order failed; the session stays on the payment step.
    Failed(GatewayError),
    /// The session was dismissed while the call was in flight; the result
    /// was ignored and no state changed.
    Discarded,
}

/// One checkout attempt: the step, the form, and the submission guard.
///
/// Single-threaded and event-driven: every method runs synchronously to
/// completion, and the only asynchronous operation (order submission) is
/// split so the caller drives it. Dismissing the session advances its epoch,
/// which is what invalidates any still-in-flight submission.
pub struct CheckoutSession {
    step: CheckoutStep,
    form: CheckoutForm,
    config: CheckoutConfig,
    notifier: Arc<dyn Notifier>,
    submitting: bool,
    epoch: u64,
    open: bool,
    receipt: Option<OrderReceipt>,
}

impl CheckoutSession {
    /// Create an open session at the cart step.
    pub fn new(config: CheckoutConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            step: CheckoutStep::Cart,
            form: CheckoutForm::default(),
            config,
            notifier,
            submitting: false,
            epoch: 0,
            open: true,
            receipt: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// Mutable access to the form for field edits.
    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Receipt of the confirmed order, while on the confirmation step.
    pub fn receipt(&self) -> Option<&OrderReceipt> {
        self.receipt.as_ref()
    }

    /// Present the checkout surface again after a dismissal.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Request the next step. Gated by the current step's validation.
    pub fn advance(&mut self, cart: &CartState) -> Result<CheckoutStep, CheckoutError> {
        self.ensure_open()?;
        if self.submitting {
            return Err(CheckoutError::SubmissionInFlight);
        }
        let next = match self.step {
            CheckoutStep::Cart => {
                if cart.is_empty() {
                    self.notifier.notify(NoticeKind::Info, "Your cart is empty");
                    return Err(CheckoutError::EmptyCart);
                }
                CheckoutStep::Contact
            }
            CheckoutStep::Contact => {
                let errors = validate_contact(&self.form);
                if !errors.is_empty() {
                    self.notifier
                        .notify(NoticeKind::Error, "Please complete all required fields");
                    return Err(CheckoutError::Validation(errors));
                }
                CheckoutStep::Payment
            }
            // Leaving payment goes through begin_submit/resolve_submit.
            CheckoutStep::Payment => {
                return Err(CheckoutError::InvalidTransition {
                    from: "payment",
                    to: "confirmation",
                })
            }
            CheckoutStep::Confirmation => {
                return Err(CheckoutError::InvalidTransition {
                    from: "confirmation",
                    to: "none",
                })
            }
        };
        tracing::debug!(from = self.step.as_str(), to = next.as_str(), "checkout step");
        self.step = next;
        Ok(next)
    }

    /// Step back. Never validated.
    pub fn back(&mut self) -> Result<CheckoutStep, CheckoutError> {
        self.ensure_open()?;
        let prev = match self.step {
            CheckoutStep::Payment => CheckoutStep::Contact,
            CheckoutStep::Contact => CheckoutStep::Cart,
            CheckoutStep::Cart => {
                return Err(CheckoutError::InvalidTransition {
                    from: "cart",
                    to: "none",
                })
            }
            CheckoutStep::Confirmation => {
                return Err(CheckoutError::InvalidTransition {
                    from: "confirmation",
                    to: "payment",
                })
            }
        };
        tracing::debug!(from = self.step.as_str(), to = prev.as_str(), "checkout step");
        self.step = prev;
        Ok(prev)
    }

    /// Validate the payment fields and arm a submission.
    ///
    /// At most one submission can be in flight: a second call before
    /// [`resolve_submit`](Self::resolve_submit) returns
    /// [`CheckoutError::SubmissionInFlight`] without touching the gateway.
    pub fn begin_submit(&mut self, cart: &CartState) -> Result<SubmitTicket, CheckoutError> {
        self.ensure_open()?;
        if self.step != CheckoutStep::Payment {
            return Err(CheckoutError::InvalidTransition {
                from: self.step.as_str(),
                to: "confirmation",
            });
        }
        if self.submitting {
            return Err(CheckoutError::SubmissionInFlight);
        }
        if cart.is_empty() {
            self.notifier.notify(NoticeKind::Info, "Your cart is empty");
            return Err(CheckoutError::EmptyCart);
        }
        let errors = validate_payment(&self.form);
        if !errors.is_empty() {
            self.notifier
                .notify(NoticeKind::Error, "Please complete payment information");
            return Err(CheckoutError::Validation(errors));
        }

        let totals = OrderTotals::compute(cart, &self.config);
        let request = OrderRequest {
            items: cart.items().to_vec(),
            totals,
            customer: self.form.clone(),
        };
        self.submitting = true;
        tracing::info!(total = %totals.grand_total, items = request.items.len(), "submitting order");
        Ok(SubmitTicket {
            epoch: self.epoch,
            request,
        })
    }

    /// Apply the gateway's answer for an armed submission.
    ///
    /// A result arriving after the session was dismissed (the ticket's epoch
    /// no longer matches) is discarded without touching any state. Failures
    /// keep the session on the payment step for a retry; nothing about the
    /// cart changes on failure.
    pub fn resolve_submit(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<OrderReceipt, GatewayError>,
    ) -> SubmitOutcome {
        if !self.open || ticket.epoch != self.epoch {
            tracing::debug!("discarding submission result for a dismissed session");
            return SubmitOutcome::Discarded;
        }
        self.submitting = false;
        match outcome {
            Ok(receipt) => {
                tracing::info!(order_id = %receipt.order_id, "order confirmed");
                self.step = CheckoutStep::Confirmation;
                let order_id = receipt.order_id.clone();
                self.receipt = Some(receipt);
                SubmitOutcome::Confirmed(order_id)
            }
            Err(error) => {
                tracing::warn!(%error, "order submission failed");
                self.notifier.notify(
                    NoticeKind::Error,
                    "There was an error processing your order. Please try again.",
                );
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Submit through a gateway in one call: arm, await, resolve.
    ///
    /// Callers that want a submission deadline wrap the gateway (see the
    /// storefront demo) and surface expiry as [`GatewayError::TimedOut`].
    pub async fn submit(
        &mut self,
        cart: &CartState,
        gateway: &dyn OrderGateway,
    ) -> Result<OrderId, CheckoutError> {
        let ticket = self.begin_submit(cart)?;
        let outcome = gateway.place_order(ticket.request()).await;
        match self.resolve_submit(ticket, outcome) {
            SubmitOutcome::Confirmed(order_id) => Ok(order_id),
            SubmitOutcome::Failed(error) => Err(CheckoutError::Gateway(error)),
            SubmitOutcome::Discarded => Err(CheckoutError::SessionClosed),
        }
    }

    /// Complete the session once the confirmation hold has elapsed: clear
    /// the cart, discard the form, return to the cart step, and dismiss the
    /// surface. The caller owns the hold timer
    /// ([`CheckoutConfig::confirmation_hold`]).
    pub fn finish(&mut self, store: &mut CartStore) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Confirmation {
            return Err(CheckoutError::InvalidTransition {
                from: self.step.as_str(),
                to: "cart",
            });
        }
        self.notifier
            .notify(NoticeKind::Success, "Order placed successfully!");
        store.dispatch(CartAction::Clear);
        self.reset();
        Ok(())
    }

    /// Close the surface at any step. In-memory form state is discarded, the
    /// persisted cart is untouched, and any in-flight submission result will
    /// be ignored on arrival.
    pub fn dismiss(&mut self) {
        tracing::debug!(step = self.step.as_str(), "checkout dismissed");
        self.reset();
    }

    fn reset(&mut self) {
        self.step = CheckoutStep::Cart;
        self.form.reset();
        self.submitting = false;
        self.open = false;
        self.receipt = None;
        self.epoch += 1;
    }

    fn ensure_open(&self) -> Result<(), CheckoutError> {
        if self.open {
            Ok(())
        } else {
            Err(CheckoutError::SessionClosed)
        }
    }
}

impl std::fmt::Debug for CheckoutSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutSession")
            .field("step", &self.step)
            .field("submitting", &self.submitting)
            .field("open", &self.open)
            .finish()
    }
}
