//! # Checkout State Machine
//!
//! Owns the cart, the current phase and (once paid) the receipt.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌───────────┐   pay()     ┌────────────┐  confirm()  ┌───────────┐   │
//! │   │ Selecting │ ──────────► │ Confirming │ ──────────► │ Completed │   │
//! │   └───────────┘  total > 0  └────────────┘  builds     └───────────┘   │
//! │     ▲     │                                  Receipt         │          │
//! │     │     └── pay() with total 0: EmptyOrder, no change      │          │
//! │     │                                                        │          │
//! │     └──────────────────────── reset() ───────────────────────┘          │
//! │                                                                         │
//! │  set_quantity() is only accepted while Selecting.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `reset()` goes around the three-state flow: it returns to
//! `Selecting` with every quantity cleared, so a new order never reuses the
//! previous one's quantities.
//!
//! The checkout is a plain value owned by whoever drives the form. There
//! is no global instance.

use rand::Rng;
use tracing::{debug, info};

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::receipt::Receipt;
use crate::timestamp::{Clock, SystemClock};
use crate::types::CheckoutPhase;

/// The order form's state.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    cart: Cart,
    phase: CheckoutPhase,
    receipt: Option<Receipt>,
}

impl Checkout {
    /// Starts a new order: `Selecting`, all quantities zero.
    pub fn new() -> Self {
        Checkout::default()
    }

    #[inline]
    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current order total.
    #[inline]
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// The receipt, once the payment has been confirmed.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Updates one quantity from raw user input.
    ///
    /// ## Returns
    /// The coerced quantity that was stored.
    ///
    /// ## Errors
    /// - `InvalidTransition` outside `Selecting`
    /// - `UnknownItem` for an id outside the catalog
    pub fn set_quantity(&mut self, item_id: u32, raw_value: &str) -> CoreResult<u32> {
        self.require(CheckoutPhase::Selecting, "change quantities")?;

        let quantity = self.cart.set_quantity(item_id, raw_value)?;
        debug!(item_id, raw_value, quantity, total = %self.cart.total(), "Quantity updated");
        Ok(quantity)
    }

    /// Moves to `Confirming`.
    ///
    /// ## Errors
    /// - `EmptyOrder` when the total is zero; the phase stays `Selecting`
    /// - `InvalidTransition` outside `Selecting`
    pub fn pay(&mut self) -> CoreResult<()> {
        self.require(CheckoutPhase::Selecting, "pay")?;

        if self.cart.total().is_zero() {
            debug!("Payment blocked: empty order");
            return Err(CoreError::EmptyOrder);
        }

        self.phase = CheckoutPhase::Confirming;
        info!(total = %self.cart.total(), "Awaiting payment confirmation");
        Ok(())
    }

    /// Confirms the simulated payment using thread-local randomness and the
    /// system clock.
    pub fn confirm(&mut self) -> CoreResult<&Receipt> {
        self.confirm_with(&mut rand::thread_rng(), &SystemClock)
    }

    /// Confirms the simulated payment and builds the receipt.
    ///
    /// There is no failure path for the payment itself; the only error is
    /// calling this outside `Confirming`.
    pub fn confirm_with<R, C>(&mut self, rng: &mut R, clock: &C) -> CoreResult<&Receipt>
    where
        R: Rng + ?Sized,
        C: Clock + ?Sized,
    {
        self.require(CheckoutPhase::Confirming, "confirm payment")?;

        let receipt = Receipt::from_cart(&self.cart, rng, clock);
        info!(
            receipt_id = %receipt.id(),
            lines = receipt.lines().len(),
            total = %receipt.total(),
            "Payment confirmed, receipt generated"
        );

        self.phase = CheckoutPhase::Completed;
        Ok(self.receipt.insert(receipt))
    }

    /// Starts over: back to `Selecting`, quantities cleared, receipt dropped.
    ///
    /// Allowed from any phase.
    pub fn reset(&mut self) {
        self.cart.clear();
        self.receipt = None;
        self.phase = CheckoutPhase::Selecting;
        info!("Order reset");
    }

    fn require(&self, expected: CheckoutPhase, action: &'static str) -> CoreResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                phase: self.phase,
                action,
            })
        }
    }
}
