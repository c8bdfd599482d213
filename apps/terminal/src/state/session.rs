//! # Session State
//!
//! The one order being filled in, plus the sources of nondeterminism the
//! confirmation needs.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  run() ──creates──► SessionState ──&mut──► command handlers             │
//! │                       ├── Checkout     (bono-core state machine)        │
//! │                       ├── RNG          (thread_rng, seeded in tests)    │
//! │                       └── Clock        (SystemClock, fixed in tests)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The front end is single-threaded, so the session is passed around by
//! `&mut` instead of being wrapped in a lock.

use std::fmt;

use rand::RngCore;
use serde::Serialize;

use bono_core::checkout::Checkout;
use bono_core::timestamp::{Clock, SystemClock};
use bono_core::{CheckoutPhase, CoreResult, Money, QuantityLine, Receipt};

/// State of the running order form.
pub struct SessionState {
    checkout: Checkout,
    rng: Box<dyn RngCore>,
    clock: Box<dyn Clock>,
}

/// Serializable snapshot of everything the front end draws.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView<'a> {
    pub phase: CheckoutPhase,
    pub quantities: Vec<QuantityLine>,
    pub total: Money,
    pub receipt: Option<&'a Receipt>,
}

impl SessionState {
    /// Production session: thread-local RNG, system clock.
    pub fn new() -> Self {
        SessionState::with_sources(Box::new(rand::thread_rng()), Box::new(SystemClock))
    }

    /// Session with explicit randomness and clock (tests, replays).
    pub fn with_sources(rng: Box<dyn RngCore>, clock: Box<dyn Clock>) -> Self {
        SessionState {
            checkout: Checkout::new(),
            rng,
            clock,
        }
    }

    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    pub fn set_quantity(&mut self, item_id: u32, raw_value: &str) -> CoreResult<u32> {
        self.checkout.set_quantity(item_id, raw_value)
    }

    pub fn pay(&mut self) -> CoreResult<()> {
        self.checkout.pay()
    }

    /// Confirms the payment with this session's RNG and clock.
    pub fn confirm(&mut self) -> CoreResult<&Receipt> {
        self.checkout.confirm_with(&mut *self.rng, &*self.clock)
    }

    pub fn reset(&mut self) {
        self.checkout.reset();
    }

    /// Snapshot for rendering or JSON output.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            phase: self.checkout.phase(),
            quantities: self.checkout.cart().lines(),
            total: self.checkout.total(),
            receipt: self.checkout.receipt(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("checkout", &self.checkout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bono_core::timestamp::FixedClock;
    use rand::{rngs::StdRng, SeedableRng};

    fn session() -> SessionState {
        SessionState::with_sources(
            Box::new(StdRng::seed_from_u64(1)),
            Box::new(FixedClock::from_ymd_hms(2024, 1, 1, 9, 0, 0).unwrap()),
        )
    }

    #[test]
    fn test_confirm_uses_injected_clock() {
        let mut session = session();
        session.set_quantity(1, "1").unwrap();
        session.pay().unwrap();

        let receipt = session.confirm().unwrap();
        assert_eq!(receipt.generated_at(), Some("2024-01-01 09:00:00"));
    }

    #[test]
    fn test_same_seed_same_codes() {
        let codes = |mut session: SessionState| {
            session.set_quantity(2, "1").unwrap();
            session.pay().unwrap();
            let code = session.confirm().unwrap().lines()[0].redemption_code.clone();
            code
        };
        assert_eq!(codes(session()), codes(session()));
    }

    #[test]
    fn test_view_snapshot_json() {
        let mut session = session();
        session.set_quantity(1, "2").unwrap();

        let json = serde_json::to_value(session.view()).unwrap();
        assert_eq!(json["phase"], "selecting");
        assert_eq!(json["total"], 2_800_000);
        assert_eq!(json["quantities"].as_array().map(Vec::len), Some(4));
        assert!(json["receipt"].is_null());
    }
}
