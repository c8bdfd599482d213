//! # Checkout Commands
//!
//! Moves the order through its phases.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pay      Selecting  ──► Confirming   (blocked with EMPTY_ORDER at $0)  │
//! │  confirm  Confirming ──► Completed    (simulated, builds the receipt)   │
//! │  reset    any        ──► Selecting    (quantities cleared)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::commands::Outcome;
use crate::error::AppResult;
use crate::render::render_view;
use crate::state::{ConfigState, SessionState};

/// Starts the (simulated) payment.
pub fn pay(session: &mut SessionState, config: &ConfigState) -> AppResult<Outcome> {
    debug!("pay command");
    session.pay()?;
    Ok(Outcome::Show(render_view(&session.view(), config)))
}

/// Confirms the payment and shows the receipt.
pub fn confirm(session: &mut SessionState, config: &ConfigState) -> AppResult<Outcome> {
    debug!("confirm command");
    let receipt_id = session.confirm()?.id();
    info!(%receipt_id, "Receipt ready");
    Ok(Outcome::Show(render_view(&session.view(), config)))
}

/// Discards the current order and shows an empty form.
pub fn reset(session: &mut SessionState, config: &ConfigState) -> AppResult<Outcome> {
    debug!("reset command");
    session.reset();
    Ok(Outcome::Show(render_view(&session.view(), config)))
}
