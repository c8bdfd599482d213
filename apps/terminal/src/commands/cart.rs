//! # Cart Commands
//!
//! Quantity changes and read-only views.
//!
//! ```text
//!   set <#> <cantidad> ──► Checkout::set_quantity ──► re-render table
//!   show               ──► render current phase
//!   json               ──► SessionView as pretty JSON
//! ```

use tracing::debug;

use crate::commands::Outcome;
use crate::error::AppResult;
use crate::render::render_view;
use crate::state::{ConfigState, SessionState};

/// Updates one quantity and redraws the table.
///
/// Bad quantity text is coerced by the core, so the only failures are an
/// unknown product number or a phase that no longer accepts changes.
pub fn set_quantity(
    session: &mut SessionState,
    config: &ConfigState,
    item_id: u32,
    raw_value: &str,
) -> AppResult<Outcome> {
    debug!(item_id, raw_value, "set_quantity command");
    session.set_quantity(item_id, raw_value)?;
    Ok(Outcome::Show(render_view(&session.view(), config)))
}

/// Redraws the current screen.
pub fn show(session: &SessionState, config: &ConfigState) -> AppResult<Outcome> {
    Ok(Outcome::Show(render_view(&session.view(), config)))
}

/// Current state as JSON (phase, quantities, total, receipt).
pub fn json(session: &SessionState) -> AppResult<Outcome> {
    let json = serde_json::to_string_pretty(&session.view())?;
    Ok(Outcome::Show(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_set_quantity_redraws_total() {
        let mut session = SessionState::new();
        let config = ConfigState::default();

        let Outcome::Show(out) = set_quantity(&mut session, &config, 4, "3").unwrap() else {
            panic!("expected a screen");
        };
        assert!(out.contains("Total: $54000.00"));
    }

    #[test]
    fn test_set_quantity_unknown_item() {
        let mut session = SessionState::new();
        let err = set_quantity(&mut session, &ConfigState::default(), 8, "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_json_snapshot() {
        let mut session = SessionState::new();
        session.set_quantity(1, "1").unwrap();

        let Outcome::Show(out) = json(&session).unwrap() else {
            panic!("expected json");
        };
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["phase"], "selecting");
        assert_eq!(value["quantities"][0]["quantity"], 1);
    }
}
