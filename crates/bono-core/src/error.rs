//! # Error Types
//!
//! Domain-specific error types for bono-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bono-core errors (this file)                                          │
//! │  ├── CoreError        - Checkout rule violations                       │
//! │  └── ValidationError  - Malformed identifiers / file names             │
//! │                                                                         │
//! │  terminal app errors (apps/terminal)                                   │
//! │  ├── ExportError      - PDF rendering / writing                        │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → rendered alert         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad quantity input is never an error: it is coerced into `[0, 100]`
//! by [`crate::validation::coerce_quantity`].

use thiserror::Error;

use crate::types::CheckoutPhase;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Tried to pay while the order total is zero.
    ///
    /// ## User Workflow
    /// ```text
    /// All quantities 0
    ///      │
    ///      ▼
    /// pay()
    ///      │
    ///      ▼
    /// EmptyOrder ──► blocking alert, phase stays Selecting
    /// ```
    #[error("Debe seleccionar al menos un producto con cantidad mayor a 0")]
    EmptyOrder,

    /// The action is not available in the current phase.
    ///
    /// ## When This Occurs
    /// - `confirm` before `pay`
    /// - `pay` twice
    /// - Changing quantities after the receipt was generated
    #[error("Cannot {action} while checkout is {phase}")]
    InvalidTransition {
        phase: CheckoutPhase,
        action: &'static str,
    },

    /// Item id is not part of the catalog.
    #[error("Catalog item not found: {0}")]
    UnknownItem(u32),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., file name without the right extension).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidTransition {
            phase: CheckoutPhase::Selecting,
            action: "confirm payment",
        };
        assert_eq!(
            err.to_string(),
            "Cannot confirm payment while checkout is selecting"
        );

        assert_eq!(
            CoreError::UnknownItem(9).to_string(),
            "Catalog item not found: 9"
        );
    }

    #[test]
    fn test_empty_order_message_matches_constant() {
        assert_eq!(CoreError::EmptyOrder.to_string(), crate::EMPTY_ORDER_MESSAGE);
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "file name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
