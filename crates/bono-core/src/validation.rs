//! # Validation Module
//!
//! Input coercion and validation for the order form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Quantity input  ──► coerce_quantity()  (never fails)                   │
//! │                      "abc" → 0, "-3" → 0, "250" → 100, "7.9" → 7        │
//! │                                                                         │
//! │  Item id         ──► validate_item_id() (unknown id → error)            │
//! │                                                                         │
//! │  Export name     ──► validate_receipt_filename()                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bono_core::validation::coerce_quantity;
//!
//! assert_eq!(coerce_quantity("5"), 5);
//! assert_eq!(coerce_quantity("lots"), 0);
//! assert_eq!(coerce_quantity("1000"), 100);
//! ```

use crate::error::{CoreError, ValidationError};
use crate::types::{find_item, CatalogItem};
use crate::{MAX_QUANTITY, MIN_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity Coercion
// =============================================================================

/// Turns raw user input into a quantity in `[0, 100]`.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty, non-numeric or NaN input → 0
/// - Fractions are truncated toward zero
/// - Values outside the range are clamped (`inf` → 100)
///
/// Bad input is never reported; the form just shows the coerced value.
pub fn coerce_quantity(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return MIN_QUANTITY;
    }

    match raw.parse::<f64>() {
        Ok(value) if !value.is_nan() => clamp_quantity(value),
        _ => MIN_QUANTITY,
    }
}

/// Clamps a numeric quantity into `[MIN_QUANTITY, MAX_QUANTITY]`.
///
/// ## Example
/// ```rust
/// use bono_core::validation::clamp_quantity;
///
/// assert_eq!(clamp_quantity(-4.0), 0);
/// assert_eq!(clamp_quantity(42.7), 42);
/// assert_eq!(clamp_quantity(f64::INFINITY), 100);
/// ```
pub fn clamp_quantity(value: f64) -> u32 {
    if value.is_nan() {
        return MIN_QUANTITY;
    }
    // Clamped first, so the cast cannot overflow.
    value.clamp(MIN_QUANTITY as f64, MAX_QUANTITY as f64).trunc() as u32
}

// =============================================================================
// Identifiers
// =============================================================================

/// Resolves an item id to its catalog entry.
pub fn validate_item_id(id: u32) -> Result<&'static CatalogItem, CoreError> {
    find_item(id).ok_or(CoreError::UnknownItem(id))
}

/// Validates the file name used for the exported receipt.
///
/// ## Rules
/// - Must not be empty
/// - Must be a bare file name (no path separators)
/// - Must end with `.pdf`
///
/// ## Example
/// ```rust
/// use bono_core::validation::validate_receipt_filename;
///
/// assert!(validate_receipt_filename("recibo.pdf").is_ok());
/// assert!(validate_receipt_filename("recibo.txt").is_err());
/// assert!(validate_receipt_filename("../recibo.pdf").is_err());
/// ```
pub fn validate_receipt_filename(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "receipt file name".to_string(),
        });
    }

    if name.contains('/') || name.contains('\\') {
        return Err(ValidationError::InvalidFormat {
            field: "receipt file name".to_string(),
            reason: "must not contain path separators".to_string(),
        });
    }

    if !name.to_ascii_lowercase().ends_with(".pdf") || name.len() <= ".pdf".len() {
        return Err(ValidationError::InvalidFormat {
            field: "receipt file name".to_string(),
            reason: "must end with .pdf".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
