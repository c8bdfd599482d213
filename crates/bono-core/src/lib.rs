//! # bono-core: Pure Business Logic for the Bono Order Form
//!
//! This crate is the **heart** of the order form. It contains the catalog,
//! the quantity rules, the checkout state machine and the receipt model,
//! all with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bono Order Form Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal front end (apps/terminal)              │   │
//! │  │    Quantity table ──► Pay ──► Confirm ──► Receipt ──► PDF       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ set / pay / confirm / reset            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bono-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ checkout  │  │  receipt  │  │   │
//! │  │   │  Catalog  │  │ Quantities│  │  Phases   │  │ PIN, time │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO AMBIENT CLOCK • NO AMBIENT RANDOMNESS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog items and the checkout phase
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`validation`] - Quantity coercion and item lookup
//! - [`cart`] - Quantity map with its derived total
//! - [`checkout`] - The `Selecting → Confirming → Completed` state machine
//! - [`pin`] - Redemption code generator
//! - [`timestamp`] - Receipt timestamp formatting and the `Clock` seam
//! - [`receipt`] - Immutable receipt snapshot
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bono_core::checkout::Checkout;
//! use bono_core::timestamp::FixedClock;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut checkout = Checkout::new();
//! checkout.set_quantity(1, "2").unwrap();
//! assert_eq!(checkout.total().cents(), 2_800_000); // $28000.00
//!
//! checkout.pay().unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let clock = FixedClock::from_ymd_hms(2024, 5, 1, 9, 30, 0).unwrap();
//! let receipt = checkout.confirm_with(&mut rng, &clock).unwrap();
//!
//! assert_eq!(receipt.lines().len(), 1);
//! assert_eq!(receipt.lines()[0].generated_at, "2024-05-01 09:30:00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pin;
pub mod receipt;
pub mod timestamp;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, QuantityLine};
pub use checkout::Checkout;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pin::RedemptionCode;
pub use receipt::{Receipt, ReceiptLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a catalog item can hold.
pub const MIN_QUANTITY: u32 = 0;

/// Largest quantity a catalog item can hold.
///
/// Input above this is clamped, never rejected.
pub const MAX_QUANTITY: u32 = 100;

/// Message shown when trying to pay for an empty order.
pub const EMPTY_ORDER_MESSAGE: &str =
    "Debe seleccionar al menos un producto con cantidad mayor a 0";
