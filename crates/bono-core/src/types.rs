//! # Domain Types
//!
//! Core domain types used throughout the order form.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CATALOG (4 × CatalogItem, process-wide constant)                       │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Cart (one quantity per catalog item, cached total)                     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Checkout ── CheckoutPhase: Selecting → Confirming → Completed          │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Receipt (immutable snapshot, one ReceiptLine per selected item)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Catalog
// =============================================================================

/// A product that can be ordered.
///
/// Catalog items are compile-time constants; nothing ever creates one at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Stable identifier used by the front end (`set <id> <qty>`).
    pub id: u32,

    /// Display name, printed on the receipt.
    pub name: &'static str,

    /// Price for one unit.
    pub unit_price: Money,
}

/// Number of products offered by the form.
pub const CATALOG_LEN: usize = 4;

/// The four products offered by the form, in display order.
///
/// Receipt lines follow this order.
pub const CATALOG: [CatalogItem; CATALOG_LEN] = [
    CatalogItem {
        id: 1,
        name: "BONO COD SOCIO",
        unit_price: Money::from_major(14_000),
    },
    CatalogItem {
        id: 2,
        name: "BONO COD NO SOCIO",
        unit_price: Money::from_major(21_000),
    },
    CatalogItem {
        id: 3,
        name: "BONO CNP SOCIO",
        unit_price: Money::from_major(12_000),
    },
    CatalogItem {
        id: 4,
        name: "BONO CNP NO SOCIO",
        unit_price: Money::from_major(18_000),
    },
];

/// Looks up a catalog item by id.
pub fn find_item(id: u32) -> Option<&'static CatalogItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// Position of an item inside [`CATALOG`].
pub(crate) fn catalog_index(id: u32) -> Option<usize> {
    CATALOG.iter().position(|item| item.id == id)
}

// =============================================================================
// Checkout Phase
// =============================================================================

/// Where the user is in the order flow.
///
/// ```text
///   Selecting ──pay()──► Confirming ──confirm()──► Completed
///       ▲                                              │
///       └──────────────────── reset() ─────────────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPhase {
    /// Quantities are editable (initial phase).
    #[default]
    Selecting,
    /// Waiting for the simulated payment confirmation.
    Confirming,
    /// Payment confirmed, receipt available.
    Completed,
}

impl fmt::Display for CheckoutPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckoutPhase::Selecting => "selecting",
            CheckoutPhase::Confirming => "confirming",
            CheckoutPhase::Completed => "completed",
        };
        f.write_str(label)
    }
}
