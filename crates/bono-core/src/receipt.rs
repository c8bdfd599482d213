//! # Receipt
//!
//! The immutable record produced when the simulated payment is confirmed.
//!
//! ## Shape
//! ```text
//! Receipt
//! ├── id          UUID v4 receipt number
//! ├── total       snapshot of the cart total at confirmation
//! └── lines[]     one per catalog item with quantity > 0, catalog order
//!     ├── product_name, quantity, unit_price, subtotal
//!     ├── redemption_code   own code per line
//!     └── generated_at      shared by every line of the receipt
//! ```
//!
//! A receipt only hands out shared references to its data, so a completed
//! order cannot be edited after the fact.

use rand::Rng;
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::Cart;
use crate::money::Money;
use crate::pin::RedemptionCode;
use crate::timestamp::{format_timestamp, Clock};

/// One purchased product on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub subtotal: Money,
    pub redemption_code: RedemptionCode,
    /// `YYYY-MM-DD HH:mm:ss`
    pub generated_at: String,
}

/// Snapshot of a confirmed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[ts(as = "String")]
    id: Uuid,
    total: Money,
    lines: Vec<ReceiptLine>,
}

impl Receipt {
    /// Builds the receipt for the current cart contents.
    ///
    /// The clock is read once, so every line shares the same timestamp.
    /// Each line draws its own redemption code from `rng`.
    pub fn from_cart<R, C>(cart: &Cart, rng: &mut R, clock: &C) -> Self
    where
        R: Rng + ?Sized,
        C: Clock + ?Sized,
    {
        let generated_at = format_timestamp(&clock.now());

        let lines = cart
            .selected()
            .map(|(item, quantity)| ReceiptLine {
                product_name: item.name.to_string(),
                quantity,
                unit_price: item.unit_price,
                subtotal: item.unit_price.multiply_quantity(quantity),
                redemption_code: RedemptionCode::generate(rng),
                generated_at: generated_at.clone(),
            })
            .collect();

        Receipt {
            id: Uuid::new_v4(),
            total: cart.total(),
            lines,
        }
    }

    /// Receipt number.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Order total at the moment of confirmation.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Timestamp of the confirmation (`None` only for a receipt without lines).
    pub fn generated_at(&self) -> Option<&str> {
        self.lines.first().map(|line| line.generated_at.as_str())
    }
}
