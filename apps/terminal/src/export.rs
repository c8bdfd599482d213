//! # Receipt Export
//!
//! Paints a completed receipt onto a one-page PDF and writes it to disk.
//!
//! ## Layout (millimetres, measured from the top-left corner)
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │ (14,22)  Recibo de compra                                   18 pt     │
//! │ (14,32)  Total: $28000.00                                   12 pt     │
//! │                                                                       │
//! │ y=42     Producto   Cantidad   Precio Unit.   Subtotal   PIN   Fecha  │
//! │          x=14       x=70       x=100          x=135      x=170 x=210  │
//! │ y=48     BONO ...   2          $14000.00      $28000.00  abcd- 2024-  │
//! │ y=54     ...                                                          │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The page is A4 landscape so the last column (x = 210) stays on the page.
//! There is no pagination: rows past the bottom edge are simply drawn off
//! the page.

use std::fs;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use thiserror::Error;
use tracing::info;

use bono_core::Receipt;

use crate::state::ConfigState;

/// A4 landscape.
pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;

const TITLE: &str = "Recibo de compra";
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;

const MARGIN_X: f32 = 14.0;
const TITLE_Y: f32 = 22.0;
const TOTAL_Y: f32 = 32.0;
const HEADER_Y: f32 = 42.0;
const ROW_HEIGHT: f32 = 6.0;

/// Column header and its x offset.
const COLUMNS: [(&str, f32); 6] = [
    ("Producto", 14.0),
    ("Cantidad", 70.0),
    ("Precio Unit.", 100.0),
    ("Subtotal", 135.0),
    ("PIN", 170.0),
    ("Fecha/Hora", 210.0),
];

/// Export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Render(#[from] printpdf::Error),

    #[error("Could not write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Renders the receipt to PDF bytes.
pub fn render_pdf(receipt: &Receipt, config: &ConfigState) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Recibo {}", receipt.id()),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Recibo",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let canvas = doc.get_page(page).get_layer(layer);

    text(&canvas, &font, TITLE, TITLE_SIZE, MARGIN_X, TITLE_Y);
    text(
        &canvas,
        &font,
        &format!("Total: {}", config.format_currency(receipt.total())),
        BODY_SIZE,
        MARGIN_X,
        TOTAL_Y,
    );

    for (label, x) in COLUMNS {
        text(&canvas, &font, label, BODY_SIZE, x, HEADER_Y);
    }

    let mut y = HEADER_Y + ROW_HEIGHT;
    for line in receipt.lines() {
        let cells = [
            line.product_name.clone(),
            line.quantity.to_string(),
            config.format_currency(line.unit_price),
            config.format_currency(line.subtotal),
            line.redemption_code.to_string(),
            line.generated_at.clone(),
        ];
        for (cell, (_, x)) in cells.iter().zip(COLUMNS) {
            text(&canvas, &font, cell, BODY_SIZE, x, y);
        }
        y += ROW_HEIGHT;
    }

    Ok(doc.save_to_bytes()?)
}

/// Renders the receipt and writes it to `path`.
///
/// ## Returns
/// Number of bytes written.
pub fn save_pdf(receipt: &Receipt, config: &ConfigState, path: &Path) -> Result<usize, ExportError> {
    let bytes = render_pdf(receipt, config)?;

    fs::write(path, &bytes).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;

    info!(
        receipt_id = %receipt.id(),
        path = %path.display(),
        bytes = bytes.len(),
        "Receipt exported"
    );
    Ok(bytes.len())
}

/// Draws text with `y` measured from the top of the page.
fn text(canvas: &PdfLayerReference, font: &IndirectFontRef, value: &str, size: f32, x: f32, y: f32) {
    canvas.use_text(value, size, Mm(x), Mm(PAGE_HEIGHT_MM - y), font);
}
