//! # Text Rendering
//!
//! Draws the three screens of the order form as plain-text tables.
//!
//! ```text
//! Selecting   ──► quantity table + total
//! Confirming  ──► "Pago en proceso..." + confirm prompt
//! Completed   ──► receipt table + export hint
//! ```

use std::fmt::Write as _;

use bono_core::{CheckoutPhase, QuantityLine, Receipt};

use crate::state::{ConfigState, SessionView};

const QUANTITY_HEADERS: [&str; 5] = [
    "#",
    "Producto/Servicio",
    "Precio unitario",
    "Cantidad (0-100)",
    "Subtotal",
];

const RECEIPT_HEADERS: [&str; 6] = ["Producto", "Precio", "Cantidad", "Subtotal", "PIN", "Fecha/Hora"];

/// Renders the screen for the current phase.
pub fn render_view(view: &SessionView<'_>, config: &ConfigState) -> String {
    match (view.phase, view.receipt) {
        (CheckoutPhase::Selecting, _) => render_selection(view, config),
        (CheckoutPhase::Confirming, _) => render_confirmation(view, config),
        (CheckoutPhase::Completed, Some(receipt)) => render_receipt(receipt, config),
        // Completed always carries a receipt; fall back to the form.
        (CheckoutPhase::Completed, None) => render_selection(view, config),
    }
}

/// Quantity table with subtotals and the running total.
pub fn render_selection(view: &SessionView<'_>, config: &ConfigState) -> String {
    let rows: Vec<Vec<String>> = view
        .quantities
        .iter()
        .map(|line| quantity_row(line, config))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{}", config.store_name);
    let _ = writeln!(out, "Elige productos y cantidad");
    out.push('\n');
    out.push_str(&table(&QUANTITY_HEADERS, &rows));
    out.push('\n');
    let _ = writeln!(out, "Total: {}", config.format_currency(view.total));
    let _ = writeln!(out, "Comandos: set <#> <cantidad>, pay");
    out
}

/// Simulated payment screen.
pub fn render_confirmation(view: &SessionView<'_>, config: &ConfigState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Pago en proceso... ({})", config.format_currency(view.total));
    let _ = writeln!(out, "Escriba 'confirm' para confirmar el pago (simulado)");
    out
}

/// Receipt table.
pub fn render_receipt(receipt: &Receipt, config: &ConfigState) -> String {
    let rows: Vec<Vec<String>> = receipt
        .lines()
        .iter()
        .map(|line| {
            vec![
                line.product_name.clone(),
                config.format_currency(line.unit_price),
                line.quantity.to_string(),
                config.format_currency(line.subtotal),
                line.redemption_code.to_string(),
                line.generated_at.clone(),
            ]
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "Recibo generado (N° {})", receipt.id());
    out.push('\n');
    out.push_str(&table(&RECEIPT_HEADERS, &rows));
    out.push('\n');
    let _ = writeln!(out, "Total: {}", config.format_currency(receipt.total()));
    let _ = writeln!(out, "Comandos: export [ruta], reset");
    out
}

fn quantity_row(line: &QuantityLine, config: &ConfigState) -> Vec<String> {
    vec![
        line.item_id.to_string(),
        line.name.clone(),
        config.format_currency(line.unit_price),
        line.quantity.to_string(),
        config.format_currency(line.subtotal),
    ]
}

/// Left-aligned table with a dashed rule under the header.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header_cells, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);

    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}
