//! # Receipt Commands
//!
//! `export [ruta]` writes the completed receipt as a PDF.
//!
//! ## Target Path
//! - no argument      → `<export dir>/<receipt file name>` from the config
//! - existing folder  → `<folder>/<receipt file name>`
//! - anything else    → used as the file path as-is

use std::path::PathBuf;

use tracing::debug;

use crate::commands::Outcome;
use crate::error::{AppError, AppResult};
use crate::export::save_pdf;
use crate::state::{ConfigState, SessionState};

/// Exports the receipt to PDF.
///
/// ## Errors
/// - `NO_RECEIPT` before the payment is confirmed
/// - `EXPORT_ERROR` if the PDF cannot be rendered or written
pub fn export_receipt(
    session: &SessionState,
    config: &ConfigState,
    path: Option<PathBuf>,
) -> AppResult<Outcome> {
    debug!(?path, "export command");

    let receipt = session
        .checkout()
        .receipt()
        .ok_or_else(AppError::no_receipt)?;

    let target = resolve_target(config, path);
    let bytes = save_pdf(receipt, config, &target)?;

    Ok(Outcome::Show(format!(
        "Recibo guardado en {} ({} bytes)",
        target.display(),
        bytes
    )))
}

fn resolve_target(config: &ConfigState, path: Option<PathBuf>) -> PathBuf {
    match path {
        None => config.receipt_path(),
        Some(dir) if dir.is_dir() => dir.join(&config.receipt_filename),
        Some(file) => file,
    }
}
