//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BONO_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization.

use directories::UserDirs;
use serde::Serialize;
use std::path::PathBuf;

use bono_core::validation::validate_receipt_filename;
use bono_core::Money;

/// Default name of the exported receipt.
pub const DEFAULT_RECEIPT_FILENAME: &str = "recibo.pdf";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Heading shown above the quantity table
    pub store_name: String,

    /// Currency symbol (for display and the PDF)
    pub currency_symbol: String,

    /// Directory the receipt is written to
    pub export_dir: PathBuf,

    /// File name of the exported receipt
    pub receipt_filename: String,
}

impl Default for ConfigState {
    /// Returns the default configuration.
    ///
    /// ## Default Values
    /// - Store: "Bonos"
    /// - Currency: `$`
    /// - Export: the user's Downloads folder (current directory if unknown)
    /// - File name: `recibo.pdf`
    fn default() -> Self {
        ConfigState {
            store_name: "Bonos".to_string(),
            currency_symbol: "$".to_string(),
            export_dir: default_export_dir(),
            receipt_filename: DEFAULT_RECEIPT_FILENAME.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BONO_STORE_NAME`: Override the heading
    /// - `BONO_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `BONO_EXPORT_DIR`: Directory for exported receipts
    /// - `BONO_RECEIPT_FILENAME`: Receipt file name (must end with `.pdf`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("BONO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("BONO_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(dir) = lookup("BONO_EXPORT_DIR") {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "BONO_EXPORT_DIR",
                    reason: "must not be empty".to_string(),
                });
            }
            config.export_dir = PathBuf::from(dir);
        }

        if let Some(filename) = lookup("BONO_RECEIPT_FILENAME") {
            validate_receipt_filename(&filename).map_err(|e| ConfigError::InvalidValue {
                key: "BONO_RECEIPT_FILENAME",
                reason: e.to_string(),
            })?;
            config.receipt_filename = filename.trim().to_string();
        }

        Ok(config)
    }

    /// Where `export` writes when no path is given.
    pub fn receipt_path(&self) -> PathBuf {
        self.export_dir.join(&self.receipt_filename)
    }

    /// Formats money with the configured symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use bono_core::Money;
    /// use bono_terminal_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_major(28_000)), "$28000.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let fixed = amount.to_fixed();
        match fixed.strip_prefix('-') {
            Some(unsigned) => format!("-{}{}", self.currency_symbol, unsigned),
            None => format!("{}{}", self.currency_symbol, fixed),
        }
    }
}

fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
