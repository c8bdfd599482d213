//! # App Error Type
//!
//! Unified error type for the terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Order Form                         │
//! │                                                                         │
//! │  User types "pay"                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<Outcome, AppError>                                       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Checkout rule? ──── CoreError::EmptyOrder ─────┐                │  │
//! │  │         │                                       │                │  │
//! │  │         ▼                                       ▼                │  │
//! │  │  PDF / disk? ─────── ExportError ───────────► AppError ─────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The loop prints "[EMPTY_ORDER] Debe seleccionar ..." and keeps going.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use bono_core::CoreError;

use crate::export::ExportError;
use crate::state::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "EMPTY_ORDER",
///   "message": "Debe seleccionar al menos un producto con cantidad mayor a 0"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes shown next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Pay pressed with a zero total (blocking alert)
    EmptyOrder,

    /// Action not available in the current phase
    InvalidTransition,

    /// Unknown catalog item or command
    NotFound,

    /// Malformed command arguments
    ValidationError,

    /// Export requested before a receipt exists
    NoReceipt,

    /// PDF rendering or writing failed
    ExportError,

    /// Bad configuration
    ConfigError,

    /// Anything else (terminal I/O)
    Internal,
}

impl ErrorCode {
    /// The SCREAMING_SNAKE_CASE label used in the rendered alert.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptyOrder => "EMPTY_ORDER",
            ErrorCode::InvalidTransition => "INVALID_TRANSITION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NoReceipt => "NO_RECEIPT",
            ErrorCode::ExportError => "EXPORT_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an error for an unknown command word.
    pub fn unknown_command(word: &str) -> Self {
        AppError::new(
            ErrorCode::NotFound,
            format!("Unknown command: {} (type 'help')", word),
        )
    }

    /// Creates the "nothing to export yet" error.
    pub fn no_receipt() -> Self {
        AppError::new(
            ErrorCode::NoReceipt,
            "No receipt yet: confirm the payment first",
        )
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::EmptyOrder => ErrorCode::EmptyOrder,
            CoreError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            CoreError::UnknownItem(_) => ErrorCode::NotFound,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        AppError::new(code, err.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::new(ErrorCode::ExportError, err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Internal, format!("Terminal I/O error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::new(ErrorCode::Internal, format!("Serialization error: {}", err))
    }
}

/// Result type for commands.
pub type AppResult<T> = Result<T, AppError>;
