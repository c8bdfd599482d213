//! # Commands Module
//!
//! Every user event the order form understands.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (parsing + dispatch)
//! ├── cart.rs      ◄─── set, show, json
//! ├── checkout.rs  ◄─── pay, confirm, reset
//! └── receipt.rs   ◄─── export
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line: "set 1 2"                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::parse() ──► Command::SetQuantity { item_id: 1, raw: "2" }     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(session, config, command)                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<Outcome, AppError> ──► printed by the session loop              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod checkout;
pub mod receipt;

use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::state::{ConfigState, SessionState};

/// Help text printed by `help`.
pub const HELP: &str = "\
Comandos:
  set <#> <cantidad>   cambia la cantidad de un producto (0-100)
  pay                  pasa al pago
  confirm              confirma el pago (simulado) y genera el recibo
  export [ruta]        guarda el recibo en PDF
  reset                empieza una orden nueva
  show                 muestra la pantalla actual
  json                 muestra el estado actual en JSON
  help                 esta ayuda
  quit                 salir
";

/// A parsed user event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetQuantity { item_id: u32, raw_value: String },
    Pay,
    Confirm,
    Export { path: Option<PathBuf> },
    Reset,
    Show,
    Json,
    Help,
    Quit,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading.
    Show(String),
    /// Stop the session.
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    ///
    /// ## Example
    /// ```rust
    /// use bono_terminal_lib::commands::Command;
    ///
    /// let cmd = Command::parse("set 2 15").unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Some(Command::SetQuantity { item_id: 2, raw_value: "15".to_string() })
    /// );
    /// ```
    pub fn parse(line: &str) -> AppResult<Option<Command>> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "set" => parse_set(rest)?,
            "pay" => Command::Pay,
            "confirm" => Command::Confirm,
            "export" => Command::Export {
                path: (!rest.is_empty()).then(|| PathBuf::from(rest)),
            },
            "reset" => Command::Reset,
            "show" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(AppError::unknown_command(word)),
        };

        Ok(Some(command))
    }
}

/// `set <id> <value>`; the value is everything after the id and may be
/// empty or non-numeric (it is coerced, not rejected).
fn parse_set(args: &str) -> AppResult<Command> {
    let (id, raw_value) = match args.split_once(char::is_whitespace) {
        Some((id, value)) => (id, value.trim()),
        None => (args, ""),
    };

    if id.is_empty() {
        return Err(AppError::validation("Usage: set <#> <cantidad>"));
    }

    let item_id = id
        .parse::<u32>()
        .map_err(|_| AppError::validation(format!("Invalid product number: {}", id)))?;

    Ok(Command::SetQuantity {
        item_id,
        raw_value: raw_value.to_string(),
    })
}

/// Runs one command against the session.
pub fn dispatch(
    session: &mut SessionState,
    config: &ConfigState,
    command: Command,
) -> AppResult<Outcome> {
    match command {
        Command::SetQuantity { item_id, raw_value } => {
            cart::set_quantity(session, config, item_id, &raw_value)
        }
        Command::Pay => checkout::pay(session, config),
        Command::Confirm => checkout::confirm(session, config),
        Command::Export { path } => receipt::export_receipt(session, config, path),
        Command::Reset => checkout::reset(session, config),
        Command::Show => cart::show(session, config),
        Command::Json => cart::json(session),
        Command::Help => Ok(Outcome::Show(HELP.to_string())),
        Command::Quit => Ok(Outcome::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_simple_words() {
        assert_eq!(Command::parse("pay").unwrap(), Some(Command::Pay));
        assert_eq!(Command::parse("  CONFIRM ").unwrap(), Some(Command::Confirm));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_set_keeps_raw_value() {
        assert_eq!(
            Command::parse("set 1 5 bonos").unwrap(),
            Some(Command::SetQuantity {
                item_id: 1,
                raw_value: "5 bonos".to_string()
            })
        );
        assert_eq!(
            Command::parse("set 3").unwrap(),
            Some(Command::SetQuantity {
                item_id: 3,
                raw_value: String::new()
            })
        );
    }

    #[test]
    fn test_parse_set_errors() {
        assert_eq!(
            Command::parse("set").unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            Command::parse("set uno 2").unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_parse_export_path() {
        assert_eq!(
            Command::parse("export").unwrap(),
            Some(Command::Export { path: None })
        );
        assert_eq!(
            Command::parse("export /tmp/r.pdf").unwrap(),
            Some(Command::Export {
                path: Some(PathBuf::from("/tmp/r.pdf"))
            })
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("dance").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("dance"));
    }
}
