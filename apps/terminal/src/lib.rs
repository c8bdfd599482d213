//! # Bono Terminal Library
//!
//! Terminal front end for the Bono order form.
//!
//! ## Module Organization
//! ```text
//! bono_terminal_lib/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Checkout + RNG + clock
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Parsing & dispatch
//! │   ├── cart.rs     ◄─── set / show / json
//! │   ├── checkout.rs ◄─── pay / confirm / reset
//! │   └── receipt.rs  ◄─── export
//! ├── render.rs       ◄─── Text screens
//! ├── export.rs       ◄─── PDF receipt
//! └── error.rs        ◄─── AppError for commands
//! ```

pub mod commands;
pub mod error;
pub mod export;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{dispatch, Command, Outcome};
use error::{AppResult, ErrorCode};
use render::render_view;
use state::{ConfigState, SessionState};

const PROMPT: &str = "> ";

/// Runs the order form on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging   tracing-subscriber to stderr, RUST_LOG aware   │
/// │  2. Load Configuration   BONO_* environment variables over defaults     │
/// │  3. Create Session       Checkout + thread_rng + system clock           │
/// │  4. Session Loop         read line → parse → dispatch → print           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(export_dir = %config.export_dir.display(), "Starting Bono order form");

    let mut session = SessionState::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &mut session, &config)?;

    info!("Session closed");
    Ok(())
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Command errors are printed as alerts and never end the session; only
/// failures of `input`/`output` themselves are returned.
pub fn run_session<R, W>(
    input: R,
    mut output: W,
    session: &mut SessionState,
    config: &ConfigState,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render_view(&session.view(), config))?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        let result = Command::parse(&line).and_then(|command| match command {
            Some(command) => dispatch(session, config, command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(Outcome::Show(text))) => writeln!(output, "{}", text)?,
            Ok(None) => {}
            Err(err) if err.code == ErrorCode::EmptyOrder => {
                // Blocking alert: the order stays editable.
                warn!(%err, "Payment blocked");
                writeln!(output, "¡Atención! {}", err.message)?;
            }
            Err(err) => {
                warn!(%err, "Command failed");
                writeln!(output, "{}", err)?;
            }
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bono=trace` - Trace for the bono crates only
/// - Default: WARN, so logs stay out of the way of the screens
///
/// Logs are written to stderr; stdout is reserved for the form.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bono_core::timestamp::FixedClock;
    use bono_core::CheckoutPhase;
    use rand::{rngs::StdRng, SeedableRng};

    fn session() -> SessionState {
        SessionState::with_sources(
            Box::new(StdRng::seed_from_u64(21)),
            Box::new(FixedClock::from_ymd_hms(2024, 10, 1, 20, 0, 0).unwrap()),
        )
    }

    fn drive(script: &str, session: &mut SessionState) -> String {
        let mut out = Vec::new();
        run_session(script.as_bytes(), &mut out, session, &ConfigState::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_scripted_order() {
        let mut session = session();
        let out = drive("set 1 2\npay\nconfirm\nquit\nset 1 5\n", &mut session);

        assert!(out.contains("Total: $28000.00"));
        assert!(out.contains("Pago en proceso..."));
        assert!(out.contains("Recibo generado"));
        assert!(out.contains("2024-10-01 20:00:00"));
        // Input after quit is not processed.
        assert_eq!(session.checkout().phase(), CheckoutPhase::Completed);
        assert_eq!(session.checkout().receipt().unwrap().lines()[0].quantity, 2);
    }

    #[test]
    fn test_empty_order_alert_keeps_session_alive() {
        let mut session = session();
        let out = drive("pay\nset 3 1\npay\n", &mut session);

        assert!(out.contains("¡Atención! Debe seleccionar al menos un producto con cantidad mayor a 0"));
        assert_eq!(session.checkout().phase(), CheckoutPhase::Confirming);
    }

    #[test]
    fn test_errors_are_printed_with_code() {
        let mut session = session();
        let out = drive("bailar\nconfirm\nexport\n", &mut session);

        assert!(out.contains("[NOT_FOUND]"));
        assert!(out.contains("[INVALID_TRANSITION]"));
        assert!(out.contains("[NO_RECEIPT]"));
        assert_eq!(session.checkout().phase(), CheckoutPhase::Selecting);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut session = session();
        let out = drive("", &mut session);
        assert!(out.contains("Elige productos y cantidad"));
        assert!(out.ends_with(PROMPT));
    }
}
