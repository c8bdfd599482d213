//! # State Module
//!
//! Application state for the terminal order form.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │   SessionState           │        │   ConfigState            │      │
//! │  │                          │        │                          │      │
//! │  │  Checkout (phase, cart,  │        │  store name              │      │
//! │  │  receipt), RNG, Clock    │        │  currency symbol         │      │
//! │  │                          │        │  export dir / file name  │      │
//! │  │  mutated by commands     │        │  read-only after startup │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState, DEFAULT_RECEIPT_FILENAME};
pub use session::{SessionState, SessionView};
