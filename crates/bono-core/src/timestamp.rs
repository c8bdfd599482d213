//! # Receipt Timestamps
//!
//! Receipts carry the local date-time of the confirmation, printed as
//! `YYYY-MM-DD HH:mm:ss` (zero-padded, 24-hour clock, no time zone).
//!
//! The clock sits behind the [`Clock`] trait so the confirmation can be
//! replayed in tests with a [`FixedClock`].

use chrono::{Local, NaiveDate, NaiveDateTime};

/// chrono format string for receipt timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a local date-time for the receipt.
///
/// ## Example
/// ```rust
/// use bono_core::timestamp::format_timestamp;
/// use chrono::NaiveDate;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 7)
///     .and_then(|d| d.and_hms_opt(8, 5, 9))
///     .unwrap();
/// assert_eq!(format_timestamp(&at), "2024-03-07 08:05:09");
/// ```
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Source of "now" for receipt generation.
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Builds a fixed clock from calendar fields; `None` if they are invalid.
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding_and_24h_clock() {
        let clock = FixedClock::from_ymd_hms(2025, 1, 2, 23, 4, 5).unwrap();
        assert_eq!(format_timestamp(&clock.now()), "2025-01-02 23:04:05");

        let midnight = FixedClock::from_ymd_hms(2025, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&midnight.now()), "2025-12-31 00:00:00");
    }

    #[test]
    fn test_invalid_fixed_clock() {
        assert!(FixedClock::from_ymd_hms(2025, 2, 30, 0, 0, 0).is_none());
        assert!(FixedClock::from_ymd_hms(2025, 1, 1, 24, 0, 0).is_none());
    }

    #[test]
    fn test_system_clock_has_receipt_shape() {
        let formatted = format_timestamp(&SystemClock.now());
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }
}
