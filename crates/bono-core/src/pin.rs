//! # Redemption Codes
//!
//! Generates the PIN printed next to every receipt line.
//!
//! ## Format
//! ```text
//! 16 characters from a 62-symbol alphabet, drawn with replacement:
//!
//!   a3Fk-Q9zB-0mTt-Xy7L
//!   └──┘ └──┘ └──┘ └──┘
//!    4 ×  4 characters, joined by '-'
//! ```
//!
//! ## Not a Security Token
//! Codes are drawn from whatever `Rng` the caller passes in. They are a
//! proof-of-purchase convenience: not cryptographically strong and not
//! guaranteed unique. Two lines can, in principle, receive the same code.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Symbols a code is drawn from (upper case, lower case, digits).
pub const ALPHABET: &[u8; 62] =
    b"aAbBcCdDeEfFgGhHiIjJkKlLmMnNoOpPqQrRsStTuUvVwWxXyYzZ0123456789";

/// Number of random symbols in a code.
pub const CODE_LEN: usize = 16;

/// Symbols per group.
pub const GROUP_LEN: usize = 4;

/// Group separator.
pub const SEPARATOR: char = '-';

/// A formatted redemption code (`XXXX-XXXX-XXXX-XXXX`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RedemptionCode(String);

impl RedemptionCode {
    /// Draws a new code from `rng`.
    ///
    /// ## Example
    /// ```rust
    /// use bono_core::pin::RedemptionCode;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let code = RedemptionCode::generate(&mut rng);
    /// assert!(RedemptionCode::is_well_formed(code.as_str()));
    ///
    /// // Same seed, same code.
    /// let again = RedemptionCode::generate(&mut StdRng::seed_from_u64(42));
    /// assert_eq!(code, again);
    /// ```
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let groups = CODE_LEN / GROUP_LEN;
        let mut code = String::with_capacity(CODE_LEN + groups - 1);

        for i in 0..CODE_LEN {
            if i > 0 && i % GROUP_LEN == 0 {
                code.push(SEPARATOR);
            }
            let symbol = ALPHABET[rng.gen_range(0..ALPHABET.len())];
            code.push(char::from(symbol));
        }

        RedemptionCode(code)
    }

    /// Checks `^[A-Za-z0-9]{4}-[A-Za-z0-9]{4}-[A-Za-z0-9]{4}-[A-Za-z0-9]{4}$`.
    pub fn is_well_formed(code: &str) -> bool {
        let groups: Vec<&str> = code.split(SEPARATOR).collect();
        groups.len() == CODE_LEN / GROUP_LEN
            && groups.iter().all(|group| {
                group.len() == GROUP_LEN && group.bytes().all(|b| b.is_ascii_alphanumeric())
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RedemptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_alphabet_is_62_distinct_alphanumerics() {
        let mut seen = std::collections::HashSet::new();
        for b in ALPHABET.iter() {
            assert!(b.is_ascii_alphanumeric());
            assert!(seen.insert(*b));
        }
        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_generated_codes_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..500 {
            let code = RedemptionCode::generate(&mut rng);
            assert_eq!(code.as_str().len(), 19);
            assert!(RedemptionCode::is_well_formed(code.as_str()), "{code}");
        }
    }

    #[test]
    fn test_thread_rng_codes_are_well_formed() {
        let code = RedemptionCode::generate(&mut rand::thread_rng());
        assert!(RedemptionCode::is_well_formed(code.as_str()));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = RedemptionCode::generate(&mut StdRng::seed_from_u64(1));
        let b = RedemptionCode::generate(&mut StdRng::seed_from_u64(1));
        let c = RedemptionCode::generate(&mut StdRng::seed_from_u64(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_is_well_formed_rejects_bad_shapes() {
        assert!(RedemptionCode::is_well_formed("abcd-EFGH-1234-zZ09"));
        assert!(!RedemptionCode::is_well_formed("abcdEFGH1234zZ09"));
        assert!(!RedemptionCode::is_well_formed("abc-EFGH-1234-zZ09"));
        assert!(!RedemptionCode::is_well_formed("abcd-EFGH-1234-zZ0!"));
        assert!(!RedemptionCode::is_well_formed("abcd-EFGH-1234-zZ09-"));
        assert!(!RedemptionCode::is_well_formed("ábcd-EFGH-1234-zZ09"));
        assert!(!RedemptionCode::is_well_formed(""));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let code = RedemptionCode::generate(&mut StdRng::seed_from_u64(3));
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code));
    }
}
