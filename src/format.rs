//! Digit classification and canonical formatting.
//!
//! The canonical form depends only on how many main digits were found:
//!
//! | Digits | Shape | Canonical form |
//! |--------|-------|----------------|
//! | 10 | [`NumberShape::National`] | `(514) 696-2442` |
//! | 11 | [`NumberShape::CountryCoded`] | `+1 (514) 696-2442` |
//! | 7 | [`NumberShape::Local`] | `696-2442` |
//! | 12+ | [`NumberShape::Overlong`] | first 10 digits as `(514) 696-2442` |
//! | 1-6, 8, 9 | [`NumberShape::Unrecognized`] | digits unchanged |
//!
//! An extension, when present, is appended as ` x<digits>`.
//!
//! # Example
//!
//! ```
//! use phone_normalizer::extension::ParsedNumber;
//! use phone_normalizer::format::{format_parsed, NumberShape};
//!
//! assert_eq!(NumberShape::classify("15146962442"), NumberShape::CountryCoded);
//!
//! let parsed = ParsedNumber::new("5144138777", Some("24400"));
//! assert_eq!(format_parsed(&parsed).as_deref(), Some("(514) 413-8777 x24400"));
//! ```

use std::fmt::Write;

use crate::extension::ParsedNumber;

/// Formatting rule selected from the main digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberShape {
    /// No digits at all.
    Empty,
    /// Seven-digit local number.
    Local,
    /// Ten-digit number with area code.
    National,
    /// Eleven digits; the first is read as the `+1` country code.
    CountryCoded,
    /// Twelve or more digits; only the first ten are kept.
    Overlong,
    /// Any other length; the digits are returned as-is.
    Unrecognized,
}

impl NumberShape {
    /// Picks the formatting rule for a digits-only string.
    pub fn classify(digits: &str) -> Self {
        match digits.len() {
            0 => Self::Empty,
            7 => Self::Local,
            10 => Self::National,
            11 => Self::CountryCoded,
            n if n >= 12 => Self::Overlong,
            _ => Self::Unrecognized,
        }
    }

    /// Returns `true` for shapes that get punctuation inserted.
    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Empty | Self::Unrecognized)
    }

    /// Human-readable name, used in CLI and binding output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Local => "local",
            Self::National => "national",
            Self::CountryCoded => "country-coded",
            Self::Overlong => "overlong",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for NumberShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Formats a parsed number into its canonical string.
///
/// Returns `None` only when there are no main digits, even if an extension
/// was found.
pub fn format_parsed(parsed: &ParsedNumber) -> Option<String> {
    let digits = parsed.main_digits();
    let shape = NumberShape::classify(digits);

    // Digits are ASCII, so byte slicing below is on char boundaries.
    let mut result = String::with_capacity(digits.len() + 12);
    match shape {
        NumberShape::Empty => return None,
        NumberShape::Local => {
            let _ = write!(result, "{}-{}", &digits[..3], &digits[3..]);
        }
        NumberShape::National | NumberShape::Overlong => {
            write_national(&mut result, &digits[..10]);
        }
        NumberShape::CountryCoded => {
            result.push_str("+1 ");
            write_national(&mut result, &digits[1..]);
        }
        NumberShape::Unrecognized => result.push_str(digits),
    }

    if let Some(ext) = parsed.extension_digits() {
        result.push_str(" x");
        result.push_str(ext);
    }

    Some(result)
}

fn write_national(out: &mut String, ten: &str) {
    let _ = write!(out, "({}) {}-{}", &ten[..3], &ten[3..6], &ten[6..10]);
}

/// Strips everything but ASCII digits.
///
/// # Example
///
/// ```
/// use phone_normalizer::format::strip_formatting;
///
/// assert_eq!(strip_formatting("+1 (514) 696-2442"), "15146962442");
/// assert_eq!(strip_formatting("514.696.2442"), "5146962442");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
