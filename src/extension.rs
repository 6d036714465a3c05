//! Extension handling.
//!
//! Two independent tools live here:
//!
//! - [`split_extension`] is the pipeline stage used by
//!   [`standardize_phone_number`](crate::standardize_phone_number). It is
//!   built for raw directory text and tolerates `*` markers, `ext x`
//!   spellings, and trailing junk.
//! - [`extract_extension`] and [`remove_extension`] are simple queries over
//!   already human-readable numbers (for example, previously standardized
//!   values). They only recognize an explicit marker followed by digits.
//!
//! # Example
//!
//! ```
//! use phone_normalizer::extension::{extract_extension, remove_extension, split_extension};
//!
//! let parsed = split_extension("(819) 966-6100*333059 *333057");
//! assert_eq!(parsed.main_digits(), "8199666100");
//! assert_eq!(parsed.extension_digits(), Some("333059"));
//!
//! assert_eq!(extract_extension("450-759-8222 ext 2787"), Some("2787"));
//! assert_eq!(remove_extension("(514) 413-8777 x 24400").as_deref(), Some("(514) 413-8777"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::strip_formatting;

/// Main number and optional extension, split out of a cleaned input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedNumber {
    main_digits: String,
    extension_digits: Option<String>,
}

impl ParsedNumber {
    /// Builds a parsed number, enforcing the digits-only invariants.
    ///
    /// Non-digit characters are dropped from both parts, and an extension
    /// with no digits left is treated as absent.
    pub fn new(main: &str, extension: Option<&str>) -> Self {
        let extension_digits = extension
            .map(strip_formatting)
            .filter(|ext| !ext.is_empty());
        Self {
            main_digits: strip_formatting(main),
            extension_digits,
        }
    }

    /// Digits of the main number, possibly empty.
    #[inline]
    pub fn main_digits(&self) -> &str {
        &self.main_digits
    }

    /// Digits of the extension, if one was found.
    #[inline]
    pub fn extension_digits(&self) -> Option<&str> {
        self.extension_digits.as_deref()
    }

    /// Returns `true` if no main digits were found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.main_digits.is_empty()
    }
}

// `ext` must not follow a letter (so "next x5" is left alone) but may follow
// a digit, as in "5144138777ext x2".
fn ext_x_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)(^|[^a-z])ext\s*x").expect("Valid ext-x regex"));
    &PATTERN
}

fn split_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\s*(?:extension|ext|x)\s*").expect("Valid extension split regex")
    });
    &PATTERN
}

fn marker_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)(?:x|ext|extension)\s*([0-9]+)").expect("Valid extension marker regex")
    });
    &PATTERN
}

/// Splits cleaned text into main digits and an optional extension.
///
/// Rules, in order:
///
/// 1. every `*` becomes `x`
/// 2. `ext x` (any case, any spacing, not preceded by a letter) collapses
///    to `x`
/// 3. the text is split on `x`, `ext` or `extension` with surrounding
///    whitespace; the first segment is the main number and the second, if
///    any, the extension candidate. Further segments are discarded.
/// 4. the main segment keeps its digits only
/// 5. the extension candidate keeps digits and whitespace, and only its
///    first whitespace-delimited token is used
///
/// # Example
///
/// ```
/// use phone_normalizer::extension::split_extension;
///
/// let parsed = split_extension("450-759-8222 ext x2787");
/// assert_eq!(parsed.main_digits(), "4507598222");
/// assert_eq!(parsed.extension_digits(), Some("2787"));
///
/// let parsed = split_extension("514-696-2442");
/// assert_eq!(parsed.extension_digits(), None);
/// ```
pub fn split_extension(text: &str) -> ParsedNumber {
    let starred = text.replace('*', "x");
    let collapsed = ext_x_regex().replace_all(&starred, "${1}x");

    let mut segments = split_regex().splitn(&collapsed, 3);
    let main = segments.next().unwrap_or_default();
    let candidate = segments.next();

    let extension = candidate.and_then(first_extension_token);

    ParsedNumber {
        main_digits: strip_formatting(main),
        extension_digits: extension,
    }
}

fn first_extension_token(candidate: &str) -> Option<String> {
    let kept: String = candidate
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace())
        .collect();
    kept.split_whitespace()
        .next()
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Returns the digits following the first extension marker.
///
/// The marker (`x`, `ext` or `extension`, any case) is required and may be
/// followed by whitespace. Returns `None` for `None` input or when no marker
/// with digits is present.
///
/// # Example
///
/// ```
/// use phone_normalizer::extension::extract_extension;
///
/// assert_eq!(extract_extension("(514) 413-8777 x 24400"), Some("24400"));
/// assert_eq!(extract_extension("(819) 966-6100 extension 333059"), Some("333059"));
/// assert_eq!(extract_extension("(514) 696-2442"), None);
/// assert_eq!(extract_extension(None), None);
/// ```
pub fn extract_extension<'a>(value: impl Into<Option<&'a str>>) -> Option<&'a str> {
    let value = value.into()?;
    marker_regex()
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Removes the first extension marker and its digits, then trims.
///
/// Values without an extension come back trimmed but otherwise unchanged.
/// Returns `None` only for `None` input.
///
/// # Example
///
/// ```
/// use phone_normalizer::extension::remove_extension;
///
/// assert_eq!(remove_extension("450-759-8222 ext 2787").as_deref(), Some("450-759-8222"));
/// assert_eq!(remove_extension("(514) 696-2442").as_deref(), Some("(514) 696-2442"));
/// assert_eq!(remove_extension(None), None);
/// ```
pub fn remove_extension<'a>(value: impl Into<Option<&'a str>>) -> Option<String> {
    let value = value.into()?;
    Some(marker_regex().replace(value, "").trim().to_string())
}
