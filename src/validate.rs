//! Lightweight phone number sanity checks.
//!
//! The check is format-agnostic: raw digits, punctuated input and canonical
//! output are all accepted, as long as the digit count is plausible.

/// Minimum number of digits for a value to look like a phone number.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Maximum number of digits for a value to look like a phone number.
pub const MAX_PHONE_DIGITS: usize = 15;

/// Counts the ASCII digits in a value.
#[inline]
pub fn digit_count(value: &str) -> usize {
    value.bytes().filter(u8::is_ascii_digit).count()
}

/// Checks whether a value looks like a usable phone number.
///
/// Returns `true` when the value is present and contains between
/// [`MIN_PHONE_DIGITS`] and [`MAX_PHONE_DIGITS`] digits, inclusive.
///
/// # Example
///
/// ```
/// use phone_normalizer::is_valid_phone_number;
///
/// assert!(is_valid_phone_number("(514) 696-2442"));
/// assert!(is_valid_phone_number("+1 (514) 696-2442"));
/// assert!(is_valid_phone_number("696-2442"));
/// assert!(!is_valid_phone_number("123"));
/// assert!(!is_valid_phone_number(None));
/// ```
pub fn is_valid_phone_number<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value
        .into()
        .map(digit_count)
        .is_some_and(|n| (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid_phone_number("(514) 696-2442"));
        assert!(is_valid_phone_number("+1 (514) 696-2442"));
        assert!(is_valid_phone_number("696-2442"));
        assert!(is_valid_phone_number("5146962442"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid_phone_number(None));
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number("123456789012345678"));
        assert!(!is_valid_phone_number("not a number"));
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(!is_valid_phone_number("123456"));
        assert!(is_valid_phone_number("1234567"));
        assert!(is_valid_phone_number("123456789012345"));
        assert!(!is_valid_phone_number("1234567890123456"));
    }

    #[test]
    fn test_extension_digits_count() {
        // Extension digits are not separated out before counting.
        assert!(is_valid_phone_number("(514) 413-8777 x24400"));
        assert!(!is_valid_phone_number("(514) 413-8777 x24400123"));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count("(514) 696-2442"), 10);
        assert_eq!(digit_count(""), 0);
        assert_eq!(digit_count("٥١٤"), 0);
    }
}
