//! Phone and fax standardization.
//!
//! Chains the pipeline stages: [`preprocess`] → [`split_extension`] →
//! [`format_parsed`]. Every call is independent and never panics; anything
//! that cannot be usefully formatted comes back as `None`.

use crate::extension::split_extension;
use crate::format::format_parsed;
use crate::input::{preprocess, RawInput};

/// Standardizes a phone number to its canonical display form.
///
/// Accepts text, integers, `Option`s of either, or [`RawInput`] directly.
///
/// # Example
///
/// ```
/// use phone_normalizer::{standardize_phone_number, RawInput};
///
/// assert_eq!(standardize_phone_number("514.696.2442").as_deref(), Some("(514) 696-2442"));
/// assert_eq!(standardize_phone_number("1-514-696-2442").as_deref(), Some("+1 (514) 696-2442"));
/// assert_eq!(standardize_phone_number("(514) 413-8777 x 24400").as_deref(), Some("(514) 413-8777 x24400"));
/// assert_eq!(standardize_phone_number(RawInput::Absent), None);
/// assert_eq!(standardize_phone_number("   "), None);
/// ```
pub fn standardize_phone_number(input: impl Into<RawInput>) -> Option<String> {
    let input = input.into();
    let text = preprocess(&input)?;
    format_parsed(&split_extension(&text))
}

/// Standardizes a fax number.
///
/// Fax columns are often numeric in directory exports; numbers are rendered
/// as plain decimal text and then go through the phone pipeline unchanged.
///
/// # Example
///
/// ```
/// use phone_normalizer::standardize_fax_number;
///
/// assert_eq!(standardize_fax_number(4186964673_i64).as_deref(), Some("(418) 696-4673"));
/// assert_eq!(standardize_fax_number("514-624-3099").as_deref(), Some("(514) 624-3099"));
/// assert_eq!(standardize_fax_number(None::<&str>), None);
/// ```
#[inline]
pub fn standardize_fax_number(input: impl Into<RawInput>) -> Option<String> {
    standardize_phone_number(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digit_variants() {
        for input in [
            "5146962442",
            "514-696-2442",
            "(514) 696-2442",
            "514.696.2442",
            " 514 696 2442 ",
        ] {
            assert_eq!(
                standardize_phone_number(input).as_deref(),
                Some("(514) 696-2442"),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_country_code() {
        assert_eq!(
            standardize_phone_number("15146962442").as_deref(),
            Some("+1 (514) 696-2442")
        );
        assert_eq!(
            standardize_phone_number("+1 514 696 2442").as_deref(),
            Some("+1 (514) 696-2442")
        );
    }

    #[test]
    fn test_extensions() {
        assert_eq!(
            standardize_phone_number("450-759-8222 ext x2787").as_deref(),
            Some("(450) 759-8222 x2787")
        );
        assert_eq!(
            standardize_phone_number("(819) 966-6100*333059 *333057").as_deref(),
            Some("(819) 966-6100 x333059")
        );
    }

    #[test]
    fn test_local() {
        assert_eq!(standardize_phone_number("696-2442").as_deref(), Some("696-2442"));
    }

    #[test]
    fn test_null_propagation() {
        assert_eq!(standardize_phone_number(RawInput::Absent), None);
        assert_eq!(standardize_phone_number(None::<&str>), None);
        assert_eq!(standardize_phone_number(""), None);
        assert_eq!(standardize_phone_number(" "), None);
        assert_eq!(standardize_phone_number("   "), None);
    }

    #[test]
    fn test_no_digits_is_none() {
        assert_eq!(standardize_phone_number("n/a"), None);
        assert_eq!(standardize_phone_number("x 24400"), None);
    }

    #[test]
    fn test_fax_numeric_and_text() {
        assert_eq!(
            standardize_fax_number(4186964673_i64).as_deref(),
            Some("(418) 696-4673")
        );
        assert_eq!(
            standardize_fax_number("514.624.3099").as_deref(),
            Some("(514) 624-3099")
        );
        assert_eq!(standardize_fax_number(RawInput::Numeric(0)), None);
        assert_eq!(standardize_fax_number(RawInput::Absent), None);
    }

    #[test]
    fn test_fax_negative_number_keeps_digits() {
        assert_eq!(
            standardize_fax_number(-4186964673_i64).as_deref(),
            Some("(418) 696-4673")
        );
    }
}
