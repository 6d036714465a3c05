//! Display helpers for contact fields.

/// Fallback text shown for a missing phone or fax number.
pub const NOT_PROVIDED: &str = "Not provided";

/// Returns the value for display, or [`NOT_PROVIDED`] when it is missing.
///
/// No parsing happens here; pass a standardized value if one is wanted.
///
/// # Example
///
/// ```
/// use phone_normalizer::display_phone_number;
///
/// assert_eq!(display_phone_number("(514) 696-2442"), "(514) 696-2442");
/// assert_eq!(display_phone_number(None), "Not provided");
/// ```
#[inline]
pub fn display_phone_number<'a>(value: impl Into<Option<&'a str>>) -> &'a str {
    value.into().unwrap_or(NOT_PROVIDED)
}
