//! Node.js bindings for phone_normalizer.
//!
//! Used by the directory seeding scripts so imported records go through the
//! same normalization as everything else.
//!
//! # Usage
//!
//! ```javascript
//! const { standardizePhoneNumber, standardizeFaxNumber, displayPhoneNumber } = require('phone-normalizer');
//!
//! standardizePhoneNumber("(819) 966-6100*333059 *333057"); // "(819) 966-6100 x333059"
//! standardizeFaxNumber(4186964673);                        // "(418) 696-4673"
//! displayPhoneNumber(null);                                // "Not provided"
//! ```

use napi::bindgen_prelude::*;
use napi_derive::napi;

use phone_normalizer::RawInput;

fn raw_input(value: Option<Either<String, i64>>) -> RawInput {
    match value {
        Some(Either::A(text)) => RawInput::Text(text),
        Some(Either::B(number)) => RawInput::Numeric(number),
        None => RawInput::Absent,
    }
}

/// Standardizes a phone number into its canonical form.
///
/// @param value - Raw phone value (string, number, null or undefined)
/// @returns Canonical phone number or null
#[napi]
pub fn standardize_phone_number(value: Option<Either<String, i64>>) -> Option<String> {
    phone_normalizer::standardize_phone_number(raw_input(value))
}

/// Standardizes a fax number, which may be stored as a number.
///
/// @param value - Raw fax value (string, number, null or undefined)
/// @returns Canonical fax number or null
#[napi]
pub fn standardize_fax_number(value: Option<Either<String, i64>>) -> Option<String> {
    phone_normalizer::standardize_fax_number(raw_input(value))
}

/// Checks whether a value has between 7 and 15 digits.
///
/// @param value - Phone value to check
/// @returns true if plausible
#[napi]
pub fn is_valid_phone_number(value: Option<String>) -> bool {
    phone_normalizer::is_valid_phone_number(value.as_deref())
}

/// Returns the value for display, or "Not provided" when missing.
///
/// @param value - Stored phone value
/// @returns Display string
#[napi]
pub fn display_phone_number(value: Option<String>) -> String {
    phone_normalizer::display_phone_number(value.as_deref()).to_string()
}

/// Returns the digits following the first extension marker.
///
/// @param value - Phone value
/// @returns Extension digits or null
#[napi]
pub fn extract_extension(value: Option<String>) -> Option<String> {
    phone_normalizer::extract_extension(value.as_deref()).map(str::to_string)
}

/// Removes the first extension marker and its digits.
///
/// @param value - Phone value
/// @returns The value without its extension, or null
#[napi]
pub fn remove_extension(value: Option<String>) -> Option<String> {
    phone_normalizer::remove_extension(value.as_deref())
}

/// Standardizes many phone numbers at once.
///
/// @param values - Raw phone values
/// @returns Canonical numbers (null where unusable)
#[napi]
pub fn standardize_batch(values: Vec<String>) -> Vec<Option<String>> {
    phone_normalizer::batch::standardize_batch(&values)
}
