//! Fuzz target for validation.
//!
//! Tests that the validator agrees with a plain digit count.

#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_normalizer::{display_phone_number, is_valid_phone_number, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};

fuzz_target!(|data: &str| {
    let digits = data.bytes().filter(u8::is_ascii_digit).count();
    let expected = (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits);
    assert_eq!(is_valid_phone_number(data), expected);

    assert_eq!(display_phone_number(data), data);
});
