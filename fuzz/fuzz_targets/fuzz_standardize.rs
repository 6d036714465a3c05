//! Fuzz target for standardization.
//!
//! Tests that standardization never panics and that canonical output is a
//! fixed point.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phone_normalizer::{standardize_fax_number, standardize_phone_number, RawInput};

#[derive(Debug, Arbitrary)]
enum Field {
    Absent,
    Text(String),
    Numeric(i64),
}

impl From<Field> for RawInput {
    fn from(field: Field) -> Self {
        match field {
            Field::Absent => RawInput::Absent,
            Field::Text(s) => RawInput::from(s),
            Field::Numeric(n) => RawInput::Numeric(n),
        }
    }
}

fuzz_target!(|field: Field| {
    let input = RawInput::from(field);

    let phone = standardize_phone_number(input.clone());
    let fax = standardize_fax_number(input);
    assert_eq!(phone, fax, "Phone and fax paths should agree");

    if let Some(canonical) = phone {
        let again = standardize_phone_number(canonical.as_str());
        assert_eq!(again.as_deref(), Some(canonical.as_str()), "Standardization should be idempotent");
    }
});
