//! Fuzz target for extension utilities.
//!
//! Tests that extraction and removal never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_normalizer::{extension, extract_extension, remove_extension};

fuzz_target!(|data: &str| {
    // These should never panic
    let parsed = extension::split_extension(data);
    assert!(parsed.main_digits().bytes().all(|b| b.is_ascii_digit()));

    if let Some(ext) = extract_extension(data) {
        assert!(!ext.is_empty());
        assert!(ext.bytes().all(|b| b.is_ascii_digit()));
    }

    let removed = remove_extension(data).expect("Some input yields Some output");
    assert!(removed.len() <= data.len(), "Removal should never lengthen the value");
});
