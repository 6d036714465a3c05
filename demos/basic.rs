//! Basic phone number normalization example.
//!
//! Run with: `cargo run --example basic`

use phone_normalizer::{
    display_phone_number, extract_extension, is_valid_phone_number, remove_extension,
    standardize_fax_number, standardize_phone_number, RawInput,
};

fn main() {
    println!("=== Basic Phone Normalization ===\n");

    // Example 1: Standardize values as they appear in a directory
    let raw_values = [
        "514-696-2442",
        " 450-434-8006",
        "1-514-696-2442",
        "696 2442",
        "(819) 966-6100*333059 *333057",
        "450-759-8222 ext 2787",
        "12345",
        "n/a",
    ];

    println!("Standardizing phone numbers:");
    for raw in raw_values {
        let standardized = standardize_phone_number(raw);
        println!(
            "  {:32} => {}",
            format!("{:?}", raw),
            display_phone_number(standardized.as_deref())
        );
    }
    println!();

    // Example 2: Fax numbers stored as integers
    println!("Standardizing fax numbers:");
    for fax in [
        RawInput::Numeric(4186964673),
        RawInput::from("450-470-9705"),
        RawInput::Absent,
    ] {
        let label = format!("{:?}", fax);
        println!(
            "  {:32} => {}",
            label,
            display_phone_number(standardize_fax_number(fax).as_deref())
        );
    }
    println!();

    // Example 3: Validation
    println!("Validation (7 to 15 digits):");
    for value in ["(514) 696-2442", "123", "(819) 966-6100 x333059"] {
        println!(
            "  {:32} => {}",
            value,
            if is_valid_phone_number(value) { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 4: Extension utilities
    let with_ext = "(514) 413-8777 x 24400";
    println!("Extension utilities on {:?}:", with_ext);
    println!("  Extension: {:?}", extract_extension(with_ext));
    println!("  Without:   {:?}", remove_extension(with_ext));
}
