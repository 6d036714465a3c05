//! Batch and streaming standardization example.
//!
//! Run with: `cargo run --example batch`
//! With parallel: `cargo run --example batch --features parallel`

use phone_normalizer::{
    batch::{count_usable, BatchStandardizer},
    stream::StandardizeExt,
};

fn main() {
    println!("=== Batch Phone Standardization ===\n");

    let column = vec![
        "450-654-7525",
        "",
        "(819) 966-6100*333059 *333057",
        "418 724-8591",
        "n/a",
        "12345",
        "(514) 413-8777 x 24400 or x124399 5144138700*2 to discuss if pt has been seen",
    ];

    // Example 1: Standardize everything, keeping positions
    println!("All values:");
    let results = BatchStandardizer::new().standardize_all(&column);
    for (raw, result) in column.iter().zip(&results) {
        println!("  {:?} => {:?}", raw, result);
    }
    println!();

    // Example 2: Counts
    let (usable, unusable) = count_usable(&column);
    println!("Usable: {}, unusable: {}\n", usable, unusable);

    // Example 3: Strict mode drops values that fail validation
    let strict = BatchStandardizer::new()
        .require_valid(true)
        .standardize_usable_only(&column);
    println!("Strict usable values:");
    for phone in &strict {
        println!("  {}", phone);
    }
    println!();

    // Example 4: Partition into usable rows and rows to fix by hand
    let (ok, to_fix) = BatchStandardizer::new().standardize_partitioned(&column);
    println!("Rows standardized: {:?}", ok.iter().map(|(i, _)| i).collect::<Vec<_>>());
    println!("Rows to fix by hand: {:?}\n", to_fix);

    // Example 5: Streaming
    println!("Streaming with indices:");
    for (idx, result) in column.iter().standardize_indexed() {
        match result {
            Some(phone) => println!("  row {}: {}", idx, phone),
            None => println!("  row {}: unusable", idx),
        }
    }

    #[cfg(feature = "parallel")]
    {
        use phone_normalizer::batch::standardize_batch_parallel;

        let large: Vec<String> = (0..10_000)
            .map(|i| format!("514-{:03}-{:04}", i % 1000, i))
            .collect();
        let standardized = standardize_batch_parallel(&large);
        println!(
            "\nParallel: standardized {} of {} values",
            standardized.iter().filter(|r| r.is_some()).count(),
            large.len()
        );
    }
}
