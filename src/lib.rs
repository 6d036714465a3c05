//! # phone_normalizer
//!
//! Phone and fax number normalization for hand-maintained clinic directories.
//!
//! ## Features
//!
//! - Canonical formatting for 7, 10 and 11 digit North American numbers
//! - Extension handling for `x`, `ext`, `extension` and `*` notations
//! - Numeric fax fields handled like text
//! - Lightweight digit-count validation and display fallback
//! - Batch, streaming, directory-cleaning, CLI, WASM and Node.js interfaces
//!
//! Every function is total: malformed input yields `None` (or the bare
//! digits), never a panic or an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use phone_normalizer::{standardize_phone_number, standardize_fax_number, RawInput};
//!
//! assert_eq!(standardize_phone_number("514-696-2442").as_deref(), Some("(514) 696-2442"));
//! assert_eq!(standardize_phone_number("15146962442").as_deref(), Some("+1 (514) 696-2442"));
//! assert_eq!(
//!     standardize_phone_number("(819) 966-6100*333059 *333057").as_deref(),
//!     Some("(819) 966-6100 x333059")
//! );
//! assert_eq!(standardize_phone_number(RawInput::Absent), None);
//! assert_eq!(standardize_fax_number(4186964673_i64).as_deref(), Some("(418) 696-4673"));
//! ```
//!
//! ## Validation and Display
//!
//! ```rust
//! use phone_normalizer::{display_phone_number, is_valid_phone_number};
//!
//! assert!(is_valid_phone_number("(514) 696-2442"));
//! assert!(!is_valid_phone_number("123"));
//! assert_eq!(display_phone_number(None), "Not provided");
//! ```
//!
//! ## Extensions
//!
//! ```rust
//! use phone_normalizer::{extract_extension, remove_extension};
//!
//! assert_eq!(extract_extension("450-759-8222 ext 2787"), Some("2787"));
//! assert_eq!(remove_extension("(514) 413-8777 x 24400").as_deref(), Some("(514) 413-8777"));
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use phone_normalizer::{batch, BatchStandardizer};
//!
//! let phones = vec!["514-696-2442", " ", "123"];
//!
//! let results = BatchStandardizer::new().standardize_all(&phones);
//! assert_eq!(results.len(), 3);
//!
//! let usable = BatchStandardizer::new().require_valid(true).standardize_usable_only(&phones);
//! assert_eq!(usable, vec!["(514) 696-2442"]);
//!
//! let (usable_count, _) = batch::count_usable(&phones);
//! assert_eq!(usable_count, 2);
//! ```
//!
//! ## Canonical Forms
//!
//! | Digits | Example input | Canonical form |
//! |--------|---------------|----------------|
//! | 10 | `514.696.2442` | `(514) 696-2442` |
//! | 11 | `1-514-696-2442` | `+1 (514) 696-2442` |
//! | 7 | `6962442` | `696-2442` |
//! | 12+ | `514696244299` | `(514) 696-2442` |
//! | other | `12345` | `12345` |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for [`RawInput`] |
//! | `parallel` | Rayon-based batch processing |
//! | `directory` | Clinic record cleaning |
//! | `directory-json` | JSON directory loader |
//! | `directory-csv` | CSV directory loader |
//! | `cli` | `phonenorm` command-line tool |
//! | `wasm` | WebAssembly bindings |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
#[cfg(feature = "directory")]
pub mod directory;
pub mod display;
pub mod error;
pub mod extension;
pub mod format;
pub mod input;
pub mod standardize;
pub mod stream;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use batch::BatchStandardizer;
pub use display::{display_phone_number, NOT_PROVIDED};
pub use error::DirectoryError;
pub use extension::{extract_extension, remove_extension, ParsedNumber};
pub use format::NumberShape;
pub use input::RawInput;
pub use standardize::{standardize_fax_number, standardize_phone_number};
pub use validate::{is_valid_phone_number, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
