//! Raw input handling for phone and fax fields.
//!
//! Directory records arrive with phone fields that may be missing, blank,
//! free text, or (for fax columns exported from spreadsheets) bare integers.
//! [`RawInput`] captures those shapes explicitly and [`preprocess`] reduces
//! them to the trimmed text the rest of the pipeline works on.
//!
//! # Example
//!
//! ```
//! use phone_normalizer::input::{preprocess, RawInput};
//!
//! assert_eq!(preprocess(&RawInput::from("  514-696-2442 ")).as_deref(), Some("514-696-2442"));
//! assert_eq!(preprocess(&RawInput::from(4186964673_i64)).as_deref(), Some("4186964673"));
//! assert_eq!(preprocess(&RawInput::from("   ")), None);
//! assert_eq!(preprocess(&RawInput::Absent), None);
//! ```

use std::borrow::Cow;

/// A phone or fax value as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawInput {
    /// No value was supplied.
    #[default]
    Absent,
    /// A textual value, possibly blank or messy.
    Text(String),
    /// A numeric value, as found in numeric-typed fax columns.
    Numeric(i64),
}

impl RawInput {
    /// Returns `true` if no value was supplied.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for RawInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<u32> for RawInput {
    fn from(value: u32) -> Self {
        Self::Numeric(i64::from(value))
    }
}

impl From<u64> for RawInput {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Reduces a raw input to the trimmed text the pipeline parses.
///
/// - `Absent` yields `None`.
/// - `Numeric` yields its plain decimal rendering. Zero is what an empty
///   numeric spreadsheet cell exports as, so it yields `None`.
/// - `Text` is trimmed; blank text yields `None`.
pub fn preprocess(input: &RawInput) -> Option<Cow<'_, str>> {
    match input {
        RawInput::Absent => None,
        RawInput::Numeric(0) => None,
        RawInput::Numeric(n) => Some(Cow::Owned(n.to_string())),
        RawInput::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Cow::Borrowed(trimmed))
            }
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::RawInput;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Text(String),
        Int(i64),
        Unsigned(u64),
        Float(f64),
    }

    impl<'de> Deserialize<'de> for RawInput {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let wire = Option::<Wire>::deserialize(deserializer)?;
            Ok(match wire {
                None => RawInput::Absent,
                Some(Wire::Text(s)) => RawInput::Text(s),
                Some(Wire::Int(n)) => RawInput::Numeric(n),
                Some(Wire::Unsigned(n)) => RawInput::from(n),
                Some(Wire::Float(f)) => {
                    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
                        RawInput::Numeric(f as i64)
                    } else {
                        RawInput::Text(f.to_string())
                    }
                }
            })
        }
    }

    impl Serialize for RawInput {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                RawInput::Absent => serializer.serialize_none(),
                RawInput::Text(s) => serializer.serialize_str(s),
                RawInput::Numeric(n) => serializer.serialize_i64(*n),
            }
        }
    }
}
