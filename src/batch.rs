//! Batch standardization for directory imports.
//!
//! Seeding a database from a scraped directory means standardizing hundreds
//! of phone and fax fields at once. This module runs the pipeline over
//! slices, with optional parallel processing using rayon.
//!
//! A value is *usable* when it standardizes to something (and, with
//! [`BatchStandardizer::require_valid`], when the result also passes
//! [`is_valid_phone_number`]).

use crate::standardize::standardize_phone_number;
use crate::validate::is_valid_phone_number;

/// Batch standardizer for processing many phone values.
///
/// # Example
///
/// ```
/// use phone_normalizer::BatchStandardizer;
///
/// let batch = BatchStandardizer::new();
/// let phones = ["514-696-2442", "", "(418) 962-9761*452070"];
/// let results = batch.standardize_all(&phones);
///
/// assert_eq!(results[0].as_deref(), Some("(514) 696-2442"));
/// assert_eq!(results[1], None);
/// assert_eq!(results[2].as_deref(), Some("(418) 962-9761 x452070"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchStandardizer {
    require_valid: bool,
}

impl BatchStandardizer {
    /// Creates a batch standardizer that accepts any formattable value.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also require standardized values to pass the digit-count check.
    ///
    /// With this set, `"123"` (which standardizes to `"123"`) is unusable.
    #[inline]
    pub fn require_valid(mut self, require: bool) -> Self {
        self.require_valid = require;
        self
    }

    /// Standardizes a single value under this batch's policy.
    #[inline]
    pub fn standardize_one(&self, value: &str) -> Option<String> {
        standardize_phone_number(value)
            .filter(|s| !self.require_valid || is_valid_phone_number(s.as_str()))
    }

    /// Standardizes every value, preserving input order.
    pub fn standardize_all<S: AsRef<str>>(&self, values: &[S]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| self.standardize_one(v.as_ref()))
            .collect()
    }

    /// Standardizes the batch and returns only usable results.
    pub fn standardize_usable_only<S: AsRef<str>>(&self, values: &[S]) -> Vec<String> {
        values
            .iter()
            .filter_map(|v| self.standardize_one(v.as_ref()))
            .collect()
    }

    /// Standardizes the batch and partitions it.
    ///
    /// Returns `(usable, unusable)` where `usable` pairs each input index
    /// with its canonical form and `unusable` lists the remaining indices.
    pub fn standardize_partitioned<S: AsRef<str>>(
        &self,
        values: &[S],
    ) -> (Vec<(usize, String)>, Vec<usize>) {
        let mut usable = Vec::new();
        let mut unusable = Vec::new();

        for (i, value) in values.iter().enumerate() {
            match self.standardize_one(value.as_ref()) {
                Some(s) => usable.push((i, s)),
                None => unusable.push(i),
            }
        }

        (usable, unusable)
    }

    /// Standardizes values in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn standardize_parallel<S: AsRef<str> + Sync>(
        &self,
        values: &[S],
    ) -> Vec<Option<String>> {
        use rayon::prelude::*;
        values
            .par_iter()
            .map(|v| self.standardize_one(v.as_ref()))
            .collect()
    }

    /// Standardizes values in parallel, returning only usable ones.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn standardize_parallel_usable_only<S: AsRef<str> + Sync>(
        &self,
        values: &[S],
    ) -> Vec<String> {
        use rayon::prelude::*;
        values
            .par_iter()
            .filter_map(|v| self.standardize_one(v.as_ref()))
            .collect()
    }
}

#[inline]
fn standardize_str(value: &str) -> Option<String> {
    standardize_phone_number(value)
}

/// Standardizes a slice without creating a [`BatchStandardizer`].
///
/// # Example
///
/// ```
/// use phone_normalizer::batch::standardize_batch;
///
/// let results = standardize_batch(&["5146962442", "6962442"]);
/// assert_eq!(results[0].as_deref(), Some("(514) 696-2442"));
/// assert_eq!(results[1].as_deref(), Some("696-2442"));
/// ```
#[inline]
pub fn standardize_batch<S: AsRef<str>>(values: &[S]) -> Vec<Option<String>> {
    values
        .iter()
        .map(|v| standardize_str(v.as_ref()))
        .collect()
}

/// Standardizes a slice in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn standardize_batch_parallel<S: AsRef<str> + Sync>(values: &[S]) -> Vec<Option<String>> {
    use rayon::prelude::*;
    values
        .par_iter()
        .map(|v| standardize_str(v.as_ref()))
        .collect()
}

/// Counts usable and unusable values without keeping the results.
///
/// # Returns
///
/// Tuple of (usable_count, unusable_count)
///
/// # Example
///
/// ```
/// use phone_normalizer::batch::count_usable;
///
/// let (usable, unusable) = count_usable(&["514-696-2442", " ", "n/a"]);
/// assert_eq!(usable, 1);
/// assert_eq!(unusable, 2);
/// ```
#[inline]
pub fn count_usable<S: AsRef<str>>(values: &[S]) -> (usize, usize) {
    let usable = values
        .iter()
        .filter(|v| standardize_str(v.as_ref()).is_some())
        .count();
    (usable, values.len() - usable)
}

/// Counts usable and unusable values in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_usable_parallel<S: AsRef<str> + Sync>(values: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let usable = values
        .par_iter()
        .filter(|v| standardize_str(v.as_ref()).is_some())
        .count();

    (usable, values.len() - usable)
}
