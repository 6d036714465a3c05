//! Streaming standardization for processing values as they arrive.
//!
//! Iterator adapters that standardize phone values lazily, useful for
//! reading large directory exports line by line without loading everything
//! into memory.
//!
//! # Example
//!
//! ```
//! use phone_normalizer::stream::StandardizeExt;
//!
//! let phones = vec!["514-696-2442", " ", "418 724-8591"];
//! let usable = phones.iter()
//!     .map(|s| *s)
//!     .standardize_numbers()
//!     .filter(|r| r.is_some())
//!     .count();
//!
//! assert_eq!(usable, 2);
//! ```

use crate::standardize::standardize_phone_number;

#[inline]
fn standardize_str(value: &str) -> Option<String> {
    standardize_phone_number(value)
}

/// A stream that standardizes every value of the wrapped iterator.
///
/// Created by [`StandardizeExt::standardize_numbers`].
#[derive(Debug, Clone)]
pub struct StandardizeStream<I> {
    inner: I,
}

impl<I> StandardizeStream<I> {
    /// Creates a new StandardizeStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for StandardizeStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Option<String>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| standardize_str(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for StandardizeStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for StandardizeStream<I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| standardize_str(s.as_ref()))
    }
}

/// A stream that only yields values which standardize to something.
///
/// Blank and digit-free values are skipped.
#[derive(Debug, Clone)]
pub struct UsableOnlyStream<I> {
    inner: I,
}

impl<I> UsableOnlyStream<I> {
    /// Creates a new UsableOnlyStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I, S> Iterator for UsableOnlyStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(|s| standardize_str(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// A stream that yields each result with its original index.
#[derive(Debug, Clone)]
pub struct IndexedStandardizeStream<I> {
    inner: I,
    index: usize,
}

impl<I> IndexedStandardizeStream<I> {
    /// Creates a new IndexedStandardizeStream.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner, index: 0 }
    }
}

impl<I, S> Iterator for IndexedStandardizeStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (usize, Option<String>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| {
            let result = standardize_str(s.as_ref());
            let index = self.index;
            self.index += 1;
            (index, result)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait adding phone standardization to any iterator.
///
/// Implemented for all iterators; the adapters require items that are
/// string-like.
pub trait StandardizeExt: Iterator + Sized {
    /// Standardizes each value yielded by the iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use phone_normalizer::stream::StandardizeExt;
    ///
    /// let phones = ["5146962442", ""];
    /// let out: Vec<_> = phones.iter().copied().standardize_numbers().collect();
    /// assert_eq!(out, vec![Some("(514) 696-2442".to_string()), None]);
    /// ```
    fn standardize_numbers(self) -> StandardizeStream<Self>;

    /// Standardizes and yields only usable values.
    ///
    /// # Example
    ///
    /// ```
    /// use phone_normalizer::stream::StandardizeExt;
    ///
    /// let phones = ["5146962442", "n/a", "6962442"];
    /// let usable: Vec<_> = phones.iter().copied().standardize_usable_only().collect();
    /// assert_eq!(usable, vec!["(514) 696-2442", "696-2442"]);
    /// ```
    fn standardize_usable_only(self) -> UsableOnlyStream<Self>;

    /// Standardizes with index tracking.
    ///
    /// # Example
    ///
    /// ```
    /// use phone_normalizer::stream::StandardizeExt;
    ///
    /// let phones = ["5146962442", "n/a"];
    /// for (idx, result) in phones.iter().copied().standardize_indexed() {
    ///     match result {
    ///         Some(phone) => println!("row {}: {}", idx, phone),
    ///         None => println!("row {}: unusable", idx),
    ///     }
    /// }
    /// ```
    fn standardize_indexed(self) -> IndexedStandardizeStream<Self>;
}

impl<I: Iterator + Sized> StandardizeExt for I {
    #[inline]
    fn standardize_numbers(self) -> StandardizeStream<Self> {
        StandardizeStream::new(self)
    }

    #[inline]
    fn standardize_usable_only(self) -> UsableOnlyStream<Self> {
        UsableOnlyStream::new(self)
    }

    #[inline]
    fn standardize_indexed(self) -> IndexedStandardizeStream<Self> {
        IndexedStandardizeStream::new(self)
    }
}

/// Creates a standardization stream from a slice of strings.
#[inline]
pub fn standardize_stream<'a, S: AsRef<str> + 'a>(
    values: &'a [S],
) -> StandardizeStream<impl Iterator<Item = &'a S>> {
    StandardizeStream::new(values.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATIONAL: &str = "514-696-2442";
    const LOCAL: &str = "696-2442";
    const BLANK: &str = "   ";

    #[test]
    fn test_standardize_stream() {
        let values = vec![NATIONAL, BLANK, LOCAL];
        let results: Vec<_> = values.iter().copied().standardize_numbers().collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref(), Some("(514) 696-2442"));
        assert_eq!(results[1], None);
        assert_eq!(results[2].as_deref(), Some("696-2442"));
    }

    #[test]
    fn test_usable_only_stream() {
        let values = vec![NATIONAL, BLANK, LOCAL, "n/a"];
        let usable: Vec<_> = values.iter().copied().standardize_usable_only().collect();
        assert_eq!(usable, vec!["(514) 696-2442", "696-2442"]);
    }

    #[test]
    fn test_indexed_stream() {
        let values = vec![NATIONAL, BLANK, LOCAL];
        let results: Vec<_> = values.iter().copied().standardize_indexed().collect();

        assert_eq!(results[0].0, 0);
        assert!(results[0].1.is_some());
        assert_eq!(results[1].0, 1);
        assert!(results[1].1.is_none());
        assert_eq!(results[2].0, 2);
    }

    #[test]
    fn test_size_hint() {
        let values = vec![NATIONAL, BLANK, LOCAL];
        let stream = values.iter().copied().standardize_numbers();
        assert_eq!(stream.size_hint(), (3, Some(3)));
        assert_eq!(stream.len(), 3);
    }

    #[test]
    fn test_usable_only_size_hint() {
        let values = vec![NATIONAL, BLANK, LOCAL];
        let stream = values.iter().copied().standardize_usable_only();
        assert_eq!(stream.size_hint(), (0, Some(3)));
    }

    #[test]
    fn test_double_ended() {
        let values = vec![NATIONAL, LOCAL];
        let mut stream = values.iter().copied().standardize_numbers();

        assert_eq!(stream.next_back().flatten().as_deref(), Some("696-2442"));
        assert_eq!(stream.next().flatten().as_deref(), Some("(514) 696-2442"));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_standardize_stream_fn() {
        let values = [NATIONAL, BLANK];
        let count = standardize_stream(&values).filter(|r| r.is_some()).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_with_string_lines() {
        let text = "514-696-2442\n\n(418) 962-9761*452070\n";
        let out: Vec<_> = text.lines().standardize_usable_only().collect();
        assert_eq!(out, vec!["(514) 696-2442", "(418) 962-9761 x452070"]);
    }

    #[test]
    fn test_empty_stream() {
        let values: Vec<String> = vec![];
        assert_eq!(values.iter().standardize_numbers().count(), 0);
    }
}
