//! Sorted result series and their textual rendering.

// External dependencies
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt;

/// Per-partition values sorted ascending; the seed correspondence is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSeries<T>(Vec<T>);

impl<T: Float> SortedSeries<T> {
    /// Sort `values` ascending. Incomparable values (NaN) compare equal.
    pub fn from_unsorted(mut values: Vec<T>) -> Self {
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Self(values)
    }
}

impl<T> SortedSeries<T> {
    pub fn values(&self) -> &[T] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders `{v1, v2, ..., vn}`.
impl<T: fmt::Display> fmt::Display for SortedSeries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}
