//! Fixed-dimension points under the Chebyshev metric.
//!
//! ## Purpose
//!
//! This module provides the point type every other layer operates on: a
//! stack-allocated vector of `D` coordinates with component-wise arithmetic
//! and the L∞ (Chebyshev) norm.
//!
//! ## Design notes
//!
//! * **Storage**: `[T; D]` inline, `Copy`, no heap allocation.
//! * **Metric**: `norm()` is the maximum absolute coordinate, not Euclidean.
//! * **Generics**: Generic over `Float` types and a const dimension.
//!
//! ## Invariants
//!
//! * Arithmetic never changes the dimension.
//! * Coordinates are expected to be finite; division by zero is not checked.
//!
//! ## Non-goals
//!
//! * This module does not provide other metrics (Euclidean, Manhattan, ...).

// External dependencies
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Sub, SubAssign};
use num_traits::Float;

// ============================================================================
// Point
// ============================================================================

/// A point in `D`-dimensional space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Float, const D: usize> {
    coords: [T; D],
}

impl<T: Float, const D: usize> Default for Point<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float, const D: usize> Point<T, D> {
    /// The origin.
    pub fn zero() -> Self {
        Self {
            coords: [T::zero(); D],
        }
    }

    /// Wrap an array of coordinates.
    pub const fn from_array(coords: [T; D]) -> Self {
        Self { coords }
    }

    /// Number of coordinates.
    pub const fn dim(&self) -> usize {
        D
    }

    pub fn as_array(&self) -> &[T; D] {
        &self.coords
    }

    pub fn as_slice(&self) -> &[T] {
        &self.coords
    }

    /// Chebyshev (L∞) norm: the largest absolute coordinate.
    #[inline]
    pub fn norm(&self) -> T {
        self.coords
            .iter()
            .fold(T::zero(), |max, &x| max.max(x.abs()))
    }

    /// Chebyshev distance, `(self - other).norm()`.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).norm()
    }
}

impl<T: Float, const D: usize> From<[T; D]> for Point<T, D> {
    fn from(coords: [T; D]) -> Self {
        Self::from_array(coords)
    }
}

impl<T: Float, const D: usize> Index<usize> for Point<T, D> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Float, const D: usize> IndexMut<usize> for Point<T, D> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<T: Float, const D: usize> AddAssign for Point<T, D> {
    fn add_assign(&mut self, other: Self) {
        for (a, &b) in self.coords.iter_mut().zip(other.coords.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Float, const D: usize> SubAssign for Point<T, D> {
    fn sub_assign(&mut self, other: Self) {
        for (a, &b) in self.coords.iter_mut().zip(other.coords.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Float, const D: usize> DivAssign<T> for Point<T, D> {
    fn div_assign(&mut self, val: T) {
        for a in self.coords.iter_mut() {
            *a = *a / val;
        }
    }
}

impl<T: Float, const D: usize> Add for Point<T, D> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<T: Float, const D: usize> Sub for Point<T, D> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<T: Float, const D: usize> Div<T> for Point<T, D> {
    type Output = Self;

    fn div(mut self, val: T) -> Self {
        self /= val;
        self
    }
}
