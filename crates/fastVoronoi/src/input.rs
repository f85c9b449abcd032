//! Input abstractions for caller-provided seed points.
//!
//! ## Purpose
//!
//! This module lets [`PartitionBuilder::seed_points`](crate::api::PartitionBuilder::seed_points)
//! accept seeds in several layouts (points, coordinate arrays, flat slices,
//! ndarray matrices) through a single trait.
//!
//! ## Invariants
//!
//! * Every produced point has exactly `D` coordinates, all finite.
//! * Flat inputs are row-major with a length divisible by `D`.
//! * ndarray inputs must have `D` columns and be contiguous in memory.
//!
//! ## Non-goals
//!
//! * This module does not reorder, deduplicate or rescale seeds.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix2};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::VoronoiError;
use crate::primitives::point::Point;

/// Trait for types that can be converted into a list of `D`-dimensional points.
pub trait PointInput<T: Float, const D: usize> {
    /// Convert the input into owned points, in input order.
    fn to_points(&self) -> Result<Vec<Point<T, D>>, VoronoiError>;
}

fn check_finite<T: Float, const D: usize>(
    points: Vec<Point<T, D>>,
) -> Result<Vec<Point<T, D>>, VoronoiError> {
    match points
        .iter()
        .position(|p| p.as_array().iter().any(|x| !x.is_finite()))
    {
        Some(row) => Err(VoronoiError::InvalidInput(format!(
            "point {} has a non-finite coordinate",
            row
        ))),
        None => Ok(points),
    }
}

fn from_flat<T: Float, const D: usize>(flat: &[T]) -> Result<Vec<Point<T, D>>, VoronoiError> {
    if D == 0 || flat.len() % D != 0 {
        return Err(VoronoiError::DimensionMismatch {
            expected: D,
            got: flat.len(),
        });
    }
    let points = flat
        .chunks_exact(D)
        .map(|row| {
            let mut p = Point::zero();
            for (i, &x) in row.iter().enumerate() {
                p[i] = x;
            }
            p
        })
        .collect();
    check_finite(points)
}

impl<T: Float, const D: usize> PointInput<T, D> for [Point<T, D>] {
    fn to_points(&self) -> Result<Vec<Point<T, D>>, VoronoiError> {
        check_finite(self.to_vec())
    }
}

impl<T: Float, const D: usize> PointInput<T, D> for Vec<Point<T, D>> {
    fn to_points(&self) -> Result<Vec<Point<T, D>>, VoronoiError> {
        self.as_slice().to_points()
    }
}

impl<T: Float, const D: usize> PointInput<T, D> for [[T; D]] {
    fn to_points(&self) -> Result<Vec<Point<T, D>>, VoronoiError> {
        check_finite(self.iter().map(|&row| Point::from_array(row)).collect())
    }
}

impl<T: Float, const D: usize> PointInput<T, D> for Vec<[T; D]> {
    fn to_points(&self) -> Result<Vec<Point<T, D>>, VoronoiError> {
        self.as_slice().to_points()
    }
}

impl<T: Float, const D: usize> PointInput<T, D> for [T] {
    fn to_points(&self) -> Result<Vec<Point<T, D>>, VoronoiError> {
        from_flat(self)
    }
}

impl<T: Float, const D: usize> PointInput<T, D> for Vec<T> {
    fn to_points(&self) -> Result<Vec<Point<T, D>>, VoronoiError> {
        from_flat(self.as_slice())
    }
}

#[cfg(feature = "cpu")]
impl<T: Float, S, const D: usize> PointInput<T, D> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn to_points(&self) -> Result<Vec<Point<T, D>>, VoronoiError> {
        if self.ncols() != D {
            return Err(VoronoiError::DimensionMismatch {
                expected: D,
                got: self.ncols(),
            });
        }
        let flat = self.as_slice().ok_or_else(|| {
            VoronoiError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })?;
        from_flat(flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_rows() {
        let rows = vec![[1.0f32, 0.0], [-1.0, 0.0]];
        let pts: Vec<Point<f32, 2>> = rows.to_points().unwrap();
        assert_eq!(pts, vec![Point::from_array([1.0, 0.0]), Point::from_array([-1.0, 0.0])]);
    }

    #[test]
    fn test_flat_slice() {
        let flat = [0.1f64, 0.2, 0.3, 0.4, 0.5, 0.6];
        let pts: Vec<Point<f64, 3>> = flat[..].to_points().unwrap();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1][2], 0.6);

        let bad: Result<Vec<Point<f64, 4>>, _> = flat[..].to_points();
        assert_eq!(
            bad.unwrap_err(),
            VoronoiError::DimensionMismatch { expected: 4, got: 6 }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let rows = vec![[0.0f32, 0.0], [f32::NAN, 1.0]];
        let res: Result<Vec<Point<f32, 2>>, _> = rows.to_points();
        assert!(matches!(res, Err(VoronoiError::InvalidInput(_))));
    }

    #[cfg(feature = "cpu")]
    #[test]
    fn test_ndarray_matrix() {
        let m = ndarray::arr2(&[[1.0f32, 0.0], [0.0, 1.0], [0.0, -1.0]]);
        let pts: Vec<Point<f32, 2>> = m.to_points().unwrap();
        assert_eq!(pts[2], Point::from_array([0.0, -1.0]));

        let wrong: Result<Vec<Point<f32, 3>>, _> = m.to_points();
        assert!(matches!(wrong, Err(VoronoiError::DimensionMismatch { .. })));

        let transposed: Result<Vec<Point<f32, 3>>, _> = m.t().to_points();
        assert!(matches!(transposed, Err(VoronoiError::InvalidInput(_))));
    }
}
