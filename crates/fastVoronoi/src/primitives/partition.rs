//! A single Voronoi cell's sampled points.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Point;

/// Points whose nearest seed is `seed_index`.
///
/// Point order is append order and carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T: Float, const D: usize> {
    seed_index: usize,
    points: Vec<Point<T, D>>,
}

impl<T: Float, const D: usize> Partition<T, D> {
    pub fn new(seed_index: usize) -> Self {
        Self {
            seed_index,
            points: Vec::new(),
        }
    }

    /// Build a partition from already-assigned points.
    pub fn from_points(seed_index: usize, points: Vec<Point<T, D>>) -> Self {
        Self { seed_index, points }
    }

    pub fn seed_index(&self) -> usize {
        self.seed_index
    }

    pub fn points(&self) -> &[Point<T, D>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Point<T, D>) {
        self.points.push(point);
    }

    /// Component-wise mean of the points.
    ///
    /// Each point is divided by the partition size before it is added so the
    /// running sum stays within the magnitude of a single point. An empty
    /// partition yields the origin.
    pub fn centroid(&self) -> Point<T, D> {
        let mut center = Point::zero();
        let size = match T::from(self.points.len()) {
            Some(size) => size,
            None => return center,
        };
        for &point in &self.points {
            center += point / size;
        }
        center
    }
}
