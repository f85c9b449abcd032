//! Voronoi seed set with exact nearest-seed lookup.
//!
//! ## Purpose
//!
//! This module owns the generator points of the Voronoi diagram and answers
//! "which seed is closest" for sampled points.
//!
//! ## Design notes
//!
//! * **Brute force**: Lookup is a linear scan. Seed counts are in the
//!   hundreds while queries number in the tens of millions, so an index would
//!   not pay for itself.
//! * **Immutability**: Seeds are fixed at construction and shared read-only
//!   across workers (`Arc<SeedSet>`), so no locking is needed.
//!
//! ## Invariants
//!
//! * The set holds at least one seed.
//! * Ties resolve to the lowest seed index.
//!
//! ## Non-goals
//!
//! * Approximate nearest-neighbor search.

// External dependencies
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

// Internal dependencies
use crate::math::sampling::random_point;
use crate::primitives::errors::VoronoiError;
use crate::primitives::point::Point;

/// Immutable collection of Voronoi generator points.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSet<T: Float, const D: usize> {
    points: Vec<Point<T, D>>,
}

impl<T: Float, const D: usize> SeedSet<T, D> {
    /// Sample `n` seeds uniformly from the unit L∞ ball.
    pub fn random<R>(n: usize, rng: &mut R) -> Result<Self, VoronoiError>
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        if n == 0 {
            return Err(VoronoiError::EmptySeedSet);
        }
        let points = (0..n).map(|_| random_point(rng)).collect();
        Ok(Self { points })
    }

    /// Use caller-provided seeds, in order.
    pub fn from_points(points: Vec<Point<T, D>>) -> Result<Self, VoronoiError> {
        if points.is_empty() {
            return Err(VoronoiError::EmptySeedSet);
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point<T, D>] {
        &self.points
    }

    /// Index of the seed closest to `point`.
    ///
    /// Uses a strict `<` so the first seed reaching the minimum distance wins.
    pub fn nearest_index(&self, point: &Point<T, D>) -> usize {
        let mut min_index = 0;
        let mut min_dist = T::max_value();
        for (i, seed) in self.points.iter().enumerate() {
            let dist = seed.distance(point);
            if dist < min_dist {
                min_dist = dist;
                min_index = i;
            }
        }
        min_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn p2(x: f32, y: f32) -> Point<f32, 2> {
        Point::from_array([x, y])
    }

    #[test]
    fn test_single_seed_always_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let seeds = SeedSet::<f32, 8>::random(1, &mut rng).unwrap();
        for _ in 0..500 {
            let q = random_point(&mut rng);
            assert_eq!(seeds.nearest_index(&q), 0);
        }
    }

    #[test]
    fn test_known_boundaries() {
        let seeds = SeedSet::from_points(vec![p2(-1.0, 0.0), p2(1.0, 0.0), p2(0.0, 1.0)]).unwrap();
        assert_eq!(seeds.nearest_index(&p2(-0.8, -0.1)), 0);
        assert_eq!(seeds.nearest_index(&p2(0.9, -0.2)), 1);
        assert_eq!(seeds.nearest_index(&p2(0.1, 0.9)), 2);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let seeds = SeedSet::from_points(vec![p2(0.0, 1.0), p2(-1.0, 0.0), p2(1.0, 0.0)]).unwrap();
        // Equidistant (L∞ = 1) from seeds 1 and 2, farther from seed 0.
        assert_eq!(seeds.nearest_index(&p2(0.0, -0.5)), 1);
        // Equidistant from all three.
        assert_eq!(seeds.nearest_index(&p2(0.0, 0.0)), 0);
    }

    #[test]
    fn test_empty_seed_set_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            SeedSet::<f32, 2>::random(0, &mut rng).unwrap_err(),
            VoronoiError::EmptySeedSet
        );
        assert!(SeedSet::<f32, 2>::from_points(Vec::new()).is_err());
    }

    #[test]
    fn test_random_seeds_in_unit_ball() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let seeds = SeedSet::<f64, 4>::random(128, &mut rng).unwrap();
        assert_eq!(seeds.len(), 128);
        assert!(!seeds.is_empty());
        assert!(seeds.points().iter().all(|s| s.norm() <= 1.0));
    }
}
