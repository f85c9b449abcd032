//! Uniform point sampling inside the unit Chebyshev ball.
//!
//! ## Purpose
//!
//! This module draws the random points that make up both the seed set and
//! the point cloud.
//!
//! ## Design notes
//!
//! * **Rejection sampling**: Each coordinate is drawn from `[-1, 1)` and the
//!   whole point is redrawn while `norm() > 1`.
//! * **L∞ ball**: Under the Chebyshev norm every draw from `[-1, 1)^D` is
//!   already inside the ball, so the first draw is always accepted. The loop
//!   is kept so that swapping in a different norm keeps the sampler correct.
//! * **Generators**: Callers own their generator; nothing here is shared.
//!
//! ## Invariants
//!
//! * Every returned point satisfies `norm() <= 1`.

// External dependencies
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

// Internal dependencies
use crate::primitives::point::Point;

/// Draw a point uniformly from the closed unit ball under the L∞ norm.
pub fn random_point<T, const D: usize, R>(rng: &mut R) -> Point<T, D>
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    let distr = Uniform::new(-T::one(), T::one());
    let mut point = Point::zero();
    loop {
        for i in 0..D {
            point[i] = distr.sample(rng);
        }
        if point.norm() <= T::one() {
            return point;
        }
    }
}

/// Stateless handle over [`random_point`] for callers that want a value to
/// pass around.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPointSource;

impl RandomPointSource {
    pub fn sample<T, const D: usize, R>(&self, rng: &mut R) -> Point<T, D>
    where
        T: Float + SampleUniform,
        R: Rng + ?Sized,
    {
        random_point(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_samples_stay_in_unit_ball() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let p: Point<f32, 8> = random_point(&mut rng);
            assert!(p.norm() <= 1.0, "norm {} escaped unit ball", p.norm());
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let source = RandomPointSource;
        for _ in 0..16 {
            let p: Point<f64, 3> = source.sample(&mut a);
            let q: Point<f64, 3> = source.sample(&mut b);
            assert_eq!(p, q);
        }
    }

    #[test]
    fn test_coordinates_cover_both_signs() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pts: Vec<Point<f32, 1>> = (0..1000).map(|_| random_point(&mut rng)).collect();
        assert!(pts.iter().any(|p| p[0] < -0.5));
        assert!(pts.iter().any(|p| p[0] > 0.5));
    }
}
