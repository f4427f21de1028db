//! Utility functions for random number generation and helpers.

use ndarray::ArrayView1;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Fast seedable RNG used by the random initialization strategy.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// # Examples
///
/// ```
/// use perceptron_rs::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Creates a fast RNG with entropy from thread-local RNG.
#[inline]
pub fn rng_from_entropy() -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::from_rng(&mut rand::rng())
}

/// # Overview
///
/// Index of the largest value. Ties resolve to the lowest index, and an
/// empty view yields 0.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use perceptron_rs::utils::argmax;
///
/// assert_eq!(argmax(array![1.0, 3.0, 3.0, 2.0].view()), 1);
/// ```
#[inline]
pub fn argmax(values: ArrayView1<'_, f64>) -> usize {
    let mut iter = values.iter().enumerate();
    let (mut best, mut best_value) = match iter.next() {
        Some((i, &v)) => (i, v),
        None => return 0
    };
    for (i, &v) in iter {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}
