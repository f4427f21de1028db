//! Weight initialization strategies.
//!
//! A strategy allocates the `n_features x n_classes` weight matrix and the
//! `n_classes` bias vector a [`Perceptron`](crate::Perceptron) starts from.

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::utils::{FastRng, rng_from_entropy, rng_from_seed};

/// # Overview
///
/// Produces initial perceptron parameters.
///
/// Implementations must return a weight matrix of exactly
/// `n_features x n_classes` and a bias vector of exactly `n_classes`.
pub trait WeightInitialization {
    fn initialize(&mut self, n_features: usize, n_classes: usize) -> (Array2<f64>, Array1<f64>);
}

/// # Overview
///
/// All weights and biases start at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroInitialization;

impl WeightInitialization for ZeroInitialization {
    #[inline]
    fn initialize(&mut self, n_features: usize, n_classes: usize) -> (Array2<f64>, Array1<f64>) {
        (
            Array2::zeros((n_features, n_classes)),
            Array1::zeros(n_classes)
        )
    }
}

/// # Overview
///
/// Weights and biases drawn uniformly from `[0, 1)`.
///
/// The generator advances on every call, so one instance used for several
/// learners gives each of them different starting parameters.
///
/// # Examples
///
/// ```
/// use perceptron_rs::{RandomInitialization, WeightInitialization};
///
/// let mut init = RandomInitialization::new(7);
/// let (weights, bias) = init.initialize(3, 2);
///
/// assert_eq!(weights.dim(), (3, 2));
/// assert!(bias.iter().all(|b| (0.0..1.0).contains(b)));
/// ```
#[derive(Debug, Clone)]
pub struct RandomInitialization {
    rng: FastRng
}

impl RandomInitialization {
    /// Deterministic generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rng_from_seed(seed)
        }
    }
}

impl Default for RandomInitialization {
    fn default() -> Self {
        Self {
            rng: rng_from_entropy()
        }
    }
}

impl WeightInitialization for RandomInitialization {
    fn initialize(&mut self, n_features: usize, n_classes: usize) -> (Array2<f64>, Array1<f64>) {
        let rng = &mut self.rng;
        let weights = Array2::from_shape_fn((n_features, n_classes), |_| rng.random::<f64>());
        let bias = Array1::from_shape_fn(n_classes, |_| rng.random::<f64>());
        (weights, bias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions() {
        let (weights, bias) = ZeroInitialization.initialize(4, 3);

        assert_eq!(weights.dim(), (4, 3));
        assert_eq!(bias.len(), 3);
        assert!(weights.iter().chain(bias.iter()).all(|&v| v == 0.0));
    }

    #[test]
    fn random_in_unit_interval() {
        let (weights, bias) = RandomInitialization::new(42).initialize(5, 4);

        assert_eq!(weights.dim(), (5, 4));
        assert_eq!(bias.len(), 4);
        assert!(
            weights
                .iter()
                .chain(bias.iter())
                .all(|v| (0.0..1.0).contains(v))
        );
    }

    #[test]
    fn random_same_seed_same_parameters() {
        let a = RandomInitialization::new(9).initialize(3, 3);
        let b = RandomInitialization::new(9).initialize(3, 3);

        assert_eq!(a, b);
    }

    #[test]
    fn random_advances_between_calls() {
        let mut init = RandomInitialization::new(9);
        let first = init.initialize(3, 3);
        let second = init.initialize(3, 3);

        assert_ne!(first, second);
    }

    #[test]
    fn degenerate_shapes() {
        let (weights, bias) = RandomInitialization::new(1).initialize(0, 2);
        assert_eq!(weights.dim(), (0, 2));
        assert_eq!(bias.len(), 2);
    }
}
