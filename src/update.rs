//! Mistake-driven weight update rules.

use ndarray::{Array1, Array2, ArrayView1};

/// # Overview
///
/// Corrects the parameters after a misclassified sample.
///
/// Both methods are only called when `predicted != actual`. The weighted form
/// is used when training with a per-sample cost vector; it is a separate rule,
/// not the unweighted rule with a default cost.
pub trait WeightUpdate {
    fn update(
        &self,
        sample: ArrayView1<'_, f64>,
        weights: &mut Array2<f64>,
        bias: &mut Array1<f64>,
        predicted: usize,
        actual: usize
    );

    #[allow(clippy::too_many_arguments)]
    fn update_weighted(
        &self,
        sample: ArrayView1<'_, f64>,
        weights: &mut Array2<f64>,
        bias: &mut Array1<f64>,
        predicted: usize,
        actual: usize,
        cost: f64
    );
}

/// # Overview
///
/// Classic perceptron correction.
///
/// Moves the predicted class's column away from the sample and the true
/// class's column toward it, with a step of 1 (or `cost`). Bias entries move
/// by the same step. No other column is touched.
///
/// # Examples
///
/// ```
/// use ndarray::{Array1, Array2, array};
/// use perceptron_rs::{SimpleWeightUpdate, WeightUpdate};
///
/// let mut weights = Array2::zeros((2, 2));
/// let mut bias = Array1::zeros(2);
///
/// SimpleWeightUpdate.update(array![1.0, 2.0].view(), &mut weights, &mut bias, 0, 1);
///
/// assert_eq!(weights, array![[-1.0, 1.0], [-2.0, 2.0]]);
/// assert_eq!(bias, array![-1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleWeightUpdate;

impl WeightUpdate for SimpleWeightUpdate {
    #[inline]
    fn update(
        &self,
        sample: ArrayView1<'_, f64>,
        weights: &mut Array2<f64>,
        bias: &mut Array1<f64>,
        predicted: usize,
        actual: usize
    ) {
        let mut wrong = weights.column_mut(predicted);
        wrong -= &sample;
        bias[predicted] -= 1.0;

        let mut right = weights.column_mut(actual);
        right += &sample;
        bias[actual] += 1.0;
    }

    #[inline]
    fn update_weighted(
        &self,
        sample: ArrayView1<'_, f64>,
        weights: &mut Array2<f64>,
        bias: &mut Array1<f64>,
        predicted: usize,
        actual: usize,
        cost: f64
    ) {
        weights.column_mut(predicted).scaled_add(-cost, &sample);
        bias[predicted] -= cost;

        weights.column_mut(actual).scaled_add(cost, &sample);
        bias[actual] += cost;
    }
}
