//! Traits shared by classifiers and boosting weak learners.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::{
    dataset::{check_features, check_sample},
    error::{Error, Result}
};

/// Common interface for trained classifiers over `n_features x n_samples`
/// data.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use perceptron_rs::{Classifier, Perceptron};
///
/// let data = array![[0.0, 0.0, 5.0, 5.0], [0.0, 1.0, 5.0, 6.0]];
/// let labels = [0, 0, 1, 1];
/// let p = Perceptron::new(data.view(), &labels, 10).unwrap();
///
/// fn accuracy<C: Classifier>(c: &C, x: ndarray::ArrayView2<f64>, y: &[usize]) -> f64 {
///     c.evaluate(x, y).unwrap()
/// }
///
/// assert_eq!(accuracy(&p, data.view(), &labels), 1.0);
/// ```
pub trait Classifier {
    /// Number of input features.
    fn n_features(&self) -> usize;

    /// Number of output classes.
    fn n_classes(&self) -> usize;

    /// Predicts the class of a single sample.
    ///
    /// Implementations may panic when `x.len() != self.n_features()`; use
    /// [`try_predict`](Classifier::try_predict) for unchecked input.
    fn predict(&self, x: ArrayView1<'_, f64>) -> usize;

    /// Predicts the class of a single sample after checking its length.
    fn try_predict(&self, x: ArrayView1<'_, f64>) -> Result<usize> {
        check_sample(x, self.n_features())?;
        Ok(self.predict(x))
    }

    /// Predicts the class of every column.
    fn classify(&self, data: ArrayView2<'_, f64>) -> Result<Array1<usize>> {
        check_features(data, self.n_features())?;
        Ok(data.axis_iter(Axis(1)).map(|x| self.predict(x)).collect())
    }

    /// Fraction of columns predicted as their label.
    fn evaluate(&self, data: ArrayView2<'_, f64>, labels: &[usize]) -> Result<f64> {
        if labels.len() != data.ncols() {
            return Err(Error::DimensionMismatch {
                expected: data.ncols(),
                got:      labels.len()
            });
        }
        if labels.is_empty() {
            return Ok(0.0);
        }
        let correct = self
            .classify(data)?
            .iter()
            .zip(labels)
            .filter(|(p, y)| p == y)
            .count();
        Ok(correct as f64 / labels.len() as f64)
    }
}

/// A classifier a boosting driver can retrain on re-weighted samples.
pub trait WeakLearner: Classifier + Sized {
    /// Fresh learner with the same settings, trained with one cost per
    /// sample.
    fn reweighted(&self, data: ArrayView2<'_, f64>, cost: &[f64], labels: &[usize]) -> Result<Self>;
}
