//! Parallel classification and evaluation using rayon.
//!
//! Only prediction runs in parallel. Training stays sequential because each
//! online update depends on the parameters left by the previous sample.

use ndarray::{Array1, ArrayView2, Axis};
use rayon::prelude::*;

use crate::{
    dataset::check_features,
    error::{Error, Result},
    model::Classifier
};

/// # Overview
///
/// Predicts every column of `data` in parallel. Output order matches the
/// column order.
pub fn classify<C>(model: &C, data: ArrayView2<'_, f64>) -> Result<Array1<usize>>
where
    C: Classifier + Sync
{
    check_features(data, model.n_features())?;
    let predictions: Vec<usize> = data
        .axis_iter(Axis(1))
        .into_par_iter()
        .map(|x| model.predict(x))
        .collect();
    Ok(Array1::from(predictions))
}

/// # Overview
///
/// Parallel accuracy over the columns of `data`.
pub fn evaluate<C>(model: &C, data: ArrayView2<'_, f64>, labels: &[usize]) -> Result<f64>
where
    C: Classifier + Sync
{
    if labels.len() != data.ncols() {
        return Err(Error::DimensionMismatch {
            expected: data.ncols(),
            got:      labels.len()
        });
    }
    if labels.is_empty() {
        return Ok(0.0);
    }
    let predictions = classify(model, data)?;
    let correct = predictions
        .iter()
        .zip(labels)
        .filter(|(p, y)| p == y)
        .count();
    Ok(correct as f64 / labels.len() as f64)
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::Perceptron;

    #[test]
    fn matches_sequential() {
        let data = array![
            [0.0, 0.0, 5.0, 5.0, -5.0, -5.0],
            [0.0, 1.0, 5.0, 6.0, 5.0, 6.0]
        ];
        let labels = [0, 0, 1, 1, 2, 2];
        let p = Perceptron::new(data.view(), &labels, 50).unwrap();

        assert_eq!(classify(&p, data.view()).unwrap(), p.classify(data.view()).unwrap());
        assert_eq!(evaluate(&p, data.view(), &labels).unwrap(), 1.0);
    }
}
