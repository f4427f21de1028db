//! Shape, label and cost checks for training and test sets.
//!
//! Samples are stored one per column, so a set is `n_features x n_samples`.

use ndarray::{ArrayView1, ArrayView2};

use crate::error::{Error, Result};

/// Training data must hold at least one sample and one label per sample.
pub(crate) fn check_training_set(data: ArrayView2<'_, f64>, labels: &[usize]) -> Result<()> {
    if data.ncols() == 0 {
        return Err(Error::EmptyDataset);
    }
    if labels.len() != data.ncols() {
        return Err(Error::DimensionMismatch {
            expected: data.ncols(),
            got:      labels.len()
        });
    }
    Ok(())
}

/// Feature count of `data` must equal the model's.
pub(crate) fn check_features(data: ArrayView2<'_, f64>, n_features: usize) -> Result<()> {
    if data.nrows() != n_features {
        return Err(Error::DimensionMismatch {
            expected: n_features,
            got:      data.nrows()
        });
    }
    Ok(())
}

/// A single sample must have one value per feature.
pub(crate) fn check_sample(x: ArrayView1<'_, f64>, n_features: usize) -> Result<()> {
    if x.len() != n_features {
        return Err(Error::DimensionMismatch {
            expected: n_features,
            got:      x.len()
        });
    }
    Ok(())
}

pub(crate) fn check_labels(labels: &[usize], n_classes: usize) -> Result<()> {
    match labels.iter().find(|&&label| label >= n_classes) {
        Some(&label) => Err(Error::LabelRange {
            label,
            n_classes
        }),
        None => Ok(())
    }
}

/// Resolves the class count: the explicit one if given, otherwise
/// `max(label) + 1`. A label of `usize::MAX` has no room for a count above
/// it and is out of range.
pub(crate) fn resolve_classes(labels: &[usize], n_classes: Option<usize>) -> Result<usize> {
    match n_classes {
        Some(k) => {
            check_labels(labels, k)?;
            Ok(k)
        }
        None => {
            let max = labels.iter().copied().max().ok_or(Error::EmptyDataset)?;
            max.checked_add(1).ok_or(Error::LabelRange {
                label:     max,
                n_classes: usize::MAX
            })
        }
    }
}

/// One finite, non-negative cost per sample.
pub(crate) fn check_cost(cost: &[f64], n_samples: usize) -> Result<()> {
    if cost.len() != n_samples {
        return Err(Error::DimensionMismatch {
            expected: n_samples,
            got:      cost.len()
        });
    }
    match cost.iter().position(|c| !c.is_finite() || *c < 0.0) {
        Some(index) => Err(Error::InvalidCost {
            index
        }),
        None => Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};

    use super::*;

    #[test]
    fn empty_dataset_rejected() {
        let data = Array2::<f64>::zeros((2, 0));
        assert_eq!(
            check_training_set(data.view(), &[]),
            Err(Error::EmptyDataset)
        );
    }

    #[test]
    fn label_count_must_match_samples() {
        let data = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            check_training_set(data.view(), &[0, 1]),
            Err(Error::DimensionMismatch {
                expected: 3,
                got:      2
            })
        );
    }

    #[test]
    fn inferred_classes() {
        assert_eq!(resolve_classes(&[0, 2, 1, 2], None), Ok(3));
        assert_eq!(resolve_classes(&[1, 1], None), Ok(2));
    }

    #[test]
    fn largest_label_has_no_class_count() {
        assert_eq!(
            resolve_classes(&[0, usize::MAX], None),
            Err(Error::LabelRange {
                label:     usize::MAX,
                n_classes: usize::MAX
            })
        );
        assert_eq!(resolve_classes(&[usize::MAX - 1], None), Ok(usize::MAX));
    }

    #[test]
    fn sample_length_checked() {
        assert!(check_sample(array![1.0, 2.0].view(), 2).is_ok());
        assert_eq!(
            check_sample(array![1.0].view(), 2),
            Err(Error::DimensionMismatch {
                expected: 2,
                got:      1
            })
        );
    }

    #[test]
    fn explicit_classes_bound_labels() {
        assert_eq!(resolve_classes(&[0, 1], Some(4)), Ok(4));
        assert_eq!(
            resolve_classes(&[0, 5], Some(4)),
            Err(Error::LabelRange {
                label:     5,
                n_classes: 4
            })
        );
    }

    #[test]
    fn cost_checks() {
        assert!(check_cost(&[1.0, 0.0, 3.5], 3).is_ok());
        assert_eq!(
            check_cost(&[1.0], 2),
            Err(Error::DimensionMismatch {
                expected: 2,
                got:      1
            })
        );
        assert_eq!(
            check_cost(&[1.0, -0.5], 2),
            Err(Error::InvalidCost {
                index: 1
            })
        );
        assert_eq!(
            check_cost(&[f64::NAN, 1.0], 2),
            Err(Error::InvalidCost {
                index: 0
            })
        );
    }
}
