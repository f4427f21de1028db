//! Multi-class perceptron trained online, one sample at a time.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Config,
    dataset::{
        check_cost, check_features, check_labels, check_sample, check_training_set, resolve_classes
    },
    error::{Error, Result},
    init::{WeightInitialization, ZeroInitialization},
    model::{Classifier, WeakLearner},
    training::{TrainReport, TrainState},
    update::{SimpleWeightUpdate, WeightUpdate},
    utils::argmax
};

/// # Overview
///
/// Linear multi-class classifier. Class `c` scores a sample `x` as
/// `weights.column(c) . x + bias[c]` and the highest score wins, ties going
/// to the lowest class index.
///
/// Data is laid out one sample per column (`n_features x n_samples`).
/// Weights are `n_features x n_classes`.
///
/// The update rule `U` and the initialization `I` are picked at
/// construction. Every constructor trains immediately.
///
/// With the `serde` feature a model persists as `{ weights, bias, config,
/// report }`. Strategies are not stored and come back as their defaults.
/// Restoring rejects a record whose bias length differs from the weight
/// columns or whose config does not validate.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use perceptron_rs::{Perceptron, TrainState};
///
/// let data = array![[0.0, 0.0, 5.0, 5.0], [0.0, 1.0, 5.0, 6.0]];
/// let labels = [0, 0, 1, 1];
///
/// let p = Perceptron::new(data.view(), &labels, 10).unwrap();
/// assert_eq!(p.report().state, TrainState::Converged);
///
/// let test = array![[0.0, 5.0], [0.5, 5.5]];
/// assert_eq!(p.classify(test.view()).unwrap().to_vec(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "PerceptronRecord", bound(deserialize = "U: Default, I: Default"))
)]
pub struct Perceptron<U = SimpleWeightUpdate, I = ZeroInitialization> {
    weights: Array2<f64>,
    bias:    Array1<f64>,
    config:  Config,
    report:  TrainReport,
    #[cfg_attr(feature = "serde", serde(skip))]
    update:  U,
    #[cfg_attr(feature = "serde", serde(skip))]
    init:    I
}

impl Perceptron {
    /// # Overview
    ///
    /// Zero-initialized perceptron trained with the classic update for at
    /// most `max_iterations` passes. The class count is `max(label) + 1`.
    ///
    /// # Errors
    ///
    /// `InvalidIterations` for a zero budget, `EmptyDataset` for no samples,
    /// `DimensionMismatch` when `labels.len() != data.ncols()`.
    pub fn new(data: ArrayView2<'_, f64>, labels: &[usize], max_iterations: usize) -> Result<Self> {
        Self::with_config(data, labels, Config::with_iterations(max_iterations)?)
    }
}

impl<U, I> Perceptron<U, I>
where
    U: WeightUpdate,
    I: WeightInitialization
{
    /// # Overview
    ///
    /// Trains with default strategies and the given config.
    pub fn with_config(data: ArrayView2<'_, f64>, labels: &[usize], config: Config) -> Result<Self>
    where
        U: Default,
        I: Default
    {
        Self::with_strategies(data, labels, config, I::default(), U::default())
    }

    /// # Overview
    ///
    /// Initializes parameters with `init` and trains with `update`.
    pub fn with_strategies(
        data: ArrayView2<'_, f64>,
        labels: &[usize],
        config: Config,
        init: I,
        update: U
    ) -> Result<Self> {
        Self::build(data, None, labels, config, init, update)
    }

    /// # Overview
    ///
    /// Weak learner for a boosting round.
    ///
    /// Reuses `other`'s config and update rule but none of its parameters:
    /// weights and bias come from a fresh `I::default()` initialization,
    /// then are trained with the weighted update using one `cost` per
    /// sample. With [`RandomInitialization`](crate::RandomInitialization)
    /// every round therefore starts from its own random parameters.
    ///
    /// # Errors
    ///
    /// Everything [`Perceptron::new`] reports, plus `DimensionMismatch` for a
    /// cost vector of the wrong length and `InvalidCost` for a negative or
    /// non-finite entry.
    pub fn boosted(
        other: &Self,
        data: ArrayView2<'_, f64>,
        cost: &[f64],
        labels: &[usize]
    ) -> Result<Self>
    where
        U: Clone,
        I: Default
    {
        Self::boosted_with(other, data, cost, labels, I::default())
    }

    /// # Overview
    ///
    /// Like [`Perceptron::boosted`] with a caller-supplied initialization,
    /// for drivers that seed every round themselves.
    pub fn boosted_with(
        other: &Self,
        data: ArrayView2<'_, f64>,
        cost: &[f64],
        labels: &[usize],
        init: I
    ) -> Result<Self>
    where
        U: Clone
    {
        Self::build(
            data,
            Some(cost),
            labels,
            other.config,
            init,
            other.update.clone()
        )
    }

    fn build(
        data: ArrayView2<'_, f64>,
        cost: Option<&[f64]>,
        labels: &[usize],
        config: Config,
        mut init: I,
        update: U
    ) -> Result<Self> {
        config.validate()?;
        check_training_set(data, labels)?;
        if let Some(cost) = cost {
            check_cost(cost, data.ncols())?;
        }
        let n_classes = resolve_classes(labels, config.n_classes)?;

        let (weights, bias) = init.initialize(data.nrows(), n_classes);
        debug_assert_eq!(weights.dim(), (data.nrows(), n_classes));
        debug_assert_eq!(bias.len(), n_classes);

        let mut model = Self {
            weights,
            bias,
            config,
            report: TrainReport::from_history(Vec::new()),
            update,
            init
        };
        model.report = model.fit(data, labels, cost);
        Ok(model)
    }

    /// # Overview
    ///
    /// Continues training the current parameters for up to
    /// `max_iterations` more passes.
    pub fn train(&mut self, data: ArrayView2<'_, f64>, labels: &[usize]) -> Result<TrainReport> {
        self.check_training_input(data, labels)?;
        self.report = self.fit(data, labels, None);
        Ok(self.report.clone())
    }

    /// # Overview
    ///
    /// Continues training with the weighted update, one cost per sample.
    pub fn train_weighted(
        &mut self,
        data: ArrayView2<'_, f64>,
        labels: &[usize],
        cost: &[f64]
    ) -> Result<TrainReport> {
        self.check_training_input(data, labels)?;
        check_cost(cost, data.ncols())?;
        self.report = self.fit(data, labels, Some(cost));
        Ok(self.report.clone())
    }

    /// # Overview
    ///
    /// Single online step on `(x, y)`. Returns `true` when the sample was
    /// misclassified and the parameters were updated.
    ///
    /// With `cost` the weighted update is used.
    pub fn train_one(&mut self, x: ArrayView1<'_, f64>, y: usize, cost: Option<f64>) -> Result<bool> {
        check_sample(x, self.n_features())?;
        check_labels(&[y], self.n_classes())?;
        if let Some(c) = cost
            && (!c.is_finite() || c < 0.0)
        {
            return Err(Error::InvalidCost {
                index: 0
            });
        }
        Ok(self.step(x, y, cost))
    }

    fn check_training_input(&self, data: ArrayView2<'_, f64>, labels: &[usize]) -> Result<()> {
        check_training_set(data, labels)?;
        check_features(data, self.n_features())?;
        check_labels(labels, self.n_classes())
    }

    /// Runs passes in column order until one is mistake-free or the budget
    /// is spent. Inputs are already validated.
    fn fit(&mut self, data: ArrayView2<'_, f64>, labels: &[usize], cost: Option<&[f64]>) -> TrainReport {
        let mut history = Vec::new();

        for pass in 0..self.config.max_iterations {
            let mut mistakes = 0;
            for (j, (x, &y)) in data.axis_iter(Axis(1)).zip(labels).enumerate() {
                if self.step(x, y, cost.map(|c| c[j])) {
                    mistakes += 1;
                }
            }

            history.push(mistakes);
            debug!(pass = pass + 1, mistakes, "perceptron pass finished");

            if mistakes == 0 {
                break;
            }
        }

        let report = TrainReport::from_history(history);
        info!(
            state = ?report.state,
            passes = report.passes(),
            weighted = cost.is_some(),
            n_features = self.n_features(),
            n_classes = self.n_classes(),
            "perceptron training finished"
        );
        report
    }

    #[inline]
    fn step(&mut self, x: ArrayView1<'_, f64>, y: usize, cost: Option<f64>) -> bool {
        let predicted = self.predict(x);
        if predicted == y {
            return false;
        }

        match cost {
            Some(c) => {
                self.update
                    .update_weighted(x, &mut self.weights, &mut self.bias, predicted, y, c)
            }
            None => self
                .update
                .update(x, &mut self.weights, &mut self.bias, predicted, y)
        }
        true
    }
}

impl<U, I> Perceptron<U, I> {
    /// # Overview
    ///
    /// Per-class scores `weights^T x + bias`.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != self.n_features()`.
    #[inline]
    pub fn activations(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        self.weights.t().dot(&x) + &self.bias
    }

    /// # Overview
    ///
    /// Predicted class of a single sample.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != self.n_features()`. See
    /// [`Perceptron::try_predict`].
    #[inline]
    pub fn predict(&self, x: ArrayView1<'_, f64>) -> usize {
        argmax(self.activations(x).view())
    }

    /// # Overview
    ///
    /// Predicted class of a single sample, or `DimensionMismatch` when its
    /// length is not `n_features`.
    pub fn try_predict(&self, x: ArrayView1<'_, f64>) -> Result<usize> {
        Classifier::try_predict(self, x)
    }

    /// # Overview
    ///
    /// Predicted class of every column of `data`.
    pub fn classify(&self, data: ArrayView2<'_, f64>) -> Result<Array1<usize>> {
        Classifier::classify(self, data)
    }

    /// # Overview
    ///
    /// Writes one prediction per column of `data` into `out`.
    pub fn classify_into(&self, data: ArrayView2<'_, f64>, out: &mut [usize]) -> Result<()> {
        check_features(data, self.n_features())?;
        if out.len() != data.ncols() {
            return Err(Error::DimensionMismatch {
                expected: data.ncols(),
                got:      out.len()
            });
        }
        for (slot, x) in out.iter_mut().zip(data.axis_iter(Axis(1))) {
            *slot = self.predict(x);
        }
        Ok(())
    }

    /// # Overview
    ///
    /// Fraction of columns classified as their label (0.0 to 1.0).
    pub fn evaluate(&self, data: ArrayView2<'_, f64>, labels: &[usize]) -> Result<f64> {
        Classifier::evaluate(self, data, labels)
    }

    #[inline]
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    #[inline]
    pub fn bias(&self) -> &Array1<f64> {
        &self.bias
    }

    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.nrows()
    }

    #[inline]
    pub fn n_classes(&self) -> usize {
        self.weights.ncols()
    }

    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Strategy the current parameters were initialized with.
    #[inline]
    pub fn initialization(&self) -> &I {
        &self.init
    }

    /// Report of the most recent training run.
    #[inline]
    pub fn report(&self) -> &TrainReport {
        &self.report
    }

    /// Whether the most recent training run converged.
    #[inline]
    pub fn converged(&self) -> bool {
        self.report.state == TrainState::Converged
    }
}

impl<U, I> Classifier for Perceptron<U, I> {
    fn n_features(&self) -> usize {
        Perceptron::n_features(self)
    }

    fn n_classes(&self) -> usize {
        Perceptron::n_classes(self)
    }

    fn predict(&self, x: ArrayView1<'_, f64>) -> usize {
        Perceptron::predict(self, x)
    }
}

impl<U, I> WeakLearner for Perceptron<U, I>
where
    U: WeightUpdate + Clone,
    I: WeightInitialization + Default
{
    fn reweighted(&self, data: ArrayView2<'_, f64>, cost: &[f64], labels: &[usize]) -> Result<Self> {
        Self::boosted(self, data, cost, labels)
    }
}

/// Persisted form of a [`Perceptron`], checked before it becomes a model.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PerceptronRecord {
    weights: Array2<f64>,
    bias:    Array1<f64>,
    config:  Config,
    report:  TrainReport
}

#[cfg(feature = "serde")]
impl<U: Default, I: Default> TryFrom<PerceptronRecord> for Perceptron<U, I> {
    type Error = Error;

    fn try_from(record: PerceptronRecord) -> Result<Self> {
        record.config.validate()?;
        let n_classes = record.weights.ncols();
        if n_classes == 0 {
            return Err(Error::InvalidClasses);
        }
        if record.bias.len() != n_classes {
            return Err(Error::DimensionMismatch {
                expected: n_classes,
                got:      record.bias.len()
            });
        }
        if let Some(k) = record.config.n_classes
            && k != n_classes
        {
            return Err(Error::DimensionMismatch {
                expected: k,
                got:      n_classes
            });
        }

        Ok(Self {
            weights: record.weights,
            bias:    record.bias,
            config:  record.config,
            report:  record.report,
            update:  U::default(),
            init:    I::default()
        })
    }
}
