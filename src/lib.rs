//! # Perceptron
//!
//! Online, mistake-driven multi-class perceptron, usable on its own or as a
//! weak learner inside a boosting ensemble.
//!
//! Data is column-major in the machine-learning sense: a set of samples is an
//! `n_features x n_samples` [`ndarray`] matrix with one sample per column.
//!
//! # Features
//!
//! - `parallel`: read-only batch classification via rayon
//! - `serde`: serialization of the trained model (weights, bias, config and
//!   last training report; strategies are restored from `Default`). Without
//!   this feature models cannot be persisted.
//!
//! # Examples
//!
//! ```
//! use ndarray::array;
//! use perceptron_rs::Perceptron;
//!
//! let x = array![[0.0, 0.0, 5.0, 5.0], [0.0, 1.0, 5.0, 6.0]];
//! let y = [0, 0, 1, 1];
//!
//! let p = Perceptron::new(x.view(), &y, 10).unwrap();
//! assert!(p.converged());
//!
//! // boosting round: fresh parameters, same budget, per-sample costs
//! let weak = Perceptron::boosted(&p, x.view(), &[1.0, 1.0, 1.0, 10.0], &y).unwrap();
//! assert_eq!(weak.max_iterations(), 10);
//! ```

mod config;
mod dataset;
pub mod error;
mod init;
mod model;
mod perceptron;
mod training;
mod update;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use config::{Config, ConfigBuilder, DEFAULT_MAX_ITERATIONS};
pub use error::{Error, Result};
pub use init::{RandomInitialization, WeightInitialization, ZeroInitialization};
pub use model::{Classifier, WeakLearner};
pub use perceptron::Perceptron;
pub use training::{TrainReport, TrainState};
pub use update::{SimpleWeightUpdate, WeightUpdate};
