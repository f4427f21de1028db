//! Configuration and builder for the perceptron.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Iteration budget used when none is given.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// # Overview
///
/// Training parameters for a [`Perceptron`](crate::Perceptron).
///
/// `n_classes` is `None` by default, in which case the class count is
/// inferred from the labels as `max(label) + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct Config {
    pub max_iterations: usize,
    pub n_classes:      Option<usize>
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Config with the given budget and inferred class count.
    pub fn with_iterations(max_iterations: usize) -> Result<Self> {
        Self::builder().max_iterations(max_iterations).build()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::InvalidIterations);
        }
        if self.n_classes == Some(0) {
            return Err(Error::InvalidClasses);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            n_classes:      None
        }
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_iterations: Option<usize>,
    n_classes:      Option<usize>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the maximum number of full passes over the data (default: 1000).
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// # Overview
    ///
    /// Fixes the number of output classes instead of inferring it.
    pub fn classes(mut self, n: usize) -> Self {
        self.n_classes = Some(n);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            max_iterations: self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
            n_classes:      self.n_classes
        };
        config.validate()?;
        Ok(config)
    }
}
