//! Training outcomes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// Terminal state of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrainState {
    /// The last pass made no mistakes.
    Converged,
    /// The iteration budget ran out while mistakes remained.
    BudgetExhausted
}

/// Result of a training run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainReport {
    /// How the run ended.
    pub state:   TrainState,
    /// Mistakes made in each pass, in order. Its length is the number of
    /// passes run.
    pub history: Vec<usize>
}

impl TrainReport {
    /// Builds a report from per-pass mistake counts.
    #[must_use]
    pub fn from_history(history: Vec<usize>) -> Self {
        let state = match history.last() {
            Some(0) => TrainState::Converged,
            _ => TrainState::BudgetExhausted
        };
        Self {
            state,
            history
        }
    }

    /// Number of full passes over the data.
    #[inline]
    #[must_use]
    pub fn passes(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn converged(&self) -> bool {
        self.state == TrainState::Converged
    }

    /// Mistakes summed over every pass.
    #[must_use]
    pub fn total_mistakes(&self) -> usize {
        self.history.iter().sum()
    }
}
