//! Contains [`NormalEstimate`], the maximum-likelihood estimate of a normal distribution.
//!
//! The estimate uses the population standard deviation, i.e. the sum of squared deviations is
//! divided by the number of values and not by one less than it.
use statrs::statistics::Statistics;

use crate::error::{Error, Result};

/// The mean and the standard deviation of a dataset, estimated by maximum likelihood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalEstimate {
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The population (biased) standard deviation of the dataset.
    pub stddev: f64,
}

impl NormalEstimate {
    /// Estimates the parameters of a normal distribution from `samples`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyData`] if `samples` is empty.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptyData);
        }
        let mean = Statistics::mean(samples);
        let stddev = Statistics::population_std_dev(samples);
        Ok(Self { mean, stddev })
    }
}
