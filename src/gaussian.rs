// Copyright 2024 Vladimir Kharchev

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Contains the [`GaussianModel`] struct.
//!

use std::f64::consts::SQRT_2;
use std::fmt;

use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_distr::{Normal, StandardNormal};
use statrs::function::erf::erf;

use crate::error::Result;
use crate::fitting::NormalEstimate;

/// `1 / sqrt(2π)`, the normalization factor of the standard normal density.
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// A univariate normal distribution that can be fitted to a dataset.
///
/// The model starts out as the standard normal distribution (or with the parameters given to
/// [`GaussianModel::new`]) and [`GaussianModel::fit`] replaces both parameters at once with their
/// maximum-likelihood estimates.
///
/// # Degenerate scale
/// The standard deviation is never validated. A model fitted to a dataset of identical values has
/// a standard deviation of exactly `0.0`, and then [`GaussianModel::density`] and
/// [`GaussianModel::cumulative_probability`] follow the IEEE rules for division by zero: they
/// return infinite or `NaN` values instead of failing.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianModel {
    mean: f64,
    stddev: f64,
}

impl GaussianModel {
    /// The mean of the default model.
    pub const DEFAULT_MEAN: f64 = 0.0;
    /// The standard deviation of the default model.
    pub const DEFAULT_STDDEV: f64 = 1.0;

    /// Constructs a model with the given parameters.
    ///
    /// `stddev` is not checked; a non-positive value makes the density, the cumulative
    /// probability and the samples meaningless until the model is fitted.
    #[must_use]
    pub fn new(mean: f64, stddev: f64) -> Self {
        Self { mean, stddev }
    }

    /// Returns the standard normal distribution.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Self::DEFAULT_MEAN, Self::DEFAULT_STDDEV)
    }

    /// Constructs a model fitted to `data`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyData`](crate::Error::EmptyData) if `data` is empty.
    pub fn from_data(data: &[f64]) -> Result<Self> {
        let mut model = Self::standard();
        model.fit(data)?;
        Ok(model)
    }

    /// Replaces the parameters with the maximum-likelihood estimates from `data`: the arithmetic
    /// mean and the population standard deviation.
    ///
    /// # Errors
    /// Returns [`Error::EmptyData`](crate::Error::EmptyData) if `data` is empty. The model is
    /// left unchanged in that case.
    pub fn fit(&mut self, data: &[f64]) -> Result<()> {
        let NormalEstimate { mean, stddev } = NormalEstimate::from_samples(data)?;
        if stddev <= 0.0 {
            tracing::warn!(
                n = data.len(),
                mean,
                "fitted standard deviation is zero; density and cumulative probability are undefined"
            );
        }
        tracing::debug!(n = data.len(), mean, stddev, "fitted normal distribution");
        self.mean = mean;
        self.stddev = stddev;
        Ok(())
    }

    /// Returns the probability density at `x`.
    #[must_use]
    pub fn density(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.stddev;
        (FRAC_1_SQRT_2PI / self.stddev) * f64::exp(-0.5 * z * z)
    }

    /// Returns the probability that a value drawn from the distribution is not greater than `x`.
    #[must_use]
    pub fn cumulative_probability(&self, x: f64) -> f64 {
        0.5 * (1.0 + erf((x - self.mean) / (self.stddev * SQRT_2)))
    }

    /// Draws `n` independent values using a generator seeded from the operating system.
    ///
    /// A new generator is created on every call, so the values are not reproducible. Use
    /// [`GaussianModel::sample_with`] to supply a seeded generator.
    ///
    /// # Errors
    /// Returns [`Error::Scale`](crate::Error::Scale) if the standard deviation is not finite.
    pub fn sample(&self, n: usize) -> Result<Vec<f64>> {
        let mut rng = rand::rngs::StdRng::from_entropy();
        self.sample_with(n, &mut rng)
    }

    /// Draws `n` independent values using `rng`.
    ///
    /// # Errors
    /// Returns [`Error::Scale`](crate::Error::Scale) if the standard deviation is not finite.
    pub fn sample_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>> {
        let normal = Normal::new(self.mean, self.stddev)?;
        tracing::trace!(n, mean = self.mean, stddev = self.stddev, "sampling");
        Ok(normal.sample_iter(rng).take(n).collect())
    }

    /// Returns the mean.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the standard deviation, as is, even when it is not positive.
    #[must_use]
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Returns the variance.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.stddev * self.stddev
    }
}

impl Default for GaussianModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution<f64> for GaussianModel {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        self.mean + z * self.stddev
    }
}

impl fmt::Display for GaussianModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N(μ = {}, σ = {})", self.mean, self.stddev)
    }
}
