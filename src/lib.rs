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

//! Fitting, evaluating and sampling a univariate normal distribution.
//!
//! The crate revolves around [`GaussianModel`]. A model is fitted to a dataset by maximum
//! likelihood, after which its probability density and cumulative probability can be evaluated
//! at any point and new values can be drawn from it.
//!
//! # Examples
//!
//! Five measurements of some quantity were taken and the distribution of the measurement error
//! is assumed to be normal:
//! ```
//! use gaussian_model::GaussianModel;
//!
//! let mut model = GaussianModel::default();
//! model.fit(&[1.2, 0.9, 1.5, 1.1, 0.8])?;
//!
//! // The mean and the population standard deviation of the data
//! assert!((model.mean() - 1.1).abs() < 1e-9);
//! assert!((model.stddev() - 0.06_f64.sqrt()).abs() < 1e-9);
//!
//! // The probability of a measurement not exceeding 1.0
//! let p = model.cumulative_probability(1.0);
//! assert!(p > 0.3 && p < 0.4);
//!
//! // Five more simulated measurements
//! let simulated = model.sample(5)?;
//! assert_eq!(simulated.len(), 5);
//! # Ok::<(), gaussian_model::Error>(())
//! ```
//!
//! Sampling uses a freshly seeded generator every time. When the values have to be
//! reproducible, a generator can be supplied instead:
//! ```
//! use gaussian_model::GaussianModel;
//! use rand::SeedableRng;
//!
//! let model = GaussianModel::new(63.2, 4.9);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let first = model.sample_with(3, &mut rng)?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! assert_eq!(first, model.sample_with(3, &mut rng)?);
//! # Ok::<(), gaussian_model::Error>(())
//! ```
//!
//! Fitting requires at least one value, and the model is left as it was otherwise:
//! ```
//! use gaussian_model::{Error, GaussianModel};
//!
//! let mut model = GaussianModel::new(2.0, 0.5);
//! assert!(matches!(model.fit(&[]), Err(Error::EmptyData)));
//! assert_eq!(model, GaussianModel::new(2.0, 0.5));
//! ```
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

pub mod error;
pub mod fitting;
pub mod gaussian;

pub use error::{Error, Result};
pub use gaussian::GaussianModel;
