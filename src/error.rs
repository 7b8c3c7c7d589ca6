//! Contains the [`Error`] type returned by the fallible operations of the crate.

/// Errors that can occur while fitting or sampling a [`GaussianModel`](crate::GaussianModel).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset passed to [`GaussianModel::fit`](crate::GaussianModel::fit) had no values.
    #[error("cannot fit a distribution to an empty dataset")]
    EmptyData,

    /// The normal sampler rejected the standard deviation of the model.
    #[error("cannot sample with the current standard deviation: {0}")]
    Scale(#[from] rand_distr::NormalError),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
