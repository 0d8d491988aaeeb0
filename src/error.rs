//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HibeError {
    /// The randomness source failed to produce bytes.
    #[error("randomness source failed")]
    RandomnessFailure(#[source] rand_core::Error),

    /// Identity is empty, exceeds the hierarchy depth bound, or (for
    /// delegation) does not extend the parent key's identity.
    #[error("invalid identity")]
    InvalidIdentity,

    /// A marshalled buffer had the wrong length, or a group element failed
    /// its on-curve or subgroup membership check.
    #[error("failed to decode wire format")]
    DecodeError,
}

impl From<rand_core::Error> for HibeError {
    fn from(e: rand_core::Error) -> Self {
        HibeError::RandomnessFailure(e)
    }
}
