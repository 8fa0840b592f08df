//! Pure numeric kernels.
//!
//! Every kernel is a total function over its validated input: no I/O, no
//! shared state. Each kernel checks its own argument values and fails with a
//! typed [`NumericError`] instead of panicking, so callers can render the
//! failure into an API response.

mod factors;
mod fibonacci;
mod primes;

pub use factors::{gcd, hcf, lcm};
pub use fibonacci::fibonacci;
pub use primes::{filter_primes, is_prime};

use thiserror::Error;

/// Errors raised by the numeric kernels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Input violates a kernel precondition (empty sequence, zero element).
    #[error("{0}")]
    InvalidArgument(String),

    /// Intermediate or final value does not fit in a 64-bit signed integer.
    #[error("{0} exceeds the 64-bit integer range")]
    Overflow(&'static str),
}

impl NumericError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        NumericError::InvalidArgument(message.into())
    }
}
