//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `numeric` - Pure numeric kernels (Fibonacci, primality, HCF/LCM)
//! - `operation` - Typed request model decoded from the wire payload

pub mod numeric;
pub mod operation;

pub use numeric::NumericError;
pub use operation::{Operation, RequestError, ALLOWED_KEYS};
