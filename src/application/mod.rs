//! Application layer - orchestrates domain operations over the ports.

mod evaluate;

pub use evaluate::{EvaluateError, EvaluateOperationHandler};
