//! Password generation and scoring.

pub mod charset;
mod generate;
mod strength;

pub use generate::{GenerateError, generate};
pub use strength::{StrengthLabel, StrengthResult, estimate};
