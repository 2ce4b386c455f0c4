use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("modulus must be at least 2, got {0}")]
    InvalidModulus(u64),
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NonInvertible { value: u64, modulus: u64 },
}
