use math::error::MathError;
use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = InterpolationError> = core::result::Result<T, E>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum InterpolationError {
    #[error("at least one point is required")]
    EmptyPoints,
    #[error("not enough points for a unique interpolation: need {required}, got {provided}")]
    NotEnoughPoints { required: usize, provided: usize },
    #[error(transparent)]
    Math(#[from] MathError),
}
