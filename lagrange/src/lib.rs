pub mod error;
pub mod interpolate;
pub mod points;

pub use error::{InterpolationError, Result};
pub use interpolate::{interpolate, interpolate_with_degree};
pub use points::Points;
