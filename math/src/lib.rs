pub mod error;
pub mod field;
pub mod prelude;

pub use field::PrimeField;
