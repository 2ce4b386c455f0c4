pub use crate::{
    error::{MathError, Result},
    field::PrimeField,
};
