use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MathError, Result};

/// Prime field ℤ_m for a caller-supplied modulus.
///
/// The modulus is a runtime value scoped to a single computation; there is
/// no persistent notion of "the field". Elements are plain `u64` values in
/// canonical form, i.e. in `[0, modulus)`. Every operation reduces its
/// operands first and returns a canonical result, so callers may pass
/// unreduced values. Products are widened to `u128` before reduction, which
/// keeps the arithmetic exact for any representable modulus.
///
/// The modulus is assumed prime but not verified; with a composite modulus
/// only [`PrimeField::try_inverse`] can fail.
///
/// # Examples
///
/// ```
/// use math::prelude::*;
///
/// let field = PrimeField::new(17)?;
/// assert_eq!(field.add(9, 12), 4);
/// assert_eq!(field.sub(3, 5), 15);
/// assert_eq!(field.mul(field.try_inverse(5)?, 5), 1);
/// # Ok::<(), MathError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Construct the field ℤ_m, rejecting any modulus below 2.
    pub fn new(modulus: u64) -> Result<Self> {
        if modulus < 2 {
            return Err(MathError::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    #[inline]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Canonical representative of `value`.
    #[inline]
    pub const fn reduce(&self, value: u64) -> u64 {
        value % self.modulus
    }

    #[inline]
    pub const fn add(&self, a: u64, b: u64) -> u64 {
        // The reduced operands can sum past u64::MAX for moduli near 2^64.
        let sum = self.reduce(a) as u128 + self.reduce(b) as u128;
        (sum % self.modulus as u128) as u64
    }

    /// `a - b`, with negative differences normalized into `[0, m)` by
    /// adding the modulus.
    #[inline]
    pub const fn sub(&self, a: u64, b: u64) -> u64 {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            self.modulus - (b - a)
        }
    }

    /// Additive inverse, `0 - a`.
    #[inline]
    pub const fn neg(&self, a: u64) -> u64 {
        self.sub(0, a)
    }

    #[inline]
    pub const fn mul(&self, a: u64, b: u64) -> u64 {
        let product = self.reduce(a) as u128 * self.reduce(b) as u128;
        (product % self.modulus as u128) as u64
    }

    /// `base^exp` by binary square-and-multiply.
    #[must_use]
    pub const fn pow(&self, base: u64, mut exp: u64) -> u64 {
        let mut base = self.reduce(base);
        let mut acc = 1u64;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = self.mul(acc, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse of `a`, via the extended Euclidean algorithm.
    ///
    /// Returns the unique `r` in `[0, m)` with `a·r ≡ 1 (mod m)`. Fails
    /// when `gcd(a, m) != 1`; for a prime modulus that happens exactly when
    /// `a` reduces to zero.
    pub fn try_inverse(&self, a: u64) -> Result<u64> {
        let a = self.reduce(a);
        // Track only the Bezout coefficient of `a`; the invariant is
        // r_i ≡ t_i·a (mod m).
        let (mut r0, mut r1) = (self.modulus as i128, a as i128);
        let (mut t0, mut t1) = (0i128, 1i128);
        while r1 != 0 {
            let quotient = r0 / r1;
            (r0, r1) = (r1, r0 - quotient * r1);
            (t0, t1) = (t1, t0 - quotient * t1);
        }
        if r0 != 1 {
            return Err(MathError::NonInvertible {
                value: a,
                modulus: self.modulus,
            });
        }
        let modulus = self.modulus as i128;
        Ok(((t0 % modulus + modulus) % modulus) as u64)
    }
}

impl Serialize for PrimeField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.modulus.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PrimeField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let modulus = u64::deserialize(deserializer)?;
        Self::new(modulus).map_err(D::Error::custom)
    }
}
