use math::PrimeField;

use crate::error::{InterpolationError, Result};
use crate::points::Points;

/// Interpolate the unique minimal-degree polynomial through `points` and
/// evaluate it at the origin, all arithmetic performed modulo `modulus`.
///
/// This is the constant-term recovery step of threshold secret sharing:
/// the shares are points on a secret polynomial and the secret is its
/// value at x = 0.
///
/// # Examples
///
/// ```
/// use lagrange::interpolate;
///
/// assert_eq!(interpolate([(1, 15), (2, 9), (3, 3)], 17)?, 4);
/// // A bare value sequence is sampled at x = 1, 2, 3, …
/// assert_eq!(interpolate([15, 9, 3], 17)?, 4);
/// # Ok::<(), lagrange::InterpolationError>(())
/// ```
pub fn interpolate<P>(points: P, modulus: u64) -> Result<u64>
where
    P: Into<Points>,
{
    interpolate_with_degree(points, modulus, None)
}

/// Like [`interpolate`], but with the target polynomial degree pinned.
///
/// `Some(d)` interpolates through the first `d + 1` points of the
/// canonical order, so a caller holding more shares than the threshold can
/// fix the degree instead of consuming every share; fewer than `d + 1`
/// distinct points fail with [`InterpolationError::NotEnoughPoints`].
/// `None` uses every point.
pub fn interpolate_with_degree<P>(
    points: P,
    modulus: u64,
    degree: Option<usize>,
) -> Result<u64>
where
    P: Into<Points>,
{
    let points = points.into();
    if points.is_empty() {
        return Err(InterpolationError::EmptyPoints);
    }

    let field = PrimeField::new(modulus)?;
    let canonical = points.normalize(&field)?;
    let window = match degree {
        None => canonical.as_slice(),
        Some(degree) => {
            let required = degree.saturating_add(1);
            if canonical.len() < required {
                return Err(InterpolationError::NotEnoughPoints {
                    required,
                    provided: canonical.len(),
                });
            }
            &canonical[..required]
        }
    };
    evaluate_at_zero(&field, window)
}

/// Lagrange sum at the origin: Σᵢ yᵢ · Πⱼ≠ᵢ (0 − xⱼ) · (xᵢ − xⱼ)⁻¹.
///
/// A single point degenerates to its y-value, the empty product being 1.
/// A zero denominator means two x-coordinates are congruent under the
/// modulus and surfaces as [`math::error::MathError::NonInvertible`].
fn evaluate_at_zero(field: &PrimeField, points: &[(u64, u64)]) -> Result<u64> {
    let mut sum = 0;
    for (i, &(xi, yi)) in points.iter().enumerate() {
        let mut term = yi;
        for (j, &(xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let numerator = field.neg(xj);
            let inverse = field.try_inverse(field.sub(xi, xj))?;
            term = field.mul(term, field.mul(numerator, inverse));
        }
        sum = field.add(sum, term);
    }
    Ok(sum)
}
