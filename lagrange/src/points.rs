use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use math::PrimeField;

use crate::error::{InterpolationError, Result};

/// A collection of sample points in one of the accepted shapes.
///
/// The interpolation entry points take anything convertible into this enum,
/// so the same logical point set can be supplied as a map, as ordered or
/// unordered (x, y) pairs, or as a bare sequence of y-values whose
/// x-coordinates are implicitly 1, 2, 3, … in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Points {
    /// Mapping from x-coordinate to y-coordinate.
    Mapping(BTreeMap<u64, u64>),
    /// (x, y) pairs in caller order.
    Pairs(Vec<(u64, u64)>),
    /// (x, y) pairs with no meaningful order.
    PairSet(BTreeSet<(u64, u64)>),
    /// y-values only, sampled at x = 1, 2, 3, … in sequence order.
    Values(Vec<u64>),
}

impl Points {
    /// Number of entries before reduction and deduplication.
    pub fn len(&self) -> usize {
        match self {
            Points::Mapping(map) => map.len(),
            Points::Pairs(pairs) => pairs.len(),
            Points::PairSet(set) => set.len(),
            Points::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reduce every coordinate into the field and produce the canonical
    /// point list.
    ///
    /// `Mapping` and `PairSet` entries are visited in ascending order,
    /// `Pairs` and `Values` in caller order; the order is observable only
    /// through degree-bounded truncation. Entries that reduce to an
    /// already-seen (x, y) collapse to one. A repeated x with a different y
    /// is kept verbatim, and the interpolator rejects it when the
    /// corresponding basis denominator turns out to be zero.
    pub fn normalize(&self, field: &PrimeField) -> Result<Vec<(u64, u64)>> {
        if self.is_empty() {
            return Err(InterpolationError::EmptyPoints);
        }

        let mut canonical = Vec::with_capacity(self.len());
        match self {
            Points::Mapping(map) => {
                for (&x, &y) in map {
                    push_reduced(&mut canonical, field, x, y);
                }
            }
            Points::Pairs(pairs) => {
                for &(x, y) in pairs {
                    push_reduced(&mut canonical, field, x, y);
                }
            }
            Points::PairSet(set) => {
                for &(x, y) in set {
                    push_reduced(&mut canonical, field, x, y);
                }
            }
            Points::Values(values) => {
                for (i, &y) in values.iter().enumerate() {
                    push_reduced(&mut canonical, field, i as u64 + 1, y);
                }
            }
        }
        Ok(canonical)
    }
}

fn push_reduced(canonical: &mut Vec<(u64, u64)>, field: &PrimeField, x: u64, y: u64) {
    let entry = (field.reduce(x), field.reduce(y));
    if !canonical.contains(&entry) {
        canonical.push(entry);
    }
}

impl From<BTreeMap<u64, u64>> for Points {
    fn from(map: BTreeMap<u64, u64>) -> Self {
        Points::Mapping(map)
    }
}

impl From<HashMap<u64, u64>> for Points {
    fn from(map: HashMap<u64, u64>) -> Self {
        Points::Mapping(map.into_iter().collect())
    }
}

impl From<Vec<(u64, u64)>> for Points {
    fn from(pairs: Vec<(u64, u64)>) -> Self {
        Points::Pairs(pairs)
    }
}

impl From<&[(u64, u64)]> for Points {
    fn from(pairs: &[(u64, u64)]) -> Self {
        Points::Pairs(pairs.to_vec())
    }
}

impl<const N: usize> From<[(u64, u64); N]> for Points {
    fn from(pairs: [(u64, u64); N]) -> Self {
        Points::Pairs(pairs.to_vec())
    }
}

impl From<BTreeSet<(u64, u64)>> for Points {
    fn from(set: BTreeSet<(u64, u64)>) -> Self {
        Points::PairSet(set)
    }
}

impl From<HashSet<(u64, u64)>> for Points {
    fn from(set: HashSet<(u64, u64)>) -> Self {
        Points::PairSet(set.into_iter().collect())
    }
}

impl From<Vec<u64>> for Points {
    fn from(values: Vec<u64>) -> Self {
        Points::Values(values)
    }
}

impl From<&[u64]> for Points {
    fn from(values: &[u64]) -> Self {
        Points::Values(values.to_vec())
    }
}

impl<const N: usize> From<[u64; N]> for Points {
    fn from(values: [u64; N]) -> Self {
        Points::Values(values.to_vec())
    }
}
