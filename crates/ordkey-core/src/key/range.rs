//! Module: key::range
//! Responsibility: bound checks and multi-column row ordering built on
//! `IndexKey::compare`.
//! Does not own: scan execution or byte-level range lowering.

use crate::key::{CompareError, IndexKey};
use std::{cmp::Ordering, ops::Bound};

///
/// Direction
///
/// Per-column traversal direction of a composite index.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Apply this direction to an ascending ordering.
    #[must_use]
    pub const fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

///
/// KeyRange
///
/// Lower/upper bounds of one index range scan.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyRange {
    pub lower: Bound<IndexKey>,
    pub upper: Bound<IndexKey>,
}

impl KeyRange {
    #[must_use]
    pub const fn new(lower: Bound<IndexKey>, upper: Bound<IndexKey>) -> Self {
        Self { lower, upper }
    }

    /// Range with no bounds on either side.
    #[must_use]
    pub const fn full() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// Range holding exactly the keys that compare equal to `key`.
    #[must_use]
    pub fn point(key: IndexKey) -> Self {
        Self::new(Bound::Included(key.clone()), Bound::Included(key))
    }

    /// Whether `key` lies within both bounds.
    ///
    /// Fails when a bound and the key belong to incomparable kinds.
    pub fn contains(&self, key: &IndexKey) -> Result<bool, CompareError> {
        let above_lower = match &self.lower {
            Bound::Included(lower) => key.compare(lower)?.is_ge(),
            Bound::Excluded(lower) => key.compare(lower)?.is_gt(),
            Bound::Unbounded => true,
        };
        if !above_lower {
            return Ok(false);
        }

        let below_upper = match &self.upper {
            Bound::Included(upper) => key.compare(upper)?.is_le(),
            Bound::Excluded(upper) => key.compare(upper)?.is_lt(),
            Bound::Unbounded => true,
        };

        Ok(below_upper)
    }

    /// Whether no key can satisfy both bounds.
    pub fn is_empty(&self) -> Result<bool, CompareError> {
        let (lower, lower_inclusive) = match &self.lower {
            Bound::Included(key) => (key, true),
            Bound::Excluded(key) => (key, false),
            Bound::Unbounded => return Ok(false),
        };
        let (upper, upper_inclusive) = match &self.upper {
            Bound::Included(key) => (key, true),
            Bound::Excluded(key) => (key, false),
            Bound::Unbounded => return Ok(false),
        };

        let empty = match lower.compare(upper)? {
            Ordering::Greater => true,
            Ordering::Equal => !(lower_inclusive && upper_inclusive),
            Ordering::Less => false,
        };

        Ok(empty)
    }
}

/// Lexicographic order of two composite index rows.
///
/// Column `i` is ordered by `directions[i]`, or ascending when no direction
/// is given. Only the common prefix of the two rows is compared.
pub fn compare_rows(
    left: &[IndexKey],
    right: &[IndexKey],
    directions: &[Direction],
) -> Result<Ordering, CompareError> {
    for (column, (l, r)) in left.iter().zip(right).enumerate() {
        let direction = directions.get(column).copied().unwrap_or_default();
        let ord = direction.apply(l.compare(r)?);
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }

    Ok(Ordering::Equal)
}

///
/// TESTS
///
