//! Module: key::compare
//! Responsibility: the caller side of cross-kind comparison and the
//! structural equality/hash contract.
//! Does not own: numeric arithmetic, which lives in the callee variants.
//! Boundary: every ordering decision over `IndexKey` goes through `compare`.

use crate::{
    key::{IndexKey, KeyRef, NumericIndexKey, NumericKey, TypedIndexKey, hash::canonical_f64_bits},
    obs::log_warn,
};
use ordkey_primitives::IndexKeyType;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// CompareError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum CompareError {
    #[error("cannot compare {left} key with {right} key")]
    IncomparableKinds {
        left: IndexKeyType,
        right: IndexKeyType,
    },
}

impl IndexKey {
    /// Total order over keys of comparable kinds.
    ///
    /// `Null` sorts before everything. Numeric kinds compare exactly by
    /// mathematical value regardless of representation. Other kinds only
    /// compare within their own domain.
    pub fn compare(&self, other: &Self) -> Result<Ordering, CompareError> {
        match (self, other) {
            (Self::Null, Self::Null) => return Ok(Ordering::Equal),
            (Self::Null, _) => return Ok(Ordering::Less),
            (_, Self::Null) => return Ok(Ordering::Greater),
            _ => {}
        }

        if let Some(rhs) = other.as_numeric()
            && let Some(ord) = self.compare_numeric(rhs)
        {
            return Ok(ord);
        }

        let ord = match (self, other) {
            (Self::Time(l), Self::Time(r)) => l.cmp(r),
            (Self::Date(l), Self::Date(r)) => l.cmp(r),
            (Self::Timestamp(l), Self::Timestamp(r)) => l.cmp(r),
            (Self::Bytes(l), Self::Bytes(r)) => l.cmp(r),
            (Self::String(l), Self::String(r)) => l.cmp(r),
            _ => return Err(self.incomparable(other)),
        };

        Ok(ord)
    }

    /// Whether `compare` would succeed for this pair of keys.
    #[must_use]
    pub const fn is_comparable_with(&self, other: &Self) -> bool {
        self.key_type().is_comparable_with(other.key_type())
    }

    // Hand our own native value to the other side and flip its answer.
    // `None` when this key is not numeric.
    fn compare_numeric(&self, rhs: NumericKey<'_>) -> Option<Ordering> {
        let ord = match self {
            Self::Boolean(k) => rhs.compare_bool(k.get()),
            Self::Byte(k) => rhs.compare_i8(k.get()),
            Self::Short(k) => rhs.compare_i16(k.get()),
            Self::Int(k) => rhs.compare_i32(k.get()),
            Self::Long(k) => rhs.compare_i64(k.get()),
            Self::Float(k) => rhs.compare_f32(k.get()),
            Self::Double(k) => rhs.compare_f64(k.get()),
            Self::Decimal(k) => rhs.compare_decimal(k.key()),
            _ => return None,
        };

        Some(ord.reverse())
    }

    fn incomparable(&self, other: &Self) -> CompareError {
        let (left, right) = (self.key_type(), other.key_type());

        log_warn!(
            component = "compare",
            event = "incomparable_kinds",
            left = left.label(),
            right = right.label(),
        );

        CompareError::IncomparableKinds { left, right }
    }
}

///
/// STRUCTURAL EQUALITY
///
/// Two keys are `==` when they have the same kind and compare equal.
/// Cross-kind numeric equality (`Int 3` vs `Double 3.0`) is only visible
/// through `compare`, which keeps `Hash` cheap and consistent.
///

impl PartialEq for IndexKey {
    fn eq(&self, other: &Self) -> bool {
        self.key_type() == other.key_type() && self.compare(other) == Ok(Ordering::Equal)
    }
}

impl Eq for IndexKey {}

impl Hash for IndexKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_type().code().hash(state);

        match self.key() {
            KeyRef::Null => {}
            KeyRef::Boolean(v) => v.hash(state),
            KeyRef::Byte(v) => v.hash(state),
            KeyRef::Short(v) => v.hash(state),
            KeyRef::Int(v) => v.hash(state),
            KeyRef::Long(v) => v.hash(state),
            KeyRef::Decimal(v) => v.hash(state),
            KeyRef::Double(v) => canonical_f64_bits(v).hash(state),
            KeyRef::Float(v) => canonical_f64_bits(f64::from(v)).hash(state),
            KeyRef::Time(v) => v.hash(state),
            KeyRef::Date(v) => v.hash(state),
            KeyRef::Timestamp(v) => v.hash(state),
            KeyRef::Bytes(v) => v.hash(state),
            KeyRef::String(v) => v.hash(state),
        }
    }
}
