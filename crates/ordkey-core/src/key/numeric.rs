//! Module: key::numeric
//! Responsibility: concrete numeric key variants and the callee side of the
//! double-dispatch comparison protocol.
//! Boundary: `IndexKey::compare` plays the caller; this module answers
//! "compare yourself against this primitive" for every numeric kind.

use crate::types::Decimal;
use derive_more::Display;
use ordkey_primitives::IndexKeyType;
use std::cmp::Ordering;

// 2^63; the first f64 above every i64.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

///
/// TypedIndexKey
///
/// Identity of one concrete key variant: its registered tag and a borrow of
/// its native payload.
///

pub trait TypedIndexKey {
    type Native: ?Sized;

    const KEY_TYPE: IndexKeyType;

    fn key(&self) -> &Self::Native;

    fn key_type(&self) -> IndexKeyType {
        Self::KEY_TYPE
    }
}

///
/// NumericIndexKey
///
/// Callee side of numeric double dispatch: one entry point per primitive
/// numeric representation. Each returns the sign of `self - val`, computed
/// exactly in whichever of the two representations is more precise.
///
/// Adding a numeric kind means adding one entry point here and one
/// implementation per existing variant.
///

pub trait NumericIndexKey {
    /// Truth value used when a boolean is on the other side.
    fn is_truthy(&self) -> bool;

    fn compare_i64(&self, val: i64) -> Ordering;

    fn compare_f64(&self, val: f64) -> Ordering;

    fn compare_decimal(&self, val: &Decimal) -> Ordering;

    fn compare_bool(&self, val: bool) -> Ordering {
        self.is_truthy().cmp(&val)
    }

    fn compare_i8(&self, val: i8) -> Ordering {
        self.compare_i64(i64::from(val))
    }

    fn compare_i16(&self, val: i16) -> Ordering {
        self.compare_i64(i64::from(val))
    }

    fn compare_i32(&self, val: i32) -> Ordering {
        self.compare_i64(i64::from(val))
    }

    fn compare_f32(&self, val: f32) -> Ordering {
        self.compare_f64(f64::from(val))
    }
}

///
/// BooleanIndexKey
///
/// Orders by truthiness against every numeric kind: `false` equals zero and
/// `true` equals any nonzero value (NaN included).
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BooleanIndexKey(bool);

impl BooleanIndexKey {
    #[must_use]
    pub const fn new(key: bool) -> Self {
        Self(key)
    }

    #[must_use]
    pub const fn get(self) -> bool {
        self.0
    }
}

impl TypedIndexKey for BooleanIndexKey {
    type Native = bool;

    const KEY_TYPE: IndexKeyType = IndexKeyType::Boolean;

    fn key(&self) -> &bool {
        &self.0
    }
}

impl NumericIndexKey for BooleanIndexKey {
    fn is_truthy(&self) -> bool {
        self.0
    }

    fn compare_i64(&self, val: i64) -> Ordering {
        self.0.cmp(&(val != 0))
    }

    fn compare_f64(&self, val: f64) -> Ordering {
        self.0.cmp(&(val != 0.0))
    }

    fn compare_decimal(&self, val: &Decimal) -> Ordering {
        self.0.cmp(&!val.is_zero())
    }
}

macro_rules! integral_index_key {
    ( $( $(#[$meta:meta])* $name:ident($native:ty) => $kind:ident ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
            pub struct $name($native);

            impl $name {
                #[must_use]
                pub const fn new(key: $native) -> Self {
                    Self(key)
                }

                #[must_use]
                pub const fn get(self) -> $native {
                    self.0
                }
            }

            impl TypedIndexKey for $name {
                type Native = $native;

                const KEY_TYPE: IndexKeyType = IndexKeyType::$kind;

                fn key(&self) -> &$native {
                    &self.0
                }
            }

            impl NumericIndexKey for $name {
                fn is_truthy(&self) -> bool {
                    self.0 != 0
                }

                fn compare_i64(&self, val: i64) -> Ordering {
                    i64::from(self.0).cmp(&val)
                }

                fn compare_f64(&self, val: f64) -> Ordering {
                    cmp_i64_f64(i64::from(self.0), val)
                }

                fn compare_decimal(&self, val: &Decimal) -> Ordering {
                    Decimal::from(self.0).cmp(val)
                }
            }
        )*
    };
}

integral_index_key! {
    /// Signed 8-bit key.
    ByteIndexKey(i8) => Byte,
    /// Signed 16-bit key.
    ShortIndexKey(i16) => Short,
    /// Signed 32-bit key.
    IntIndexKey(i32) => Int,
    /// Signed 64-bit key. Compared against floats without a lossy cast.
    LongIndexKey(i64) => Long,
}

macro_rules! float_index_key {
    ( $( $(#[$meta:meta])* $name:ident($native:ty) => $kind:ident ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Display)]
            pub struct $name($native);

            impl $name {
                #[must_use]
                pub const fn new(key: $native) -> Self {
                    Self(key)
                }

                #[must_use]
                pub const fn get(self) -> $native {
                    self.0
                }
            }

            impl TypedIndexKey for $name {
                type Native = $native;

                const KEY_TYPE: IndexKeyType = IndexKeyType::$kind;

                fn key(&self) -> &$native {
                    &self.0
                }
            }

            impl NumericIndexKey for $name {
                fn is_truthy(&self) -> bool {
                    self.0 != 0.0
                }

                fn compare_i64(&self, val: i64) -> Ordering {
                    cmp_i64_f64(val, f64::from(self.0)).reverse()
                }

                fn compare_f64(&self, val: f64) -> Ordering {
                    cmp_f64(f64::from(self.0), val)
                }

                fn compare_decimal(&self, val: &Decimal) -> Ordering {
                    cmp_decimal_f64(val, f64::from(self.0)).reverse()
                }
            }
        )*
    };
}

float_index_key! {
    /// 32-bit binary float key. Widens to `f64` exactly before comparing.
    FloatIndexKey(f32) => Float,
    /// 64-bit binary float key.
    DoubleIndexKey(f64) => Double,
}

///
/// DecimalIndexKey
///
/// Highest-precision numeric variant. Every other numeric kind promotes
/// into it exactly, so it always performs the arithmetic.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DecimalIndexKey(Decimal);

impl DecimalIndexKey {
    #[must_use]
    pub const fn new(key: Decimal) -> Self {
        Self(key)
    }

    #[must_use]
    pub fn into_inner(self) -> Decimal {
        self.0
    }
}

impl TypedIndexKey for DecimalIndexKey {
    type Native = Decimal;

    const KEY_TYPE: IndexKeyType = IndexKeyType::Decimal;

    fn key(&self) -> &Decimal {
        &self.0
    }
}

impl NumericIndexKey for DecimalIndexKey {
    fn is_truthy(&self) -> bool {
        !self.0.is_zero()
    }

    fn compare_i64(&self, val: i64) -> Ordering {
        self.0.cmp(&Decimal::from(val))
    }

    fn compare_f64(&self, val: f64) -> Ordering {
        cmp_decimal_f64(&self.0, val)
    }

    fn compare_decimal(&self, val: &Decimal) -> Ordering {
        self.0.cmp(val)
    }
}

///
/// NumericKey
///
/// Borrowed view over whichever numeric variant a key holds.
/// Routes each entry point to the concrete variant by static dispatch.
///

#[derive(Clone, Copy, Debug)]
pub enum NumericKey<'a> {
    Boolean(&'a BooleanIndexKey),
    Byte(&'a ByteIndexKey),
    Short(&'a ShortIndexKey),
    Int(&'a IntIndexKey),
    Long(&'a LongIndexKey),
    Float(&'a FloatIndexKey),
    Double(&'a DoubleIndexKey),
    Decimal(&'a DecimalIndexKey),
}

macro_rules! dispatch_numeric {
    ($view:expr, $key:ident => $call:expr) => {
        match $view {
            NumericKey::Boolean($key) => $call,
            NumericKey::Byte($key) => $call,
            NumericKey::Short($key) => $call,
            NumericKey::Int($key) => $call,
            NumericKey::Long($key) => $call,
            NumericKey::Float($key) => $call,
            NumericKey::Double($key) => $call,
            NumericKey::Decimal($key) => $call,
        }
    };
}

impl NumericKey<'_> {
    #[must_use]
    pub fn key_type(&self) -> IndexKeyType {
        dispatch_numeric!(self, key => key.key_type())
    }
}

impl NumericIndexKey for NumericKey<'_> {
    fn is_truthy(&self) -> bool {
        dispatch_numeric!(self, key => key.is_truthy())
    }

    fn compare_i64(&self, val: i64) -> Ordering {
        dispatch_numeric!(self, key => key.compare_i64(val))
    }

    fn compare_f64(&self, val: f64) -> Ordering {
        dispatch_numeric!(self, key => key.compare_f64(val))
    }

    fn compare_decimal(&self, val: &Decimal) -> Ordering {
        dispatch_numeric!(self, key => key.compare_decimal(val))
    }
}

//
// FLOAT ORDERING
//
// `-inf < finite < +inf < NaN`, every NaN equal to every other NaN, and
// `-0.0 == 0.0`. Every entry point that accepts a float goes through here.
//

/// Total order over `f64` under the NaN-last rule.
#[must_use]
pub fn cmp_f64(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
    }
}

/// Exact sign of `left - right` for an integer and a float.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn cmp_i64_f64(left: i64, right: f64) -> Ordering {
    if right.is_nan() || right >= TWO_POW_63 {
        return Ordering::Less;
    }
    if right < -TWO_POW_63 {
        return Ordering::Greater;
    }

    // |whole| <= 2^63 and whole is integral, so the cast is exact.
    let whole = right.trunc();
    let fraction = right - whole;

    left.cmp(&(whole as i64))
        .then_with(|| 0.0f64.partial_cmp(&fraction).unwrap_or(Ordering::Equal))
}

/// Exact sign of `left - right` for a decimal and a float.
#[must_use]
pub fn cmp_decimal_f64(left: &Decimal, right: f64) -> Ordering {
    match Decimal::try_from_f64(right) {
        Some(promoted) => left.cmp(&promoted),
        None if right == f64::NEG_INFINITY => Ordering::Greater,
        None => Ordering::Less,
    }
}
