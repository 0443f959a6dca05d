//! Module: key
//! Responsibility: the closed family of index keys and their total order.
//! Does not own: page layout, coercion policy, or persistence.
//! Boundary: index engines hold `IndexKey` values and call `compare`.

mod build;
mod codec;
mod compare;
mod hash;
mod numeric;
mod range;


use crate::types::Decimal;
use ordkey_primitives::IndexKeyType;
use std::fmt;
use time::{Date, PrimitiveDateTime, Time};

// re-exports
pub use build::{KeyBuilder, KeyConstructError};
pub use codec::KeyDecodeError;
pub use compare::CompareError;
pub use numeric::{
    BooleanIndexKey, ByteIndexKey, DecimalIndexKey, DoubleIndexKey, FloatIndexKey, IntIndexKey,
    LongIndexKey, NumericIndexKey, NumericKey, ShortIndexKey, TypedIndexKey, cmp_decimal_f64,
    cmp_f64, cmp_i64_f64,
};
pub use range::{Direction, KeyRange, compare_rows};

///
/// IndexKey
///
/// One immutable, typed index key. Numeric variants wrap their concrete key
/// type; other kinds carry their payload directly.
///
/// `Null` models an absent value. It is comparable with every kind and sorts
/// before all of them.
///

#[derive(Clone, Debug)]
pub enum IndexKey {
    Null,
    Boolean(BooleanIndexKey),
    Byte(ByteIndexKey),
    Short(ShortIndexKey),
    Int(IntIndexKey),
    Long(LongIndexKey),
    Decimal(DecimalIndexKey),
    Double(DoubleIndexKey),
    Float(FloatIndexKey),
    Time(Time),
    Date(Date),
    Timestamp(PrimitiveDateTime),
    Bytes(Vec<u8>),
    String(String),
}

///
/// KeyRef
///
/// Borrow of the native payload behind one key.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyRef<'a> {
    Null,
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Decimal(&'a Decimal),
    Double(f64),
    Float(f32),
    Time(Time),
    Date(Date),
    Timestamp(PrimitiveDateTime),
    Bytes(&'a [u8]),
    String(&'a str),
}

impl IndexKey {
    /// Registered tag of this key's variant.
    #[must_use]
    pub const fn key_type(&self) -> IndexKeyType {
        match self {
            Self::Null => IndexKeyType::Null,
            Self::Boolean(_) => IndexKeyType::Boolean,
            Self::Byte(_) => IndexKeyType::Byte,
            Self::Short(_) => IndexKeyType::Short,
            Self::Int(_) => IndexKeyType::Int,
            Self::Long(_) => IndexKeyType::Long,
            Self::Decimal(_) => IndexKeyType::Decimal,
            Self::Double(_) => IndexKeyType::Double,
            Self::Float(_) => IndexKeyType::Float,
            Self::Time(_) => IndexKeyType::Time,
            Self::Date(_) => IndexKeyType::Date,
            Self::Timestamp(_) => IndexKeyType::Timestamp,
            Self::Bytes(_) => IndexKeyType::Bytes,
            Self::String(_) => IndexKeyType::String,
        }
    }

    /// Borrow the native payload.
    #[must_use]
    pub fn key(&self) -> KeyRef<'_> {
        match self {
            Self::Null => KeyRef::Null,
            Self::Boolean(k) => KeyRef::Boolean(k.get()),
            Self::Byte(k) => KeyRef::Byte(k.get()),
            Self::Short(k) => KeyRef::Short(k.get()),
            Self::Int(k) => KeyRef::Int(k.get()),
            Self::Long(k) => KeyRef::Long(k.get()),
            Self::Decimal(k) => KeyRef::Decimal(k.key()),
            Self::Double(k) => KeyRef::Double(k.get()),
            Self::Float(k) => KeyRef::Float(k.get()),
            Self::Time(t) => KeyRef::Time(*t),
            Self::Date(d) => KeyRef::Date(*d),
            Self::Timestamp(ts) => KeyRef::Timestamp(*ts),
            Self::Bytes(b) => KeyRef::Bytes(b),
            Self::String(s) => KeyRef::String(s),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.key_type().is_numeric()
    }

    /// Numeric view used as the callee of double dispatch.
    #[must_use]
    pub const fn as_numeric(&self) -> Option<NumericKey<'_>> {
        match self {
            Self::Boolean(k) => Some(NumericKey::Boolean(k)),
            Self::Byte(k) => Some(NumericKey::Byte(k)),
            Self::Short(k) => Some(NumericKey::Short(k)),
            Self::Int(k) => Some(NumericKey::Int(k)),
            Self::Long(k) => Some(NumericKey::Long(k)),
            Self::Decimal(k) => Some(NumericKey::Decimal(k)),
            Self::Double(k) => Some(NumericKey::Double(k)),
            Self::Float(k) => Some(NumericKey::Float(k)),
            _ => None,
        }
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Boolean(k) => write!(f, "{k}"),
            Self::Byte(k) => write!(f, "{k}"),
            Self::Short(k) => write!(f, "{k}"),
            Self::Int(k) => write!(f, "{k}"),
            Self::Long(k) => write!(f, "{k}"),
            Self::Decimal(k) => write!(f, "{k}"),
            Self::Double(k) => write!(f, "{k}"),
            Self::Float(k) => write!(f, "{k}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Timestamp(ts) => write!(f, "{ts}"),
            Self::Bytes(bytes) => {
                f.write_str("0x")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::String(s) => f.write_str(s),
        }
    }
}

///
/// CONVERSIONS
///
/// Infallible: each native type maps to exactly one kind. Callers must not
/// convert to a common type first, or cross-kind precision safety is lost
/// before comparison ever runs.
///

macro_rules! impl_index_key_from_native {
    ( $( $native:ty => $variant:ident($wrap:expr) ),* $(,)? ) => {
        $(
            impl From<$native> for IndexKey {
                fn from(value: $native) -> Self {
                    Self::$variant($wrap(value))
                }
            }
        )*
    };
}

impl_index_key_from_native! {
    bool => Boolean(BooleanIndexKey::new),
    i8 => Byte(ByteIndexKey::new),
    i16 => Short(ShortIndexKey::new),
    i32 => Int(IntIndexKey::new),
    i64 => Long(LongIndexKey::new),
    f32 => Float(FloatIndexKey::new),
    f64 => Double(DoubleIndexKey::new),
    Decimal => Decimal(DecimalIndexKey::new),
    Time => Time(std::convert::identity),
    Date => Date(std::convert::identity),
    PrimitiveDateTime => Timestamp(std::convert::identity),
    Vec<u8> => Bytes(std::convert::identity),
    String => String(std::convert::identity),
}

impl From<&str> for IndexKey {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<BooleanIndexKey> for IndexKey {
    fn from(key: BooleanIndexKey) -> Self {
        Self::Boolean(key)
    }
}

impl From<DecimalIndexKey> for IndexKey {
    fn from(key: DecimalIndexKey) -> Self {
        Self::Decimal(key)
    }
}

impl<T: Into<Self>> From<Option<T>> for IndexKey {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
