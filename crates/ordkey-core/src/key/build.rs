//! Module: key::build
//! Responsibility: checked construction of keys from external values.
//! Does not own: comparison; a built key orders exactly like a `From` key.
//! Boundary: coercion layers call `KeyBuilder` with the declared kind and
//! the raw value, never a pre-converted one.

use crate::{
    config::{KeyLimits, OrdkeyConfig},
    key::{
        BooleanIndexKey, ByteIndexKey, DecimalIndexKey, DoubleIndexKey, FloatIndexKey, IndexKey,
        IntIndexKey, LongIndexKey, ShortIndexKey,
    },
    obs::log_debug,
    types::Decimal,
};
use ordkey_primitives::IndexKeyType;
use std::num::IntErrorKind;
use thiserror::Error as ThisError;
use time::{
    Date, PrimitiveDateTime, Time, format_description::BorrowedFormatItem,
    macros::format_description,
};

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[hour]:[minute]:[second][optional [.[subsecond]]]");
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
);

///
/// KeyConstructError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum KeyConstructError {
    #[error("value {value} is out of range for {kind} key")]
    OutOfRange { kind: IndexKeyType, value: String },

    #[error("invalid {kind} literal '{literal}': {reason}")]
    InvalidLiteral {
        kind: IndexKeyType,
        literal: String,
        reason: String,
    },

    #[error("{kind} is not an integral key kind")]
    NotIntegral { kind: IndexKeyType },

    #[error("decimal precision {precision} exceeds limit {max}")]
    DecimalPrecision { precision: u64, max: u32 },

    #[error("decimal scale {scale} exceeds limit {max}")]
    DecimalScale { scale: i64, max: u32 },

    #[error("{kind} key of {len} bytes exceeds limit {max}")]
    PayloadTooLarge {
        kind: IndexKeyType,
        len: usize,
        max: usize,
    },
}

impl KeyConstructError {
    fn invalid_literal(kind: IndexKeyType, literal: &str, reason: impl ToString) -> Self {
        Self::InvalidLiteral {
            kind,
            literal: literal.to_owned(),
            reason: reason.to_string(),
        }
    }
}

fn log_rejection(kind: IndexKeyType, err: &KeyConstructError) {
    log_debug!(
        component = "build",
        event = "key_rejected",
        kind = kind.label(),
        error = %err,
    );
}

///
/// KeyBuilder
///
/// Builds keys of a declared kind under configured limits.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KeyBuilder {
    limits: KeyLimits,
}

impl KeyBuilder {
    #[must_use]
    pub const fn new(limits: KeyLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub const fn from_config(config: &OrdkeyConfig) -> Self {
        Self::new(config.limits)
    }

    #[must_use]
    pub const fn limits(&self) -> &KeyLimits {
        &self.limits
    }

    /// Narrow an integer to the fixed-width `kind`.
    ///
    /// `Decimal` accepts every value; float kinds are rejected since not every
    /// integer has an exact binary float.
    pub fn integral(
        &self,
        kind: IndexKeyType,
        value: i128,
    ) -> Result<IndexKey, KeyConstructError> {
        Self::check_integral(kind, value).inspect_err(|err| log_rejection(kind, err))
    }

    /// Accept a decimal within the precision and scale limits.
    ///
    /// Limits apply to the normalized value, so trailing zeros never count.
    pub fn decimal(&self, value: Decimal) -> Result<IndexKey, KeyConstructError> {
        self.check_decimal(value)
            .inspect_err(|err| log_rejection(IndexKeyType::Decimal, err))
    }

    pub fn text(&self, value: impl Into<String>) -> Result<IndexKey, KeyConstructError> {
        self.check_text(value.into())
            .inspect_err(|err| log_rejection(IndexKeyType::String, err))
    }

    pub fn bytes(&self, value: impl Into<Vec<u8>>) -> Result<IndexKey, KeyConstructError> {
        self.check_bytes(value.into())
            .inspect_err(|err| log_rejection(IndexKeyType::Bytes, err))
    }

    /// Build a key of exactly `kind` from its literal text.
    pub fn parse(&self, kind: IndexKeyType, literal: &str) -> Result<IndexKey, KeyConstructError> {
        self.check_literal(kind, literal)
            .inspect_err(|err| log_rejection(kind, err))
    }

    fn check_integral(kind: IndexKeyType, value: i128) -> Result<IndexKey, KeyConstructError> {
        let out_of_range = || KeyConstructError::OutOfRange {
            kind,
            value: value.to_string(),
        };

        let key = match kind {
            IndexKeyType::Byte => IndexKey::Byte(ByteIndexKey::new(
                i8::try_from(value).map_err(|_| out_of_range())?,
            )),
            IndexKeyType::Short => IndexKey::Short(ShortIndexKey::new(
                i16::try_from(value).map_err(|_| out_of_range())?,
            )),
            IndexKeyType::Int => IndexKey::Int(IntIndexKey::new(
                i32::try_from(value).map_err(|_| out_of_range())?,
            )),
            IndexKeyType::Long => IndexKey::Long(LongIndexKey::new(
                i64::try_from(value).map_err(|_| out_of_range())?,
            )),
            IndexKeyType::Decimal => IndexKey::Decimal(DecimalIndexKey::new(Decimal::from(value))),
            _ => return Err(KeyConstructError::NotIntegral { kind }),
        };

        Ok(key)
    }

    fn check_decimal(&self, value: Decimal) -> Result<IndexKey, KeyConstructError> {
        let normalized = value.normalize();

        let precision = normalized.precision();
        let max_precision = self.limits.max_decimal_precision;
        if precision > u64::from(max_precision) {
            return Err(KeyConstructError::DecimalPrecision {
                precision,
                max: max_precision,
            });
        }

        let scale = normalized.scale();
        let max_scale = self.limits.max_decimal_scale;
        if scale.unsigned_abs() > u64::from(max_scale) {
            return Err(KeyConstructError::DecimalScale {
                scale,
                max: max_scale,
            });
        }

        Ok(IndexKey::Decimal(DecimalIndexKey::new(value)))
    }

    fn check_text(&self, value: String) -> Result<IndexKey, KeyConstructError> {
        let max = self.limits.max_text_len;
        if value.len() > max {
            return Err(KeyConstructError::PayloadTooLarge {
                kind: IndexKeyType::String,
                len: value.len(),
                max,
            });
        }

        Ok(IndexKey::String(value))
    }

    fn check_bytes(&self, value: Vec<u8>) -> Result<IndexKey, KeyConstructError> {
        let max = self.limits.max_bytes_len;
        if value.len() > max {
            return Err(KeyConstructError::PayloadTooLarge {
                kind: IndexKeyType::Bytes,
                len: value.len(),
                max,
            });
        }

        Ok(IndexKey::Bytes(value))
    }

    fn check_literal(
        &self,
        kind: IndexKeyType,
        literal: &str,
    ) -> Result<IndexKey, KeyConstructError> {
        let invalid = |reason: &str| KeyConstructError::invalid_literal(kind, literal, reason);

        match kind {
            IndexKeyType::Null => {
                if literal.eq_ignore_ascii_case("null") {
                    Ok(IndexKey::Null)
                } else {
                    Err(invalid("expected NULL"))
                }
            }
            IndexKeyType::Boolean => parse_bool(literal)
                .map(|value| IndexKey::Boolean(BooleanIndexKey::new(value)))
                .ok_or_else(|| invalid("expected true, false, 1 or 0")),
            IndexKeyType::Byte | IndexKeyType::Short | IndexKeyType::Int | IndexKeyType::Long => {
                let value = literal.parse::<i128>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        KeyConstructError::OutOfRange {
                            kind,
                            value: literal.to_owned(),
                        }
                    }
                    _ => KeyConstructError::invalid_literal(kind, literal, err),
                })?;

                Self::check_integral(kind, value)
            }
            IndexKeyType::Decimal => {
                let value = literal
                    .parse::<Decimal>()
                    .map_err(|err| KeyConstructError::invalid_literal(kind, literal, err))?;

                self.check_decimal(value)
            }
            IndexKeyType::Float => {
                let value = literal
                    .parse::<f32>()
                    .map_err(|err| KeyConstructError::invalid_literal(kind, literal, err))?;
                check_float_range(kind, literal, value.is_infinite())?;

                Ok(IndexKey::Float(FloatIndexKey::new(value)))
            }
            IndexKeyType::Double => {
                let value = literal
                    .parse::<f64>()
                    .map_err(|err| KeyConstructError::invalid_literal(kind, literal, err))?;
                check_float_range(kind, literal, value.is_infinite())?;

                Ok(IndexKey::Double(DoubleIndexKey::new(value)))
            }
            IndexKeyType::Time => Time::parse(literal, TIME_FORMAT)
                .map(IndexKey::Time)
                .map_err(|err| KeyConstructError::invalid_literal(kind, literal, err)),
            IndexKeyType::Date => Date::parse(literal, DATE_FORMAT)
                .map(IndexKey::Date)
                .map_err(|err| KeyConstructError::invalid_literal(kind, literal, err)),
            IndexKeyType::Timestamp => PrimitiveDateTime::parse(literal, TIMESTAMP_FORMAT)
                .map(IndexKey::Timestamp)
                .map_err(|err| KeyConstructError::invalid_literal(kind, literal, err)),
            IndexKeyType::Bytes => {
                let bytes = parse_hex(literal).ok_or_else(|| invalid("expected hex digits"))?;

                self.check_bytes(bytes)
            }
            IndexKeyType::String => self.check_text(literal.to_owned()),
        }
    }
}

fn parse_bool(literal: &str) -> Option<bool> {
    if literal.eq_ignore_ascii_case("true") || literal == "1" {
        Some(true)
    } else if literal.eq_ignore_ascii_case("false") || literal == "0" {
        Some(false)
    } else {
        None
    }
}

// A finite literal that rounds to infinity is out of range; a spelled
// infinity is a legitimate key.
fn check_float_range(
    kind: IndexKeyType,
    literal: &str,
    is_infinite: bool,
) -> Result<(), KeyConstructError> {
    if !is_infinite {
        return Ok(());
    }

    let unsigned = literal.trim_start_matches(['+', '-']);
    if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
        Ok(())
    } else {
        Err(KeyConstructError::OutOfRange {
            kind,
            value: literal.to_owned(),
        })
    }
}

fn parse_hex(literal: &str) -> Option<Vec<u8>> {
    let digits = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
        .unwrap_or(literal);
    if digits.len() % 2 != 0 {
        return None;
    }

    digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let high = char::from(pair[0]).to_digit(16)?;
            let low = char::from(pair[1]).to_digit(16)?;
            u8::try_from(high * 16 + low).ok()
        })
        .collect()
}

///
/// TESTS
///
