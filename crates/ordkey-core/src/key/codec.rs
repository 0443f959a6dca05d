//! Module: key::codec
//! Responsibility: ordered byte encoding of one index key.
//! Does not own: cross-kind ordering; bytes only order within one kind.
//! Boundary: storage engines persist `encode` output and call `decode` on read.
//!
//! Layout is `[type code][payload]`. For two keys of the same kind, byte
//! order of the encodings equals `IndexKey::compare`. `Null` encodes as its
//! bare type code (0x00) and so sorts before every other encoding.

use crate::{
    key::{
        BooleanIndexKey, ByteIndexKey, DecimalIndexKey, DoubleIndexKey, FloatIndexKey, IndexKey,
        IntIndexKey, LongIndexKey, ShortIndexKey, TypedIndexKey,
    },
    obs::log_debug,
    types::Decimal,
};
use num_bigint::BigInt;
use ordkey_primitives::IndexKeyType;
use thiserror::Error as ThisError;
use time::{Date, PrimitiveDateTime, Time};

const NEGATIVE_MARKER: u8 = 0x00;
const ZERO_MARKER: u8 = 0x01;
const POSITIVE_MARKER: u8 = 0x02;

const DECIMAL_POSITIVE_TERMINATOR: u8 = 0x00;
const DECIMAL_NEGATIVE_TERMINATOR: u8 = 0xFF;

const ESCAPE: u8 = 0x00;
const ESCAPED_ZERO: u8 = 0xFF;
const TERMINATOR: u8 = 0x00;

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: u64 = 24 * NANOS_PER_HOUR;

///
/// KeyDecodeError
///
/// Reasons a byte string is not the encoding of any index key.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum KeyDecodeError {
    #[error("index key payload is empty")]
    Empty,

    #[error("unknown index key type code {code}")]
    UnknownTypeCode { code: u8 },

    #[error("{kind} key payload is truncated")]
    Truncated { kind: IndexKeyType },

    #[error("{kind} key payload has {count} trailing bytes")]
    TrailingBytes { kind: IndexKeyType, count: usize },

    #[error("{kind} key payload is invalid: {reason}")]
    InvalidPayload {
        kind: IndexKeyType,
        reason: &'static str,
    },
}

impl IndexKey {
    /// Encode this key into order-preserving bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.key_type().code()];

        match self {
            Self::Null => {}
            Self::Boolean(k) => out.push(u8::from(k.get())),
            Self::Byte(k) => out.push(k.get().cast_unsigned() ^ 0x80),
            Self::Short(k) => out.extend_from_slice(&ordered_i16_bytes(k.get())),
            Self::Int(k) => out.extend_from_slice(&ordered_i32_bytes(k.get())),
            Self::Long(k) => out.extend_from_slice(&ordered_i64_bytes(k.get())),
            Self::Decimal(k) => push_decimal_payload(&mut out, k.key()),
            Self::Double(k) => out.extend_from_slice(&ordered_f64_bytes(canonical_f64(k.get()))),
            Self::Float(k) => out.extend_from_slice(&ordered_f32_bytes(canonical_f32(k.get()))),
            Self::Time(t) => out.extend_from_slice(&time_nanos(*t).to_be_bytes()),
            Self::Date(d) => out.extend_from_slice(&ordered_i32_bytes(d.to_julian_day())),
            Self::Timestamp(ts) => {
                out.extend_from_slice(&ordered_i32_bytes(ts.date().to_julian_day()));
                out.extend_from_slice(&time_nanos(ts.time()).to_be_bytes());
            }
            Self::Bytes(bytes) => push_terminated_bytes(&mut out, bytes),
            Self::String(s) => push_terminated_bytes(&mut out, s.as_bytes()),
        }

        out
    }

    /// Decode bytes produced by `encode`.
    ///
    /// Rejects anything `encode` could not have produced, including
    /// non-canonical floats and decimals.
    pub fn decode(bytes: &[u8]) -> Result<Self, KeyDecodeError> {
        decode_key(bytes).inspect_err(|err| {
            log_debug!(
                component = "codec",
                event = "key_decode_failed",
                len = bytes.len(),
                error = %err,
            );
        })
    }
}

fn decode_key(bytes: &[u8]) -> Result<IndexKey, KeyDecodeError> {
    let (&code, payload) = bytes.split_first().ok_or(KeyDecodeError::Empty)?;
    let kind = IndexKeyType::from_code(code).ok_or(KeyDecodeError::UnknownTypeCode { code })?;
    let mut reader = PayloadReader::new(kind, payload);

    let key = match kind {
        IndexKeyType::Null => IndexKey::Null,
        IndexKeyType::Boolean => match reader.take_u8()? {
            0 => IndexKey::Boolean(BooleanIndexKey::new(false)),
            1 => IndexKey::Boolean(BooleanIndexKey::new(true)),
            _ => return Err(reader.invalid("boolean byte must be 0 or 1")),
        },
        IndexKeyType::Byte => {
            IndexKey::Byte(ByteIndexKey::new((reader.take_u8()? ^ 0x80).cast_signed()))
        }
        IndexKeyType::Short => {
            let raw = u16::from_be_bytes(reader.take_array()?) ^ (1u16 << 15);
            IndexKey::Short(ShortIndexKey::new(raw.cast_signed()))
        }
        IndexKeyType::Int => IndexKey::Int(IntIndexKey::new(read_ordered_i32(&mut reader)?)),
        IndexKeyType::Long => {
            let raw = u64::from_be_bytes(reader.take_array()?) ^ (1u64 << 63);
            IndexKey::Long(LongIndexKey::new(raw.cast_signed()))
        }
        IndexKeyType::Decimal => {
            IndexKey::Decimal(DecimalIndexKey::new(read_decimal_payload(&mut reader)?))
        }
        IndexKeyType::Double => {
            let value = float_from_ordered_f64(u64::from_be_bytes(reader.take_array()?));
            if canonical_f64(value).to_bits() != value.to_bits() {
                return Err(reader.invalid("non-canonical double"));
            }
            IndexKey::Double(DoubleIndexKey::new(value))
        }
        IndexKeyType::Float => {
            let value = float_from_ordered_f32(u32::from_be_bytes(reader.take_array()?));
            if canonical_f32(value).to_bits() != value.to_bits() {
                return Err(reader.invalid("non-canonical float"));
            }
            IndexKey::Float(FloatIndexKey::new(value))
        }
        IndexKeyType::Time => IndexKey::Time(read_time(&mut reader)?),
        IndexKeyType::Date => IndexKey::Date(read_date(&mut reader)?),
        IndexKeyType::Timestamp => {
            let date = read_date(&mut reader)?;
            let time = read_time(&mut reader)?;
            IndexKey::Timestamp(PrimitiveDateTime::new(date, time))
        }
        IndexKeyType::Bytes => IndexKey::Bytes(reader.take_terminated()?),
        IndexKeyType::String => {
            let raw = reader.take_terminated()?;
            let text = String::from_utf8(raw).map_err(|_| reader.invalid("text is not UTF-8"))?;
            IndexKey::String(text)
        }
    };

    reader.finish()?;

    Ok(key)
}

///
/// PayloadReader
///
/// Cursor over the payload of one key, tagged with the kind being decoded so
/// every error names it.
///

struct PayloadReader<'a> {
    kind: IndexKeyType,
    bytes: &'a [u8],
}

impl<'a> PayloadReader<'a> {
    const fn new(kind: IndexKeyType, bytes: &'a [u8]) -> Self {
        Self { kind, bytes }
    }

    const fn truncated(&self) -> KeyDecodeError {
        KeyDecodeError::Truncated { kind: self.kind }
    }

    const fn invalid(&self, reason: &'static str) -> KeyDecodeError {
        KeyDecodeError::InvalidPayload {
            kind: self.kind,
            reason,
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], KeyDecodeError> {
        if self.bytes.len() < len {
            return Err(self.truncated());
        }
        let (head, tail) = self.bytes.split_at(len);
        self.bytes = tail;

        Ok(head)
    }

    fn take_u8(&mut self) -> Result<u8, KeyDecodeError> {
        Ok(self.take(1)?[0])
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], KeyDecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);

        Ok(out)
    }

    // Bytes up to (not including) the first `terminator`, which is consumed.
    fn take_until(&mut self, terminator: u8) -> Result<&'a [u8], KeyDecodeError> {
        let end = self
            .bytes
            .iter()
            .position(|&byte| byte == terminator)
            .ok_or_else(|| self.truncated())?;
        let segment = self.take(end)?;
        self.take_u8()?;

        Ok(segment)
    }

    // Reverse of `push_terminated_bytes`.
    fn take_terminated(&mut self) -> Result<Vec<u8>, KeyDecodeError> {
        let mut out = Vec::new();

        loop {
            let byte = self.take_u8()?;
            if byte != ESCAPE {
                out.push(byte);
                continue;
            }

            match self.take_u8()? {
                TERMINATOR => return Ok(out),
                ESCAPED_ZERO => out.push(0),
                _ => return Err(self.invalid("bad escape sequence")),
            }
        }
    }

    fn finish(self) -> Result<(), KeyDecodeError> {
        if self.bytes.is_empty() {
            Ok(())
        } else {
            Err(KeyDecodeError::TrailingBytes {
                kind: self.kind,
                count: self.bytes.len(),
            })
        }
    }
}

// Byte strings are escaped so a shorter prefix always sorts first.
fn push_terminated_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    for &byte in bytes {
        if byte == 0 {
            out.extend_from_slice(&[ESCAPE, ESCAPED_ZERO]);
        } else {
            out.push(byte);
        }
    }

    out.extend_from_slice(&[ESCAPE, TERMINATOR]);
}

fn push_inverted(out: &mut Vec<u8>, bytes: &[u8]) {
    for &byte in bytes {
        out.push(!byte);
    }
}

// Decimal ordering is sign bucket + adjusted exponent + significant digits + terminator.
fn push_decimal_payload(out: &mut Vec<u8>, value: &Decimal) {
    let normalized = value.normalize();
    if normalized.is_zero() {
        out.push(ZERO_MARKER);
        return;
    }

    let exponent_bytes = ordered_i64_bytes(normalized.adjusted_exponent());
    let digits = normalized.unscaled().magnitude().to_string();

    if normalized.is_negative() {
        out.push(NEGATIVE_MARKER);
        push_inverted(out, &exponent_bytes);
        push_inverted(out, digits.as_bytes());
        out.push(DECIMAL_NEGATIVE_TERMINATOR);
    } else {
        out.push(POSITIVE_MARKER);
        out.extend_from_slice(&exponent_bytes);
        out.extend_from_slice(digits.as_bytes());
        out.push(DECIMAL_POSITIVE_TERMINATOR);
    }
}

fn read_decimal_payload(reader: &mut PayloadReader<'_>) -> Result<Decimal, KeyDecodeError> {
    let negative = match reader.take_u8()? {
        ZERO_MARKER => return Ok(Decimal::zero()),
        NEGATIVE_MARKER => true,
        POSITIVE_MARKER => false,
        _ => return Err(reader.invalid("unknown decimal sign marker")),
    };

    let mut exponent_bytes: [u8; 8] = reader.take_array()?;
    let digits: Vec<u8> = if negative {
        for byte in &mut exponent_bytes {
            *byte = !*byte;
        }
        reader
            .take_until(DECIMAL_NEGATIVE_TERMINATOR)?
            .iter()
            .map(|byte| !byte)
            .collect()
    } else {
        reader.take_until(DECIMAL_POSITIVE_TERMINATOR)?.to_vec()
    };

    let canonical = matches!(digits.first(), Some(b'1'..=b'9'))
        && matches!(digits.last(), Some(b'1'..=b'9'))
        && digits.iter().all(u8::is_ascii_digit);
    if !canonical {
        return Err(reader.invalid("decimal digits are not normalized"));
    }

    let exponent = (u64::from_be_bytes(exponent_bytes) ^ (1u64 << 63)).cast_signed();
    let scale = i64::try_from(digits.len())
        .ok()
        .and_then(|len| len.checked_sub(1))
        .and_then(|top| top.checked_sub(exponent))
        .ok_or_else(|| reader.invalid("decimal exponent out of range"))?;
    let magnitude = BigInt::parse_bytes(&digits, 10)
        .ok_or_else(|| reader.invalid("decimal digits are not normalized"))?;
    let unscaled = if negative { -magnitude } else { magnitude };

    Ok(Decimal::new(unscaled, scale))
}

fn read_ordered_i32(reader: &mut PayloadReader<'_>) -> Result<i32, KeyDecodeError> {
    let raw = u32::from_be_bytes(reader.take_array()?) ^ (1u32 << 31);

    Ok(raw.cast_signed())
}

fn read_date(reader: &mut PayloadReader<'_>) -> Result<Date, KeyDecodeError> {
    let julian_day = read_ordered_i32(reader)?;

    Date::from_julian_day(julian_day).map_err(|_| reader.invalid("julian day out of range"))
}

fn read_time(reader: &mut PayloadReader<'_>) -> Result<Time, KeyDecodeError> {
    let nanos = u64::from_be_bytes(reader.take_array()?);
    if nanos >= NANOS_PER_DAY {
        return Err(reader.invalid("time of day out of range"));
    }

    let hour = u8::try_from(nanos / NANOS_PER_HOUR);
    let minute = u8::try_from(nanos % NANOS_PER_HOUR / NANOS_PER_MINUTE);
    let second = u8::try_from(nanos % NANOS_PER_MINUTE / NANOS_PER_SECOND);
    let nano = u32::try_from(nanos % NANOS_PER_SECOND);

    match (hour, minute, second, nano) {
        (Ok(h), Ok(m), Ok(s), Ok(ns)) => {
            Time::from_hms_nano(h, m, s, ns).map_err(|_| reader.invalid("time of day out of range"))
        }
        _ => Err(reader.invalid("time of day out of range")),
    }
}

fn time_nanos(time: Time) -> u64 {
    let (hour, minute, second, nano) = time.as_hms_nano();

    u64::from(hour) * NANOS_PER_HOUR
        + u64::from(minute) * NANOS_PER_MINUTE
        + u64::from(second) * NANOS_PER_SECOND
        + u64::from(nano)
}

const fn canonical_f64(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

const fn canonical_f32(value: f32) -> f32 {
    if value.is_nan() {
        f32::NAN
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

const fn ordered_i16_bytes(value: i16) -> [u8; 2] {
    let biased = value.cast_unsigned() ^ (1u16 << 15);
    biased.to_be_bytes()
}

const fn ordered_i32_bytes(value: i32) -> [u8; 4] {
    let biased = value.cast_unsigned() ^ (1u32 << 31);
    biased.to_be_bytes()
}

const fn ordered_i64_bytes(value: i64) -> [u8; 8] {
    let biased = value.cast_unsigned() ^ (1u64 << 63);
    biased.to_be_bytes()
}

const fn ordered_f32_bytes(value: f32) -> [u8; 4] {
    let bits = value.to_bits();
    let ordered = if bits & 0x8000_0000 == 0 {
        bits ^ 0x8000_0000
    } else {
        !bits
    };

    ordered.to_be_bytes()
}

const fn ordered_f64_bytes(value: f64) -> [u8; 8] {
    let bits = value.to_bits();
    let ordered = if bits & 0x8000_0000_0000_0000 == 0 {
        bits ^ 0x8000_0000_0000_0000
    } else {
        !bits
    };

    ordered.to_be_bytes()
}

const fn float_from_ordered_f32(ordered: u32) -> f32 {
    let bits = if ordered & 0x8000_0000 == 0 {
        !ordered
    } else {
        ordered ^ 0x8000_0000
    };

    f32::from_bits(bits)
}

const fn float_from_ordered_f64(ordered: u64) -> f64 {
    let bits = if ordered & 0x8000_0000_0000_0000 == 0 {
        !ordered
    } else {
        ordered ^ 0x8000_0000_0000_0000
    };

    f64::from_bits(bits)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cmp::Ordering;
    use time::macros::{date, datetime, time};

    fn roundtrip(key: IndexKey) {
        let encoded = key.encode();
        let decoded = IndexKey::decode(&encoded).expect("encoded key should decode");

        assert_eq!(decoded, key, "roundtrip changed key");
        assert_eq!(decoded.encode(), encoded, "re-encoding changed bytes");
    }

    fn assert_encoded_order(left: IndexKey, right: IndexKey) {
        let expected = left.compare(&right).expect("same-kind keys compare");

        assert_eq!(
            left.encode().cmp(&right.encode()),
            expected,
            "byte order disagrees for {left} vs {right}"
        );
    }

    fn decimal(text: &str) -> Decimal {
        text.parse().expect("decimal literal")
    }

    #[test]
    fn every_kind_roundtrips() {
        roundtrip(IndexKey::Null);
        roundtrip(IndexKey::from(true));
        roundtrip(IndexKey::from(false));
        roundtrip(IndexKey::from(i8::MIN));
        roundtrip(IndexKey::from(-300i16));
        roundtrip(IndexKey::from(i32::MAX));
        roundtrip(IndexKey::from(i64::MIN));
        roundtrip(IndexKey::from(decimal("-123.4500")));
        roundtrip(IndexKey::from(decimal("1E+40")));
        roundtrip(IndexKey::from(decimal("0.000")));
        roundtrip(IndexKey::from(f64::NEG_INFINITY));
        roundtrip(IndexKey::from(f64::NAN));
        roundtrip(IndexKey::from(1.5f32));
        roundtrip(IndexKey::from(time!(23:59:59.999_999_999)));
        roundtrip(IndexKey::from(date!(1969 - 07 - 20)));
        roundtrip(IndexKey::from(datetime!(2024-02-29 12:30:00)));
        roundtrip(IndexKey::from(vec![0u8, 1, 0, 0xFF]));
        roundtrip(IndexKey::from("key\0with nul"));
    }

    #[test]
    fn decimals_decode_to_normalized_form() {
        let decoded = IndexKey::decode(&IndexKey::from(decimal("3.000")).encode())
            .expect("decimal should decode");

        match decoded {
            IndexKey::Decimal(k) => {
                assert_eq!(k.key().unscaled(), &BigInt::from(3));
                assert_eq!(k.key().scale(), 0);
            }
            other => panic!("expected decimal, got {other:?}"),
        }
    }

    #[test]
    fn golden_vectors_freeze_payload_bytes() {
        assert_eq!(IndexKey::Null.encode(), vec![0x00]);
        assert_eq!(IndexKey::from(true).encode(), vec![0x01, 0x01]);
        assert_eq!(IndexKey::from(-1i8).encode(), vec![0x02, 0x7F]);
        assert_eq!(IndexKey::from(0i32).encode(), vec![0x04, 0x80, 0, 0, 0]);
        assert_eq!(IndexKey::from(decimal("0")).encode(), vec![0x06, ZERO_MARKER]);
        assert_eq!(
            IndexKey::from(decimal("12.5")).encode(),
            vec![0x06, POSITIVE_MARKER, 0x80, 0, 0, 0, 0, 0, 0, 0x01, b'1', b'2', b'5', 0x00]
        );
        assert_eq!(
            IndexKey::from("a\0").encode(),
            vec![0x0D, b'a', 0x00, 0xFF, 0x00, 0x00]
        );
    }

    #[test]
    fn negative_zero_and_nan_payloads_are_canonical() {
        assert_eq!(IndexKey::from(-0.0f64).encode(), IndexKey::from(0.0f64).encode());
        assert_eq!(
            IndexKey::from(-f64::NAN).encode(),
            IndexKey::from(f64::NAN).encode()
        );
        assert_eq!(
            IndexKey::from(-0.0f32).encode(),
            IndexKey::from(0.0f32).encode()
        );
    }

    #[test]
    fn float_specials_encode_in_compare_order() {
        let ladder = [
            f64::NEG_INFINITY,
            f64::MIN,
            -1.0,
            0.0,
            f64::MIN_POSITIVE,
            1.0,
            f64::MAX,
            f64::INFINITY,
            f64::NAN,
        ];

        for pair in ladder.windows(2) {
            assert_encoded_order(IndexKey::from(pair[0]), IndexKey::from(pair[1]));
            assert!(IndexKey::from(pair[0]).encode() < IndexKey::from(pair[1]).encode());
        }
    }

    #[test]
    fn decimal_sign_and_magnitude_ladder_is_monotonic() {
        let ladder = [
            "-1000", "-12.5", "-1.2", "-1", "-0.001", "0", "0.001", "1", "1.2", "12.5", "1000",
        ];

        for pair in ladder.windows(2) {
            let left = IndexKey::from(decimal(pair[0])).encode();
            let right = IndexKey::from(decimal(pair[1])).encode();
            assert!(left < right, "{} should encode below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn text_prefix_sorts_first() {
        assert_encoded_order(IndexKey::from("ab"), IndexKey::from("abc"));
        assert_encoded_order(IndexKey::from("ab"), IndexKey::from("ab\0"));
        assert_encoded_order(IndexKey::from(vec![1u8]), IndexKey::from(vec![1u8, 0]));
    }

    #[test]
    fn temporal_order_is_preserved() {
        assert_encoded_order(
            IndexKey::from(date!(1899 - 12 - 31)),
            IndexKey::from(date!(2000 - 01 - 01)),
        );
        assert_encoded_order(
            IndexKey::from(time!(00:00:00.000_000_001)),
            IndexKey::from(time!(00:00:01)),
        );
        assert_encoded_order(
            IndexKey::from(datetime!(2000-01-01 23:59:59)),
            IndexKey::from(datetime!(2000-01-02 00:00:00)),
        );
    }

    #[test]
    fn decode_rejects_malformed_input() {
        assert_eq!(IndexKey::decode(&[]), Err(KeyDecodeError::Empty));
        assert_eq!(
            IndexKey::decode(&[0xEE]),
            Err(KeyDecodeError::UnknownTypeCode { code: 0xEE })
        );
        assert_eq!(
            IndexKey::decode(&[0x04, 0x80]),
            Err(KeyDecodeError::Truncated {
                kind: IndexKeyType::Int
            })
        );
        assert_eq!(
            IndexKey::decode(&[0x00, 0x01]),
            Err(KeyDecodeError::TrailingBytes {
                kind: IndexKeyType::Null,
                count: 1
            })
        );
        assert!(matches!(
            IndexKey::decode(&[0x01, 0x02]),
            Err(KeyDecodeError::InvalidPayload { .. })
        ));
        assert!(matches!(
            IndexKey::decode(&[0x0D, 0xC3, 0x28, 0x00, 0x00]),
            Err(KeyDecodeError::InvalidPayload { .. })
        ));
        assert!(matches!(
            IndexKey::decode(&[0x0C, 0x00, 0x07]),
            Err(KeyDecodeError::InvalidPayload { .. })
        ));
        assert_eq!(
            IndexKey::decode(&[0x0C, b'a']),
            Err(KeyDecodeError::Truncated {
                kind: IndexKeyType::Bytes
            })
        );
    }

    #[test]
    fn decode_rejects_non_canonical_numbers() {
        let mut negative_zero = vec![IndexKeyType::Double.code()];
        negative_zero.extend_from_slice(&ordered_f64_bytes(-0.0));
        assert!(IndexKey::decode(&negative_zero).is_err());

        // 12.50 with an unnormalized trailing zero digit
        let trailing_zero = vec![
            0x06,
            POSITIVE_MARKER,
            0x80,
            0,
            0,
            0,
            0,
            0,
            0,
            0x01,
            b'1',
            b'2',
            b'5',
            b'0',
            0x00,
        ];
        assert!(IndexKey::decode(&trailing_zero).is_err());

        let mut out_of_day = vec![IndexKeyType::Time.code()];
        out_of_day.extend_from_slice(&NANOS_PER_DAY.to_be_bytes());
        assert!(IndexKey::decode(&out_of_day).is_err());
    }

    fn decimal_strategy() -> impl Strategy<Value = Decimal> {
        (any::<i64>(), -30i64..30).prop_map(|(unscaled, scale)| Decimal::new(unscaled, scale))
    }

    proptest! {
        #[test]
        fn long_encoding_matches_numeric_order(left in any::<i64>(), right in any::<i64>()) {
            prop_assert_eq!(
                IndexKey::from(left).encode().cmp(&IndexKey::from(right).encode()),
                left.cmp(&right)
            );
        }

        #[test]
        fn double_encoding_matches_compare(left in any::<f64>(), right in any::<f64>()) {
            let (l, r) = (IndexKey::from(left), IndexKey::from(right));
            prop_assert_eq!(l.encode().cmp(&r.encode()), l.compare(&r).unwrap_or(Ordering::Equal));
        }

        #[test]
        fn decimal_encoding_matches_numeric_order(
            left in decimal_strategy(),
            right in decimal_strategy(),
        ) {
            let left_bytes = IndexKey::from(left.clone()).encode();
            let right_bytes = IndexKey::from(right.clone()).encode();
            prop_assert_eq!(left_bytes.cmp(&right_bytes), left.cmp(&right));
        }

        #[test]
        fn decimal_payload_roundtrips(value in decimal_strategy()) {
            let decoded = IndexKey::decode(&IndexKey::from(value.clone()).encode());
            prop_assert_eq!(decoded, Ok(IndexKey::from(value)));
        }

        #[test]
        fn text_encoding_matches_byte_order(left in ".{0,12}", right in ".{0,12}") {
            prop_assert_eq!(
                IndexKey::from(left.as_str()).encode().cmp(&IndexKey::from(right.as_str()).encode()),
                left.as_bytes().cmp(right.as_bytes())
            );
        }

        #[test]
        fn bytes_encoding_matches_byte_order(
            left in proptest::collection::vec(any::<u8>(), 0..12),
            right in proptest::collection::vec(any::<u8>(), 0..12),
        ) {
            prop_assert_eq!(
                IndexKey::from(left.clone()).encode().cmp(&IndexKey::from(right.clone()).encode()),
                left.cmp(&right)
            );
        }
    }
}
