use crate::{
    key::{IndexKey, KeyRef},
    types::Decimal,
};
use xxhash_rust::xxh3::Xxh3;

/// Key-hash format version byte used by canonical digest encoding.
pub(crate) const KEY_HASH_VERSION: u8 = 1;

/// Stable XXH3 seed used by canonical key hashing across releases.
pub(crate) const KEY_HASH_SEED: u64 = 0;

// Shared domain marker for every non-boolean numeric kind.
const NUMERIC_HASH_DOMAIN: u8 = 0x80;

// Numeric value classes inside the numeric domain.
const NUMERIC_FINITE: u8 = 0x01;
const NUMERIC_NEG_INFINITY: u8 = 0x00;
const NUMERIC_POS_INFINITY: u8 = 0x02;
const NUMERIC_NAN: u8 = 0x03;

fn feed_u8(h: &mut Xxh3, x: u8) {
    h.update(&[x]);
}
fn feed_u32(h: &mut Xxh3, x: u32) {
    h.update(&x.to_be_bytes());
}
fn feed_i64(h: &mut Xxh3, x: i64) {
    h.update(&x.to_be_bytes());
}
fn feed_bytes(h: &mut Xxh3, b: &[u8]) {
    h.update(b);
}

/// Collapse every NaN onto one bit pattern and `-0.0` onto `0.0`, so equal
/// floats hash equal.
pub(crate) fn canonical_f64_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

#[expect(clippy::cast_possible_truncation)]
fn feed_finite_decimal(h: &mut Xxh3, value: &Decimal) {
    let normalized = value.normalize();
    let unscaled = normalized.unscaled().to_signed_bytes_be();

    feed_u8(h, NUMERIC_FINITE);
    feed_i64(h, normalized.scale());
    feed_u32(h, unscaled.len() as u32);
    feed_bytes(h, &unscaled);
}

fn feed_float(h: &mut Xxh3, value: f64) {
    match Decimal::try_from_f64(value) {
        Some(exact) => feed_finite_decimal(h, &exact),
        None if value.is_nan() => feed_u8(h, NUMERIC_NAN),
        None if value > 0.0 => feed_u8(h, NUMERIC_POS_INFINITY),
        None => feed_u8(h, NUMERIC_NEG_INFINITY),
    }
}

#[expect(clippy::cast_possible_truncation)]
fn write_to_hasher(key: &IndexKey, h: &mut Xxh3) {
    match key.key() {
        // numeric kinds share one domain so equal values hash equal
        KeyRef::Byte(v) => {
            feed_u8(h, NUMERIC_HASH_DOMAIN);
            feed_finite_decimal(h, &Decimal::from(v));
        }
        KeyRef::Short(v) => {
            feed_u8(h, NUMERIC_HASH_DOMAIN);
            feed_finite_decimal(h, &Decimal::from(v));
        }
        KeyRef::Int(v) => {
            feed_u8(h, NUMERIC_HASH_DOMAIN);
            feed_finite_decimal(h, &Decimal::from(v));
        }
        KeyRef::Long(v) => {
            feed_u8(h, NUMERIC_HASH_DOMAIN);
            feed_finite_decimal(h, &Decimal::from(v));
        }
        KeyRef::Decimal(v) => {
            feed_u8(h, NUMERIC_HASH_DOMAIN);
            feed_finite_decimal(h, v);
        }
        KeyRef::Double(v) => {
            feed_u8(h, NUMERIC_HASH_DOMAIN);
            feed_float(h, v);
        }
        KeyRef::Float(v) => {
            feed_u8(h, NUMERIC_HASH_DOMAIN);
            feed_float(h, f64::from(v));
        }

        // everything else hashes its kind plus its ordered encoding
        KeyRef::Null
        | KeyRef::Boolean(_)
        | KeyRef::Time(_)
        | KeyRef::Date(_)
        | KeyRef::Timestamp(_)
        | KeyRef::Bytes(_)
        | KeyRef::String(_) => {
            let encoded = key.encode();
            feed_u32(h, encoded.len() as u32);
            feed_bytes(h, &encoded);
        }
    }
}

impl IndexKey {
    /// Stable 64-bit digest that agrees with `compare`.
    ///
    /// Any two non-boolean numeric keys that compare equal produce the same
    /// digest, whatever their kinds. Booleans stay in their own domain since
    /// truthiness does not identify a single number.
    #[must_use]
    pub fn canonical_hash(&self) -> u64 {
        let mut h = Xxh3::with_seed(KEY_HASH_SEED);
        feed_u8(&mut h, KEY_HASH_VERSION);
        write_to_hasher(self, &mut h);

        h.digest()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_numerics_share_a_digest_across_kinds() {
        let three = IndexKey::from(3i32).canonical_hash();

        assert_eq!(three, IndexKey::from(3i8).canonical_hash());
        assert_eq!(three, IndexKey::from(3i64).canonical_hash());
        assert_eq!(three, IndexKey::from(3.0f32).canonical_hash());
        assert_eq!(three, IndexKey::from(3.0f64).canonical_hash());
        assert_eq!(
            three,
            IndexKey::from("3.000".parse::<Decimal>().expect("decimal")).canonical_hash()
        );
    }

    #[test]
    fn float_specials_hash_by_class() {
        let nan = IndexKey::from(f64::NAN).canonical_hash();

        assert_eq!(nan, IndexKey::from(-f64::NAN).canonical_hash());
        assert_eq!(nan, IndexKey::from(f32::NAN).canonical_hash());
        assert_ne!(nan, IndexKey::from(f64::INFINITY).canonical_hash());
        assert_eq!(
            IndexKey::from(f64::INFINITY).canonical_hash(),
            IndexKey::from(f32::INFINITY).canonical_hash()
        );
        assert_eq!(
            IndexKey::from(-0.0f64).canonical_hash(),
            IndexKey::from(0i32).canonical_hash()
        );
    }

    #[test]
    fn booleans_do_not_collide_with_numbers() {
        assert_ne!(
            IndexKey::from(true).canonical_hash(),
            IndexKey::from(1i32).canonical_hash()
        );
        assert_ne!(
            IndexKey::from(true).canonical_hash(),
            IndexKey::from(false).canonical_hash()
        );
    }

    #[test]
    fn text_and_bytes_hash_by_kind() {
        assert_ne!(
            IndexKey::from("ab").canonical_hash(),
            IndexKey::from(b"ab".to_vec()).canonical_hash()
        );
        assert_eq!(
            IndexKey::from("ab").canonical_hash(),
            IndexKey::from(String::from("ab")).canonical_hash()
        );
    }

    #[test]
    fn canonical_float_bits_collapse_zero_and_nan() {
        assert_eq!(canonical_f64_bits(-0.0), canonical_f64_bits(0.0));
        assert_eq!(canonical_f64_bits(-f64::NAN), canonical_f64_bits(f64::NAN));
        assert_ne!(canonical_f64_bits(1.0), canonical_f64_bits(-1.0));
    }
}
