use num_bigint::{BigInt, Sign};
use num_traits::{Float, Signed, Zero};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};
use thiserror::Error as ThisError;

// Plain notation is used for negative scales up to this many trailing zeros.
const PLAIN_TRAILING_ZEROS_MAX: i64 = 18;
// Plain notation is used down to this adjusted exponent for positive scales.
const PLAIN_ADJUSTED_EXPONENT_MIN: i64 = -6;

///
/// DecimalParseError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DecimalParseError {
    #[error("decimal text is empty")]
    Empty,

    #[error("decimal text has no digits")]
    NoDigits,

    #[error("unexpected character '{found}' in decimal text")]
    InvalidCharacter { found: char },

    #[error("decimal exponent is malformed")]
    InvalidExponent,

    #[error("decimal exponent is out of range")]
    ExponentOutOfRange,
}

///
/// Decimal
///
/// Arbitrary-precision signed decimal: `unscaled * 10^-scale`.
///
/// Equality and ordering are by value, so `3.0 == 3` even though the two
/// carry different scales. `Hash` agrees with that equality.
///

#[derive(Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

impl Decimal {
    #[must_use]
    pub fn new(unscaled: impl Into<BigInt>, scale: i64) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    #[must_use]
    pub const fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    #[must_use]
    pub const fn scale(&self) -> i64 {
        self.scale
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Number of significant decimal digits in the unscaled value.
    /// Zero has precision 1.
    #[must_use]
    pub fn precision(&self) -> u64 {
        let digits = self.unscaled.magnitude().to_string().len();
        u64::try_from(digits).unwrap_or(u64::MAX)
    }

    /// Power of ten of the most significant digit.
    #[must_use]
    pub fn adjusted_exponent(&self) -> i64 {
        let precision = i64::try_from(self.precision()).unwrap_or(i64::MAX);

        precision.saturating_sub(1).saturating_sub(self.scale)
    }

    /// Strip trailing zeros from the unscaled value. Zero normalizes to
    /// scale 0, so every value has exactly one normalized form.
    #[must_use]
    pub fn normalize(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while (&unscaled % 10u32).is_zero() {
            unscaled /= 10u32;
            scale = scale.saturating_sub(1);
        }

        Self { unscaled, scale }
    }

    /// Exact decimal value of a binary double.
    ///
    /// Every finite `f64` is `m * 2^e`, which is a terminating decimal.
    /// Returns `None` for NaN and infinities.
    #[must_use]
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Self::zero());
        }

        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let mut unscaled = BigInt::from(mantissa);
        if sign < 0 {
            unscaled = -unscaled;
        }

        let shift = exponent.unsigned_abs();
        let exact = if exponent >= 0 {
            Self::new(unscaled << usize::from(shift), 0)
        } else {
            // m / 2^n == m * 5^n / 10^n
            let factor = BigInt::from(5u8).pow(u32::from(shift));
            Self::new(unscaled * factor, i64::from(shift))
        };

        Some(exact.normalize())
    }

    /// Exact decimal value of a binary float. Widening to `f64` is lossless.
    #[must_use]
    pub fn try_from_f32(value: f32) -> Option<Self> {
        Self::try_from_f64(f64::from(value))
    }

    // Compare two same-sign values whose scales may differ.
    fn cmp_aligned(&self, other: &Self) -> Ordering {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.unscaled.cmp(&other.unscaled),
            Ordering::Less => {
                let widened = &self.unscaled * pow10(other.scale - self.scale);
                widened.cmp(&other.unscaled)
            }
            Ordering::Greater => {
                let widened = &other.unscaled * pow10(self.scale - other.scale);
                self.unscaled.cmp(&widened)
            }
        }
    }
}

fn pow10(exponent: i64) -> BigInt {
    let exponent = u32::try_from(exponent).unwrap_or(u32::MAX);

    BigInt::from(10u8).pow(exponent)
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.unscaled.sign();
        let sign_cmp = sign.cmp(&other.unscaled.sign());
        if sign_cmp != Ordering::Equal || sign == Sign::NoSign {
            return sign_cmp;
        }

        // Same nonzero sign: the leading digit position decides before any
        // scale alignment, which keeps alignment bounded by the digit counts.
        let magnitude = self.adjusted_exponent().cmp(&other.adjusted_exponent());
        match magnitude {
            Ordering::Equal => self.cmp_aligned(other),
            _ if sign == Sign::Minus => magnitude.reverse(),
            _ => magnitude,
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DecimalParseError::Empty);
        }

        let (negative, unsigned) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(at) => {
                let exponent = unsigned[at + 1..]
                    .parse::<i32>()
                    .map_err(|_| DecimalParseError::InvalidExponent)?;
                (&unsigned[..at], i64::from(exponent))
            }
            None => (unsigned, 0),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(DecimalParseError::NoDigits);
        }
        if let Some(found) = whole.chars().chain(fraction.chars()).find(|c| !c.is_ascii_digit()) {
            return Err(DecimalParseError::InvalidCharacter { found });
        }

        let digits = format!("{whole}{fraction}");
        let mut unscaled =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(DecimalParseError::NoDigits)?;
        if negative {
            unscaled = -unscaled;
        }

        let fraction_len =
            i64::try_from(fraction.len()).map_err(|_| DecimalParseError::ExponentOutOfRange)?;
        let scale = fraction_len - exponent;
        if i32::try_from(scale).is_err() {
            return Err(DecimalParseError::ExponentOutOfRange);
        }

        Ok(Self::new(unscaled, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_string();
        let sign = if self.is_negative() { "-" } else { "" };
        let adjusted = self.adjusted_exponent();

        if self.scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        if self.scale < 0 && -self.scale <= PLAIN_TRAILING_ZEROS_MAX {
            let zeros = "0".repeat(usize::try_from(-self.scale).unwrap_or_default());
            return write!(f, "{sign}{digits}{zeros}");
        }

        if self.scale > 0 && adjusted >= PLAIN_ADJUSTED_EXPONENT_MIN {
            let scale = usize::try_from(self.scale).unwrap_or(usize::MAX);
            if digits.len() > scale {
                let (whole, fraction) = digits.split_at(digits.len() - scale);
                return write!(f, "{sign}{whole}.{fraction}");
            }

            let zeros = "0".repeat(scale - digits.len());
            return write!(f, "{sign}0.{zeros}{digits}");
        }

        let (lead, rest) = digits.split_at(1);
        let exponent_sign = if adjusted >= 0 { "+" } else { "" };
        if rest.is_empty() {
            write!(f, "{sign}{lead}E{exponent_sign}{adjusted}")
        } else {
            write!(f, "{sign}{lead}.{rest}E{exponent_sign}{adjusted}")
        }
    }
}

macro_rules! impl_decimal_from_int {
    ( $( $type:ty ),* ) => {
        $(
            impl From<$type> for Decimal {
                fn from(n: $type) -> Self {
                    Self::new(BigInt::from(n), 0)
                }
            }
        )*
    };
}

impl_decimal_from_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl From<BigInt> for Decimal {
    fn from(unscaled: BigInt) -> Self {
        Self::new(unscaled, 0)
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::new(BigInt::from(d.mantissa()), i64::from(d.scale()))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).expect("parse decimal")
    }

    #[test]
    fn parse_accepts_signs_fractions_and_exponents() {
        assert_eq!(dec("42"), Decimal::new(42, 0));
        assert_eq!(dec("-42.50").scale(), 2);
        assert_eq!(dec("+.5"), Decimal::new(5, 1));
        assert_eq!(dec("7."), Decimal::new(7, 0));
        assert_eq!(dec("1.5e3"), Decimal::new(1500, 0));
        assert_eq!(dec("1.5E-3"), Decimal::new(15, 4));
        assert_eq!(dec("9223372036854775807.5").scale(), 1);
    }

    #[test]
    fn parse_rejects_malformed_text() {
        assert_eq!(Decimal::from_str(""), Err(DecimalParseError::Empty));
        assert_eq!(Decimal::from_str("-"), Err(DecimalParseError::NoDigits));
        assert_eq!(Decimal::from_str("."), Err(DecimalParseError::NoDigits));
        assert_eq!(
            Decimal::from_str("1.2.3"),
            Err(DecimalParseError::InvalidCharacter { found: '.' })
        );
        assert_eq!(
            Decimal::from_str("12a"),
            Err(DecimalParseError::InvalidCharacter { found: 'a' })
        );
        assert_eq!(
            Decimal::from_str("1e"),
            Err(DecimalParseError::InvalidExponent)
        );
        assert_eq!(
            Decimal::from_str("1e-2147483648"),
            Err(DecimalParseError::ExponentOutOfRange)
        );
    }

    #[test]
    fn equality_ignores_trailing_zeros() {
        assert_eq!(dec("3.0"), dec("3"));
        assert_eq!(dec("300"), dec("3e2"));
        assert_eq!(dec("-0.000"), Decimal::zero());
        assert_eq!(dec("3.0").normalize(), Decimal::new(3, 0));
        assert_eq!(dec("300").normalize().scale(), -2);
    }

    #[test]
    fn ordering_handles_signs_and_scales() {
        assert!(dec("-1") < dec("0"));
        assert!(dec("0") < dec("0.0001"));
        assert!(dec("2.5") > dec("2"));
        assert!(dec("-2.5") < dec("-2"));
        assert!(dec("1e-2000") > dec("0"));
        assert!(dec("1e-2000") < dec("1e-1999"));
        assert!(dec("-1e300") < dec("-9.99e299"));
        assert!(dec("9223372036854775807.5") > Decimal::from(i64::MAX));
    }

    #[test]
    fn display_uses_plain_and_scientific_notation() {
        assert_eq!(dec("42").to_string(), "42");
        assert_eq!(dec("-42.50").to_string(), "-42.50");
        assert_eq!(dec("0.001").to_string(), "0.001");
        assert_eq!(dec("3e2").to_string(), "300");
        assert_eq!(dec("1e-7").to_string(), "1E-7");
        assert_eq!(dec("1.25e40").to_string(), "1.25E+40");
    }

    #[test]
    fn float_conversion_is_exact() {
        assert_eq!(Decimal::try_from_f64(3.0), Some(dec("3")));
        assert_eq!(Decimal::try_from_f64(-0.0), Some(Decimal::zero()));
        assert_eq!(Decimal::try_from_f64(2.5), Some(dec("2.5")));
        assert_eq!(
            Decimal::try_from_f64(0.1),
            Some(dec("0.1000000000000000055511151231257827021181583404541015625"))
        );
        assert_eq!(
            Decimal::try_from_f32(0.1),
            Some(dec("0.100000001490116119384765625"))
        );
        assert_eq!(
            Decimal::try_from_f64(9_223_372_036_854_775_808.0),
            Some(dec("9223372036854775808"))
        );
        assert_eq!(Decimal::try_from_f64(f64::NAN), None);
        assert_eq!(Decimal::try_from_f64(f64::INFINITY), None);
        assert!(Decimal::try_from_f64(f64::MIN_POSITIVE / 4.0).is_some_and(|d| !d.is_zero()));
    }

    #[test]
    fn rust_decimal_conversion_keeps_scale() {
        let fixed = rust_decimal::Decimal::new(-12345, 3);

        assert_eq!(Decimal::from(fixed), dec("-12.345"));
        assert_eq!(Decimal::from(fixed).scale(), 3);
    }

    proptest! {
        #[test]
        fn ordering_matches_i128_ordering(left in any::<i64>(), right in any::<i64>(), scale in 0i64..30) {
            let l = Decimal::new(i128::from(left), scale);
            let r = Decimal::new(i128::from(right), scale);

            prop_assert_eq!(l.cmp(&r), left.cmp(&right));
        }

        #[test]
        fn display_roundtrips_through_parse(unscaled in any::<i64>(), scale in -40i64..40) {
            let value = Decimal::new(unscaled, scale);
            let reparsed = Decimal::from_str(&value.to_string()).expect("display output parses");

            prop_assert_eq!(reparsed, value);
        }

        #[test]
        fn f64_conversion_preserves_order(left in any::<f64>(), right in any::<f64>()) {
            prop_assume!(left.is_finite() && right.is_finite());
            let l = Decimal::try_from_f64(left).expect("finite");
            let r = Decimal::try_from_f64(right).expect("finite");

            prop_assert_eq!(Some(l.cmp(&r)), left.partial_cmp(&right));
        }
    }
}
