#[macro_use]
mod macros;

///
/// IndexKeyType
///
/// Closed set of index-key kinds.
///
/// IMPORTANT:
/// Discriminants double as the persisted type code and must remain fixed
/// once an index has been written with them.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IndexKeyType {
    Null = 0,
    Boolean = 1,
    Byte = 2,
    Short = 3,
    Int = 4,
    Long = 5,
    Decimal = 6,
    Double = 7,
    Float = 8,
    Time = 9,
    Date = 10,
    Timestamp = 11,
    Bytes = 12,
    String = 13,
}

impl IndexKeyType {
    /// Return the full metadata descriptor for one key kind.
    #[must_use]
    pub const fn metadata(self) -> KeyTypeMetadata {
        index_key_type_registry!(metadata_from_registry, self)
    }

    /// Stable persisted type code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.metadata().code
    }

    /// Resolve a persisted type code back into its kind.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        index_key_type_registry!(from_code_from_registry, code)
    }

    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    /// Comparison domain this kind belongs to.
    #[must_use]
    pub const fn domain(self) -> CompareDomain {
        self.metadata().domain
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self.domain(), CompareDomain::Numeric)
    }

    /// Informal precision rank among numeric kinds; higher is more precise.
    ///
    /// Comparison never consults this at runtime. It documents which side
    /// of a mixed numeric comparison performs the arithmetic.
    #[must_use]
    pub const fn precision_rank(self) -> Option<u8> {
        self.metadata().precision_rank
    }

    /// Returns true when keys of `self` and `other` can be ordered against
    /// each other. `Null` is comparable with every kind.
    #[must_use]
    pub const fn is_comparable_with(self, other: Self) -> bool {
        let left = self.domain();
        let right = other.domain();

        matches!(left, CompareDomain::Null)
            || matches!(right, CompareDomain::Null)
            || left as u8 == right as u8
    }
}

impl std::fmt::Display for IndexKeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

///
/// KeyTypeMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyTypeMetadata {
    pub code: u8,
    pub domain: CompareDomain,
    pub precision_rank: Option<u8>,
    pub label: &'static str,
}

///
/// CompareDomain
///
/// Keys order against each other only inside one domain.
/// Mixing domains is a caller bug surfaced as an incomparable-kinds error.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareDomain {
    Null,
    Numeric,
    Text,
    Bytes,
    Date,
    Time,
    Timestamp,
}

/// Ordered list of all key kinds in registry order.
pub const ALL_INDEX_KEY_TYPES: [IndexKeyType; 14] =
    index_key_type_registry!(all_kinds_from_registry);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_discriminants() {
        for kind in ALL_INDEX_KEY_TYPES {
            assert_eq!(kind.code(), kind as u8, "code drift for {kind}");
        }
    }

    #[test]
    fn codes_roundtrip_and_unknown_codes_are_rejected() {
        for kind in ALL_INDEX_KEY_TYPES {
            assert_eq!(IndexKeyType::from_code(kind.code()), Some(kind));
        }

        assert_eq!(IndexKeyType::from_code(14), None);
        assert_eq!(IndexKeyType::from_code(u8::MAX), None);
    }

    #[test]
    fn numeric_precision_ranks_are_distinct_and_decimal_is_highest() {
        let mut ranks: Vec<u8> = ALL_INDEX_KEY_TYPES
            .iter()
            .filter_map(|kind| kind.precision_rank())
            .collect();
        let count = ranks.len();
        ranks.sort_unstable();
        ranks.dedup();

        assert_eq!(ranks.len(), count);
        assert_eq!(
            IndexKeyType::Decimal.precision_rank(),
            ranks.last().copied()
        );
        assert!(
            ALL_INDEX_KEY_TYPES
                .iter()
                .all(|kind| kind.is_numeric() == kind.precision_rank().is_some())
        );
    }

    #[test]
    fn null_is_comparable_with_everything_and_domains_are_disjoint() {
        for kind in ALL_INDEX_KEY_TYPES {
            assert!(IndexKeyType::Null.is_comparable_with(kind));
            assert!(kind.is_comparable_with(IndexKeyType::Null));
        }

        assert!(IndexKeyType::Byte.is_comparable_with(IndexKeyType::Decimal));
        assert!(IndexKeyType::Boolean.is_comparable_with(IndexKeyType::Double));
        assert!(!IndexKeyType::Int.is_comparable_with(IndexKeyType::String));
        assert!(!IndexKeyType::Date.is_comparable_with(IndexKeyType::Timestamp));
        assert!(!IndexKeyType::Bytes.is_comparable_with(IndexKeyType::String));
    }
}
