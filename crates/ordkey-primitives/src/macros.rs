/// Single source of truth for index-key kind metadata.
///
/// Each entry is `(Kind, code = .., domain = .., precision_rank = .., label = ..)`.
/// Codes are persisted next to index entries and must never be renumbered.
#[macro_export]
macro_rules! index_key_type_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Null, code = 0, domain = Null, precision_rank = None, label = "NULL"),
            (Boolean, code = 1, domain = Numeric, precision_rank = Some(0), label = "BOOLEAN"),
            (Byte, code = 2, domain = Numeric, precision_rank = Some(1), label = "BYTE"),
            (Short, code = 3, domain = Numeric, precision_rank = Some(2), label = "SHORT"),
            (Int, code = 4, domain = Numeric, precision_rank = Some(3), label = "INT"),
            (Long, code = 5, domain = Numeric, precision_rank = Some(4), label = "LONG"),
            (Decimal, code = 6, domain = Numeric, precision_rank = Some(7), label = "DECIMAL"),
            (Double, code = 7, domain = Numeric, precision_rank = Some(6), label = "DOUBLE"),
            (Float, code = 8, domain = Numeric, precision_rank = Some(5), label = "FLOAT"),
            (Time, code = 9, domain = Time, precision_rank = None, label = "TIME"),
            (Date, code = 10, domain = Date, precision_rank = None, label = "DATE"),
            (Timestamp, code = 11, domain = Timestamp, precision_rank = None, label = "TIMESTAMP"),
            (Bytes, code = 12, domain = Bytes, precision_rank = None, label = "BYTES"),
            (String, code = 13, domain = Text, precision_rank = None, label = "STRING"),
        }
    };
}

#[macro_export]
macro_rules! index_key_type_registry {
    ($macro:ident) => {
        $crate::index_key_type_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::index_key_type_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($key:ident, code = $code:literal, domain = $domain:ident, precision_rank = $rank:expr, label = $label:literal) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::IndexKeyType::$key => $crate::KeyTypeMetadata {
                    code: $code,
                    domain: $crate::CompareDomain::$domain,
                    precision_rank: $rank,
                    label: $label,
                },
            )*
        }
    };
}

macro_rules! from_code_from_registry {
    ( @args $code_value:expr; @entries $( ($key:ident, code = $code:literal, domain = $domain:ident, precision_rank = $rank:expr, label = $label:literal) ),* $(,)? ) => {
        match $code_value {
            $( $code => Some($crate::IndexKeyType::$key), )*
            _ => None,
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($key:ident, code = $code:literal, domain = $domain:ident, precision_rank = $rank:expr, label = $label:literal) ),* $(,)? ) => {
        [ $( $crate::IndexKeyType::$key ),* ]
    };
}
