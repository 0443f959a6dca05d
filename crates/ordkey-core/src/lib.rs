//! Core runtime for ordkey: typed index keys, their exact cross-kind total
//! order, the ordered byte codec, and the construction boundary.
#![warn(unreachable_pub)]

pub(crate) mod obs;

// public exports are one module level down
pub mod config;
pub mod error;
pub mod key;
pub mod types;

pub use ordkey_primitives::{
    ALL_INDEX_KEY_TYPES, CompareDomain, IndexKeyType, KeyTypeMetadata,
};

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, codecs, or config loaders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        key::{Direction, IndexKey, KeyBuilder, KeyRange, NumericIndexKey, TypedIndexKey},
        types::Decimal,
    };
    pub use ordkey_primitives::IndexKeyType;
}
