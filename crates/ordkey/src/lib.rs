//! ## Crate layout
//! - `core`: index keys, comparison, codec, construction, and config.
//! - `primitives`: the key type registry shared by every layer.
//!
//! The `prelude` module carries the vocabulary an index engine needs to
//! build and order keys.

pub use ordkey_core as core;
pub use ordkey_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Errors
//

pub use ordkey_core::error::{ErrorClass, ErrorOrigin, InternalError as Error};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        key::{
            CompareError, Direction, IndexKey, KeyBuilder, KeyRange, NumericIndexKey as _,
            TypedIndexKey as _, compare_rows,
        },
        types::Decimal,
    };
    pub use crate::primitives::IndexKeyType;
}
