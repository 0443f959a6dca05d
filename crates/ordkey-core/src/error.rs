use crate::{
    config::ConfigError,
    key::{CompareError, KeyConstructError, KeyDecodeError},
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured error with a stable classification.
/// Every surface error of this crate converts into it, so an index engine can
/// abort the current scan or insert on one type.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    /// Construct an InternalError without structured detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a construction-origin malformed-value error.
    pub(crate) fn construct_malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Malformed, ErrorOrigin::Construct, message)
    }

    /// Construct a codec-origin corruption error.
    pub(crate) fn codec_corruption(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Corruption, ErrorOrigin::Codec, message)
    }

    /// Construct a config-origin error.
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Config, ErrorOrigin::Config, message)
    }

    #[must_use]
    pub const fn is_incomparable(&self) -> bool {
        matches!(self.class, ErrorClass::Incomparable)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Compare(CompareError),
    #[error("{0}")]
    Decode(KeyDecodeError),
}

impl From<CompareError> for InternalError {
    fn from(err: CompareError) -> Self {
        Self {
            class: ErrorClass::Incomparable,
            origin: ErrorOrigin::Compare,
            message: err.to_string(),
            detail: Some(ErrorDetail::Compare(err)),
        }
    }
}

impl From<KeyDecodeError> for InternalError {
    fn from(err: KeyDecodeError) -> Self {
        let mut internal = Self::codec_corruption(format!("index key payload is corrupt: {err}"));
        internal.detail = Some(ErrorDetail::Decode(err));

        internal
    }
}

impl From<KeyConstructError> for InternalError {
    fn from(err: KeyConstructError) -> Self {
        Self::construct_malformed(err.to_string())
    }
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

///
/// ErrorClass
/// Error taxonomy for classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Incomparable,
    Malformed,
    Corruption,
    Config,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Incomparable => "incomparable",
            Self::Malformed => "malformed",
            Self::Corruption => "corruption",
            Self::Config => "config",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy for classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Compare,
    Construct,
    Codec,
    Config,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Compare => "compare",
            Self::Construct => "construct",
            Self::Codec => "codec",
            Self::Config => "config",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
