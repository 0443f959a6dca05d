//! Module: config
//! Responsibility: construction-time limits for index keys, loaded from TOML.
//! Does not own: comparison semantics; limits never change how keys order.

use crate::obs::log_info;
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

///
/// OrdkeyConfig
///
/// Top-level configuration document.
///
/// ```toml
/// [limits]
/// max_decimal_precision = 100
/// max_text_len = 4096
/// ```
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OrdkeyConfig {
    pub limits: KeyLimits,
}

impl OrdkeyConfig {
    /// Parse and validate a TOML config document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        log_info!(
            component = "config",
            event = "config_loaded",
            max_decimal_precision = config.limits.max_decimal_precision,
            max_decimal_scale = config.limits.max_decimal_scale,
            max_text_len = config.limits.max_text_len,
            max_bytes_len = config.limits.max_bytes_len,
        );

        Ok(config)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    pub const fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()
    }
}

///
/// KeyLimits
///
/// Upper bounds enforced when a key is built from an external value.
/// A key that breaks a limit is rejected before it can enter an index.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct KeyLimits {
    /// Significant decimal digits allowed in a decimal key.
    pub max_decimal_precision: u32,

    /// Largest absolute scale allowed in a decimal key.
    pub max_decimal_scale: u32,

    /// Largest string key, in UTF-8 bytes.
    pub max_text_len: usize,

    /// Largest binary key, in bytes.
    pub max_bytes_len: usize,
}

impl KeyLimits {
    pub const DEFAULT_MAX_DECIMAL_PRECISION: u32 = 1000;
    pub const DEFAULT_MAX_DECIMAL_SCALE: u32 = 1000;
    pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 64 * 1024;

    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_decimal_precision == 0 {
            return Err(ConfigError::Invalid {
                field: "max_decimal_precision",
                reason: "must be greater than zero",
            });
        }
        if self.max_text_len == 0 {
            return Err(ConfigError::Invalid {
                field: "max_text_len",
                reason: "must be greater than zero",
            });
        }
        if self.max_bytes_len == 0 {
            return Err(ConfigError::Invalid {
                field: "max_bytes_len",
                reason: "must be greater than zero",
            });
        }

        Ok(())
    }
}

impl Default for KeyLimits {
    fn default() -> Self {
        Self {
            max_decimal_precision: Self::DEFAULT_MAX_DECIMAL_PRECISION,
            max_decimal_scale: Self::DEFAULT_MAX_DECIMAL_SCALE,
            max_text_len: Self::DEFAULT_MAX_PAYLOAD_LEN,
            max_bytes_len: Self::DEFAULT_MAX_PAYLOAD_LEN,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = OrdkeyConfig::from_toml_str("").expect("empty config should parse");

        assert_eq!(config, OrdkeyConfig::default());
        assert_eq!(config.limits.max_decimal_precision, 1000);
        assert_eq!(config.limits.max_text_len, 64 * 1024);
    }

    #[test]
    fn partial_limits_keep_remaining_defaults() {
        let config = OrdkeyConfig::from_toml_str(
            r"
            [limits]
            max_decimal_precision = 38
            max_text_len = 256
            ",
        )
        .expect("partial limits should parse");

        assert_eq!(config.limits.max_decimal_precision, 38);
        assert_eq!(config.limits.max_text_len, 256);
        assert_eq!(
            config.limits.max_decimal_scale,
            KeyLimits::DEFAULT_MAX_DECIMAL_SCALE
        );
        assert_eq!(
            config.limits.max_bytes_len,
            KeyLimits::DEFAULT_MAX_PAYLOAD_LEN
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = OrdkeyConfig::from_toml_str(
            r"
            [limits]
            max_widgets = 3
            ",
        )
        .expect_err("unknown limit must fail");

        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn zero_limits_fail_validation() {
        let err = OrdkeyConfig::from_toml_str(
            r"
            [limits]
            max_bytes_len = 0
            ",
        )
        .expect_err("zero limit must fail");

        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_bytes_len",
                ..
            }
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = OrdkeyConfig::load("/nonexistent/ordkey.toml").expect_err("missing file");

        match err {
            ConfigError::Read { path, .. } => assert_eq!(path, "/nonexistent/ordkey.toml"),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
